// Competitive landscape: concentration stats, share pie, revenue/growth
// scatter, fastest-growing bars and the full comparison table.
use crate::access::{self, array_at, num_at, records_at, str_at};
use crate::derive::{self, Sign, MARKET_SHARE_BAR_SCALE};
use crate::model::Competitor;
use crate::palette;
use serde_json::Value;

const GROWTH_HIGH: f64 = 8.0;
const GROWTH_LOW: f64 = 5.0;

/// HHI classification used for the market-structure commentary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcentrationBand {
    High,
    Moderate,
    Low,
    Unknown,
}

impl ConcentrationBand {
    pub fn from_hhi(hhi: Option<f64>) -> Self {
        match hhi {
            Some(v) if v > 2500.0 => ConcentrationBand::High,
            Some(v) if v > 1500.0 => ConcentrationBand::Moderate,
            Some(_) => ConcentrationBand::Low,
            None => ConcentrationBand::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompetitorView {
    pub hhi_index: String,
    pub concentration_label: String,
    pub concentration_band: ConcentrationBand,
    pub cr4_ratio: String,
    pub number_of_players: String,
    pub avg_revenue_per_employee: String,
    pub share_pie: Vec<SharePieSlice>,
    pub scatter: Vec<RevenueGrowthPoint>,
    pub size_growth_correlation: String,
    pub correlations: Vec<CorrelationRow>,
    pub fastest_growing: Vec<GrowthBar>,
    pub rows: Vec<CompetitorRow>,
    pub top_performer: EfficiencyLeader,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SharePieSlice {
    pub name: String,
    pub share: Option<f64>,
    pub label: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevenueGrowthPoint {
    pub name: String,
    pub revenue: Option<f64>,
    pub growth: Option<f64>,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationRow {
    pub label: &'static str,
    pub value: String,
    pub sign: Sign,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GrowthBar {
    pub name: String,
    pub growth: Option<f64>,
    pub growth_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompetitorRow {
    pub rank: usize,
    pub name: String,
    pub market_share: String,
    pub share_bar_width: Option<f64>,
    pub share_bar_color: &'static str,
    pub revenue: String,
    pub growth_yoy: String,
    pub growth_sign: Sign,
    pub employees: String,
    pub revenue_per_employee: String,
    pub satisfaction: String,
    pub digital_score: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EfficiencyLeader {
    pub name: String,
    pub revenue_per_employee: String,
}

pub fn transform(raw: &Value) -> CompetitorView {
    let competitors: Vec<Competitor> = records_at(raw, "competitors");

    let share_pie = competitors
        .iter()
        .enumerate()
        .map(|(i, c)| SharePieSlice {
            name: c.name.clone(),
            share: c.market_share,
            label: format!("{}: {}", c.name, access::fmt_percent(c.market_share, 1)),
            color: palette::color_for(i),
        })
        .collect();

    let scatter = competitors
        .iter()
        .enumerate()
        .map(|(i, c)| RevenueGrowthPoint {
            name: c.name.clone(),
            revenue: c.revenue_millions,
            growth: c.growth_rate_yoy,
            color: palette::color_for(i),
        })
        .collect();

    let rows = competitors
        .iter()
        .enumerate()
        .map(|(i, c)| CompetitorRow {
            rank: i + 1,
            name: c.name.clone(),
            market_share: access::fmt_percent(c.market_share, 1),
            share_bar_width: derive::progress_width(c.market_share, MARKET_SHARE_BAR_SCALE),
            share_bar_color: palette::color_for(i),
            revenue: access::fmt_millions_currency(c.revenue_millions),
            growth_yoy: access::fmt_percent(c.growth_rate_yoy, 1),
            growth_sign: derive::threshold_sign(c.growth_rate_yoy, GROWTH_HIGH, GROWTH_LOW),
            employees: access::fmt_thousands(c.employee_count),
            revenue_per_employee: access::fmt_currency(
                derive::revenue_per_employee(c.revenue_millions, c.employee_count),
                0,
            ),
            satisfaction: access::fmt_rating(c.customer_satisfaction),
            digital_score: access::fmt_rating(c.digital_adoption_score),
        })
        .collect();

    let fastest_growing = array_at(raw, "analysis.fastest_growing")
        .map(|items| {
            items
                .iter()
                .map(|item| {
                    let growth = num_at(item, "growth_rate_yoy");
                    GrowthBar {
                        name: access::fmt_label(str_at(item, "name")),
                        growth,
                        growth_label: access::fmt_percent(growth, 1),
                    }
                })
                .collect()
        })
        .unwrap_or_default();

    let correlations = [
        ("Size vs. Growth", "analysis.correlations.size_growth"),
        (
            "Digital vs. Satisfaction",
            "analysis.correlations.digital_satisfaction",
        ),
        ("Size vs. Efficiency", "analysis.correlations.size_efficiency"),
    ]
    .into_iter()
    .map(|(label, path)| {
        let value = num_at(raw, path);
        CorrelationRow {
            label,
            value: access::fmt_decimal(value, 3),
            sign: derive::correlation_sign(value),
        }
    })
    .collect();

    let hhi = num_at(raw, "analysis.market_structure.hhi_index");

    CompetitorView {
        hhi_index: access::fmt_decimal(hhi, 0),
        concentration_label: access::fmt_label(str_at(
            raw,
            "analysis.market_structure.market_concentration",
        )),
        concentration_band: ConcentrationBand::from_hhi(hhi),
        cr4_ratio: access::fmt_percent(num_at(raw, "analysis.market_structure.cr4_ratio"), 1),
        number_of_players: access::fmt_thousands(num_at(
            raw,
            "analysis.market_structure.number_of_players",
        )),
        avg_revenue_per_employee: access::fmt_kilo_currency(num_at(
            raw,
            "analysis.efficiency_metrics.avg_revenue_per_employee",
        )),
        share_pie,
        scatter,
        size_growth_correlation: access::fmt_decimal(
            num_at(raw, "analysis.correlations.size_growth"),
            3,
        ),
        correlations,
        fastest_growing,
        rows,
        top_performer: EfficiencyLeader {
            name: access::fmt_label(str_at(
                raw,
                "analysis.efficiency_metrics.top_performer.name",
            )),
            revenue_per_employee: access::fmt_kilo_currency(num_at(
                raw,
                "analysis.efficiency_metrics.top_performer.revenue_per_employee",
            )),
        },
    }
}
