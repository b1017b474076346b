// Industry trends: adoption/growth scatter, normalized comparison radar,
// investment bars, per-trend significance cards and the ROI ranking.
use crate::access::{self, array_at, bool_at, int_at, num_at, records_at, str_at};
use crate::derive::{self, Sign, SCORE_RADAR_SCALE};
use crate::model::TrendItem;
use crate::palette;
use serde_json::Value;

const RADAR_LABEL_MAX: usize = 25;

#[derive(Debug, Clone, PartialEq)]
pub struct TrendsView {
    pub industry_average_adoption: String,
    pub total_trends: String,
    pub significant_trends: String,
    pub investment_growth_correlation: String,
    pub correlation_sign: Sign,
    pub scatter: Vec<AdoptionGrowthPoint>,
    pub radar: Vec<TrendRadarRow>,
    pub investment_bars: Vec<InvestmentBar>,
    pub cards: Vec<TrendCard>,
    pub top_roi: Vec<RoiRank>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdoptionGrowthPoint {
    pub name: String,
    pub adoption: Option<f64>,
    pub growth: Option<f64>,
    pub color: &'static str,
}

/// Radar axes on a shared 0-100 scale: adoption as-is, the two 0-10
/// scores multiplied by ten.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendRadarRow {
    pub label: String,
    pub full_name: String,
    pub adoption: Option<f64>,
    pub growth_scaled: Option<f64>,
    pub impact_scaled: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvestmentBar {
    pub name: String,
    pub investment: Option<f64>,
    pub label: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendCard {
    pub name: String,
    pub maturity: String,
    pub maturity_class: String,
    pub adoption: String,
    pub adoption_bar_width: Option<f64>,
    pub growth_potential: String,
    pub investment: String,
    pub impact: String,
    pub color: &'static str,
    pub significance: Option<TrendSignificance>,
}

/// Per-trend t-test block, aligned with the trend list by index.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSignificance {
    pub significant: bool,
    pub p_value: String,
    pub effect_size: String,
    pub interpretation: String,
    pub roi_potential: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoiRank {
    pub rank: usize,
    pub name: String,
    pub roi: String,
    pub adoption: String,
}

pub fn transform(raw: &Value) -> TrendsView {
    let trends: Vec<TrendItem> = records_at(raw, "trends");
    let analyses = array_at(raw, "statistical_analysis.trend_analyses");

    let scatter = trends
        .iter()
        .enumerate()
        .map(|(i, t)| AdoptionGrowthPoint {
            name: t.trend.clone(),
            adoption: t.adoption_rate,
            growth: t.growth_potential,
            color: palette::color_for(i),
        })
        .collect();

    let radar = trends
        .iter()
        .map(|t| TrendRadarRow {
            label: truncate_label(&t.trend),
            full_name: t.trend.clone(),
            adoption: t.adoption_rate,
            growth_scaled: derive::radar_axis(t.growth_potential, SCORE_RADAR_SCALE),
            impact_scaled: derive::radar_axis(t.impact_score, SCORE_RADAR_SCALE),
        })
        .collect();

    let investment_bars = trends
        .iter()
        .enumerate()
        .map(|(i, t)| InvestmentBar {
            name: t.trend.clone(),
            investment: t.investment_millions,
            label: access::fmt_millions_currency(t.investment_millions),
            color: palette::color_for(i),
        })
        .collect();

    let cards = trends
        .iter()
        .enumerate()
        .map(|(i, t)| TrendCard {
            name: t.trend.clone(),
            maturity: access::fmt_label(t.maturity.as_deref()),
            maturity_class: access::badge_class(t.maturity.as_deref()),
            adoption: access::fmt_percent(t.adoption_rate, 1),
            adoption_bar_width: t.adoption_rate,
            growth_potential: access::fmt_decimal(t.growth_potential, 1),
            investment: access::fmt_millions_currency(t.investment_millions),
            impact: access::fmt_rating(t.impact_score),
            color: palette::color_for(i),
            significance: analyses
                .and_then(|items| items.get(i))
                .map(significance_block),
        })
        .collect();

    let top_roi = array_at(raw, "statistical_analysis.top_roi_trends")
        .map(|items| {
            items
                .iter()
                .enumerate()
                .map(|(i, item)| RoiRank {
                    rank: i + 1,
                    name: access::fmt_label(str_at(item, "trend")),
                    roi: access::fmt_decimal(num_at(item, "investment_roi_potential"), 2),
                    adoption: access::fmt_percent(num_at(item, "adoption_rate"), 1),
                })
                .collect()
        })
        .unwrap_or_default();

    let correlation = num_at(raw, "statistical_analysis.investment_growth_correlation");

    TrendsView {
        industry_average_adoption: access::fmt_percent(
            num_at(raw, "statistical_analysis.industry_average_adoption"),
            1,
        ),
        total_trends: count_label(int_at(
            raw,
            "statistical_analysis.statistical_summary.total_trends",
        )),
        significant_trends: count_label(int_at(
            raw,
            "statistical_analysis.statistical_summary.significant_trends_count",
        )),
        investment_growth_correlation: access::fmt_decimal(correlation, 3),
        correlation_sign: derive::correlation_sign(correlation),
        scatter,
        radar,
        investment_bars,
        cards,
        top_roi,
    }
}

fn significance_block(analysis: &Value) -> TrendSignificance {
    TrendSignificance {
        significant: bool_at(analysis, "significantly_different").unwrap_or(false),
        p_value: access::fmt_decimal(num_at(analysis, "p_value"), 4),
        effect_size: access::fmt_decimal(num_at(analysis, "effect_size"), 2),
        interpretation: access::fmt_label(str_at(analysis, "interpretation")),
        roi_potential: access::fmt_decimal(num_at(analysis, "investment_roi_potential"), 2),
    }
}

fn count_label(value: Option<i64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| access::PLACEHOLDER.to_string())
}

fn truncate_label(name: &str) -> String {
    if name.chars().count() > RADAR_LABEL_MAX {
        let short: String = name.chars().take(RADAR_LABEL_MAX).collect();
        format!("{short}...")
    } else {
        name.to_string()
    }
}
