// Dashboard summary: key metric cards, layered forecast chart, market
// concentration block, top-competitor pie and leader table.
use crate::access::{self, array_at, num_at, num_seq_at, records_at, str_at};
use crate::derive::{self, Sign, MARKET_SHARE_BAR_SCALE};
use crate::forecast::{self, BoundPair, ForecastFrame};
use crate::model::Competitor;
use crate::palette;
use serde_json::Value;

pub const METHOD_ENSEMBLE: &str = "ensemble";
pub const METHOD_LINEAR: &str = "linear";
pub const METHOD_EXPONENTIAL: &str = "exponential";

const PIE_TOP_N: usize = 5;
const LEADER_TOP_N: usize = 10;
const LEADER_GROWTH_HIGHLIGHT: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub current_market_size: String,
    pub cagr: String,
    pub total_global_market: String,
    pub weighted_growth_rate: String,
    pub forecast: Vec<ForecastFrame>,
    pub structure: MarketStructureView,
    pub share_pie: Vec<PieSlice>,
    pub leaders: Vec<LeaderRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarketStructureView {
    pub hhi_index: String,
    pub concentration: String,
    pub cr4_ratio: String,
    pub number_of_players: String,
}

/// One slice of the top-competitors pie, colored by rendered position.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub name: String,
    pub value: Option<f64>,
    pub label: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeaderRow {
    pub rank: usize,
    pub name: String,
    pub market_share: String,
    pub share_bar_width: Option<f64>,
    pub revenue: String,
    pub growth_yoy: String,
    pub growth_sign: Sign,
    pub employees: String,
    pub satisfaction: String,
}

pub fn transform(raw: &Value) -> DashboardView {
    let competitors: Vec<Competitor> = records_at(raw, "top_competitors");
    let by_share = |c: &Competitor| c.market_share;

    let pie_top = derive::top_by(&competitors, PIE_TOP_N, by_share);
    let pie_total: Option<f64> = pie_top
        .iter()
        .try_fold(0.0, |acc, c| c.market_share.map(|s| acc + s));
    let share_pie = pie_top
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let pct = derive::percent_of_total(c.market_share, pie_total);
            PieSlice {
                name: c.name.clone(),
                value: c.market_share,
                label: format!("{}: {}", c.name, access::fmt_percent(pct, 1)),
                color: palette::color_for(i),
            }
        })
        .collect();

    let leaders = derive::top_by(&competitors, LEADER_TOP_N, by_share)
        .iter()
        .enumerate()
        .map(|(i, c)| LeaderRow {
            rank: i + 1,
            name: c.name.clone(),
            market_share: access::fmt_percent(c.market_share, 1),
            share_bar_width: derive::progress_width(c.market_share, MARKET_SHARE_BAR_SCALE),
            revenue: access::fmt_millions_currency(c.revenue_millions),
            growth_yoy: access::fmt_percent(c.growth_rate_yoy, 1),
            growth_sign: derive::threshold_sign(
                c.growth_rate_yoy,
                LEADER_GROWTH_HIGHLIGHT,
                f64::NEG_INFINITY,
            ),
            employees: access::fmt_thousands(c.employee_count),
            satisfaction: access::fmt_rating(c.customer_satisfaction),
        })
        .collect();

    DashboardView {
        current_market_size: access::fmt_billions(num_at(
            raw,
            "key_metrics.current_market_size_billions",
        )),
        cagr: access::fmt_percent(num_at(raw, "key_metrics.cagr_percent"), 2),
        total_global_market: access::fmt_billions(num_at(
            raw,
            "key_metrics.total_global_market",
        )),
        weighted_growth_rate: access::fmt_percent(
            num_at(raw, "key_metrics.weighted_growth_rate"),
            2,
        ),
        forecast: compose_forecast(raw),
        structure: MarketStructureView {
            hhi_index: access::fmt_decimal(num_at(raw, "market_structure.hhi_index"), 0),
            concentration: access::fmt_label(str_at(raw, "market_structure.market_concentration")),
            cr4_ratio: access::fmt_percent(num_at(raw, "market_structure.cr4_ratio"), 1),
            number_of_players: access::fmt_thousands(num_at(
                raw,
                "market_structure.number_of_players",
            )),
        },
        share_pie,
        leaders,
    }
}

fn compose_forecast(raw: &Value) -> Vec<ForecastFrame> {
    let years: Vec<i64> = num_seq_at(raw, "forecasts.forecast_years")
        .iter()
        .map(|y| y.round() as i64)
        .collect();

    let methods = [METHOD_ENSEMBLE, METHOD_LINEAR, METHOD_EXPONENTIAL]
        .iter()
        .map(|name| {
            (
                name.to_string(),
                num_seq_at(raw, &format!("forecasts.forecasts.{name}")),
            )
        })
        .collect::<Vec<_>>();

    let bounds: Vec<BoundPair> = array_at(raw, "forecasts.confidence_intervals")
        .map(|intervals| {
            intervals
                .iter()
                .map(|interval| BoundPair {
                    lower_95: num_at(interval, "lower_95"),
                    upper_95: num_at(interval, "upper_95"),
                })
                .collect()
        })
        .unwrap_or_default();

    forecast::compose(&years, &methods, &bounds)
}
