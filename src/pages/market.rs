// Market overview: growth statistics plus the stacked segment series.
use crate::access::{self, num_at, records_at, str_at};
use crate::model::MarketYear;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct MarketOverviewView {
    pub cagr: String,
    pub r_squared: String,
    pub trend_strength: String,
    pub avg_annual_growth: String,
    pub slope: String,
    pub std_error: String,
    pub polynomial_r_squared: String,
    pub volatility: String,
    pub series: Vec<MarketYearRow>,
}

/// Chart row for the composed segment/total chart. Values stay optional:
/// an absent segment draws no point for that year.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketYearRow {
    pub year: String,
    pub total: Option<f64>,
    pub residential: Option<f64>,
    pub commercial: Option<f64>,
    pub industrial: Option<f64>,
}

pub fn transform(raw: &Value) -> MarketOverviewView {
    let series = records_at::<MarketYear>(raw, "market_data")
        .iter()
        .map(|y| MarketYearRow {
            year: y
                .year
                .map(|v| v.to_string())
                .unwrap_or_else(|| access::PLACEHOLDER.to_string()),
            total: y.market_size_billions,
            residential: y.segment_residential,
            commercial: y.segment_commercial,
            industrial: y.segment_industrial,
        })
        .collect();

    MarketOverviewView {
        cagr: access::fmt_percent(num_at(raw, "statistical_analysis.cagr_percent"), 2),
        r_squared: access::fmt_decimal(
            num_at(raw, "statistical_analysis.linear_trend.r_squared"),
            4,
        ),
        trend_strength: access::fmt_label(str_at(
            raw,
            "statistical_analysis.growth_insights.trend_strength",
        )),
        avg_annual_growth: access::fmt_billions(num_at(
            raw,
            "statistical_analysis.growth_insights.avg_annual_growth_billions",
        )),
        slope: access::fmt_decimal(num_at(raw, "statistical_analysis.linear_trend.slope"), 4),
        std_error: access::fmt_decimal(
            num_at(raw, "statistical_analysis.linear_trend.std_error"),
            3,
        ),
        polynomial_r_squared: access::fmt_decimal(
            num_at(raw, "statistical_analysis.polynomial_trend.r_squared"),
            4,
        ),
        volatility: access::fmt_billions(num_at(
            raw,
            "statistical_analysis.growth_insights.volatility",
        )),
        series,
    }
}
