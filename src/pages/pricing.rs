// Pricing analysis: rate statistics, rate bars, price/demand scatter and
// the detailed pricing table.
use crate::access::{self, array_at, num_at, records_at, str_at};
use crate::derive::{self, Sign, DEMAND_SCORE_BAR_SCALE};
use crate::model::PricingService;
use crate::palette;
use serde_json::Value;

const TOP_VALUE_N: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct PricingView {
    pub mean_rate: String,
    pub median_rate: String,
    pub variability_label: String,
    pub coefficient_of_variation: String,
    pub cv_percent: String,
    pub demand_correlation: String,
    pub demand_correlation_sign: Sign,
    pub relationship_label: String,
    pub std_dev: String,
    pub price_range: String,
    pub interquartile_range: String,
    pub rows: Vec<PricingRow>,
    pub scatter: Vec<RateDemandPoint>,
    pub top_value: Vec<TopValueRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PricingRow {
    pub service: String,
    pub avg_rate: String,
    pub rate_range: String,
    pub monthly_contract: String,
    pub demand_score: String,
    pub demand_bar_width: Option<f64>,
    pub trend: String,
    pub trend_class: String,
}

/// Price vs demand scatter point, colored by list position.
#[derive(Debug, Clone, PartialEq)]
pub struct RateDemandPoint {
    pub service: String,
    pub rate: Option<f64>,
    pub demand: Option<f64>,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopValueRow {
    pub rank: usize,
    pub service: String,
    pub summary: String,
}

pub fn transform(raw: &Value) -> PricingView {
    let services: Vec<PricingService> = records_at(raw, "pricing_data");

    let rows = services
        .iter()
        .map(|s| PricingRow {
            service: s.service.clone(),
            avg_rate: access::fmt_currency(s.avg_hourly_rate, 2),
            rate_range: format!(
                "{} - {}",
                access::fmt_currency(s.min_rate, 2),
                access::fmt_currency(s.max_rate, 2)
            ),
            monthly_contract: access::fmt_dollar_thousands(s.avg_contract_monthly),
            demand_score: access::fmt_rating(s.market_demand_score),
            demand_bar_width: derive::progress_width(
                s.market_demand_score,
                DEMAND_SCORE_BAR_SCALE,
            ),
            trend: access::fmt_label(s.price_trend.as_deref()),
            trend_class: access::badge_class(s.price_trend.as_deref()),
        })
        .collect();

    let scatter = services
        .iter()
        .enumerate()
        .map(|(i, s)| RateDemandPoint {
            service: s.service.clone(),
            rate: s.avg_hourly_rate,
            demand: s.market_demand_score,
            color: palette::color_for(i),
        })
        .collect();

    // Top value services arrive pre-ranked by the backend's value score;
    // only the slice happens here.
    let top_value = array_at(raw, "statistical_analysis.top_value_services")
        .map(|items| {
            items
                .iter()
                .take(TOP_VALUE_N)
                .enumerate()
                .map(|(i, item)| TopValueRow {
                    rank: i + 1,
                    service: access::fmt_label(str_at(item, "service")),
                    summary: format!(
                        "{}/hr | Demand: {}",
                        access::fmt_currency(num_at(item, "avg_hourly_rate"), 2),
                        access::fmt_decimal(num_at(item, "market_demand_score"), 1)
                    ),
                })
                .collect()
        })
        .unwrap_or_default();

    let correlation = num_at(raw, "statistical_analysis.correlation_with_demand");
    let cv = num_at(
        raw,
        "statistical_analysis.descriptive_stats.coefficient_of_variation",
    );

    PricingView {
        mean_rate: access::fmt_currency(
            num_at(raw, "statistical_analysis.descriptive_stats.mean_hourly_rate"),
            2,
        ),
        median_rate: access::fmt_currency(
            num_at(
                raw,
                "statistical_analysis.descriptive_stats.median_hourly_rate",
            ),
            2,
        ),
        variability_label: access::fmt_label(str_at(
            raw,
            "statistical_analysis.insights.price_variability",
        )),
        coefficient_of_variation: access::fmt_decimal(cv, 2),
        cv_percent: access::fmt_percent(cv.map(|v| v * 100.0), 1),
        demand_correlation: access::fmt_decimal(correlation, 3),
        demand_correlation_sign: derive::correlation_sign(correlation),
        relationship_label: access::fmt_label(str_at(
            raw,
            "statistical_analysis.insights.demand_price_relationship",
        )),
        std_dev: access::fmt_currency(
            num_at(raw, "statistical_analysis.descriptive_stats.std_dev"),
            2,
        ),
        price_range: format!(
            "{} - {}",
            access::fmt_currency(
                num_at(raw, "statistical_analysis.descriptive_stats.price_range.min"),
                2
            ),
            access::fmt_currency(
                num_at(raw, "statistical_analysis.descriptive_stats.price_range.max"),
                2
            )
        ),
        interquartile_range: access::fmt_currency(
            num_at(raw, "statistical_analysis.descriptive_stats.price_range.iqr"),
            2,
        ),
        rows,
        scatter,
        top_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::PLACEHOLDER;
    use serde_json::json;

    fn fixture() -> Value {
        json!({
            "pricing_data": [
                {"service": "Preventive Maintenance", "avg_hourly_rate": 85.0,
                 "min_rate": 60.0, "max_rate": 120.0, "avg_contract_monthly": 2400,
                 "market_demand_score": 8.4, "price_trend": "Rising"},
                {"service": "Inspections", "avg_hourly_rate": 95.5,
                 "market_demand_score": 7.1}
            ],
            "statistical_analysis": {
                "descriptive_stats": {
                    "mean_hourly_rate": 90.25, "median_hourly_rate": 88.0,
                    "std_dev": 14.2, "coefficient_of_variation": 0.157,
                    "price_range": {"min": 60.0, "max": 120.0, "iqr": 22.5}
                },
                "correlation_with_demand": -0.312,
                "insights": {
                    "price_variability": "Moderate",
                    "demand_price_relationship": "Weak negative"
                },
                "top_value_services": [
                    {"service": "Preventive Maintenance", "avg_hourly_rate": 85.0,
                     "market_demand_score": 8.4}
                ]
            }
        })
    }

    #[test]
    fn transform_is_idempotent() {
        let raw = fixture();
        assert_eq!(transform(&raw), transform(&raw));
    }

    #[test]
    fn stats_and_rows_format() {
        let view = transform(&fixture());
        assert_eq!(view.mean_rate, "$90.25");
        assert_eq!(view.cv_percent, "15.7%");
        assert_eq!(view.demand_correlation, "-0.312");
        assert_eq!(view.demand_correlation_sign, Sign::Negative);
        assert_eq!(view.price_range, "$60.00 - $120.00");

        let row = &view.rows[0];
        assert_eq!(row.rate_range, "$60.00 - $120.00");
        assert_eq!(row.monthly_contract, "$2,400");
        assert_eq!(row.demand_score, "8.4/10");
        assert_eq!(row.demand_bar_width, Some(84.0));
        assert_eq!(row.trend_class, "rising");
    }

    #[test]
    fn missing_metrics_render_placeholders_per_field() {
        let view = transform(&fixture());
        let sparse = &view.rows[1];
        assert_eq!(sparse.rate_range, format!("{PLACEHOLDER} - {PLACEHOLDER}"));
        assert_eq!(sparse.monthly_contract, PLACEHOLDER);
        assert_eq!(sparse.trend, PLACEHOLDER);
        assert_eq!(sparse.trend_class, "");
    }

    #[test]
    fn scatter_colors_are_ordinal() {
        let view = transform(&fixture());
        assert_eq!(view.scatter[0].color, palette::color_for(0));
        assert_eq!(view.scatter[1].color, palette::color_for(1));
        assert_eq!(view.scatter[1].rate, Some(95.5));
    }

    #[test]
    fn top_value_keeps_backend_order() {
        let view = transform(&fixture());
        assert_eq!(view.top_value.len(), 1);
        assert_eq!(view.top_value[0].rank, 1);
        assert_eq!(view.top_value[0].summary, "$85.00/hr | Demand: 8.4");
    }
}
