// Regional breakdown: size/growth bars, the three-axis comparison radar,
// the detail table and market-potential rankings.
use crate::access::{self, num_at, records_at, str_at, value_at};
use crate::derive::{self, REGION_SIZE_RADAR_SCALE};
use crate::model::Region;
use crate::palette;
use serde_json::Value;

const HIGH_COST_INDEX: f64 = 120.0;
const GROWTH_HIGHLIGHT: f64 = 6.0;
const MATRIX_HIGHLIGHT_ROWS: usize = 3;
const MATRIX_HIGHLIGHT_COLS: usize = 3;
const STRONG_CORRELATION: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct RegionalView {
    pub total_market: String,
    pub weighted_growth: String,
    pub largest_market: String,
    pub highest_growth_region: String,
    pub most_digital: String,
    pub bars: Vec<RegionBar>,
    pub radar: Vec<RegionRadarRow>,
    pub rows: Vec<RegionRow>,
    pub potential_ranking: Vec<PotentialRank>,
    pub correlation_highlights: Vec<CorrelationGroup>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegionBar {
    pub region: String,
    pub market_size: Option<f64>,
    pub growth_rate: Option<f64>,
    pub color: &'static str,
}

/// Radar axes brought onto a shared scale: growth and digital maturity
/// as-is, market size divided by 20.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionRadarRow {
    pub region: String,
    pub growth_rate: Option<f64>,
    pub digital_maturity: Option<f64>,
    pub market_size_scaled: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegionRow {
    pub region: String,
    pub market_size: String,
    pub growth_rate: String,
    pub growth_highlight: bool,
    pub companies: String,
    pub cost_index: String,
    pub cost_bar_width: Option<f64>,
    pub high_cost: bool,
    pub labor_index: String,
    pub labor_bar_width: Option<f64>,
    pub high_labor_cost: bool,
    pub digital_maturity: String,
    pub regulatory: String,
    pub regulatory_class: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PotentialRank {
    pub rank: usize,
    pub region: String,
    pub score: String,
    pub growth: String,
    pub digital: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationGroup {
    pub label: String,
    pub entries: Vec<CorrelationCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationCell {
    pub label: String,
    pub value: String,
    pub strong: bool,
}

pub fn transform(raw: &Value) -> RegionalView {
    let regions: Vec<Region> = records_at(raw, "regional_data");

    let bars = regions
        .iter()
        .enumerate()
        .map(|(i, r)| RegionBar {
            region: r.region.clone(),
            market_size: r.market_size_billions,
            growth_rate: r.growth_rate,
            color: palette::color_for(i),
        })
        .collect();

    let radar = regions
        .iter()
        .map(|r| RegionRadarRow {
            region: r.region.clone(),
            growth_rate: r.growth_rate,
            digital_maturity: r.digital_maturity,
            market_size_scaled: derive::radar_axis(
                r.market_size_billions,
                REGION_SIZE_RADAR_SCALE,
            ),
        })
        .collect();

    let rows = regions
        .iter()
        .map(|r| RegionRow {
            region: r.region.clone(),
            market_size: access::fmt_billions(r.market_size_billions),
            growth_rate: access::fmt_percent(r.growth_rate, 1),
            growth_highlight: r.growth_rate.is_some_and(|v| v > GROWTH_HIGHLIGHT),
            companies: access::fmt_thousands(r.number_of_companies),
            cost_index: access::fmt_decimal(r.avg_service_cost_index, 0),
            cost_bar_width: r.avg_service_cost_index,
            high_cost: r.avg_service_cost_index.is_some_and(|v| v > HIGH_COST_INDEX),
            labor_index: access::fmt_decimal(r.labor_cost_index, 0),
            labor_bar_width: r.labor_cost_index,
            high_labor_cost: r.labor_cost_index.is_some_and(|v| v > HIGH_COST_INDEX),
            digital_maturity: access::fmt_rating(r.digital_maturity),
            regulatory: access::fmt_label(r.regulatory_complexity.as_deref()),
            regulatory_class: access::badge_class(r.regulatory_complexity.as_deref()),
        })
        .collect();

    // Ranking arrives pre-sorted by the backend's potential score.
    let potential_ranking: Vec<PotentialRank> =
        records_at::<Region>(raw, "analysis.market_potential_ranking")
            .iter()
            .enumerate()
            .map(|(i, r)| PotentialRank {
                rank: i + 1,
                region: r.region.clone(),
                score: access::fmt_decimal(r.market_potential, 2),
                growth: access::fmt_percent(r.growth_rate, 1),
                digital: access::fmt_decimal(r.digital_maturity, 1),
            })
            .collect();

    RegionalView {
        total_market: access::fmt_billions(num_at(raw, "analysis.total_market_size")),
        weighted_growth: access::fmt_percent(num_at(raw, "analysis.weighted_avg_growth"), 2),
        largest_market: access::fmt_label(str_at(raw, "analysis.insights.largest_market")),
        highest_growth_region: access::fmt_label(str_at(
            raw,
            "analysis.insights.highest_growth_region",
        )),
        most_digital: access::fmt_label(str_at(raw, "analysis.insights.most_digital")),
        bars,
        radar,
        rows,
        potential_ranking,
        correlation_highlights: matrix_highlights(raw),
    }
}

/// First rows/columns of the correlation matrix in payload order, with
/// snake_case keys rewritten for display.
fn matrix_highlights(raw: &Value) -> Vec<CorrelationGroup> {
    let Some(matrix) = value_at(raw, "analysis.correlation_matrix").and_then(Value::as_object)
    else {
        return Vec::new();
    };

    matrix
        .iter()
        .take(MATRIX_HIGHLIGHT_ROWS)
        .map(|(row_key, row)| {
            let entries = row
                .as_object()
                .map(|columns| {
                    columns
                        .iter()
                        .take(MATRIX_HIGHLIGHT_COLS)
                        .map(|(col_key, cell)| {
                            let value = cell.as_f64();
                            CorrelationCell {
                                label: col_key.replace('_', " "),
                                value: access::fmt_decimal(value, 2),
                                strong: value.is_some_and(|v| v > STRONG_CORRELATION),
                            }
                        })
                        .collect()
                })
                .unwrap_or_default();
            CorrelationGroup {
                label: row_key.replace('_', " "),
                entries,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::PLACEHOLDER;
    use serde_json::json;

    fn fixture() -> Value {
        json!({
            "regional_data": [
                {"region": "North America", "market_size_billions": 32.4, "growth_rate": 5.8,
                 "number_of_companies": 45200, "avg_service_cost_index": 131.0,
                 "labor_cost_index": 118.0, "digital_maturity": 8.2,
                 "regulatory_complexity": "Medium"},
                {"region": "Asia Pacific", "market_size_billions": 21.0, "growth_rate": 9.4,
                 "digital_maturity": 6.9}
            ],
            "analysis": {
                "total_market_size": 94.1,
                "weighted_avg_growth": 6.12,
                "insights": {
                    "largest_market": "North America",
                    "highest_growth_region": "Asia Pacific",
                    "most_digital": "Europe"
                },
                "market_potential_ranking": [
                    {"region": "Asia Pacific", "market_potential": 64.9,
                     "growth_rate": 9.4, "digital_maturity": 6.9}
                ],
                "correlation_matrix": {
                    "market_size_billions": {
                        "growth_rate": -0.42, "digital_maturity": 0.67,
                        "labor_cost_index": 0.81, "number_of_companies": 0.95
                    },
                    "growth_rate": {"market_size_billions": -0.42, "digital_maturity": -0.18}
                }
            }
        })
    }

    #[test]
    fn transform_is_idempotent() {
        let raw = fixture();
        assert_eq!(transform(&raw), transform(&raw));
    }

    #[test]
    fn headline_stats_and_insights() {
        let view = transform(&fixture());
        assert_eq!(view.total_market, "$94.10B");
        assert_eq!(view.weighted_growth, "6.12%");
        assert_eq!(view.largest_market, "North America");
        assert_eq!(view.most_digital, "Europe");
    }

    #[test]
    fn radar_normalizes_market_size() {
        let view = transform(&fixture());
        assert_eq!(view.radar[0].market_size_scaled, Some(32.4 / 20.0));
        assert_eq!(view.radar[0].growth_rate, Some(5.8));
        assert_eq!(view.radar[1].market_size_scaled, Some(21.0 / 20.0));
    }

    #[test]
    fn cost_flags_use_the_120_threshold() {
        let view = transform(&fixture());
        let row = &view.rows[0];
        assert!(row.high_cost);
        assert!(!row.high_labor_cost);
        assert_eq!(row.cost_bar_width, Some(131.0));
        assert!(!view.rows[1].high_cost);
        assert_eq!(view.rows[1].cost_index, PLACEHOLDER);
    }

    #[test]
    fn growth_highlight_over_six_percent() {
        let view = transform(&fixture());
        assert!(!view.rows[0].growth_highlight);
        assert!(view.rows[1].growth_highlight);
    }

    #[test]
    fn potential_ranking_keeps_backend_order() {
        let view = transform(&fixture());
        assert_eq!(view.potential_ranking.len(), 1);
        assert_eq!(view.potential_ranking[0].rank, 1);
        assert_eq!(view.potential_ranking[0].score, "64.90");
        assert_eq!(view.potential_ranking[0].growth, "9.4%");
    }

    #[test]
    fn matrix_highlights_slice_rows_and_columns() {
        let view = transform(&fixture());
        assert_eq!(view.correlation_highlights.len(), 2);

        let first = &view.correlation_highlights[0];
        assert_eq!(first.label, "market size billions");
        assert_eq!(first.entries.len(), 3);
        assert!(!first.entries[0].strong);
        assert!(first.entries[1].strong);
        assert_eq!(first.entries[0].value, "-0.42");
    }

    #[test]
    fn empty_payload_degrades() {
        let view = transform(&json!({}));
        assert_eq!(view.total_market, PLACEHOLDER);
        assert!(view.bars.is_empty());
        assert!(view.correlation_highlights.is_empty());
    }
}
