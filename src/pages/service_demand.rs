// Service demand: grouped demand time series, per-service forecast cards
// and the demand summary table.
use crate::access::{self, num_at, records_at, str_at, value_at};
use crate::model::ServiceDemandRecord;
use crate::palette;
use crate::series::{self, FlatRecord, GroupedPoint};
use chrono::{DateTime, NaiveDate};
use serde_json::Value;

const FORECAST_PREVIEW_N: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceDemandView {
    pub total_demand: String,
    pub highest_demand_service: String,
    pub fastest_growing_service: String,
    pub last_updated: String,
    /// One point per date, one entry per service observed on that date.
    pub series: Vec<GroupedPoint>,
    pub service_types: Vec<ServiceSeries>,
    pub forecast_cards: Vec<ServiceForecastCard>,
    pub records: Vec<ServiceDemandRecord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceSeries {
    pub name: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceForecastCard {
    pub service: String,
    pub color: &'static str,
    pub current_demand: String,
    pub demand_bar_width: Option<f64>,
    pub trend: String,
    pub trend_class: String,
    pub trend_magnitude: String,
    pub avg_ticket_value: String,
    pub ytd_volume: String,
    /// Month-indexed 6-month outlook, starting at month 1.
    pub forecast_6m: Vec<(u32, f64)>,
    pub forecast_preview: Vec<String>,
}

/// Backend timestamps arrive as RFC 3339 or a plain date. Unparseable
/// values pass through verbatim rather than vanish.
fn fmt_last_updated(value: Option<&str>) -> String {
    let Some(s) = value else {
        return access::PLACEHOLDER.to_string();
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return dt.format("%b %-d, %Y %H:%M").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.format("%b %-d, %Y").to_string();
    }
    s.to_string()
}

pub fn transform(raw: &Value) -> ServiceDemandView {
    let records: Vec<ServiceDemandRecord> = records_at(raw, "service_data");

    // Records without a score contribute nothing: absence, not zero.
    let flat: Vec<FlatRecord> = records
        .iter()
        .filter_map(|r| {
            r.demand_score.map(|value| FlatRecord {
                period: r.date.clone(),
                category: r.service_type.clone(),
                value,
            })
        })
        .collect();

    // Every observed service gets a chart series, scored or not.
    let mut seen: Vec<String> = Vec::new();
    for record in &records {
        if !seen.iter().any(|s| s == &record.service_type) {
            seen.push(record.service_type.clone());
        }
    }
    let service_types = seen
        .into_iter()
        .enumerate()
        .map(|(i, name)| ServiceSeries {
            name,
            color: palette::color_for(i),
        })
        .collect();

    let forecast_cards = value_at(raw, "forecasts.service_forecasts")
        .and_then(Value::as_object)
        .map(|forecasts| {
            forecasts
                .iter()
                .enumerate()
                .map(|(i, (service, forecast))| {
                    let demand = num_at(forecast, "current_demand");
                    let outlook = access::num_seq_at(forecast, "forecast_6m");
                    ServiceForecastCard {
                        service: service.clone(),
                        color: palette::color_for(i),
                        current_demand: access::fmt_decimal(demand, 1),
                        demand_bar_width: demand,
                        trend: access::fmt_label(str_at(forecast, "trend")),
                        trend_class: access::badge_class(str_at(forecast, "trend")),
                        trend_magnitude: access::fmt_decimal(
                            num_at(forecast, "trend_magnitude"),
                            2,
                        ),
                        avg_ticket_value: access::fmt_currency(
                            num_at(forecast, "avg_ticket_value"),
                            0,
                        ),
                        ytd_volume: access::fmt_thousands(num_at(forecast, "total_volume_ytd")),
                        forecast_preview: outlook
                            .iter()
                            .take(FORECAST_PREVIEW_N)
                            .map(|v| access::fmt_decimal(Some(*v), 0))
                            .collect(),
                        forecast_6m: outlook
                            .into_iter()
                            .enumerate()
                            .map(|(month, v)| (month as u32 + 1, v))
                            .collect(),
                    }
                })
                .collect()
        })
        .unwrap_or_default();

    ServiceDemandView {
        total_demand: access::fmt_decimal(
            num_at(raw, "forecasts.overall_statistics.total_demand_score"),
            1,
        ),
        highest_demand_service: access::fmt_label(str_at(
            raw,
            "forecasts.overall_statistics.highest_demand_service",
        )),
        fastest_growing_service: access::fmt_label(str_at(
            raw,
            "forecasts.overall_statistics.fastest_growing_service",
        )),
        last_updated: fmt_last_updated(str_at(raw, "forecasts.last_updated")),
        series: series::group_by_period(flat),
        service_types,
        forecast_cards,
        records,
    }
}

/// Records for one service, for the drill-down chart.
pub fn filter_by_service(
    records: &[ServiceDemandRecord],
    service: &str,
) -> Vec<ServiceDemandRecord> {
    records
        .iter()
        .filter(|r| r.service_type == service)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::PLACEHOLDER;
    use serde_json::json;

    fn fixture() -> Value {
        json!({
            "service_data": [
                {"date": "2025-01", "service_type": "Preventive Maintenance",
                 "demand_score": 78.2, "volume": 1420},
                {"date": "2025-01", "service_type": "Emergency Repairs",
                 "demand_score": 64.0, "volume": 980},
                {"date": "2025-02", "service_type": "Preventive Maintenance",
                 "demand_score": 80.6},
                {"date": "2025-02", "service_type": "Inspections"}
            ],
            "forecasts": {
                "last_updated": "2025-08-01",
                "overall_statistics": {
                    "total_demand_score": 71.4,
                    "highest_demand_service": "Preventive Maintenance",
                    "fastest_growing_service": "Energy Management"
                },
                "service_forecasts": {
                    "Preventive Maintenance": {
                        "current_demand": 80.6, "trend": "Increasing",
                        "trend_magnitude": 1.24, "avg_ticket_value": 410.0,
                        "total_volume_ytd": 9840,
                        "forecast_6m": [81.0, 82.1, 83.4, 84.0, 84.9, 85.5]
                    },
                    "Emergency Repairs": {
                        "current_demand": 64.0, "trend": "Stable"
                    }
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
    fn series_groups_by_date_with_absent_services() {
        let view = transform(&fixture());
        assert_eq!(view.series.len(), 2);
        assert_eq!(view.series[0].period, "2025-01");
        assert_eq!(view.series[0].get("Preventive Maintenance"), Some(78.2));
        assert_eq!(view.series[0].get("Emergency Repairs"), Some(64.0));
        // February has no repair reading and the scoreless inspection
        // record contributes nothing.
        assert_eq!(view.series[1].get("Emergency Repairs"), None);
        assert_eq!(view.series[1].get("Inspections"), None);
    }

    #[test]
    fn service_types_in_first_seen_order_with_ordinal_colors() {
        let view = transform(&fixture());
        let names: Vec<&str> = view.service_types.iter().map(|s| s.name.as_str()).collect();
        // Inspections has no score anywhere but is still a known series.
        assert_eq!(
            names,
            vec!["Preventive Maintenance", "Emergency Repairs", "Inspections"]
        );
        assert_eq!(view.service_types[0].color, palette::color_for(0));
        assert_eq!(view.service_types[1].color, palette::color_for(1));
    }

    #[test]
    fn forecast_cards_format_and_index_months() {
        let view = transform(&fixture());
        assert_eq!(view.forecast_cards.len(), 2);

        let card = &view.forecast_cards[0];
        assert_eq!(card.service, "Preventive Maintenance");
        assert_eq!(card.current_demand, "80.6");
        assert_eq!(card.demand_bar_width, Some(80.6));
        assert_eq!(card.trend_class, "increasing");
        assert_eq!(card.avg_ticket_value, "$410");
        assert_eq!(card.ytd_volume, "9,840");
        assert_eq!(card.forecast_6m.first(), Some(&(1, 81.0)));
        assert_eq!(card.forecast_6m.last(), Some(&(6, 85.5)));
        assert_eq!(card.forecast_preview, vec!["81", "82", "83"]);
    }

    #[test]
    fn last_updated_renders_dates_and_passes_odd_values_through() {
        let view = transform(&fixture());
        assert_eq!(view.last_updated, "Aug 1, 2025");
        assert_eq!(fmt_last_updated(Some("yesterday")), "yesterday");
        assert_eq!(fmt_last_updated(None), PLACEHOLDER);
    }

    #[test]
    fn sparse_forecast_card_degrades_per_field() {
        let view = transform(&fixture());
        let card = &view.forecast_cards[1];
        assert_eq!(card.trend, "Stable");
        assert_eq!(card.trend_magnitude, PLACEHOLDER);
        assert_eq!(card.ytd_volume, PLACEHOLDER);
        assert!(card.forecast_6m.is_empty());
    }

    #[test]
    fn filter_by_service_selects_only_that_service() {
        let view = transform(&fixture());
        let filtered = filter_by_service(&view.records, "Preventive Maintenance");
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.service_type == "Preventive Maintenance"));
    }

    #[test]
    fn empty_payload_degrades() {
        let view = transform(&json!({}));
        assert_eq!(view.total_demand, PLACEHOLDER);
        assert_eq!(view.last_updated, PLACEHOLDER);
        assert!(view.series.is_empty());
        assert!(view.forecast_cards.is_empty());
    }
}
