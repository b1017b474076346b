// Secondary metrics derived from already-analyzed payload fields.
// Every function is total over optional inputs: a missing or degenerate
// operand yields `None`, never Infinity or NaN.

/// Display styling class for signed values (correlations, growth deltas).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
    Neutral,
}

/// Bar width scale for market-share progress cells.
pub const MARKET_SHARE_BAR_SCALE: f64 = 5.0;
/// Bar width scale for 0-10 demand scores.
pub const DEMAND_SCORE_BAR_SCALE: f64 = 10.0;
/// Radar normalization for market sizes in billions on the regional chart.
pub const REGION_SIZE_RADAR_SCALE: f64 = 1.0 / 20.0;
/// Radar normalization for 0-10 scores plotted next to percentages.
pub const SCORE_RADAR_SCALE: f64 = 10.0;

/// `(revenue_millions * 1e6) / employee_count`. Unknown when either
/// operand is missing or the headcount is zero.
pub fn revenue_per_employee(
    revenue_millions: Option<f64>,
    employee_count: Option<f64>,
) -> Option<f64> {
    let revenue = revenue_millions?;
    let employees = employee_count?;
    if employees == 0.0 {
        return None;
    }
    Some(revenue * 1_000_000.0 / employees)
}

/// Display-scale width for progress bars. Unclamped: clamping is a
/// rendering concern.
pub fn progress_width(value: Option<f64>, scale: f64) -> Option<f64> {
    Some(value? * scale)
}

/// Brings a heterogeneous metric onto a comparable radar axis.
pub fn radar_axis(value: Option<f64>, scale: f64) -> Option<f64> {
    Some(value? * scale)
}

/// Share of a total, in percent. Unknown when the total is zero or missing.
pub fn percent_of_total(value: Option<f64>, total: Option<f64>) -> Option<f64> {
    let value = value?;
    let total = total?;
    if total == 0.0 {
        return None;
    }
    Some(value / total * 100.0)
}

pub fn correlation_sign(value: Option<f64>) -> Sign {
    match value {
        Some(v) if v > 0.0 => Sign::Positive,
        Some(v) if v < 0.0 => Sign::Negative,
        _ => Sign::Neutral,
    }
}

/// Classifies a value against a high and a low threshold, for cells that
/// color "good" and "bad" readings differently.
pub fn threshold_sign(value: Option<f64>, high: f64, low: f64) -> Sign {
    match value {
        Some(v) if v > high => Sign::Positive,
        Some(v) if v < low => Sign::Negative,
        _ => Sign::Neutral,
    }
}

/// Top-N by a named metric: descending, stable on ties in input order,
/// unknown metrics rank last. Never reorders beyond that.
pub fn top_by<T: Clone>(items: &[T], n: usize, metric: impl Fn(&T) -> Option<f64>) -> Vec<T> {
    let mut ranked: Vec<T> = items.to_vec();
    ranked.sort_by(|a, b| {
        let a = metric(a).unwrap_or(f64::NEG_INFINITY);
        let b = metric(b).unwrap_or(f64::NEG_INFINITY);
        b.partial_cmp(&a).unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revenue_per_employee_guards_divisor() {
        assert_eq!(revenue_per_employee(Some(100.0), Some(0.0)), None);
        assert_eq!(revenue_per_employee(Some(100.0), None), None);
        assert_eq!(revenue_per_employee(None, Some(500.0)), None);
        assert_eq!(
            revenue_per_employee(Some(100.0), Some(500.0)),
            Some(200_000.0)
        );
    }

    #[test]
    fn percent_of_total_guards_divisor() {
        assert_eq!(percent_of_total(Some(25.0), Some(0.0)), None);
        assert_eq!(percent_of_total(Some(25.0), Some(50.0)), Some(50.0));
        assert_eq!(percent_of_total(None, Some(50.0)), None);
    }

    #[test]
    fn widths_and_axes_propagate_unknown() {
        assert_eq!(progress_width(Some(12.0), MARKET_SHARE_BAR_SCALE), Some(60.0));
        assert_eq!(progress_width(None, MARKET_SHARE_BAR_SCALE), None);
        assert_eq!(radar_axis(Some(18.0), REGION_SIZE_RADAR_SCALE), Some(0.9));
        assert_eq!(radar_axis(None, SCORE_RADAR_SCALE), None);
    }

    #[test]
    fn correlation_sign_neutral_on_unknown() {
        assert_eq!(correlation_sign(Some(0.42)), Sign::Positive);
        assert_eq!(correlation_sign(Some(-0.1)), Sign::Negative);
        assert_eq!(correlation_sign(Some(0.0)), Sign::Neutral);
        assert_eq!(correlation_sign(None), Sign::Neutral);
    }

    #[test]
    fn top_by_is_stable_on_ties() {
        let items = vec![("a", 10.0), ("b", 20.0), ("c", 10.0), ("d", 5.0)];
        let top = top_by(&items, 3, |(_, v)| Some(*v));
        let names: Vec<&str> = top.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn top_by_ranks_unknown_last() {
        let items = vec![("a", None), ("b", Some(1.0))];
        let top = top_by(&items, 2, |(_, v)| *v);
        assert_eq!(top[0].0, "b");
        assert_eq!(top[1].0, "a");
    }
}
