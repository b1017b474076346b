// Null-tolerant field access over raw analytics payloads.
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Rendered in place of any value that could not be resolved.
pub const PLACEHOLDER: &str = "N/A";

/// Resolves a dotted path of nested fields. `None` if any segment is
/// missing or explicitly null.
pub fn value_at<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    if current.is_null() { None } else { Some(current) }
}

/// Numeric field lookup. A present but non-numeric value is a contract
/// violation upstream: asserts in debug builds, degrades to `None` in release.
pub fn num_at(root: &Value, path: &str) -> Option<f64> {
    let value = value_at(root, path)?;
    let number = value.as_f64();
    debug_assert!(number.is_some(), "expected number at '{path}', got {value}");
    number
}

pub fn int_at(root: &Value, path: &str) -> Option<i64> {
    let value = value_at(root, path)?;
    let number = value.as_i64();
    debug_assert!(number.is_some(), "expected integer at '{path}', got {value}");
    number
}

pub fn str_at<'a>(root: &'a Value, path: &str) -> Option<&'a str> {
    value_at(root, path)?.as_str()
}

pub fn bool_at(root: &Value, path: &str) -> Option<bool> {
    value_at(root, path)?.as_bool()
}

pub fn array_at<'a>(root: &'a Value, path: &str) -> Option<&'a Vec<Value>> {
    value_at(root, path)?.as_array()
}

/// Numeric sequence at a path. Missing path yields an empty series; a
/// non-numeric element ends the series there (shorter series, not an error).
pub fn num_seq_at(root: &Value, path: &str) -> Vec<f64> {
    let Some(items) = array_at(root, path) else {
        return Vec::new();
    };
    items
        .iter()
        .map_while(|v| v.as_f64())
        .collect()
}

/// Typed record list at a path. A missing list yields no records; a
/// malformed element is a contract violation upstream: asserts in debug
/// builds, is skipped in release.
pub fn records_at<T: DeserializeOwned>(root: &Value, path: &str) -> Vec<T> {
    let Some(items) = array_at(root, path) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match serde_json::from_value::<T>(item.clone()) {
            Ok(record) => Some(record),
            Err(err) => {
                debug_assert!(false, "malformed record at '{path}': {err}");
                None
            }
        })
        .collect()
}

/// Fixed-decimal rendering, `"N/A"` for unknown. Never emits `NaN`.
pub fn fmt_decimal(value: Option<f64>, places: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.places$}"),
        _ => PLACEHOLDER.to_string(),
    }
}

pub fn fmt_percent(value: Option<f64>, places: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.places$}%"),
        _ => PLACEHOLDER.to_string(),
    }
}

/// `"$12.34B"` style for market sizes quoted in billions.
pub fn fmt_billions(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("${v:.2}B"),
        _ => PLACEHOLDER.to_string(),
    }
}

pub fn fmt_currency(value: Option<f64>, places: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format!("${v:.places$}"),
        _ => PLACEHOLDER.to_string(),
    }
}

/// `"$1,234"` for whole-dollar amounts with grouped thousands.
pub fn fmt_dollar_thousands(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("${}", fmt_thousands(Some(v))),
        _ => PLACEHOLDER.to_string(),
    }
}

/// `"$1,234M"` for revenue and investment figures quoted in millions.
pub fn fmt_millions_currency(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("${}M", fmt_thousands(Some(v))),
        _ => PLACEHOLDER.to_string(),
    }
}

/// `"$123K"` for per-employee figures quoted in plain dollars.
pub fn fmt_kilo_currency(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("${:.0}K", v / 1000.0),
        _ => PLACEHOLDER.to_string(),
    }
}

/// `"8.5/10"` for 0-10 scores.
pub fn fmt_rating(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.1}/10"),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Grouped thousands, rounded to a whole number: `12,345`.
pub fn fmt_thousands(value: Option<f64>) -> String {
    let Some(v) = value.filter(|v| v.is_finite()) else {
        return PLACEHOLDER.to_string();
    };
    let rounded = v.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

pub fn fmt_label(value: Option<&str>) -> String {
    match value {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Lower-cased badge class for categorical labels (trend, maturity,
/// regulatory complexity). Empty string when the label is unknown.
pub fn badge_class(value: Option<&str>) -> String {
    value.map(|s| s.to_lowercase()).unwrap_or_default()
}
