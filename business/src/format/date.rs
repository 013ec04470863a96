use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

/// Accepted layouts for timestamps without an offset, read as UTC.
const NAIVE_LAYOUTS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Parses a cell value as a timestamp.
///
/// Strings may be RFC 3339, RFC 2822, a naive ISO date-time or a bare date.
/// Numbers are milliseconds since the Unix epoch.
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(text) => parse_str(text.trim()),
        Value::Number(number) => number
            .as_i64()
            .or_else(|| {
                number
                    .as_f64()
                    .filter(|millis| millis.is_finite())
                    .map(|millis| millis as i64)
            })
            .and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}

fn parse_str(text: &str) -> Option<DateTime<Utc>> {
    if text.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Some(naive) = NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(text, layout).ok())
    {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `M/D/YYYY`, in UTC.
pub fn format_date(value: &Value) -> Option<String> {
    parse_timestamp(value).map(|at| at.format("%-m/%-d/%Y").to_string())
}

/// `Mon, 15 Jan 2024 10:30:00 GMT`.
pub fn format_date_time(value: &Value) -> Option<String> {
    parse_timestamp(value).map(|at| at.format("%a, %d %b %Y %H:%M:%S GMT").to_string())
}
