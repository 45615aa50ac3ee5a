//! Tolerant decoders for record fields supplied by the record store.
//!
//! The store holds whatever the forms submitted, so numeric fields may be
//! numbers, numeric strings, null, or garbage. Anything that is not a usable
//! number decodes as `None` and the engine treats it as zero.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode an optional finite `f64`.
pub fn optional_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_f64))
}

/// Decode an `f64`, falling back to zero.
pub fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    optional_f64(deserializer).map(|v| v.unwrap_or(0.0))
}

/// Decode an optional non-negative whole count.
pub fn optional_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_f64).and_then(f64_to_count))
}

/// Decode a timestamp given as RFC 3339, `YYYY-MM-DDTHH:MM:SS`, or `YYYY-MM-DD`.
pub fn flexible_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_flexible_datetime(&s).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "Invalid date format: '{s}'. Expected 'YYYY-MM-DD' or 'YYYY-MM-DDTHH:MM:SSZ'"
        ))
    })
}

/// Decode an optional calendar date. Blank or unparseable strings decode as `None`.
pub fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => parse_flexible_datetime(s.trim()).map(|dt| dt.date_naive()),
        _ => None,
    })
}

/// Fallback for records stored without a creation time. Sorts before every real timestamp.
pub fn unknown_datetime() -> DateTime<Utc> {
    DateTime::<Utc>::MIN_UTC
}

/// Parse a timestamp in any of the accepted formats. Bare dates map to midnight UTC.
pub fn parse_flexible_datetime(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(Utc.from_utc_datetime(&dt));
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| Utc.from_utc_datetime(&dt))
}

fn value_to_f64(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

fn f64_to_count(n: f64) -> Option<u32> {
    if n < 0.0 || n.fract() != 0.0 || n > f64::from(u32::MAX) {
        return None;
    }
    Some(n as u32)
}
