//! Shared parsing utilities for raw observation records.
//!
//! Timestamp and coordinate parsing used when normalizing records from the
//! observation store. Every parser returns `None` instead of failing so a
//! single garbled field never aborts a batch.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parses a stored `createdAt` string.
///
/// Accepts RFC 3339 (any offset, converted to UTC), naive
/// `YYYY-MM-DDTHH:MM:SS` with optional fractional seconds (taken as UTC),
/// and a bare `YYYY-MM-DD` (midnight UTC).
#[must_use]
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Parses a `createdAt` JSON value: a timestamp string or epoch
/// milliseconds, as an integer or a float with no fractional part.
#[must_use]
pub fn parse_timestamp_value(value: &serde_json::Value) -> Option<DateTime<Utc>> {
    match value {
        serde_json::Value::String(s) => parse_timestamp(s),
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().and_then(whole_millis))
            .and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}

/// Epoch milliseconds stored as a float, accepted only without a
/// fractional part.
#[allow(clippy::cast_possible_truncation)]
fn whole_millis(millis: f64) -> Option<i64> {
    #[allow(clippy::cast_precision_loss)]
    let in_range = (i64::MIN as f64..i64::MAX as f64).contains(&millis);
    (in_range && millis.fract() == 0.0).then_some(millis as i64)
}

/// Parses a single coordinate from a JSON number or numeric string.
/// Returns `None` if missing, unparseable or non-finite.
#[must_use]
pub fn parse_coordinate(value: Option<&serde_json::Value>) -> Option<f64> {
    let parsed = match value? {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    parsed.is_finite().then_some(parsed)
}

/// Parses a lat/lng pair. Both must parse or neither is kept.
#[must_use]
pub fn parse_lat_lng(
    lat: Option<&serde_json::Value>,
    lng: Option<&serde_json::Value>,
) -> Option<(f64, f64)> {
    Some((parse_coordinate(lat)?, parse_coordinate(lng)?))
}
