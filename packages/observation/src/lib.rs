#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Observation store record normalization.
//!
//! The observation store hands over loosely-typed JSON records. This crate
//! maps them onto the canonical [`Observation`] so the aggregation crates
//! only ever see typed values. Malformed fields degrade to `None`; only a
//! record without an identifier is dropped.

pub mod parsing;

use ecowatch_observation_models::{Observation, ObservationCategory, Severity, SubmissionStatus};

use crate::parsing::{parse_lat_lng, parse_timestamp_value};

/// Normalizes a batch of raw records, dropping those without an `id`.
#[must_use]
pub fn normalize_records(records: &[serde_json::Value]) -> Vec<Observation> {
    let observations: Vec<Observation> = records.iter().filter_map(normalize_record).collect();

    log::debug!(
        "Normalized {} of {} observation records",
        observations.len(),
        records.len()
    );

    observations
}

/// Normalizes a single raw record into an [`Observation`].
///
/// Returns `None` only when the record has no usable `id`. Unrecognized
/// `type`/`severity`/`status` values and unparseable timestamps or
/// coordinates are kept as `None` on the observation.
#[must_use]
pub fn normalize_record(record: &serde_json::Value) -> Option<Observation> {
    let Some(id) = extract_id(record) else {
        log::warn!("Skipping observation record without an id");
        return None;
    };

    let category =
        get_str(record, "type").and_then(|s| s.trim().parse::<ObservationCategory>().ok());
    let severity = get_str(record, "severity").and_then(|s| s.trim().parse::<Severity>().ok());
    let status =
        get_str(record, "status").and_then(|s| s.trim().parse::<SubmissionStatus>().ok());

    let created_at = record.get("createdAt").and_then(parse_timestamp_value);
    if created_at.is_none() {
        log::debug!("Observation {id} has a missing or unparseable createdAt");
    }

    let (latitude, longitude) = parse_lat_lng(record.get("latitude"), record.get("longitude"))
        .map_or((None, None), |(lat, lng)| (Some(lat), Some(lng)));

    Some(Observation {
        id,
        category,
        severity,
        status,
        created_at,
        latitude,
        longitude,
        title: get_str(record, "title").unwrap_or_default().to_string(),
        description: get_string(record, "description"),
        location_name: get_string(record, "locationName"),
        measurement_value: get_display(record, "measurementValue"),
        measurement_unit: get_string(record, "measurementUnit"),
    })
}

/// Reads the `id` field as a non-empty string, accepting integer ids.
fn extract_id(record: &serde_json::Value) -> Option<String> {
    match record.get("id")? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn get_str<'a>(record: &'a serde_json::Value, field: &str) -> Option<&'a str> {
    record.get(field).and_then(serde_json::Value::as_str)
}

fn get_string(record: &serde_json::Value, field: &str) -> Option<String> {
    get_str(record, field)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Like [`get_string`] but also renders numbers, since measurement values
/// are entered free-form.
fn get_display(record: &serde_json::Value, field: &str) -> Option<String> {
    match record.get(field)? {
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}
