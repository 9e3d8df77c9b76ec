#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Observation taxonomy types and the canonical observation record.
//!
//! This crate defines the closed sets of observation categories, severity
//! levels and validation statuses used across the ecowatch workspace, plus
//! the [`Observation`] and [`Submission`] records supplied by the external
//! observation store and submission ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Fallback marker radius for observations with a missing or unrecognized
/// severity.
pub const DEFAULT_MARKER_RADIUS: u32 = 8;

/// Fallback color for observations with a missing or unrecognized category.
pub const DEFAULT_CATEGORY_COLOR: &str = "#6b7280";

/// Kind of environmental reading an observation records.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ObservationCategory {
    /// Particulates, ozone, smoke and other air readings
    AirQuality,
    /// Turbidity, pH, contamination and other water readings
    WaterQuality,
    /// Species sightings and habitat notes
    Biodiversity,
    /// Sound level measurements
    NoiseLevel,
}

impl ObservationCategory {
    /// Returns all variants of this enum, in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::AirQuality,
            Self::WaterQuality,
            Self::Biodiversity,
            Self::NoiseLevel,
        ]
    }

    /// Human-readable name used for chart legends.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AirQuality => "Air Quality",
            Self::WaterQuality => "Water Quality",
            Self::Biodiversity => "Biodiversity",
            Self::NoiseLevel => "Noise Level",
        }
    }

    /// Chart and marker color for this category.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::AirQuality => "#3b82f6",
            Self::WaterQuality => "#06b6d4",
            Self::Biodiversity => "#22c55e",
            Self::NoiseLevel => "#f59e0b",
        }
    }
}

/// Looks up the color for an optional category, falling back to
/// [`DEFAULT_CATEGORY_COLOR`].
#[must_use]
pub const fn category_color(category: Option<ObservationCategory>) -> &'static str {
    match category {
        Some(category) => category.color(),
        None => DEFAULT_CATEGORY_COLOR,
    }
}

/// Severity of an observation, from low to critical.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Severity {
    /// Within normal range
    Low,
    /// Noticeably elevated
    Moderate,
    /// Needs attention
    High,
    /// Needs immediate attention
    Critical,
}

impl Severity {
    /// Returns all variants of this enum, lowest first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Low, Self::Moderate, Self::High, Self::Critical]
    }

    /// Map marker radius for this severity.
    #[must_use]
    pub const fn marker_radius(self) -> u32 {
        match self {
            Self::Low => 7,
            Self::Moderate => 9,
            Self::High => 12,
            Self::Critical => 15,
        }
    }
}

/// Looks up the marker radius for an optional severity, falling back to
/// [`DEFAULT_MARKER_RADIUS`].
#[must_use]
pub const fn radius_for_severity(severity: Option<Severity>) -> u32 {
    match severity {
        Some(severity) => severity.marker_radius(),
        None => DEFAULT_MARKER_RADIUS,
    }
}

/// Validation state of an observation or a ledger submission.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SubmissionStatus {
    /// Awaiting review
    Pending,
    /// Accepted by a reviewer
    Validated,
    /// Marked for a second look
    Flagged,
    /// Rejected by a reviewer
    Rejected,
}

impl SubmissionStatus {
    /// Returns all variants of this enum, in review order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Pending,
            Self::Validated,
            Self::Flagged,
            Self::Rejected,
        ]
    }
}

/// A citizen-science observation as supplied by the observation store.
///
/// Taxonomy fields are optional: `None` means the stored value was missing
/// or outside the closed set. Observations are never mutated once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    /// Unique identifier from the store.
    pub id: String,
    /// Observation category.
    #[serde(rename = "type")]
    pub category: Option<ObservationCategory>,
    /// Severity level.
    pub severity: Option<Severity>,
    /// Validation status.
    pub status: Option<SubmissionStatus>,
    /// When the observation was recorded. `None` when the stored timestamp
    /// is missing or unparseable.
    pub created_at: Option<DateTime<Utc>>,
    /// Latitude (WGS84).
    pub latitude: Option<f64>,
    /// Longitude (WGS84).
    pub longitude: Option<f64>,
    /// Short title.
    #[serde(default)]
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Human-readable place name.
    #[serde(default)]
    pub location_name: Option<String>,
    /// Measured value, as entered.
    #[serde(default)]
    pub measurement_value: Option<String>,
    /// Unit of the measured value.
    #[serde(default)]
    pub measurement_unit: Option<String>,
}

impl Observation {
    /// Returns `(latitude, longitude)` when both coordinates are present and
    /// finite.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => Some((lat, lng)),
            _ => None,
        }
    }
}

/// One logged submission in a contributor's ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// Contributor identity.
    #[serde(default)]
    pub contributor_id: String,
    /// Contributor display name.
    #[serde(default)]
    pub contributor_name: String,
    /// Validation status of this submission.
    pub status: SubmissionStatus,
}
