#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Derived dashboard analytics types.
//!
//! Every type here is recomputed from observations or the submission ledger
//! on each call and consumed read-only by the presentation layer. None of
//! them are persisted.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use ecowatch_observation_models::{ObservationCategory, SubmissionStatus};
use serde::{Deserialize, Serialize};

/// Points awarded per validated submission.
pub const POINTS_PER_VALIDATION: u64 = 10;

/// Observation counts for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyBucket {
    /// Calendar day (UTC) this bucket covers.
    pub date: NaiveDate,
    /// Short chart label (e.g. "Mar 4").
    pub date_label: String,
    /// All observations on this day, including unrecognized categories.
    pub total: u64,
    /// Counts per recognized category. Every category is present, zero
    /// included.
    pub per_category_counts: BTreeMap<ObservationCategory, u64>,
}

impl DailyBucket {
    /// Creates a zeroed bucket for `date`.
    #[must_use]
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            date_label: date.format("%b %-d").to_string(),
            total: 0,
            per_category_counts: ObservationCategory::all()
                .iter()
                .map(|category| (*category, 0))
                .collect(),
        }
    }

    /// Count for a single category.
    #[must_use]
    pub fn count(&self, category: ObservationCategory) -> u64 {
        self.per_category_counts
            .get(&category)
            .copied()
            .unwrap_or_default()
    }
}

/// Share of observations in one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySlice {
    /// Category this slice covers.
    pub category: ObservationCategory,
    /// Human-readable category name.
    pub label: String,
    /// Chart color for the slice.
    pub color: String,
    /// Number of observations in this category. Always nonzero.
    pub count: u64,
    /// `count` divided by the sum of counts across all returned slices.
    pub proportion: f64,
}

/// Per-contributor leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributorStat {
    /// Contributor identity from the ledger.
    pub contributor_id: String,
    /// Display name.
    pub contributor_name: String,
    /// All submissions in the contributor's ledger.
    pub total_submissions: u64,
    /// Submissions with a validated status.
    pub validated_count: u64,
    /// `validated_count * POINTS_PER_VALIDATION`.
    pub impact_score: u64,
}

impl ContributorStat {
    /// Builds a stat row, deriving the impact score from `validated_count`.
    #[must_use]
    pub fn new(
        contributor_id: String,
        contributor_name: String,
        total_submissions: u64,
        validated_count: u64,
    ) -> Self {
        Self {
            contributor_id,
            contributor_name,
            total_submissions,
            validated_count,
            impact_score: validated_count * POINTS_PER_VALIDATION,
        }
    }
}

/// Count of observations with a single status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    /// Validation status.
    pub status: SubmissionStatus,
    /// Number of observations.
    pub count: u64,
}

/// Headline progress figures for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    /// All observations considered.
    pub total: u64,
    /// Observations with a validated status.
    pub validated: u64,
    /// Observations awaiting review.
    pub pending: u64,
    /// Observations flagged for review.
    pub flagged: u64,
    /// Rejected observations.
    pub rejected: u64,
    /// Observations with a missing or unrecognized status.
    pub unknown_status: u64,
    /// Counts for every known status, in review order.
    pub by_status: Vec<StatusCount>,
    /// Validated observations as a fraction of `total` (0.0 when empty).
    pub validation_rate: f64,
    /// Target number of validated observations.
    pub goal: u64,
    /// Progress toward `goal`, clamped to `0.0..=1.0`.
    pub goal_progress: f64,
}
