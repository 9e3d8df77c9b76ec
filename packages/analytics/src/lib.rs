#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Observation aggregation and contributor ranking.
//!
//! Each module is a pure function over already-loaded observations or
//! ledger entries: daily trend buckets ([`timeline`]), category breakdown
//! ([`distribution`]), the contributor leaderboard ([`leaderboard`]) and
//! validation progress ([`progress`]). Nothing here reads a clock, touches
//! I/O or keeps state between calls. Malformed input is dropped per record
//! rather than failing the whole computation.

pub mod distribution;
pub mod leaderboard;
pub mod ledger;
pub mod progress;
pub mod timeline;

use thiserror::Error;

/// Errors that can occur while reading analytics input.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// A contributor's stored submissions could not be parsed.
    #[error("Malformed ledger entry for contributor '{contributor_id}': {source}")]
    MalformedLedgerEntry {
        /// Contributor whose entry failed to parse.
        contributor_id: String,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}
