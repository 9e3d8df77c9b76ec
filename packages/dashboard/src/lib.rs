#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Dashboard snapshot composition.
//!
//! Runs every aggregation over one set of observations and one submission
//! ledger and bundles the results for the presentation layer. The reference
//! date is always passed in; nothing here reads the clock.

pub mod config;

use chrono::{DateTime, Utc};
use ecowatch_analytics::ledger::{LedgerEntry, parse_ledger};
use ecowatch_analytics::{distribution, leaderboard, progress, timeline};
use ecowatch_analytics_models::{CategorySlice, ContributorStat, DailyBucket, ProgressSummary};
use ecowatch_observation_models::Observation;
use ecowatch_spatial::{markers, viewport};
use ecowatch_spatial_models::{MapMarker, Viewport};
use serde::{Deserialize, Serialize};

pub use config::{ConfigError, DashboardConfig, load_config, parse_config_toml};

/// Everything the dashboard renders, derived from one set of inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// Daily counts over the trailing window, oldest first.
    pub trend: Vec<DailyBucket>,
    /// Category breakdown, nonzero categories only.
    pub distribution: Vec<CategorySlice>,
    /// Top contributors by impact score.
    pub leaderboard: Vec<ContributorStat>,
    /// Map viewport fitted to the geolocated observations.
    pub viewport: Viewport,
    /// One marker per geolocated observation.
    pub markers: Vec<MapMarker>,
    /// Validation progress.
    pub progress: ProgressSummary,
}

/// Builds a snapshot from already-normalized observations and parsed
/// ledger entries.
#[must_use]
pub fn build_snapshot(
    observations: &[Observation],
    ledger: &[LedgerEntry],
    reference_date: DateTime<Utc>,
    config: &DashboardConfig,
) -> DashboardSnapshot {
    let snapshot = DashboardSnapshot {
        trend: timeline::aggregate(observations, config.window_days, reference_date),
        distribution: distribution::distribution(observations),
        leaderboard: leaderboard::rank(ledger, config.leaderboard_size),
        viewport: viewport::compute_viewport_with(observations, &config.map),
        markers: markers::markers(observations),
        progress: progress::summarize(observations, config.validation_goal),
    };

    log::debug!(
        "Built dashboard snapshot: {} observations, {} markers, {} leaderboard rows",
        observations.len(),
        snapshot.markers.len(),
        snapshot.leaderboard.len()
    );

    snapshot
}

/// Builds a snapshot straight from raw observation store records and raw
/// ledger entries. Malformed records and ledger entries are skipped.
#[must_use]
pub fn build_snapshot_from_raw<'a, I>(
    records: &[serde_json::Value],
    ledger: I,
    reference_date: DateTime<Utc>,
    config: &DashboardConfig,
) -> DashboardSnapshot
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let observations = ecowatch_observation::normalize_records(records);
    let entries = parse_ledger(ledger);
    build_snapshot(&observations, &entries, reference_date, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone as _;
    use ecowatch_observation_models::ObservationCategory;
    use ecowatch_spatial_models::LatLng;
    use serde_json::json;

    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn records() -> Vec<serde_json::Value> {
        vec![
            json!({
                "id": "1",
                "type": "air_quality",
                "severity": "high",
                "status": "validated",
                "createdAt": "2024-06-15T08:00:00Z",
                "latitude": 10.0,
                "longitude": 20.0
            }),
            json!({
                "id": "2",
                "type": "biodiversity",
                "severity": "low",
                "status": "pending",
                "createdAt": "2024-06-13T08:00:00Z"
            }),
            json!({
                "id": "3",
                "type": "mystery",
                "status": "validated",
                "createdAt": "not a date",
                "latitude": "n/a",
                "longitude": 1.0
            }),
            json!({"type": "air_quality"}),
        ]
    }

    #[test]
    fn composes_every_view() {
        let ledger = [
            ("u1", r#"[{"contributorName":"Ada","status":"validated"}]"#),
            ("u2", "garbage"),
            (
                "u3",
                r#"[{"contributorName":"Bo","status":"validated"},{"status":"validated"}]"#,
            ),
        ];

        let snapshot = build_snapshot_from_raw(
            &records(),
            ledger,
            reference(),
            &DashboardConfig::default(),
        );

        assert_eq!(snapshot.trend.len(), 7);
        let bucketed: u64 = snapshot.trend.iter().map(|b| b.total).sum();
        assert_eq!(bucketed, 2);
        assert_eq!(snapshot.trend[6].count(ObservationCategory::AirQuality), 1);

        assert_eq!(snapshot.distribution.len(), 2);

        let ids: Vec<&str> = snapshot
            .leaderboard
            .iter()
            .map(|s| s.contributor_id.as_str())
            .collect();
        assert_eq!(ids, vec!["u3", "u1"]);

        assert_eq!(
            snapshot.viewport,
            Viewport::Point {
                center: LatLng::new(10.0, 20.0),
                zoom: 11,
            }
        );
        assert_eq!(snapshot.markers.len(), 1);
        assert_eq!(snapshot.markers[0].radius, 12);

        assert_eq!(snapshot.progress.total, 3);
        assert_eq!(snapshot.progress.validated, 2);
    }

    #[test]
    fn empty_inputs_produce_defaults() {
        let snapshot = build_snapshot(&[], &[], reference(), &DashboardConfig::default());

        assert_eq!(snapshot.trend.len(), 7);
        assert!(snapshot.trend.iter().all(|b| b.total == 0));
        assert!(snapshot.distribution.is_empty());
        assert!(snapshot.leaderboard.is_empty());
        assert!(matches!(snapshot.viewport, Viewport::World { .. }));
        assert!(snapshot.markers.is_empty());
        assert_eq!(snapshot.progress.total, 0);
    }

    #[test]
    fn respects_config() {
        let config = parse_config_toml("window_days = 3\nleaderboard_size = 1").unwrap();
        let ledger = [
            ("a", r#"[{"status":"validated"}]"#),
            ("b", r#"[{"status":"validated"},{"status":"validated"}]"#),
        ];

        let snapshot = build_snapshot_from_raw(&records(), ledger, reference(), &config);
        assert_eq!(snapshot.trend.len(), 3);
        assert_eq!(snapshot.leaderboard.len(), 1);
        assert_eq!(snapshot.leaderboard[0].contributor_id, "b");
    }

    #[test]
    fn serializes_identically_across_calls() {
        let config = DashboardConfig::default();
        let ledger = [("a", r#"[{"status":"validated"}]"#)];
        let first = build_snapshot_from_raw(&records(), ledger, reference(), &config);
        let second = build_snapshot_from_raw(&records(), ledger, reference(), &config);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
