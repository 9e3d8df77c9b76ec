//! Validation progress summary.

use ecowatch_analytics_models::{ProgressSummary, StatusCount};
use ecowatch_observation_models::{Observation, SubmissionStatus};

/// Default validation goal for the progress bar.
pub const DEFAULT_VALIDATION_GOAL: u64 = 100;

/// Summarizes observation statuses and progress toward `goal` validated
/// observations.
///
/// A `goal` of zero counts as met once anything is validated.
#[must_use]
pub fn summarize(observations: &[Observation], goal: u64) -> ProgressSummary {
    let by_status: Vec<StatusCount> = SubmissionStatus::all()
        .iter()
        .map(|status| StatusCount {
            status: *status,
            count: observations
                .iter()
                .filter(|obs| obs.status == Some(*status))
                .count() as u64,
        })
        .collect();

    let count_of = |status: SubmissionStatus| {
        by_status
            .iter()
            .find(|c| c.status == status)
            .map_or(0, |c| c.count)
    };

    let total = observations.len() as u64;
    let validated = count_of(SubmissionStatus::Validated);
    let pending = count_of(SubmissionStatus::Pending);
    let flagged = count_of(SubmissionStatus::Flagged);
    let rejected = count_of(SubmissionStatus::Rejected);
    let known: u64 = by_status.iter().map(|c| c.count).sum();

    #[allow(clippy::cast_precision_loss)]
    let validation_rate = if total == 0 {
        0.0
    } else {
        validated as f64 / total as f64
    };

    #[allow(clippy::cast_precision_loss)]
    let goal_progress = if goal == 0 {
        if validated > 0 { 1.0 } else { 0.0 }
    } else {
        (validated as f64 / goal as f64).min(1.0)
    };

    ProgressSummary {
        total,
        validated,
        pending,
        flagged,
        rejected,
        unknown_status: total - known,
        by_status,
        validation_rate,
        goal,
        goal_progress,
    }
}
