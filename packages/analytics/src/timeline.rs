//! Daily observation buckets over a trailing window.
//!
//! Day boundaries come from the UTC calendar date of `created_at`, and
//! "today" is always the caller-supplied reference date, so the same input
//! produces the same buckets regardless of when it runs.

use chrono::{DateTime, NaiveDate, Utc};
use ecowatch_analytics_models::DailyBucket;
use ecowatch_observation_models::Observation;

/// Default trailing window for the dashboard trend chart.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Longest window [`aggregate`] will build.
pub const MAX_WINDOW_DAYS: u32 = 366;

/// Buckets observations into the `window_days` calendar days ending on
/// `reference_date` (inclusive), oldest first.
///
/// Observations outside the window or without a parseable timestamp are
/// skipped. Unrecognized categories count toward `total` only.
///
/// `window_days` is capped at [`MAX_WINDOW_DAYS`].
#[must_use]
pub fn aggregate(
    observations: &[Observation],
    window_days: u32,
    reference_date: DateTime<Utc>,
) -> Vec<DailyBucket> {
    let window_days = if window_days > MAX_WINDOW_DAYS {
        log::warn!("Window of {window_days} days capped at {MAX_WINDOW_DAYS}");
        MAX_WINDOW_DAYS
    } else {
        window_days
    };

    let mut buckets: Vec<DailyBucket> = window(reference_date.date_naive(), window_days)
        .into_iter()
        .map(DailyBucket::empty)
        .collect();

    let Some(start) = buckets.first().map(|b| b.date) else {
        return buckets;
    };

    let mut bucketed = 0_usize;

    for obs in observations {
        let Some(created_at) = obs.created_at else {
            continue;
        };

        let offset = (created_at.date_naive() - start).num_days();
        let Some(bucket) = usize::try_from(offset)
            .ok()
            .and_then(|idx| buckets.get_mut(idx))
        else {
            continue;
        };

        bucketed += 1;
        bucket.total += 1;
        if let Some(category) = obs.category {
            *bucket.per_category_counts.entry(category).or_insert(0) += 1;
        }
    }

    log::debug!(
        "Bucketed {bucketed} of {} observations into {} days ending {}",
        observations.len(),
        buckets.len(),
        reference_date.date_naive(),
    );

    buckets
}

/// Calendar days of the window, oldest first.
///
/// Stops early only if the window would run past the earliest date chrono
/// can represent.
fn window(last: NaiveDate, window_days: u32) -> Vec<NaiveDate> {
    let mut days = Vec::with_capacity(window_days as usize);
    let mut day = Some(last);

    for _ in 0..window_days {
        let Some(current) = day else {
            break;
        };
        days.push(current);
        day = current.pred_opt();
    }

    days.reverse();
    days
}
