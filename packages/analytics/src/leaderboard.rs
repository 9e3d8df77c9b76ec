//! Contributor leaderboard.
//!
//! Stats are recomputed from the ledger on every call. Ranking is by impact
//! score, highest first; contributors with equal scores keep the order they
//! had in the ledger.

use ecowatch_analytics_models::ContributorStat;

use crate::ledger::{LedgerEntry, parse_ledger};

/// Default number of leaderboard rows.
pub const DEFAULT_TOP_N: usize = 10;

/// Builds the stat row for one ledger entry. Returns `None` for a
/// contributor with no submissions.
#[must_use]
pub fn contributor_stat(entry: &LedgerEntry) -> Option<ContributorStat> {
    if entry.submissions.is_empty() {
        return None;
    }

    Some(ContributorStat::new(
        entry.contributor_id.clone(),
        entry.display_name().to_string(),
        entry.submissions.len() as u64,
        entry.validated_count(),
    ))
}

/// Ranks contributors by impact score and keeps the top `top_n`.
///
/// Expects one entry per contributor, as produced by
/// [`parse_ledger`].
#[must_use]
pub fn rank(entries: &[LedgerEntry], top_n: usize) -> Vec<ContributorStat> {
    let mut stats: Vec<ContributorStat> = entries.iter().filter_map(contributor_stat).collect();

    // Stable sort: ties stay in ledger order.
    stats.sort_by(|a, b| b.impact_score.cmp(&a.impact_score));
    stats.truncate(top_n);
    stats
}

/// Parses raw ledger entries and ranks them. Entries that fail to parse are
/// skipped.
pub fn rank_raw<'a, I>(entries: I, top_n: usize) -> Vec<ContributorStat>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    rank(&parse_ledger(entries), top_n)
}
