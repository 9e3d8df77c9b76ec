//! Submission ledger parsing.
//!
//! The ledger stores one JSON array of submissions per contributor. How
//! those entries are keyed and stored belongs to the ledger itself; this
//! module only sees ordered `(contributor_id, raw_json)` pairs.

use std::collections::HashMap;

use ecowatch_observation_models::{Submission, SubmissionStatus};

use crate::AnalyticsError;

/// One contributor's parsed submissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    /// Contributor identity the ledger keyed this entry by.
    pub contributor_id: String,
    /// Submissions in stored order.
    pub submissions: Vec<Submission>,
}

impl LedgerEntry {
    /// Number of submissions with a validated status.
    #[must_use]
    pub fn validated_count(&self) -> u64 {
        self.submissions
            .iter()
            .filter(|s| s.status == SubmissionStatus::Validated)
            .count() as u64
    }

    /// First non-empty contributor name in the submissions, falling back to
    /// the contributor id.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.submissions
            .iter()
            .map(|s| s.contributor_name.trim())
            .find(|name| !name.is_empty())
            .unwrap_or(&self.contributor_id)
    }
}

/// Parses one contributor's stored submissions.
///
/// # Errors
///
/// Returns [`AnalyticsError::MalformedLedgerEntry`] if `raw` is not a JSON
/// array of submissions with recognized statuses.
pub fn parse_entry(contributor_id: &str, raw: &str) -> Result<LedgerEntry, AnalyticsError> {
    let submissions: Vec<Submission> =
        serde_json::from_str(raw).map_err(|source| AnalyticsError::MalformedLedgerEntry {
            contributor_id: contributor_id.to_string(),
            source,
        })?;

    Ok(LedgerEntry {
        contributor_id: contributor_id.to_string(),
        submissions,
    })
}

/// Parses every ledger entry, keeping input order.
///
/// Entries sharing a contributor id are merged into the first one's
/// position, submissions appended in input order. Malformed entries are
/// logged and skipped so one bad contributor never hides the rest.
pub fn parse_ledger<'a, I>(entries: I) -> Vec<LedgerEntry>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut parsed: Vec<LedgerEntry> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for (contributor_id, raw) in entries {
        let entry = match parse_entry(contributor_id, raw) {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping ledger entry: {e}");
                continue;
            }
        };

        if let Some(existing) = positions
            .get(&entry.contributor_id)
            .and_then(|&idx| parsed.get_mut(idx))
        {
            log::debug!("Merging repeated ledger entry for '{contributor_id}'");
            existing.submissions.extend(entry.submissions);
        } else {
            positions.insert(entry.contributor_id.clone(), parsed.len());
            parsed.push(entry);
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_submission_array() {
        let entry = parse_entry(
            "u1",
            r#"[
                {"contributorId":"u1","contributorName":"Ada","status":"validated"},
                {"contributorId":"u1","contributorName":"Ada","status":"pending"},
                {"contributorId":"u1","contributorName":"Ada","status":"validated"}
            ]"#,
        )
        .unwrap();

        assert_eq!(entry.submissions.len(), 3);
        assert_eq!(entry.validated_count(), 2);
        assert_eq!(entry.display_name(), "Ada");
    }

    #[test]
    fn display_name_falls_back_to_id() {
        let entry = parse_entry("u9", r#"[{"status":"flagged"}]"#).unwrap();
        assert_eq!(entry.display_name(), "u9");
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_entry("u2", "{not json").unwrap_err();
        assert!(err.to_string().contains("u2"));

        assert!(parse_entry("u3", r#"[{"status":"archived"}]"#).is_err());
        assert!(parse_entry("u4", r#"{"status":"validated"}"#).is_err());
    }

    #[test]
    fn parse_ledger_skips_malformed_and_keeps_order() {
        let raw = [
            ("zed", r#"[{"contributorName":"Zed","status":"validated"}]"#),
            ("broken", "]["),
            ("amy", r#"[{"contributorName":"Amy","status":"pending"}]"#),
        ];

        let entries = parse_ledger(raw);
        let ids: Vec<&str> = entries.iter().map(|e| e.contributor_id.as_str()).collect();
        assert_eq!(ids, vec!["zed", "amy"]);
    }

    #[test]
    fn parse_ledger_merges_repeated_contributor() {
        let raw = [
            ("u1", r#"[{"contributorName":"Ada","status":"validated"}]"#),
            ("u2", r#"[{"status":"pending"}]"#),
            ("u1", "not json"),
            ("u1", r#"[{"status":"validated"},{"status":"flagged"}]"#),
        ];

        let entries = parse_ledger(raw);
        let ids: Vec<&str> = entries.iter().map(|e| e.contributor_id.as_str()).collect();
        assert_eq!(ids, vec!["u1", "u2"]);
        assert_eq!(entries[0].submissions.len(), 3);
        assert_eq!(entries[0].validated_count(), 2);
        assert_eq!(entries[0].display_name(), "Ada");
    }
}
