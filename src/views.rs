//! Pure projections over a snapshot from [`ProspectStore::all`]. No I/O
//! happens here; the UI decides when to re-read.
//!
//! [`ProspectStore::all`]: crate::storage::ProspectStore::all

use crate::models::{Prospect, Status};
use std::collections::HashMap;

/// Counts prospects per pipeline stage. Stages with no prospects are absent
/// from the map, not zero.
pub fn status_counts(prospects: &[Prospect]) -> HashMap<Status, usize> {
    let mut counts = HashMap::new();
    for prospect in prospects {
        *counts.entry(prospect.status).or_insert(0) += 1;
    }
    counts
}

/// Applies the two list filters, ANDed, preserving input order.
///
/// An empty `statuses` slice means no status restriction; an empty `search`
/// means no text restriction. The search term matches as a case-insensitive
/// substring of the name or the email.
pub fn filter_prospects<'a>(
    prospects: &'a [Prospect],
    statuses: &[Status],
    search: &str,
) -> Vec<&'a Prospect> {
    let needle = search.to_lowercase();
    prospects
        .iter()
        .filter(|p| statuses.is_empty() || statuses.contains(&p.status))
        .filter(|p| {
            needle.is_empty()
                || p.full_name.to_lowercase().contains(&needle)
                || p.email.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn prospect(id: i64, full_name: &str, email: &str, status: Status) -> Prospect {
        let ts = NaiveDateTime::parse_from_str("2024-03-01 09:30:00.000000", crate::storage::TIMESTAMP_FORMAT)
            .expect("fixture timestamp");
        Prospect {
            id,
            full_name: full_name.to_string(),
            phone_number: "555-0100".to_string(),
            email: email.to_string(),
            status,
            notes: String::new(),
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn status_counts_of_empty_snapshot_is_empty() {
        assert!(status_counts(&[]).is_empty());
    }

    #[test]
    fn status_counts_tallies_present_stages_only() {
        let snapshot = vec![
            prospect(1, "A", "a@x.com", Status::ColdLead),
            prospect(2, "B", "b@x.com", Status::ColdLead),
            prospect(3, "C", "c@x.com", Status::Contacted),
        ];
        let counts = status_counts(&snapshot);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[&Status::ColdLead], 2);
        assert_eq!(counts[&Status::Contacted], 1);
        assert!(!counts.contains_key(&Status::ClosedWon));
    }

    #[test]
    fn filter_by_status_keeps_order() {
        let snapshot = vec![
            prospect(1, "A", "a@x.com", Status::Qualified),
            prospect(2, "B", "b@x.com", Status::ColdLead),
            prospect(3, "C", "c@x.com", Status::Qualified),
        ];
        let hits = filter_prospects(&snapshot, &[Status::Qualified], "");
        let ids: Vec<i64> = hits.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn search_matches_name_or_email_case_insensitively() {
        let snapshot = vec![
            prospect(1, "John Doe", "john@work.com", Status::ColdLead),
            prospect(2, "Ann Smith", "jdoe@x.com", Status::Contacted),
            prospect(3, "Bob Ray", "bob@x.com", Status::Contacted),
        ];
        let hits = filter_prospects(&snapshot, &[], "DOE");
        let ids: Vec<i64> = hits.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn both_filters_compose_with_and() {
        let snapshot = vec![
            prospect(1, "John Doe", "john@work.com", Status::ColdLead),
            prospect(2, "Jane Doe", "jane@work.com", Status::Qualified),
        ];
        let hits = filter_prospects(&snapshot, &[Status::Qualified], "doe");
        let ids: Vec<i64> = hits.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn empty_filters_restrict_nothing() {
        let snapshot = vec![
            prospect(1, "A", "a@x.com", Status::ColdLead),
            prospect(2, "B", "b@x.com", Status::ClosedLost),
        ];
        assert_eq!(filter_prospects(&snapshot, &[], "").len(), 2);
    }
}
