//! Add/Remove Programs correlation: matches a newly installed package's before/after registry
//! snapshot against the manifest that was submitted for it, and accumulates the resulting
//! installer metadata over successive submissions.

pub mod confidence;
pub mod metadata;

use std::collections::HashSet;

use compact_str::CompactString;

use crate::installer::{InstallerType, Scope};
use confidence::ConfidenceAlgorithm;

/// One entry read from the system's Add/Remove Programs registry view.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ArpEntry {
    pub id: CompactString,
    pub display_name: CompactString,
    pub display_version: CompactString,
    pub publisher: CompactString,
    pub scope: Scope,
    pub installer_type: InstallerType,
    pub product_code: Option<CompactString>,
    pub install_location: Option<CompactString>,
    pub uninstall_string: Option<CompactString>,
    pub quiet_uninstall_string: Option<CompactString>,
}

/// A full ARP enumeration, taken at one point in time.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ArpSnapshot {
    pub entries: Vec<ArpEntry>,
}

impl ArpSnapshot {
    /// Entries present in `self` but not in `before`, compared by [`ArpEntry::id`].
    #[must_use]
    pub fn changes_since<'a>(&'a self, before: &ArpSnapshot) -> Vec<&'a ArpEntry> {
        let previous_ids: HashSet<&str> =
            before.entries.iter().map(|entry| entry.id.as_str()).collect();
        self.entries.iter().filter(|entry| !previous_ids.contains(entry.id.as_str())).collect()
    }
}

/// The outcome of correlating a manifest's declared identity against a set of candidate ARP
/// entries.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CorrelationResult<'a> {
    /// Exactly one candidate both changed and matched: this is the correlated record.
    Correlated(&'a ArpEntry),
    /// No candidate both changed and matched.
    LowConfidence,
    /// More than one candidate both changed and matched; the first in snapshot order is selected
    /// for emission, but every candidate is preserved for inspection.
    MultipleCandidates(Vec<&'a ArpEntry>),
}

/// Correlates a submitted manifest's `(app_name, app_publisher)` identity against the entries
/// that appeared between `before` and `after`, using `algorithm` to decide whether a changed
/// entry's reported name and publisher plausibly belong to the same product.
#[must_use]
pub fn correlate<'a>(
    app_name: &str,
    app_publisher: &str,
    before: &ArpSnapshot,
    after: &'a ArpSnapshot,
    algorithm: &dyn ConfidenceAlgorithm,
) -> CorrelationResult<'a> {
    let changed = after.changes_since(before);
    let overlap: Vec<&ArpEntry> = changed
        .into_iter()
        .filter(|entry| algorithm.matches(app_name, app_publisher, &entry.display_name, &entry.publisher))
        .collect();

    match overlap.len() {
        0 => CorrelationResult::LowConfidence,
        1 => CorrelationResult::Correlated(overlap[0]),
        _ => CorrelationResult::MultipleCandidates(overlap),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confidence::EditDistanceMatchConfidenceAlgorithm;

    fn entry(id: &str, name: &str, publisher: &str) -> ArpEntry {
        ArpEntry {
            id: id.into(),
            display_name: name.into(),
            display_version: "1.0".into(),
            publisher: publisher.into(),
            scope: Scope::User,
            installer_type: InstallerType::Exe,
            product_code: None,
            install_location: None,
            uninstall_string: None,
            quiet_uninstall_string: None,
        }
    }

    #[test]
    fn single_matching_change_correlates() {
        let before = ArpSnapshot::default();
        let after = ArpSnapshot { entries: vec![entry("{guid}", "My App", "My Publisher")] };
        let algorithm = EditDistanceMatchConfidenceAlgorithm::default();

        let result = correlate("My App", "My Publisher", &before, &after, &algorithm);
        assert_eq!(result, CorrelationResult::Correlated(&after.entries[0]));
    }

    #[test]
    fn no_changes_is_low_confidence() {
        let snapshot = ArpSnapshot { entries: vec![entry("{guid}", "My App", "My Publisher")] };
        let algorithm = EditDistanceMatchConfidenceAlgorithm::default();

        let result = correlate("My App", "My Publisher", &snapshot, &snapshot, &algorithm);
        assert_eq!(result, CorrelationResult::LowConfidence);
    }

    #[test]
    fn two_plausible_changes_is_multiple_candidates() {
        let before = ArpSnapshot::default();
        let after = ArpSnapshot {
            entries: vec![
                entry("{guid-1}", "My App", "My Publisher"),
                entry("{guid-2}", "My App", "My Publisher"),
            ],
        };
        let algorithm = EditDistanceMatchConfidenceAlgorithm::default();

        let result = correlate("My App", "My Publisher", &before, &after, &algorithm);
        assert!(matches!(result, CorrelationResult::MultipleCandidates(candidates) if candidates.len() == 2));
    }
}
