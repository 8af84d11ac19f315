//! Merge types.

use serde::Serialize;

/// What one merge added and what it left out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    #[serde(rename = "entitiesAdded")]
    pub entities_added: usize,
    /// Candidates whose name was already present, including repeats within
    /// the candidate list itself.
    #[serde(rename = "entitiesSkipped")]
    pub entities_skipped: usize,
    /// Candidates with an empty or whitespace-only name.
    #[serde(rename = "entitiesRejected")]
    pub entities_rejected: usize,
    #[serde(rename = "eventsAdded")]
    pub events_added: usize,
    #[serde(rename = "eventsSkipped")]
    pub events_skipped: usize,
}

impl MergeReport {
    pub fn added(&self) -> usize {
        self.entities_added + self.events_added
    }

    pub fn is_noop(&self) -> bool {
        self.added() == 0
    }
}
