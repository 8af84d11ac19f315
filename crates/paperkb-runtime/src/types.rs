//! Runtime types.

use paperkb_consolidate::MergeReport;
use serde::Serialize;

/// Per-run switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Run every stage but skip writing the store.
    pub dry_run: bool,
}

/// Summary of one run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    #[serde(rename = "startedAt")]
    pub started_at: String,
    #[serde(rename = "papersFetched")]
    pub papers_fetched: usize,
    #[serde(rename = "entityCandidates")]
    pub entity_candidates: usize,
    #[serde(rename = "eventCandidates")]
    pub event_candidates: usize,
    pub merge: MergeReport,
    #[serde(rename = "totalEntities")]
    pub total_entities: usize,
    #[serde(rename = "totalEvents")]
    pub total_events: usize,
    /// False for dry runs.
    pub persisted: bool,
    #[serde(rename = "durationMs")]
    pub duration_ms: u64,
}
