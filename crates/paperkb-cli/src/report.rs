//! Human-readable reports printed to stdout.

use std::path::Path;

use paperkb_core::DataPaths;
use paperkb_runtime::RunReport;
use paperkb_store::JsonStore;

/// Outcome of `paperkb validate`.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub entities: usize,
    pub events: usize,
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Load the store under `data_dir` without modifying it.
pub fn validate(data_dir: &Path) -> ValidationReport {
    let mut report = ValidationReport::default();
    let paths = DataPaths {
        root: data_dir.to_path_buf(),
        entities_file: data_dir.join("entities.json"),
        events_file: data_dir.join("events.json"),
    };
    match JsonStore::new(&paths).load() {
        Ok(store) => {
            report.entities = store.entities.len();
            report.events = store.events.len();
        }
        Err(e) => report.errors.push(e.to_string()),
    }
    report
}

pub fn print_validation(report: &ValidationReport) {
    println!("=== PaperKB Store Validation ===");
    println!();
    println!("Entities:           {}", report.entities);
    println!("Events:             {}", report.events);

    if !report.errors.is_empty() {
        println!();
        println!("Errors:");
        for e in &report.errors {
            println!("  - {}", e);
        }
    }

    println!();
    println!(
        "Status: {}",
        if report.is_valid() { "VALID" } else { "CORRUPT" }
    );
}

pub fn print_run(report: &RunReport) {
    println!("=== PaperKB Update Report ===");
    println!();
    println!("Started:            {}", report.started_at);
    println!("Papers fetched:     {}", report.papers_fetched);
    println!(
        "Entity candidates:  {} ({} new, {} existing, {} rejected)",
        report.entity_candidates,
        report.merge.entities_added,
        report.merge.entities_skipped,
        report.merge.entities_rejected
    );
    println!(
        "Event candidates:   {} ({} new, {} existing)",
        report.event_candidates, report.merge.events_added, report.merge.events_skipped
    );
    println!("Total entities:     {}", report.total_entities);
    println!("Total events:       {}", report.total_events);
    println!("Duration:           {}ms", report.duration_ms);
    println!();
    if report.persisted {
        println!("Status: STORE UPDATED");
    } else {
        println!("Status: DRY RUN (nothing written)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let report = validate(dir.path());
        assert!(report.is_valid());
        assert_eq!(report.entities, 0);
    }

    #[test]
    fn test_validate_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("events.json"), "[1, 2").unwrap();
        let report = validate(dir.path());
        assert!(!report.is_valid());
        assert!(report.errors[0].contains("events.json"));
    }
}
