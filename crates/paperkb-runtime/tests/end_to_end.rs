//! Full pipeline runs over an in-memory corpus and a temporary data directory.

use paperkb_core::{DataPaths, PaperRecord, PointId};
use paperkb_corpus::MemorySource;
use paperkb_extract::Lexicon;
use paperkb_runtime::{Orchestrator, RunOptions};
use paperkb_store::JsonStore;
use paperkb_synthesize::SynthesisThresholds;

fn paper(id: &str, title: &str, abs: &str, authors: &[&str], url: &str) -> PaperRecord {
    PaperRecord {
        id: PointId::Uuid(id.to_string()),
        title: title.to_string(),
        r#abstract: abs.to_string(),
        authors: authors.iter().map(|s| s.to_string()).collect(),
        categories: vec!["cs.CL".to_string(), "cs.LG".to_string()],
        url: url.to_string(),
    }
}

fn corpus() -> Vec<PaperRecord> {
    vec![
        paper(
            "0b7c5a51-1111-4c1e-9d55-000000000001",
            "Attention Revisited",
            "We revisit the Transformer for machine translation and vision.",
            &["Ada Lovelace", "Alan Turing"],
            "https://arxiv.org/abs/2401.00001",
        ),
        paper(
            "0b7c5a52-2222-4c1e-9d55-000000000002",
            "Sparse Attention at Scale",
            "A sparse Transformer variant trained at Stanford.",
            &["Ada Lovelace"],
            "https://arxiv.org/abs/2502.19614",
        ),
        paper(
            "0b7c5a53-3333-4c1e-9d55-000000000003",
            "Robot Navigation",
            "Embodied agents with vision navigating warehouses.",
            &["Grace Hopper"],
            "https://example.org/robots",
        ),
    ]
}

fn orchestrator(paths: &DataPaths, papers: Vec<PaperRecord>) -> Orchestrator<MemorySource> {
    Orchestrator::new(
        MemorySource::new(papers),
        2,
        &Lexicon::builtin(),
        SynthesisThresholds::default(),
        JsonStore::new(paths),
    )
    .unwrap()
}

#[tokio::test]
async fn test_first_run_builds_store() {
    let dir = tempfile::tempdir().unwrap();
    let paths = DataPaths::new(dir.path());

    let report = orchestrator(&paths, corpus())
        .run(RunOptions::default())
        .await
        .unwrap();
    assert_eq!(report.papers_fetched, 3);

    let store = JsonStore::new(&paths).load().unwrap();
    let names: Vec<&str> = store.entities.iter().map(|e| e.name.as_str()).collect();

    // Two mentions sit below the model threshold.
    assert!(!names.contains(&"Transformer"));
    // The concept seed is always present.
    assert!(names.contains(&"Transformer Architecture"));
    assert!(names.contains(&"Ada Lovelace"));
    assert!(!names.contains(&"Alan Turing"));
    assert!(!names.contains(&"Grace Hopper"));

    let ids: Vec<&str> = store.events.iter().map(|e| e.id.as_str()).collect();
    // The third paper has no arXiv year, so it gets no publication event,
    // and two vision papers are far below the trend threshold.
    assert_eq!(ids, vec!["2025-paper-0b7c5a52", "2024-paper-0b7c5a51"]);

    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[tokio::test]
async fn test_second_run_is_a_noop() {
    let dir = tempfile::tempdir().unwrap();
    let paths = DataPaths::new(dir.path());

    orchestrator(&paths, corpus())
        .run(RunOptions::default())
        .await
        .unwrap();
    let first_entities = std::fs::read_to_string(&paths.entities_file).unwrap();
    let first_events = std::fs::read_to_string(&paths.events_file).unwrap();

    let report = orchestrator(&paths, corpus())
        .run(RunOptions::default())
        .await
        .unwrap();
    assert_eq!(report.merge.entities_added, 0);
    assert_eq!(report.merge.events_added, 0);
    assert_eq!(std::fs::read_to_string(&paths.entities_file).unwrap(), first_entities);
    assert_eq!(std::fs::read_to_string(&paths.events_file).unwrap(), first_events);
}

#[tokio::test]
async fn test_store_grows_with_new_papers() {
    let dir = tempfile::tempdir().unwrap();
    let paths = DataPaths::new(dir.path());

    let mut papers = corpus();
    let first = orchestrator(&paths, papers.clone())
        .run(RunOptions::default())
        .await
        .unwrap();

    papers.push(paper(
        "9f00aa00-4444-4c1e-9d55-000000000004",
        "Robot Grasping",
        "Manipulation with learned policies.",
        &["Grace Hopper"],
        "https://arxiv.org/abs/2312.04444",
    ));
    let second = orchestrator(&paths, papers)
        .run(RunOptions::default())
        .await
        .unwrap();

    assert!(second.total_entities > first.total_entities);
    assert!(second.total_events > first.total_events);

    let store = JsonStore::new(&paths).load().unwrap();
    assert!(store.entities.iter().any(|e| e.name.as_str() == "Grace Hopper"));
    assert!(store.events.iter().any(|e| e.id.as_str() == "2023-paper-9f00aa00"));
    let stamps: Vec<&str> = store.events.iter().map(|e| e.timestamp.as_str()).collect();
    assert!(stamps.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn test_dry_run_leaves_missing_data_dir_absent() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("kb/data");
    let paths = DataPaths::new(&root);

    let report = orchestrator(&paths, corpus())
        .run(RunOptions { dry_run: true })
        .await
        .unwrap();
    assert!(report.merge.entities_added > 0);
    assert!(!dir.path().join("kb").exists());

    orchestrator(&paths, corpus())
        .run(RunOptions::default())
        .await
        .unwrap();
    assert!(paths.entities_file.is_file());
    assert!(paths.events_file.is_file());
}
