//! Orchestrator: wires the corpus reader, extractor, synthesizers, store
//! and merge engine into a single run.

use std::time::Instant;

use paperkb_consolidate::MergeEngine;
use paperkb_core::{PaperKbConfig, Result, TIMESTAMP_FORMAT};
use paperkb_corpus::{CorpusReader, PaperSource, QdrantSource};
use paperkb_extract::{Lexicon, PaperExtractor};
use paperkb_store::JsonStore;
use paperkb_synthesize::{EntitySynthesizer, EventSynthesizer, SynthesisThresholds};
use tracing::info;

use crate::types::*;

/// Everything one run needs, bound to a single corpus source and store.
pub struct Orchestrator<S> {
    reader: CorpusReader<S>,
    extractor: PaperExtractor,
    entities: EntitySynthesizer,
    events: EventSynthesizer,
    store: JsonStore,
}

impl Orchestrator<QdrantSource> {
    /// Orchestrator over the configured point store and data directory.
    pub fn from_config(config: &PaperKbConfig, lexicon: &Lexicon) -> Result<Self> {
        info!(
            "Corpus source: {}/collections/{} (page size {})",
            config.source.url, config.source.collection, config.source.page_size
        );
        Self::new(
            QdrantSource::new(&config.source),
            config.source.page_size,
            lexicon,
            SynthesisThresholds::default(),
            JsonStore::new(&config.data_paths),
        )
    }
}

impl<S: PaperSource> Orchestrator<S> {
    pub fn new(
        source: S,
        page_size: usize,
        lexicon: &Lexicon,
        thresholds: SynthesisThresholds,
        store: JsonStore,
    ) -> Result<Self> {
        Ok(Self {
            reader: CorpusReader::new(source, page_size),
            extractor: PaperExtractor::new(lexicon)?,
            entities: EntitySynthesizer::new(thresholds.clone()),
            events: EventSynthesizer::new(thresholds),
            store,
        })
    }

    pub fn store(&self) -> &JsonStore {
        &self.store
    }

    /// Fetch → extract → synthesize → load → merge → persist.
    ///
    /// The existing store is loaded only after the corpus has been fetched
    /// in full; either failing aborts the run with nothing written.
    pub async fn run(&self, options: RunOptions) -> Result<RunReport> {
        let start = Instant::now();
        let started_at = chrono::Utc::now().format(TIMESTAMP_FORMAT).to_string();
        info!("Starting knowledge-base update (dry_run={})", options.dry_run);

        let papers = self.reader.fetch_all().await?;

        let analysis = self.extractor.aggregate(&papers);
        let entities = self.entities.synthesize(&analysis.counts);
        let events = self.events.synthesize(&analysis);
        let entity_candidates = entities.len();
        let event_candidates = events.len();

        let existing = self.store.load()?;
        let (merged, merge) = MergeEngine::merge(existing, entities, events);

        let persisted = if options.dry_run {
            info!("Dry run: store not written");
            false
        } else {
            self.store.save(&merged)?;
            true
        };

        let report = RunReport {
            started_at,
            papers_fetched: papers.len(),
            entity_candidates,
            event_candidates,
            merge,
            total_entities: merged.entities.len(),
            total_events: merged.events.len(),
            persisted,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            "Update complete: {} papers, +{} entities, +{} events, duration={}ms",
            report.papers_fetched,
            report.merge.entities_added,
            report.merge.events_added,
            report.duration_ms
        );

        Ok(report)
    }
}
