//! Entity synthesis: authors, models and institutions that cross their
//! significance threshold, followed by the concept seeds.

use paperkb_core::{Entity, EntityName};
use paperkb_extract::{AggregateCounts, FrequencyTable};
use tracing::info;

use crate::concepts::concept_entities;
use crate::thresholds::{RankLimit, SynthesisThresholds};

const AUTHOR_TAGS: &[&str] = &["researcher", "ai-researcher", "prolific-author"];
const MODEL_TAGS: &[&str] = &["ai-model", "architecture", "machine-learning"];
const INSTITUTION_TAGS: &[&str] = &["institution", "research-lab", "university"];

/// Category tags copied onto a model entity from its first paper.
const MAX_MODEL_CATEGORY_TAGS: usize = 3;

pub struct EntitySynthesizer {
    thresholds: SynthesisThresholds,
}

impl EntitySynthesizer {
    pub fn new(thresholds: SynthesisThresholds) -> Self {
        Self { thresholds }
    }

    /// Candidate entities in emission order: authors, models, institutions,
    /// concepts. Candidates may repeat a name across categories; the merge
    /// engine keeps the first.
    pub fn synthesize(&self, counts: &AggregateCounts) -> Vec<Entity> {
        let authors = self.authors(counts);
        let models = self.models(counts);
        let institutions = self.institutions(counts);
        let concepts = concept_entities();

        info!(
            "Synthesized entities: {} authors, {} models, {} institutions, {} concepts",
            authors.len(),
            models.len(),
            institutions.len(),
            concepts.len()
        );

        let mut entities = authors;
        entities.extend(models);
        entities.extend(institutions);
        entities.extend(concepts);
        entities
    }

    pub fn authors(&self, counts: &AggregateCounts) -> Vec<Entity> {
        significant(&counts.authors, self.thresholds.authors)
            .filter_map(|(name, count)| {
                let summary = format!(
                    "Prolific researcher with {} papers in machine learning and AI. Active in cutting-edge research.",
                    count
                );
                EntityName::new(name.as_str())
                    .map(|n| Entity::new(n, summary, AUTHOR_TAGS.iter().copied()))
            })
            .collect()
    }

    pub fn models(&self, counts: &AggregateCounts) -> Vec<Entity> {
        significant(&counts.models, self.thresholds.models)
            .filter_map(|(name, count)| {
                let summary = format!(
                    "Important AI model/architecture referenced in {} research papers. Key component in modern machine learning.",
                    count
                );
                let category_tags = counts
                    .model_categories
                    .get(name)
                    .into_iter()
                    .flatten()
                    .take(MAX_MODEL_CATEGORY_TAGS)
                    .map(|c| c.strip_prefix("cs.").unwrap_or(c.as_str()).to_string());
                let tags: Vec<String> = MODEL_TAGS
                    .iter()
                    .map(|t| t.to_string())
                    .chain(category_tags)
                    .collect();
                EntityName::new(name.as_str()).map(|n| Entity::new(n, summary, tags))
            })
            .collect()
    }

    pub fn institutions(&self, counts: &AggregateCounts) -> Vec<Entity> {
        significant(&counts.institutions, self.thresholds.institutions)
            .filter_map(|(name, count)| {
                let summary = format!(
                    "Leading research institution with {} papers in the collection. Major contributor to AI/ML advancement.",
                    count
                );
                EntityName::new(name.as_str())
                    .map(|n| Entity::new(n, summary, INSTITUTION_TAGS.iter().copied()))
            })
            .collect()
    }
}

impl Default for EntitySynthesizer {
    fn default() -> Self {
        Self::new(SynthesisThresholds::default())
    }
}

/// Top `cap` by count, then drop anything under `min_count`. The cap is
/// applied first, so ties at the cap boundary resolve by first-seen order.
fn significant(
    table: &FrequencyTable<String>,
    limit: RankLimit,
) -> impl Iterator<Item = (&String, usize)> {
    table
        .most_common(limit.cap)
        .into_iter()
        .filter(move |&(_, count)| count >= limit.min_count)
}
