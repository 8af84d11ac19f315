//! Event synthesis for publications, topic trends, yearly and category milestones.

use paperkb_core::{category, utc_timestamp, Event, EventId};
use paperkb_extract::{AggregateCounts, CorpusAnalysis, PaperFacts};
use tracing::info;

use crate::thresholds::SynthesisThresholds;

/// Authors named in a publication description before eliding the rest.
const DESCRIBED_AUTHORS: usize = 3;

pub struct EventSynthesizer {
    thresholds: SynthesisThresholds,
}

impl EventSynthesizer {
    pub fn new(thresholds: SynthesisThresholds) -> Self {
        Self { thresholds }
    }

    /// Candidate events in emission order: publications (corpus order),
    /// then trends, yearly milestones and category milestones (count
    /// descending).
    pub fn synthesize(&self, analysis: &CorpusAnalysis) -> Vec<Event> {
        let publications: Vec<Event> = analysis
            .papers
            .iter()
            .filter_map(|p| self.publication(p))
            .collect();
        let trends = self.trends(&analysis.counts);
        let yearly = self.yearly_milestones(&analysis.counts);
        let by_category = self.category_milestones(&analysis.counts);

        info!(
            "Synthesized events: {} publications, {} trends, {} yearly milestones, {} category milestones",
            publications.len(),
            trends.len(),
            yearly.len(),
            by_category.len()
        );

        let mut events = publications;
        events.extend(trends);
        events.extend(yearly);
        events.extend(by_category);
        events
    }

    /// One event per paper with a title and a resolvable year.
    pub fn publication(&self, paper: &PaperFacts) -> Option<Event> {
        if paper.title.is_empty() {
            return None;
        }
        let year = paper.year?;
        let timestamp = utc_timestamp(year, 1, 1)?;

        let mut description = format!("Paper published: '{}'", paper.title);
        if !paper.authors.is_empty() {
            let named: Vec<&str> = paper
                .authors
                .iter()
                .take(DESCRIBED_AUTHORS)
                .map(String::as_str)
                .collect();
            description.push_str(" by ");
            description.push_str(&named.join(", "));
            if paper.authors.len() > DESCRIBED_AUTHORS {
                description.push_str("...");
            }
        }

        let category = paper
            .topics
            .first()
            .map(String::as_str)
            .unwrap_or(category::RESEARCH);

        Some(Event::new(
            EventId::publication(year, &paper.paper_id),
            timestamp,
            description,
            category,
        ))
    }

    pub fn trends(&self, counts: &AggregateCounts) -> Vec<Event> {
        let year = self.thresholds.trend_year;
        let Some(timestamp) = utc_timestamp(year, 6, 1) else {
            return Vec::new();
        };
        counts
            .topics
            .most_common(counts.topics.len())
            .into_iter()
            .filter(|&(_, n)| n >= self.thresholds.trend_min)
            .map(|(topic, n)| {
                Event::new(
                    EventId::trend(year, topic),
                    timestamp.clone(),
                    format!(
                        "Research trend: {} papers in {} showing significant academic focus",
                        n,
                        topic.replace('-', " ")
                    ),
                    category::RESEARCH_TREND,
                )
            })
            .collect()
    }

    pub fn yearly_milestones(&self, counts: &AggregateCounts) -> Vec<Event> {
        counts
            .years
            .most_common(counts.years.len())
            .into_iter()
            .filter(|&(_, n)| n >= self.thresholds.yearly_milestone_min)
            .filter_map(|(&year, n)| {
                let timestamp = utc_timestamp(year, 6, 1)?;
                Some(Event::new(
                    EventId::yearly_milestone(year),
                    timestamp,
                    format!(
                        "Research milestone: {} significant AI/ML papers published in {}",
                        n, year
                    ),
                    category::YEARLY_MILESTONE,
                ))
            })
            .collect()
    }

    pub fn category_milestones(&self, counts: &AggregateCounts) -> Vec<Event> {
        let year = self.thresholds.trend_year;
        let Some(timestamp) = utc_timestamp(year, 1, 1) else {
            return Vec::new();
        };
        counts
            .categories
            .most_common(counts.categories.len())
            .into_iter()
            .filter(|&(_, n)| n >= self.thresholds.category_milestone_min)
            .map(|(cat, n)| {
                Event::new(
                    EventId::category_milestone(year, cat),
                    timestamp.clone(),
                    format!(
                        "Research milestone: {} papers in {} category demonstrating significant activity in this field",
                        n, cat
                    ),
                    category::RESEARCH_MILESTONE,
                )
            })
            .collect()
    }
}

impl Default for EventSynthesizer {
    fn default() -> Self {
        Self::new(SynthesisThresholds::default())
    }
}
