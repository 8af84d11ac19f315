//! Per-paper extraction and the corpus pass that aggregates it.

use paperkb_core::{PaperRecord, Result};
use tracing::{debug, info};

use crate::aggregate::{AggregateCounts, CorpusAnalysis, PaperFacts};
use crate::lexicon::Lexicon;
use crate::recognize::TextRecognizer;
use crate::topics::TopicClassifier;
use crate::year::extract_year;

/// Recognizer and classifier bound to one lexicon.
pub struct PaperExtractor {
    recognizer: TextRecognizer,
    classifier: TopicClassifier,
}

impl PaperExtractor {
    pub fn new(lexicon: &Lexicon) -> Result<Self> {
        let recognizer = TextRecognizer::new(lexicon)?;
        debug!("Recognition strategies: {:?}", recognizer.strategy_names());
        Ok(Self {
            recognizer,
            classifier: TopicClassifier::new(lexicon),
        })
    }

    /// Everything one paper contributes. Pure: safe to run on any thread.
    pub fn analyze(&self, paper: &PaperRecord) -> PaperFacts {
        let text = paper.full_text();

        let mut authors: Vec<String> = Vec::with_capacity(paper.authors.len());
        for author in &paper.authors {
            let author = author.trim();
            if !author.is_empty() && !authors.iter().any(|a| a == author) {
                authors.push(author.to_string());
            }
        }

        PaperFacts {
            paper_id: paper.id.to_string(),
            title: paper.title.trim().to_string(),
            models: self.recognizer.recognize_models(&text),
            institutions: self.recognizer.recognize_institutions(&text, &paper.authors),
            topics: self.classifier.classify(&paper.title, &paper.r#abstract),
            year: extract_year(&paper.url),
            categories: paper.categories.clone(),
            authors,
        }
    }

    /// Analyze every paper and fold the results into one set of counts.
    pub fn aggregate(&self, papers: &[PaperRecord]) -> CorpusAnalysis {
        let mut counts = AggregateCounts::new();
        let mut facts = Vec::with_capacity(papers.len());

        for paper in papers {
            let f = self.analyze(paper);
            debug!(
                "Paper {}: {} models, {} institutions, topics={:?}",
                f.paper_id,
                f.models.len(),
                f.institutions.len(),
                f.topics
            );
            counts.record(&f);
            facts.push(f);
        }

        info!(
            "Aggregated {} papers: {} authors, {} models, {} institutions, {} topics, {} years",
            counts.papers,
            counts.authors.len(),
            counts.models.len(),
            counts.institutions.len(),
            counts.topics.len(),
            counts.years.len()
        );

        CorpusAnalysis {
            papers: facts,
            counts,
        }
    }
}
