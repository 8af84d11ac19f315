//! PaperKB Extract — heuristic recognition, topic classification, aggregation.
//!
//! Turns paper records into per-paper facts (models, institutions, topics,
//! year) and corpus-wide frequency tables using dictionary lookups and
//! regex patterns. No statistical model is involved.

pub mod aggregate;
pub mod extractor;
pub mod lexicon;
pub mod recognize;
pub mod topics;
pub mod year;

pub use aggregate::{AggregateCounts, CorpusAnalysis, FrequencyTable, PaperFacts};
pub use extractor::PaperExtractor;
pub use lexicon::{Lexicon, TopicRule};
pub use recognize::{CandidateMatcher, TextRecognizer};
pub use topics::TopicClassifier;
pub use year::extract_year;
