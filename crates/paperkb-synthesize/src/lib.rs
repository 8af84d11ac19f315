//! Entity and event synthesis.
//!
//! Turns a [`CorpusAnalysis`](paperkb_extract::CorpusAnalysis) into candidate
//! records. Which aggregates become records is decided entirely by
//! [`SynthesisThresholds`]; the candidates are then handed to the merge
//! engine, which decides which of them are new.

pub mod concepts;
pub mod entities;
pub mod events;
pub mod thresholds;

pub use concepts::concept_entities;
pub use entities::EntitySynthesizer;
pub use events::EventSynthesizer;
pub use thresholds::{RankLimit, SynthesisThresholds};
