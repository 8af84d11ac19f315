//! Corpus reader: pages every paper out of the point store.
//!
//! The reader is generic over [`PaperSource`]; [`QdrantSource`] speaks the
//! scroll protocol over HTTP and [`MemorySource`] serves a fixed list for
//! tests and offline runs.

pub mod reader;
pub mod source;
pub mod types;

pub use reader::CorpusReader;
pub use source::{MemorySource, PaperSource, QdrantSource};
pub use types::*;
