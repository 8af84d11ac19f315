//! Merge/dedup engine — folds synthesized candidates into an existing store.
//!
//! Existing records are never rewritten or removed. A candidate is appended
//! only when its identity key is new, so repeated runs over the same corpus
//! converge on the same store.

pub mod merge;
pub mod types;

pub use merge::MergeEngine;
pub use types::*;
