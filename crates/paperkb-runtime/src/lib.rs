//! Runtime orchestrator — one knowledge-base update run.
//!
//! A run pages the whole corpus, extracts and aggregates mentions,
//! synthesizes candidate entities and events, and merges them into the
//! persisted store. Any fatal error aborts the run before the store is
//! written.

pub mod orchestrator;
pub mod types;

pub use orchestrator::Orchestrator;
pub use types::*;
