//! PaperKB Store — the entity and event arrays persisted as JSON files.

pub mod json;

pub use json::JsonStore;
