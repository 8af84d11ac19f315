//! Configuration and data directory management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_SOURCE_URL: &str = "http://localhost:6333";
pub const DEFAULT_COLLECTION: &str = "papers";
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Paths to the persisted knowledge-base files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Root data directory (e.g., `data/`).
    pub root: PathBuf,
    /// Entity array (`data/entities.json`).
    pub entities_file: PathBuf,
    /// Event array (`data/events.json`).
    pub events_file: PathBuf,
}

impl DataPaths {
    /// Resolve data paths under a root directory. Nothing is created here;
    /// the store creates the directory on its first write.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            entities_file: root.join("entities.json"),
            events_file: root.join("events.json"),
            root,
        }
    }
}

/// Where the paper corpus lives and how it is paged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Base URL of the point store (e.g., `http://localhost:6333`).
    pub url: String,
    /// Collection holding the paper points.
    pub collection: String,
    /// Maximum points requested per scroll page.
    pub page_size: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SOURCE_URL.into(),
            collection: DEFAULT_COLLECTION.into(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Top-level PaperKB configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperKbConfig {
    /// Persisted store paths.
    pub data_paths: DataPaths,
    /// Corpus source settings.
    pub source: SourceConfig,
    /// Optional JSON lexicon replacing the built-in dictionaries and topic table.
    pub lexicon_file: Option<PathBuf>,
}

impl PaperKbConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env(data_dir: impl AsRef<Path>) -> Self {
        Self::from_lookup(data_dir, |key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    pub fn from_lookup(
        data_dir: impl AsRef<Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let defaults = SourceConfig::default();

        let url = lookup("PAPERKB_SOURCE_URL")
            .map(|u| u.trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or(defaults.url);
        let collection = lookup("PAPERKB_COLLECTION")
            .filter(|c| !c.is_empty())
            .unwrap_or(defaults.collection);
        let page_size = lookup("PAPERKB_PAGE_SIZE")
            .and_then(|p| p.parse().ok())
            .filter(|&p: &usize| p > 0)
            .unwrap_or(defaults.page_size);
        let lexicon_file = lookup("PAPERKB_LEXICON")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Self {
            data_paths: DataPaths::new(data_dir),
            source: SourceConfig {
                url,
                collection,
                page_size,
            },
            lexicon_file,
        }
    }
}
