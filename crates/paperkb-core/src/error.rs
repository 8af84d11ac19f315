//! Error types for PaperKB.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The corpus source could not be reached or answered with something
    /// other than a scroll page. Fatal: the run aborts before any write.
    #[error("Corpus source unavailable: {0}")]
    SourceUnavailable(String),

    /// The persisted store exists but is not a valid entity/event array.
    #[error("Store corrupt at {}: {reason}", path.display())]
    StoreCorrupt { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn store_corrupt(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        Self::StoreCorrupt {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
