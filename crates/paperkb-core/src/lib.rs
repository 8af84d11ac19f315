//! PaperKB Core — shared record types, identity keys, configuration, errors.

pub mod config;
pub mod error;
pub mod keys;
pub mod types;

pub use config::{DataPaths, PaperKbConfig, SourceConfig};
pub use error::{Error, Result};
pub use keys::{EntityName, EventId};
pub use types::*;
