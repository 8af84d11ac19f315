//! Typed identity keys for stored records.
//!
//! An entity is identified by its `name`, an event by its `id`. Both are
//! plain strings on disk; the wrappers exist so that the synthesizers can
//! only mint keys through the constructors below, which keep keys from
//! different sources in disjoint namespaces:
//!
//! | source              | event id                                   |
//! |---------------------|--------------------------------------------|
//! | paper publication   | `<year>-paper-<first 8 chars of paper id>` |
//! | topic trend         | `<year>-trend-<topic>`                     |
//! | yearly milestone    | `<year>-research-milestone`                |
//! | category milestone  | `<year>-category-milestone-<cat, '.'→'-'>` |

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of leading paper-id characters kept in a publication event id.
pub const SHORT_PAPER_ID_LEN: usize = 8;

/// Identity key of an [`Entity`](crate::Entity).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityName(String);

impl EntityName {
    /// Returns `None` for empty or whitespace-only names.
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            None
        } else {
            Some(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for EntityName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Identity key of an [`Event`](crate::Event).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Publication of a single paper.
    pub fn publication(year: i32, paper_id: &str) -> Self {
        let short: String = paper_id.chars().take(SHORT_PAPER_ID_LEN).collect();
        Self(format!("{}-paper-{}", year, short))
    }

    /// A topic crossing the trend threshold.
    pub fn trend(year: i32, topic: &str) -> Self {
        Self(format!("{}-trend-{}", year, topic))
    }

    /// A publication year crossing the milestone threshold.
    pub fn yearly_milestone(year: i32) -> Self {
        Self(format!("{}-research-milestone", year))
    }

    /// An arXiv category crossing the milestone threshold.
    pub fn category_milestone(year: i32, category: &str) -> Self {
        Self(format!(
            "{}-category-milestone-{}",
            year,
            category.replace('.', "-")
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for EventId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
