//! Record types: input papers, stored entities and events.

use std::fmt;

use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::keys::{EntityName, EventId};

/// Timestamp layout used by every stored event.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Event categories minted by the synthesizers. Publication events use a
/// topic label instead when the paper carries one.
pub mod category {
    pub const RESEARCH: &str = "research";
    pub const RESEARCH_TREND: &str = "research-trend";
    pub const YEARLY_MILESTONE: &str = "yearly-milestone";
    pub const RESEARCH_MILESTONE: &str = "research-milestone";
}

/// Store-assigned point identifier: either an unsigned integer or a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointId {
    Num(u64),
    Uuid(String),
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{}", n),
            Self::Uuid(s) => f.write_str(s),
        }
    }
}

/// One paper from the corpus. Read-only for the whole run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperRecord {
    pub id: PointId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub r#abstract: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub url: String,
}

impl PaperRecord {
    /// Title and abstract joined by a single space, the text every
    /// recognizer pass runs over.
    pub fn full_text(&self) -> String {
        format!("{} {}", self.title, self.r#abstract)
    }
}

/// A named knowledge-base entity (person, model, institution, concept).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub name: EntityName,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Fields written by other tools, carried through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Entity {
    /// Build an entity, dropping repeated tags while keeping first-seen order.
    pub fn new<I, S>(name: EntityName, summary: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for tag in tags {
            let tag = tag.into();
            if !tag.is_empty() && !unique.contains(&tag) {
                unique.push(tag);
            }
        }
        Self {
            name,
            summary: summary.into(),
            tags: unique,
            extra: serde_json::Map::new(),
        }
    }
}

/// A timestamped knowledge-base event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub timestamp: String,
    pub description: String,
    pub category: String,
    /// Fields written by other tools, carried through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Event {
    pub fn new(
        id: EventId,
        timestamp: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            timestamp: timestamp.into(),
            description: description.into(),
            category: category.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// The persisted knowledge base: every entity and every event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub entities: Vec<Entity>,
    pub events: Vec<Event>,
}

impl Store {
    /// Entities by name ascending, events by timestamp descending. Both sorts
    /// are stable, so records with equal keys keep their relative order.
    pub fn sort(&mut self) {
        self.entities.sort_by(|a, b| a.name.cmp(&b.name));
        self.events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    }
}

/// Midnight UTC on the given date, formatted as `YYYY-MM-DDThh:mm:ssZ`.
/// Returns `None` for dates that do not exist.
pub fn utc_timestamp(year: i32, month: u32, day: u32) -> Option<String> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
}
