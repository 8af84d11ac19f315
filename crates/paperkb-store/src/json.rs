//! JSON-file store: `entities.json` and `events.json`, each a pretty-printed
//! array.
//!
//! Loading validates identity keys so the merge engine can trust them.
//! Saving stages both files as `.tmp` siblings before renaming either, and
//! puts the previous `entities.json` back if the events rename fails.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use paperkb_core::{DataPaths, Entity, Error, Event, Result, Store};

pub struct JsonStore {
    entities_path: PathBuf,
    events_path: PathBuf,
}

impl JsonStore {
    pub fn new(paths: &DataPaths) -> Self {
        Self::at(&paths.entities_file, &paths.events_file)
    }

    pub fn at(entities_path: impl Into<PathBuf>, events_path: impl Into<PathBuf>) -> Self {
        Self {
            entities_path: entities_path.into(),
            events_path: events_path.into(),
        }
    }

    pub fn entities_path(&self) -> &Path {
        &self.entities_path
    }

    pub fn events_path(&self) -> &Path {
        &self.events_path
    }

    /// Read both arrays. A missing file is an empty array.
    pub fn load(&self) -> Result<Store> {
        let entities: Vec<Entity> = read_array(&self.entities_path)?;
        let events: Vec<Event> = read_array(&self.events_path)?;

        let mut names = HashSet::with_capacity(entities.len());
        for entity in &entities {
            if entity.name.is_empty() {
                return Err(Error::store_corrupt(&self.entities_path, "entity with empty name"));
            }
            if !names.insert(entity.name.as_str()) {
                return Err(Error::store_corrupt(
                    &self.entities_path,
                    format!("duplicate entity name '{}'", entity.name),
                ));
            }
        }

        let mut ids = HashSet::with_capacity(events.len());
        for event in &events {
            if !ids.insert(event.id.as_str()) {
                return Err(Error::store_corrupt(
                    &self.events_path,
                    format!("duplicate event id '{}'", event.id),
                ));
            }
        }

        info!(
            "Loaded store: {} entities, {} events",
            entities.len(),
            events.len()
        );
        Ok(Store { entities, events })
    }

    /// Write both arrays. Each file is fully written to a `.tmp` sibling
    /// first; the renames happen only once both are staged. If the events
    /// rename fails, the previous `entities.json` is put back, so a failed
    /// save leaves both files as they were and no `.tmp` files behind.
    pub fn save(&self, store: &Store) -> Result<()> {
        let staged_entities = stage(&self.entities_path, &store.entities)?;
        let staged_events = match stage(&self.events_path, &store.events) {
            Ok(path) => path,
            Err(e) => {
                discard(&[staged_entities.as_path(), tmp_sibling(&self.events_path).as_path()]);
                return Err(e);
            }
        };

        let backup = sibling(&self.entities_path, ".bak");
        let had_entities = self.entities_path.exists();
        if had_entities {
            if let Err(e) = std::fs::rename(&self.entities_path, &backup) {
                discard(&[staged_entities.as_path(), staged_events.as_path()]);
                return Err(e.into());
            }
        }

        if let Err(e) = std::fs::rename(&staged_entities, &self.entities_path) {
            if had_entities {
                let _ = std::fs::rename(&backup, &self.entities_path);
            }
            discard(&[staged_entities.as_path(), staged_events.as_path()]);
            return Err(e.into());
        }

        if let Err(e) = std::fs::rename(&staged_events, &self.events_path) {
            warn!(
                "Failed to replace {}, restoring {}",
                self.events_path.display(),
                self.entities_path.display()
            );
            if had_entities {
                let _ = std::fs::rename(&backup, &self.entities_path);
            } else {
                let _ = std::fs::remove_file(&self.entities_path);
            }
            discard(&[staged_events.as_path()]);
            return Err(e.into());
        }

        if had_entities {
            let _ = std::fs::remove_file(&backup);
        }

        info!(
            "Saved store: {} entities to {}, {} events to {}",
            store.entities.len(),
            self.entities_path.display(),
            store.events.len(),
            self.events_path.display()
        );
        Ok(())
    }
}

fn read_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("{} not found, starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };
    serde_json::from_str(&data).map_err(|e| Error::store_corrupt(path, e))
}

fn stage<T: Serialize>(path: &Path, records: &[T]) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let tmp = tmp_sibling(path);
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(&tmp, json)?;
    Ok(tmp)
}

/// `data/entities.json` → `data/entities.json.tmp`.
fn tmp_sibling(path: &Path) -> PathBuf {
    sibling(path, ".tmp")
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(suffix);
    path.with_file_name(name)
}

fn discard(paths: &[&Path]) {
    for path in paths {
        let _ = std::fs::remove_file(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paperkb_core::{category, EntityName, EventId};

    fn store_in(dir: &Path) -> JsonStore {
        JsonStore::new(&DataPaths::new(dir))
    }

    fn entity(name: &str) -> Entity {
        Entity::new(EntityName::new(name).unwrap(), "summary", ["tag"])
    }

    #[test]
    fn test_missing_files_load_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path()).load().unwrap();
        assert!(store.entities.is_empty());
        assert!(store.events.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let json = store_in(dir.path());
        let store = Store {
            entities: vec![entity("Ada"), entity("MIT")],
            events: vec![Event::new(
                EventId::yearly_milestone(2024),
                "2024-06-01T00:00:00Z",
                "desc",
                category::YEARLY_MILESTONE,
            )],
        };
        json.save(&store).unwrap();

        assert_eq!(json.load().unwrap(), store);
        assert!(!dir.path().join("entities.json.tmp").exists());
        assert!(!dir.path().join("events.json.tmp").exists());

        let raw = std::fs::read_to_string(json.entities_path()).unwrap();
        assert!(raw.starts_with("[\n  {\n    \"name\": \"Ada\""));
    }

    #[test]
    fn test_unknown_fields_survive() {
        let dir = tempfile::tempdir().unwrap();
        let json = store_in(dir.path());
        std::fs::write(
            json.entities_path(),
            r#"[{"name": "Ada", "summary": "s", "tags": [], "source": "manual"}]"#,
        )
        .unwrap();

        let store = json.load().unwrap();
        assert_eq!(store.entities[0].extra["source"], "manual");
        json.save(&store).unwrap();
        let raw = std::fs::read_to_string(json.entities_path()).unwrap();
        assert!(raw.contains("\"source\": \"manual\""));
    }

    #[test]
    fn test_unparseable_file_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let json = store_in(dir.path());
        std::fs::write(json.events_path(), "{ not an array").unwrap();
        match json.load() {
            Err(Error::StoreCorrupt { path, .. }) => assert_eq!(path, json.events_path()),
            other => panic!("expected StoreCorrupt, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_names_are_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let json = store_in(dir.path());
        std::fs::write(
            json.entities_path(),
            r#"[{"name": "Ada", "summary": "a"}, {"name": "Ada", "summary": "b"}]"#,
        )
        .unwrap();
        let err = json.load().unwrap_err();
        assert!(matches!(err, Error::StoreCorrupt { .. }));
        assert!(err.to_string().contains("duplicate entity name 'Ada'"));
    }

    #[test]
    fn test_duplicate_event_ids_are_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let json = store_in(dir.path());
        let event = r#"{"id": "2024-research-milestone", "timestamp": "t", "description": "d", "category": "c"}"#;
        std::fs::write(json.events_path(), format!("[{},{}]", event, event)).unwrap();
        assert!(matches!(json.load(), Err(Error::StoreCorrupt { .. })));
    }

    #[test]
    fn test_empty_name_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let json = store_in(dir.path());
        std::fs::write(json.entities_path(), r#"[{"name": "", "summary": "x"}]"#).unwrap();
        assert!(matches!(json.load(), Err(Error::StoreCorrupt { .. })));
    }

    #[test]
    fn test_tmp_sibling() {
        assert_eq!(
            tmp_sibling(Path::new("data/events.json")),
            PathBuf::from("data/events.json.tmp")
        );
    }

    #[test]
    fn test_failed_events_replace_leaves_store_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let json = store_in(dir.path());
        std::fs::write(json.entities_path(), "[]").unwrap();
        // A non-empty directory cannot be replaced by a file rename.
        std::fs::create_dir(json.events_path()).unwrap();
        std::fs::write(json.events_path().join("keep"), "x").unwrap();

        let store = Store {
            entities: vec![entity("Ada")],
            events: vec![Event::new(
                EventId::yearly_milestone(2024),
                "2024-06-01T00:00:00Z",
                "desc",
                category::YEARLY_MILESTONE,
            )],
        };
        assert!(json.save(&store).is_err());

        assert_eq!(std::fs::read_to_string(json.entities_path()).unwrap(), "[]");
        assert!(json.events_path().join("keep").is_file());
        assert!(!dir.path().join("entities.json.tmp").exists());
        assert!(!dir.path().join("events.json.tmp").exists());
        assert!(!dir.path().join("entities.json.bak").exists());
    }

    #[test]
    fn test_failed_first_save_leaves_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let json = store_in(dir.path());
        std::fs::create_dir(json.events_path()).unwrap();
        std::fs::write(json.events_path().join("keep"), "x").unwrap();

        assert!(json.save(&Store::default()).is_err());
        assert!(!json.entities_path().exists());
        assert!(!dir.path().join("entities.json.tmp").exists());
        assert!(!dir.path().join("events.json.tmp").exists());
    }
}
