//! Merge execution.

use std::collections::HashSet;

use paperkb_core::{Entity, Event, Store};
use tracing::{debug, info};

use crate::types::MergeReport;

/// Stateless merge engine.
pub struct MergeEngine;

impl MergeEngine {
    /// Append every candidate whose identity key is not yet in `existing`,
    /// then sort. The key sets grow while appending, so a key repeated among
    /// the candidates keeps only its first occurrence.
    pub fn merge(
        existing: Store,
        entities: impl IntoIterator<Item = Entity>,
        events: impl IntoIterator<Item = Event>,
    ) -> (Store, MergeReport) {
        let mut store = existing;
        let mut report = MergeReport::default();

        let mut names: HashSet<String> = store
            .entities
            .iter()
            .map(|e| e.name.as_str().to_string())
            .collect();
        for entity in entities {
            if entity.name.is_empty() {
                report.entities_rejected += 1;
                continue;
            }
            if names.insert(entity.name.as_str().to_string()) {
                store.entities.push(entity);
                report.entities_added += 1;
            } else {
                debug!("Skipping existing entity '{}'", entity.name);
                report.entities_skipped += 1;
            }
        }

        let mut ids: HashSet<String> = store
            .events
            .iter()
            .map(|e| e.id.as_str().to_string())
            .collect();
        for event in events {
            if ids.insert(event.id.as_str().to_string()) {
                store.events.push(event);
                report.events_added += 1;
            } else {
                report.events_skipped += 1;
            }
        }

        store.sort();

        info!(
            "Merge complete: +{} entities ({} skipped, {} rejected), +{} events ({} skipped)",
            report.entities_added,
            report.entities_skipped,
            report.entities_rejected,
            report.events_added,
            report.events_skipped
        );

        (store, report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paperkb_core::{category, EntityName, EventId};

    fn entity(name: &str, summary: &str) -> Entity {
        Entity::new(EntityName::new(name).unwrap(), summary, ["t"])
    }

    fn event(year: i32, topic: &str, ts: &str) -> Event {
        Event::new(EventId::trend(year, topic), ts, topic, category::RESEARCH_TREND)
    }

    fn candidates() -> (Vec<Entity>, Vec<Event>) {
        (
            vec![entity("Zed", "z"), entity("Ada", "a"), entity("Ada", "dup")],
            vec![
                event(2024, "robotics", "2024-06-01T00:00:00Z"),
                event(2023, "theory", "2023-06-01T00:00:00Z"),
                event(2024, "robotics", "2025-01-01T00:00:00Z"),
            ],
        )
    }

    #[test]
    fn test_merge_into_empty() {
        let (entities, events) = candidates();
        let (store, report) = MergeEngine::merge(Store::default(), entities, events);

        let names: Vec<&str> = store.entities.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Ada", "Zed"]);
        assert_eq!(store.entities[0].summary, "a");
        assert_eq!(store.events.len(), 2);
        assert_eq!(store.events[0].timestamp, "2024-06-01T00:00:00Z");
        assert_eq!(report.entities_added, 2);
        assert_eq!(report.entities_skipped, 1);
        assert_eq!(report.events_added, 2);
        assert_eq!(report.events_skipped, 1);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let (entities, events) = candidates();
        let (once, _) = MergeEngine::merge(Store::default(), entities.clone(), events.clone());
        let (twice, report) = MergeEngine::merge(once.clone(), entities, events);
        assert_eq!(once, twice);
        assert!(report.is_noop());
    }

    #[test]
    fn test_existing_records_untouched() {
        let mut existing = Store::default();
        existing.entities.push(entity("Ada", "curated by hand"));
        existing.entities[0]
            .extra
            .insert("source".into(), serde_json::json!("manual"));

        let (store, report) =
            MergeEngine::merge(existing, vec![entity("Ada", "generated")], Vec::new());
        assert_eq!(store.entities.len(), 1);
        assert_eq!(store.entities[0].summary, "curated by hand");
        assert_eq!(store.entities[0].extra["source"], "manual");
        assert_eq!(report.entities_skipped, 1);
    }

    #[test]
    fn test_growth_under_disjoint_input() {
        let (first, _) = MergeEngine::merge(
            Store::default(),
            vec![entity("Ada", "a")],
            vec![event(2024, "theory", "2024-06-01T00:00:00Z")],
        );
        let (second, report) = MergeEngine::merge(
            first.clone(),
            vec![entity("Alan", "b")],
            vec![event(2024, "robotics", "2024-06-01T00:00:00Z")],
        );
        assert_eq!(second.entities.len(), first.entities.len() + 1);
        assert_eq!(second.events.len(), first.events.len() + 1);
        assert_eq!(report.added(), 2);
        for old in &first.entities {
            assert!(second.entities.contains(old));
        }
    }

    #[test]
    fn test_empty_names_rejected() {
        let blank: Entity =
            serde_json::from_str(r#"{"name": "  ", "summary": "s", "tags": []}"#).unwrap();
        let (store, report) = MergeEngine::merge(Store::default(), vec![blank], Vec::new());
        assert!(store.entities.is_empty());
        assert_eq!(report.entities_rejected, 1);
    }

    #[test]
    fn test_output_is_sorted_and_unique() {
        let mut existing = Store::default();
        existing.entities.push(entity("Mid", "m"));
        existing
            .events
            .push(event(2020, "old", "2020-06-01T00:00:00Z"));
        let (entities, events) = candidates();
        let (store, _) = MergeEngine::merge(existing, entities, events);

        let names: Vec<&str> = store.entities.iter().map(|e| e.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(names, sorted);

        let stamps: Vec<&str> = store.events.iter().map(|e| e.timestamp.as_str()).collect();
        assert!(stamps.windows(2).all(|w| w[0] >= w[1]));
        let ids: HashSet<&str> = store.events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), store.events.len());
    }
}
