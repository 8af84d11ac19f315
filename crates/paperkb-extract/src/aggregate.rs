//! Corpus-wide mention counts.

use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

use serde::Serialize;

/// Counter that remembers the order keys were first seen, so that ranking
/// ties resolve the same way on every run over the same input.
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, usize)>,
}

impl<K> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> FrequencyTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, key: K) {
        self.add(key, 1);
    }

    pub fn add(&mut self, key: K, n: usize) {
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].1 += n,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, n));
            }
        }
    }

    pub fn get(&self, key: &K) -> usize {
        self.index.get(key).map_or(0, |&pos| self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.entries.iter().map(|(k, n)| (k, *n))
    }

    /// The `n` highest counts, count descending, ties in first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<(&K, usize)> {
        let mut ranked: Vec<(&K, usize)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    /// Fold another table in. Counts add; keys new to `self` are appended in
    /// the other table's first-seen order.
    pub fn merge(&mut self, other: FrequencyTable<K>) {
        for (key, n) in other.entries {
            self.add(key, n);
        }
    }
}

/// Everything one paper contributes to the aggregate.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PaperFacts {
    pub paper_id: String,
    pub title: String,
    /// Trimmed, non-empty, each author once.
    pub authors: Vec<String>,
    pub categories: Vec<String>,
    pub year: Option<i32>,
    pub topics: Vec<String>,
    pub models: BTreeSet<String>,
    pub institutions: BTreeSet<String>,
}

/// Frequency tables for one pipeline run.
#[derive(Debug, Clone, Default)]
pub struct AggregateCounts {
    pub authors: FrequencyTable<String>,
    pub models: FrequencyTable<String>,
    pub institutions: FrequencyTable<String>,
    pub topics: FrequencyTable<String>,
    pub years: FrequencyTable<i32>,
    pub categories: FrequencyTable<String>,
    /// Categories of the first paper that mentioned each model.
    pub model_categories: HashMap<String, Vec<String>>,
    pub papers: usize,
}

impl AggregateCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one paper. Every key counts at most once per paper.
    pub fn record(&mut self, facts: &PaperFacts) {
        self.papers += 1;

        for author in &facts.authors {
            self.authors.increment(author.clone());
        }
        for model in &facts.models {
            self.models.increment(model.clone());
            self.model_categories
                .entry(model.clone())
                .or_insert_with(|| facts.categories.clone());
        }
        for inst in &facts.institutions {
            self.institutions.increment(inst.clone());
        }
        for topic in dedup(&facts.topics) {
            self.topics.increment(topic.clone());
        }
        for category in dedup(&facts.categories) {
            self.categories.increment(category.clone());
        }
        if let Some(year) = facts.year {
            self.years.increment(year);
        }
    }

    /// Fold in counts gathered over a disjoint slice of the corpus.
    pub fn merge(&mut self, other: AggregateCounts) {
        self.papers += other.papers;
        self.authors.merge(other.authors);
        self.models.merge(other.models);
        self.institutions.merge(other.institutions);
        self.topics.merge(other.topics);
        self.years.merge(other.years);
        self.categories.merge(other.categories);
        for (model, cats) in other.model_categories {
            self.model_categories.entry(model).or_insert(cats);
        }
    }
}

fn dedup(items: &[String]) -> Vec<&String> {
    let mut seen: Vec<&String> = Vec::with_capacity(items.len());
    for item in items {
        if !item.is_empty() && !seen.contains(&item) {
            seen.push(item);
        }
    }
    seen
}

/// Per-paper facts plus the aggregate over all of them.
#[derive(Debug, Clone, Default)]
pub struct CorpusAnalysis {
    pub papers: Vec<PaperFacts>,
    pub counts: AggregateCounts,
}
