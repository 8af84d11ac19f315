//! Text recognizer. Proposes model and institution mentions.
//!
//! Recognition is a list of independent [`CandidateMatcher`] strategies whose
//! proposals are unioned. Dictionary strategies are precise on names we
//! already know; structural strategies find new names and accept noise,
//! which the aggregation thresholds filter out later.

pub mod matchers;

use std::collections::BTreeSet;

use paperkb_core::Result;

use crate::lexicon::Lexicon;
use matchers::{
    AcademicDomainMatcher, AcronymMatcher, DictionaryMatcher, InstitutionDictionaryMatcher,
    VersionedNameMatcher,
};

/// A single recognition strategy. Never fails: unmatched text yields nothing.
pub trait CandidateMatcher: Send + Sync {
    /// Short strategy name for logging.
    fn name(&self) -> &'static str;

    /// Every candidate mention found in `text`, possibly with repeats.
    fn propose(&self, text: &str) -> Vec<String>;
}

/// Runs the model and institution strategy lists over paper text.
pub struct TextRecognizer {
    model_matchers: Vec<Box<dyn CandidateMatcher>>,
    institution_matchers: Vec<Box<dyn CandidateMatcher>>,
    domain_matcher: AcademicDomainMatcher,
}

impl TextRecognizer {
    /// Build the standard strategy lists from a lexicon.
    pub fn new(lexicon: &Lexicon) -> Result<Self> {
        Ok(Self::with_matchers(
            vec![
                Box::new(DictionaryMatcher::new(&lexicon.models)?),
                Box::new(VersionedNameMatcher),
                Box::new(AcronymMatcher),
            ],
            vec![Box::new(InstitutionDictionaryMatcher::new(
                &lexicon.institutions,
            ))],
        ))
    }

    /// Build a recognizer from explicit strategy lists.
    pub fn with_matchers(
        model_matchers: Vec<Box<dyn CandidateMatcher>>,
        institution_matchers: Vec<Box<dyn CandidateMatcher>>,
    ) -> Self {
        Self {
            model_matchers,
            institution_matchers,
            domain_matcher: AcademicDomainMatcher,
        }
    }

    /// Names of the active strategies, models first.
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.model_matchers
            .iter()
            .chain(&self.institution_matchers)
            .map(|m| m.name())
            .chain(std::iter::once(self.domain_matcher.name()))
            .collect()
    }

    /// Model and architecture names mentioned in `text`.
    pub fn recognize_models(&self, text: &str) -> BTreeSet<String> {
        union(&self.model_matchers, text)
    }

    /// Institutions mentioned in `text`, plus academic mail domains found in
    /// either the text or the author strings.
    pub fn recognize_institutions(&self, text: &str, authors: &[String]) -> BTreeSet<String> {
        let mut found = union(&self.institution_matchers, text);
        found.extend(self.domain_matcher.propose(text));
        for author in authors {
            found.extend(self.domain_matcher.propose(author));
        }
        found
    }
}

fn union(matchers: &[Box<dyn CandidateMatcher>], text: &str) -> BTreeSet<String> {
    matchers.iter().flat_map(|m| m.propose(text)).collect()
}
