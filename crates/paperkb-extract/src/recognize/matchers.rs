//! Recognition strategies.

use once_cell::sync::Lazy;
use paperkb_core::{Error, Result};
use regex::{Regex, RegexSet};

use super::CandidateMatcher;

/// Capitalized token with a version tag: `GPT4`, `Llama-3`, `ResNet50`, `YOLOv8`.
static VERSIONED_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Z][a-zA-Z]+(?:[A-Z][a-zA-Z]*)*-?v?\d+(?:\.\d+)?\b")
        .expect("valid versioned-name regex")
});

/// Parenthesized acronym introduced after its expansion: `(RLHF)`, `(ViT-B16)`.
static PAREN_ACRONYM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(([A-Z]{2,}[A-Za-z0-9\-]*)\)").expect("valid acronym regex")
});

/// Mail-style domain fragment: `@cs.stanford.edu`, `@eng.cam.ac.uk`.
static MAIL_DOMAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@([A-Za-z0-9\-]+(?:\.[A-Za-z0-9\-]+)+)").expect("valid domain regex")
});

/// Known model names, matched case-insensitively on word boundaries. The
/// dictionary spelling is what gets proposed.
pub struct DictionaryMatcher {
    names: Vec<String>,
    set: RegexSet,
}

impl DictionaryMatcher {
    pub fn new(names: &[String]) -> Result<Self> {
        let patterns: Vec<String> = names
            .iter()
            .map(|n| format!(r"(?i)\b{}\b", regex::escape(n)))
            .collect();
        let set = RegexSet::new(&patterns)
            .map_err(|e| Error::Config(format!("Model dictionary does not compile: {}", e)))?;
        Ok(Self {
            names: names.to_vec(),
            set,
        })
    }
}

impl CandidateMatcher for DictionaryMatcher {
    fn name(&self) -> &'static str {
        "model-dictionary"
    }

    fn propose(&self, text: &str) -> Vec<String> {
        self.set
            .matches(text)
            .into_iter()
            .map(|i| self.names[i].clone())
            .collect()
    }
}

/// Version-tagged names longer than three characters.
pub struct VersionedNameMatcher;

impl CandidateMatcher for VersionedNameMatcher {
    fn name(&self) -> &'static str {
        "versioned-name"
    }

    fn propose(&self, text: &str) -> Vec<String> {
        VERSIONED_NAME
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|s| s.chars().count() > 3)
            .map(str::to_string)
            .collect()
    }
}

/// Parenthesized all-caps acronyms of 3 to 14 characters.
pub struct AcronymMatcher;

impl CandidateMatcher for AcronymMatcher {
    fn name(&self) -> &'static str {
        "paren-acronym"
    }

    fn propose(&self, text: &str) -> Vec<String> {
        PAREN_ACRONYM
            .captures_iter(text)
            .filter_map(|cap| cap.get(1))
            .map(|m| m.as_str())
            .filter(|s| {
                let len = s.chars().count();
                len > 2 && len < 15
            })
            .map(str::to_string)
            .collect()
    }
}

/// Known institutions, matched as case-insensitive substrings.
pub struct InstitutionDictionaryMatcher {
    entries: Vec<(String, String)>,
}

impl InstitutionDictionaryMatcher {
    pub fn new(names: &[String]) -> Self {
        Self {
            entries: names
                .iter()
                .map(|n| (n.clone(), n.to_lowercase()))
                .collect(),
        }
    }
}

impl CandidateMatcher for InstitutionDictionaryMatcher {
    fn name(&self) -> &'static str {
        "institution-dictionary"
    }

    fn propose(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        self.entries
            .iter()
            .filter(|(_, needle)| lower.contains(needle.as_str()))
            .map(|(name, _)| name.clone())
            .collect()
    }
}

/// Institutions inferred from academic mail domains. The label right before
/// the academic suffix (`edu`, or `ac` followed by a country code) is
/// title-cased and kept when longer than two characters.
pub struct AcademicDomainMatcher;

impl CandidateMatcher for AcademicDomainMatcher {
    fn name(&self) -> &'static str {
        "academic-domain"
    }

    fn propose(&self, text: &str) -> Vec<String> {
        MAIL_DOMAIN
            .captures_iter(text)
            .filter_map(|cap| cap.get(1))
            .filter_map(|m| academic_label(m.as_str()))
            .map(title_case)
            .filter(|name| name.chars().count() > 2)
            .collect()
    }
}

/// `cs.stanford.edu` → `stanford`, `eng.cam.ac.uk` → `cam`,
/// `cs.tsinghua.edu.cn` → `tsinghua`, `example.com` → none.
fn academic_label(domain: &str) -> Option<&str> {
    let labels: Vec<&str> = domain.split('.').collect();
    let last = labels.len() - 1;
    labels
        .iter()
        .enumerate()
        .skip(1)
        .find(|&(i, label)| {
            label.eq_ignore_ascii_case("edu") || (label.eq_ignore_ascii_case("ac") && i < last)
        })
        .map(|(i, _)| labels[i - 1])
        .filter(|label| !label.is_empty())
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
