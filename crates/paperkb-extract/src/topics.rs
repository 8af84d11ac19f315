//! Keyword-based topic classification.

use crate::lexicon::{Lexicon, TopicRule};

/// Assigns taxonomy labels to a paper by keyword containment.
#[derive(Debug, Clone)]
pub struct TopicClassifier {
    rules: Vec<TopicRule>,
}

impl TopicClassifier {
    pub fn new(lexicon: &Lexicon) -> Self {
        Self {
            rules: lexicon.topics.clone(),
        }
    }

    /// Labels in taxonomy order whose keywords occur anywhere in the
    /// lowercased `title + " " + abstract`. Matching is by substring, so
    /// `rl` also matches inside `world`.
    pub fn classify(&self, title: &str, r#abstract: &str) -> Vec<String> {
        let text = format!("{} {}", title, r#abstract).to_lowercase();
        self.rules
            .iter()
            .filter(|rule| rule.keywords.iter().any(|kw| text.contains(kw.as_str())))
            .map(|rule| rule.label.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> TopicClassifier {
        TopicClassifier::new(&Lexicon::builtin())
    }

    #[test]
    fn test_multiple_labels_in_taxonomy_order() {
        let topics = classifier().classify(
            "Robust Image Segmentation",
            "We study adversarial attacks on a large language model.",
        );
        assert_eq!(topics, vec!["language-models", "computer-vision", "security"]);
    }

    #[test]
    fn test_case_insensitive() {
        let topics = classifier().classify("QUANTIZATION of Networks", "");
        assert_eq!(topics, vec!["optimization"]);
    }

    #[test]
    fn test_no_labels() {
        assert!(classifier().classify("", "").is_empty());
        assert!(classifier().classify("On Sheaves", "Homotopy types.").is_empty());
    }

    #[test]
    fn test_custom_table() {
        let lexicon = Lexicon::from_json(
            r#"{"topics": [{"label": "quantum", "keywords": ["qubit"]}]}"#,
        )
        .unwrap();
        let c = TopicClassifier::new(&lexicon);
        assert_eq!(c.classify("Qubit routing", ""), vec!["quantum"]);
        assert!(c.classify("Large language models", "").is_empty());
    }
}
