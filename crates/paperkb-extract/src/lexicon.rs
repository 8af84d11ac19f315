//! Reference tables: known models, known institutions, topic keywords.
//!
//! The built-in tables can be replaced wholesale or per section by a JSON
//! lexicon file:
//!
//! ```json
//! {
//!   "models": ["GPT", "BERT"],
//!   "institutions": ["DeepMind"],
//!   "topics": [{"label": "robotics", "keywords": ["robot", "embodied"]}]
//! }
//! ```

use std::path::Path;

use paperkb_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Model and architecture names matched case-insensitively as whole words.
pub const KNOWN_MODELS: &[&str] = &[
    "GPT", "BERT", "RoBERTa", "DALL-E", "CLIP", "Transformer", "ResNet", "YOLO",
    "ViT", "Diffusion", "GAN", "VAE", "CNN", "RNN", "LSTM", "GRU", "T5", "BART",
    "LLaMA", "Alpaca", "Vicuna", "Claude", "Gemini", "PaLM", "LaMDA", "Mistral",
    "Stable Diffusion", "ControlNet", "LoRA", "QLoRA", "PEFT", "Whisper",
    "SAM", "DINO", "MAE", "SimCLR", "BYOL", "SwAV", "MoCo", "DeiT", "Swin",
    "ConvNeXt", "EfficientNet", "MobileNet", "SqueezeNet", "DenseNet", "Inception",
    "AlexNet", "VGG", "U-Net", "Mask R-CNN", "Fast R-CNN", "Faster R-CNN",
    "RetinaNet", "CenterNet", "DETR", "YOLOv", "SSD", "R-CNN",
];

/// Labs and universities matched as case-insensitive substrings.
pub const KNOWN_INSTITUTIONS: &[&str] = &[
    "OpenAI", "Anthropic", "DeepMind", "Google Research", "Google Brain",
    "Meta AI", "Facebook AI", "FAIR", "Microsoft Research", "MSR",
    "MIT", "Stanford", "Berkeley", "CMU", "Cornell", "Princeton",
    "Harvard", "Yale", "Oxford", "Cambridge", "ETH Zurich", "EPFL",
    "Max Planck", "INRIA", "MILA", "Vector Institute", "AI2",
    "Hugging Face", "Stability AI", "Midjourney", "Runway ML",
    "NVIDIA", "AMD", "Intel", "IBM Research", "Amazon Science",
    "Apple ML", "Tesla AI", "Baidu Research", "Alibaba DAMO",
    "Tencent AI Lab", "ByteDance", "JD AI", "Samsung Research",
];

/// Topic taxonomy in classification order.
pub const TOPIC_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "language-models",
        &["language model", "llm", "gpt", "bert", "transformer", "nlp", "text generation"],
    ),
    (
        "computer-vision",
        &["vision", "image", "visual", "detection", "segmentation", "cv", "cnn"],
    ),
    (
        "reinforcement-learning",
        &["reinforcement learning", "rl", "agent", "reward", "policy", "q-learning"],
    ),
    (
        "generative-ai",
        &["generative", "diffusion", "gan", "vae", "synthesis", "generation"],
    ),
    (
        "multimodal",
        &["multimodal", "cross-modal", "vision-language", "clip", "dalle"],
    ),
    (
        "optimization",
        &["optimization", "efficient", "compression", "quantization", "pruning"],
    ),
    (
        "robotics",
        &["robot", "robotic", "manipulation", "navigation", "embodied"],
    ),
    (
        "security",
        &["security", "privacy", "adversarial", "attack", "defense", "safety"],
    ),
    (
        "theory",
        &["theory", "theoretical", "proof", "bound", "convergence", "complexity"],
    ),
    (
        "applications",
        &["application", "medical", "finance", "science", "engineering", "biology"],
    ),
];

/// One topic label and the keyword phrases that earn it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRule {
    pub label: String,
    pub keywords: Vec<String>,
}

/// Immutable recognition tables handed to the recognizer and classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    #[serde(default = "builtin_models")]
    pub models: Vec<String>,
    #[serde(default = "builtin_institutions")]
    pub institutions: Vec<String>,
    #[serde(default = "builtin_topics")]
    pub topics: Vec<TopicRule>,
}

fn builtin_models() -> Vec<String> {
    KNOWN_MODELS.iter().map(|s| s.to_string()).collect()
}

fn builtin_institutions() -> Vec<String> {
    KNOWN_INSTITUTIONS.iter().map(|s| s.to_string()).collect()
}

fn builtin_topics() -> Vec<TopicRule> {
    TOPIC_KEYWORDS
        .iter()
        .map(|(label, keywords)| TopicRule {
            label: label.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        })
        .collect()
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Lexicon {
    pub fn builtin() -> Self {
        Self {
            models: builtin_models(),
            institutions: builtin_institutions(),
            topics: builtin_topics(),
        }
    }

    /// Parse a lexicon from JSON. Omitted sections keep the built-in table.
    pub fn from_json(json: &str) -> Result<Self> {
        let lexicon: Lexicon = serde_json::from_str(json)
            .map_err(|e| Error::Config(format!("Invalid lexicon: {}", e)))?;
        Ok(lexicon.normalized())
    }

    /// Load a lexicon file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Cannot read lexicon {}: {}", path.display(), e))
        })?;
        let lexicon = Self::from_json(&data)?;
        info!(
            "Lexicon loaded from {}: {} models, {} institutions, {} topics",
            path.display(),
            lexicon.models.len(),
            lexicon.institutions.len(),
            lexicon.topics.len()
        );
        Ok(lexicon)
    }

    /// Drop blank entries and lowercase topic keywords.
    fn normalized(mut self) -> Self {
        self.models.retain(|m| !m.trim().is_empty());
        self.institutions.retain(|i| !i.trim().is_empty());
        for rule in &mut self.topics {
            rule.keywords = rule
                .keywords
                .iter()
                .map(|k| k.to_lowercase())
                .filter(|k| !k.trim().is_empty())
                .collect();
        }
        self.topics.retain(|r| !r.label.is_empty());
        self
    }
}
