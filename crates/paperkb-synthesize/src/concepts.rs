//! Hand-written concept entities, emitted on every run regardless of input.

use paperkb_core::{Entity, EntityName};

const CONCEPTS: &[(&str, &str, &[&str])] = &[
    (
        "Transformer Architecture",
        "Revolutionary neural network architecture that powers modern language models and beyond. Introduced attention mechanism.",
        &["architecture", "deep-learning", "breakthrough", "attention"],
    ),
    (
        "Diffusion Models",
        "Generative modeling approach that creates high-quality images and other content through iterative denoising.",
        &["generative-ai", "image-generation", "probabilistic-models"],
    ),
    (
        "Large Language Models",
        "Massive neural networks trained on vast text corpora, capable of understanding and generating human-like text.",
        &["nlp", "ai-models", "foundation-models", "text-generation"],
    ),
    (
        "Foundation Models",
        "Large-scale models trained on broad data that can be adapted to many downstream tasks.",
        &["ai-paradigm", "transfer-learning", "general-ai"],
    ),
    (
        "Model Context Protocol",
        "Open standard by Anthropic for integrating AI models with external tools and data sources.",
        &["ai-integration", "protocol", "tool-use", "anthropic"],
    ),
];

/// The seed concept entities, in fixed order.
pub fn concept_entities() -> Vec<Entity> {
    CONCEPTS
        .iter()
        .filter_map(|(name, summary, tags)| {
            EntityName::new(*name).map(|n| Entity::new(n, *summary, tags.iter().copied()))
        })
        .collect()
}
