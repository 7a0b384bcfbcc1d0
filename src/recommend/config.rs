//! Configuration for recommendation scoring.

use serde::{Deserialize, Serialize};

/// Weights for the relevance score.
///
/// Lexical overlap deliberately outweighs the embedding signal: the
/// embedding provider is pluggable and may be a weak placeholder, while
/// term overlap against a curated knowledge base is dependable. Intent
/// boosts sit on top as a domain override that can lift a lexically weak
/// but intent-matching article over a lexically strong, intent-irrelevant
/// one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendConfig {
    /// Weight of the embedding-similarity term.
    pub embedding_weight: f64,
    /// Weight of the lexical-overlap term.
    pub lexical_weight: f64,
    /// Embedding weight used by the no-boost fallback pass.
    pub fallback_embedding_weight: f64,
    /// Lexical weight used by the no-boost fallback pass.
    pub fallback_lexical_weight: f64,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            embedding_weight: 0.4,
            lexical_weight: 0.5,
            fallback_embedding_weight: 0.3,
            fallback_lexical_weight: 0.7,
        }
    }
}
