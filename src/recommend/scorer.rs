//! Relevance scoring for one query against one article.

use std::sync::Arc;

use ahash::AHashSet;
use tracing::debug;

use crate::analysis::TextNormalizer;
use crate::document::Article;
use crate::embedding::{TextEmbedder, cosine_similarity};
use crate::intent::{IntentDefinition, IntentDetector};
use crate::recommend::config::RecommendConfig;

/// Guard against division by zero on an empty query.
const LEXICAL_EPSILON: f64 = 1e-6;

/// Everything derivable from the query alone, computed once per ranking
/// call and shared across all candidate articles.
#[derive(Debug, Clone)]
pub struct QueryContext {
    /// Normalized query text.
    pub normalized: String,
    /// Distinct normalized query terms.
    pub terms: AHashSet<String>,
    /// Query embedding; empty when unavailable.
    pub embedding: Vec<f32>,
    /// Intents the query triggered, in taxonomy order.
    pub intents: Vec<IntentDefinition>,
}

/// Combines embedding similarity, lexical overlap, and intent boosts
/// into a single relevance score.
#[derive(Debug)]
pub struct ScoringEngine {
    normalizer: TextNormalizer,
    embedder: Arc<dyn TextEmbedder>,
    detector: IntentDetector,
    config: RecommendConfig,
}

impl ScoringEngine {
    /// Create a scoring engine.
    pub fn new(
        embedder: Arc<dyn TextEmbedder>,
        detector: IntentDetector,
        config: RecommendConfig,
    ) -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            embedder,
            detector,
            config,
        }
    }

    /// Precompute the per-query state.
    ///
    /// An embedding failure degrades to the empty vector (the similarity
    /// term scores zero) rather than failing the ranking call.
    pub fn prepare(&self, query: &str) -> QueryContext {
        let normalized = self.normalizer.normalize(query);
        let terms: AHashSet<String> = normalized
            .split_whitespace()
            .map(str::to_string)
            .collect();
        let embedding = match self.embedder.embed(query) {
            Ok(vector) => vector,
            Err(err) => {
                debug!(provider = self.embedder.name(), %err, "query embedding unavailable");
                Vec::new()
            }
        };
        let intents = self.detector.detect(&normalized);

        QueryContext {
            normalized,
            terms,
            embedding,
            intents,
        }
    }

    /// Score one article: weighted embedding + lexical terms plus the
    /// intent boosts, rounded to 3 decimals.
    pub fn score(&self, ctx: &QueryContext, article: &Article) -> f64 {
        let content = self.normalizer.normalize(&article.searchable_text());
        let emb_score = cosine_similarity(&ctx.embedding, &article.embedding) as f64;
        let text_score = self.lexical_overlap(ctx, &content);

        let mut boost = 0.0;
        for intent in &ctx.intents {
            if intent.gates_content(&content) {
                boost += intent.boost;
            }
        }

        round3(
            self.config.embedding_weight * emb_score
                + self.config.lexical_weight * text_score
                + boost,
        )
    }

    /// Fallback scoring: simpler weighting, no boosts. Used when the
    /// primary pass produced no candidates at all.
    pub fn score_fallback(&self, ctx: &QueryContext, article: &Article) -> f64 {
        let content = self.normalizer.normalize(&article.searchable_text());
        let emb_score = cosine_similarity(&ctx.embedding, &article.embedding) as f64;
        let text_score = self.lexical_overlap(ctx, &content);

        round3(
            self.config.fallback_embedding_weight * emb_score
                + self.config.fallback_lexical_weight * text_score,
        )
    }

    /// Precision-oriented overlap: shared terms over query length only,
    /// so longer articles are not penalized.
    fn lexical_overlap(&self, ctx: &QueryContext, normalized_content: &str) -> f64 {
        let content_terms: AHashSet<&str> = normalized_content.split_whitespace().collect();
        let shared = ctx
            .terms
            .iter()
            .filter(|term| content_terms.contains(term.as_str()))
            .count();
        shared as f64 / (ctx.terms.len() as f64 + LEXICAL_EPSILON)
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
