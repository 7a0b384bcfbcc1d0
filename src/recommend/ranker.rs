//! Top-k ranking over the knowledge base.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::document::Article;
use crate::recommend::scorer::ScoringEngine;

/// One ranked result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedArticle {
    /// Id of the recommended article.
    pub article_id: String,
    /// Relevance score, rounded to 3 decimals.
    pub score: f64,
}

/// Filters, scores, and ranks candidate articles.
#[derive(Debug)]
pub struct Ranker {
    scorer: ScoringEngine,
}

impl Ranker {
    /// Create a ranker over the given scoring engine.
    pub fn new(scorer: ScoringEngine) -> Self {
        Self { scorer }
    }

    /// The scoring engine backing this ranker.
    pub fn scorer(&self) -> &ScoringEngine {
        &self.scorer
    }

    /// Rank `articles` for `query` and return at most `top_k` results.
    ///
    /// When `category` is provided and non-empty, candidates are limited
    /// to articles whose category name case-insensitively contains it; a
    /// filter that matches nothing is skipped and the full set is used.
    /// If the primary scoring pass yields no candidates while the
    /// article set is non-empty, every article is rescored with the
    /// simpler no-boost fallback weighting, so the ranker never returns
    /// an empty result when at least one article exists.
    ///
    /// Sorting is by score descending with a stable tie-break: articles
    /// with equal scores keep their knowledge-base order.
    pub fn rank(
        &self,
        query: &str,
        articles: &[Article],
        top_k: usize,
        category: Option<&str>,
    ) -> Vec<RankedArticle> {
        if top_k == 0 || articles.is_empty() {
            return Vec::new();
        }

        let ctx = self.scorer.prepare(query);

        let candidates: Vec<&Article> = match category.map(str::trim) {
            Some(wanted) if !wanted.is_empty() => {
                let wanted = wanted.to_lowercase();
                let filtered: Vec<&Article> = articles
                    .iter()
                    .filter(|a| a.category.as_str().to_lowercase().contains(&wanted))
                    .collect();
                if filtered.is_empty() {
                    articles.iter().collect()
                } else {
                    filtered
                }
            }
            _ => articles.iter().collect(),
        };

        let mut scored: Vec<RankedArticle> = candidates
            .par_iter()
            .map(|article| RankedArticle {
                article_id: article.id.clone(),
                score: self.scorer.score(&ctx, article),
            })
            .collect();

        if scored.is_empty() {
            scored = articles
                .par_iter()
                .map(|article| RankedArticle {
                    article_id: article.id.clone(),
                    score: self.scorer.score_fallback(&ctx, article),
                })
                .collect();
        }

        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(top_k);
        scored
    }
}
