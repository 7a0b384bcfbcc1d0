//! Gap-analysis report types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Impression/click statistics for one article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerArticleStat {
    /// The article.
    pub article_id: String,
    /// Article title at analysis time, when the article still exists.
    pub title: Option<String>,
    /// Times the article appeared in ranking results.
    pub impressions: u64,
    /// Feedback entries marking the article as relevant.
    pub clicks: u64,
    /// clicks / impressions as a percentage, rounded to 2 decimals;
    /// 0.0 when the article has no impressions.
    pub ctr: f64,
}

/// Overall knowledge-base health summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapSummary {
    /// When the analysis ran.
    pub date: DateTime<Utc>,
    /// Articles in the knowledge base.
    pub total_articles: usize,
    /// Tickets on record.
    pub total_tickets: usize,
    /// Tickets that received at least one recommendation.
    pub tickets_with_recommendations: usize,
    /// tickets_with_recommendations / total_tickets as a percentage;
    /// 0.0 when there are no tickets.
    pub coverage_percent: f64,
    /// Share of recommended tickets that ended resolved or closed;
    /// 0.0 when no ticket was recommended anything.
    pub resolution_rate_percent: f64,
    /// Feedback entries on record.
    pub total_feedback: usize,
}

/// One dated gap-analysis snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapReport {
    /// The overall summary.
    pub summary: GapSummary,
    /// Stats for every known article.
    pub per_article: Vec<PerArticleStat>,
    /// Articles with impressions whose CTR fell below the threshold.
    pub low_ctr: Vec<PerArticleStat>,
}
