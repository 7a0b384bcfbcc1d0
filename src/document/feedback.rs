//! Feedback, impression, and evaluation-dataset types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A human judgment on one recommended article.
///
/// At most one entry exists per distinct `(ticket_id, article_id)` pair:
/// a later submission for the same pair overwrites the stored entry
/// (same `id`, updated `correct`, `notes`, and `timestamp`) instead of
/// appending a duplicate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackEntry {
    /// Unique identifier, stable across overwrites of the same pair.
    pub id: String,
    /// The ticket this feedback refers to; `None` for feedback on a
    /// standalone query.
    #[serde(default)]
    pub ticket_id: Option<String>,
    /// The judged article.
    pub article_id: String,
    /// Whether the recommendation was relevant.
    pub correct: bool,
    /// Free-form reviewer notes.
    #[serde(default)]
    pub notes: String,
    /// Submission time of the latest judgment.
    pub timestamp: DateTime<Utc>,
}

impl FeedbackEntry {
    /// Whether this entry judges the given `(ticket_id, article_id)` pair.
    pub fn matches_pair(&self, ticket_id: Option<&str>, article_id: &str) -> bool {
        self.ticket_id.as_deref() == ticket_id && self.article_id == article_id
    }
}

/// One logged ranking invocation.
///
/// Append-only: records are written once after every ranking call and
/// consumed only in aggregate (impression counts per article id).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpressionRecord {
    /// When the ranking ran.
    pub timestamp: DateTime<Utc>,
    /// Ticket that triggered the ranking; `None` for ad-hoc queries.
    #[serde(default)]
    pub ticket_id: Option<String>,
    /// The query text that was ranked.
    pub description: String,
    /// Article ids returned, in rank order.
    pub recommended_ids: Vec<String>,
}

/// One labeled example for dataset evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledExample {
    /// Query text.
    pub description: String,
    /// The article that should be recommended for it.
    pub ground_truth_article_id: String,
}
