//! Support ticket types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::document::article::Category;

/// Lifecycle state of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    /// Newly created, awaiting work.
    #[default]
    Open,
    /// Resolved by an agent.
    Resolved,
    /// Closed (resolved or abandoned).
    Closed,
}

impl TicketStatus {
    /// Whether this status counts as successfully concluded for the
    /// resolution-rate metric.
    pub fn is_concluded(&self) -> bool {
        matches!(self, TicketStatus::Resolved | TicketStatus::Closed)
    }

    /// Parse a status name, case-insensitively.
    pub fn parse(s: &str) -> Option<TicketStatus> {
        match s.trim().to_lowercase().as_str() {
            "open" => Some(TicketStatus::Open),
            "resolved" => Some(TicketStatus::Resolved),
            "closed" => Some(TicketStatus::Closed),
            _ => None,
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::Resolved => "resolved",
            TicketStatus::Closed => "closed",
        }
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A support ticket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique identifier.
    pub id: String,
    /// Short summary of the issue.
    pub title: String,
    /// Full issue description; this is the recommendation query.
    pub description: String,
    /// Name of the customer who filed the ticket.
    pub customer_name: String,
    /// Category assigned at creation.
    #[serde(default)]
    pub category: Category,
    /// Tags assigned at creation.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Current lifecycle state.
    #[serde(default)]
    pub status: TicketStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last status change, if any.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Articles recommended at creation time. Set once; a point-in-time
    /// snapshot of what was shown, never recomputed afterward.
    #[serde(default)]
    pub recommended_article_ids: Vec<String>,
}

/// Fields required to create a ticket; everything else is assigned by
/// the engine at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketDraft {
    /// Short summary of the issue.
    pub title: String,
    /// Full issue description.
    pub description: String,
    /// Name of the customer filing the ticket.
    pub customer_name: String,
}
