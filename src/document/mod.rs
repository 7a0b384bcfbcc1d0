//! Data model: articles, tickets, feedback, impressions.
//!
//! Articles and tickets are owned by the persistence layer; the engine
//! only reads and derives from them. Impression records are append-only
//! and consumed in aggregate by the gap analyzer.

pub mod article;
pub mod feedback;
pub mod ticket;

pub use article::{Article, ArticleDraft, Category};
pub use feedback::{FeedbackEntry, ImpressionRecord, LabeledExample};
pub use ticket::{Ticket, TicketDraft, TicketStatus};
