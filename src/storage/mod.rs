//! Persistence seams.
//!
//! Articles, tickets, and feedback live behind store traits; impressions
//! go through an explicit append-only log with a single-writer contract;
//! gap reports go through a dated snapshot store. Everything is injected
//! into the engine — no ambient global state. The backing format is a
//! collaborator concern; the in-memory implementations here serve tests,
//! the CLI, and embedding the engine in a host process that syncs to its
//! own database.

pub mod memory;
pub mod traits;

pub use memory::{
    MemoryArticleStore, MemoryFeedbackStore, MemoryImpressionLog, MemoryReportStore,
    MemoryTicketStore,
};
pub use traits::{ArticleStore, FeedbackStore, ImpressionLog, ReportStore, TicketStore};
