//! Store trait definitions.

use std::fmt::Debug;

use crate::document::{Article, FeedbackEntry, ImpressionRecord, Ticket};
use crate::error::Result;
use crate::gap::GapReport;

/// Storage for knowledge-base articles.
pub trait ArticleStore: Send + Sync + Debug {
    /// All articles, in insertion order.
    fn list(&self) -> Result<Vec<Article>>;

    /// Look up one article by id.
    fn get(&self, id: &str) -> Result<Option<Article>>;

    /// Append a new article.
    fn append(&self, article: Article) -> Result<()>;

    /// Number of stored articles.
    fn count(&self) -> Result<usize>;
}

/// Storage for support tickets.
pub trait TicketStore: Send + Sync + Debug {
    /// All tickets, in insertion order.
    fn list(&self) -> Result<Vec<Ticket>>;

    /// Look up one ticket by id.
    fn get(&self, id: &str) -> Result<Option<Ticket>>;

    /// Append a new ticket.
    fn append(&self, ticket: Ticket) -> Result<()>;

    /// Replace the stored ticket with the same id.
    ///
    /// Returns a not-found error when no such ticket exists.
    fn update(&self, ticket: Ticket) -> Result<()>;

    /// Number of stored tickets.
    fn count(&self) -> Result<usize>;
}

/// Storage for feedback entries.
pub trait FeedbackStore: Send + Sync + Debug {
    /// All feedback entries, in insertion order.
    fn list(&self) -> Result<Vec<FeedbackEntry>>;

    /// Insert the entry, replacing any stored entry with the same id.
    ///
    /// The `(ticket_id, article_id)` uniqueness invariant is enforced by
    /// the engine, which reuses the stored id when overwriting a pair.
    fn put(&self, entry: FeedbackEntry) -> Result<()>;

    /// Number of stored entries.
    fn count(&self) -> Result<usize>;
}

/// Append-only log of ranking invocations.
///
/// Single-writer contract: each append is a scoped exclusive acquisition
/// of the log, released on every exit path, so concurrent ranking calls
/// never interleave partial writes. Records are never mutated or
/// deleted.
pub trait ImpressionLog: Send + Sync + Debug {
    /// Append one record.
    fn append(&self, record: ImpressionRecord) -> Result<()>;

    /// Read the full log, oldest first.
    fn read_all(&self) -> Result<Vec<ImpressionRecord>>;
}

/// Dated gap-report snapshots.
///
/// Append-only history keyed by date: writing a snapshot for a date
/// never touches any other date's artifact.
pub trait ReportStore: Send + Sync + Debug {
    /// Write (or replace) the snapshot for the given date key.
    fn write_snapshot(&self, date_key: &str, report: &GapReport) -> Result<()>;

    /// Read the snapshot for the given date key, if present.
    fn read_snapshot(&self, date_key: &str) -> Result<Option<GapReport>>;

    /// All date keys with a stored snapshot, sorted ascending.
    fn list_dates(&self) -> Result<Vec<String>>;
}
