//! In-memory store implementations.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::document::{Article, FeedbackEntry, ImpressionRecord, Ticket};
use crate::error::{Result, SherpaError};
use crate::gap::GapReport;
use crate::storage::traits::{
    ArticleStore, FeedbackStore, ImpressionLog, ReportStore, TicketStore,
};

/// In-memory article store.
#[derive(Debug, Default)]
pub struct MemoryArticleStore {
    articles: RwLock<Vec<Article>>,
}

impl MemoryArticleStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store preloaded with articles.
    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self {
            articles: RwLock::new(articles),
        }
    }
}

impl ArticleStore for MemoryArticleStore {
    fn list(&self) -> Result<Vec<Article>> {
        Ok(self.articles.read().clone())
    }

    fn get(&self, id: &str) -> Result<Option<Article>> {
        Ok(self.articles.read().iter().find(|a| a.id == id).cloned())
    }

    fn append(&self, article: Article) -> Result<()> {
        self.articles.write().push(article);
        Ok(())
    }

    fn count(&self) -> Result<usize> {
        Ok(self.articles.read().len())
    }
}

/// In-memory ticket store.
#[derive(Debug, Default)]
pub struct MemoryTicketStore {
    tickets: RwLock<Vec<Ticket>>,
}

impl MemoryTicketStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store preloaded with tickets.
    pub fn with_tickets(tickets: Vec<Ticket>) -> Self {
        Self {
            tickets: RwLock::new(tickets),
        }
    }
}

impl TicketStore for MemoryTicketStore {
    fn list(&self) -> Result<Vec<Ticket>> {
        Ok(self.tickets.read().clone())
    }

    fn get(&self, id: &str) -> Result<Option<Ticket>> {
        Ok(self.tickets.read().iter().find(|t| t.id == id).cloned())
    }

    fn append(&self, ticket: Ticket) -> Result<()> {
        self.tickets.write().push(ticket);
        Ok(())
    }

    fn update(&self, ticket: Ticket) -> Result<()> {
        let mut tickets = self.tickets.write();
        match tickets.iter_mut().find(|t| t.id == ticket.id) {
            Some(stored) => {
                *stored = ticket;
                Ok(())
            }
            None => Err(SherpaError::not_found(format!("ticket {}", ticket.id))),
        }
    }

    fn count(&self) -> Result<usize> {
        Ok(self.tickets.read().len())
    }
}

/// In-memory feedback store.
#[derive(Debug, Default)]
pub struct MemoryFeedbackStore {
    entries: RwLock<Vec<FeedbackEntry>>,
}

impl MemoryFeedbackStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store preloaded with entries.
    pub fn with_entries(entries: Vec<FeedbackEntry>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }
}

impl FeedbackStore for MemoryFeedbackStore {
    fn list(&self) -> Result<Vec<FeedbackEntry>> {
        Ok(self.entries.read().clone())
    }

    fn put(&self, entry: FeedbackEntry) -> Result<()> {
        let mut entries = self.entries.write();
        match entries.iter_mut().find(|e| e.id == entry.id) {
            Some(stored) => *stored = entry,
            None => entries.push(entry),
        }
        Ok(())
    }

    fn count(&self) -> Result<usize> {
        Ok(self.entries.read().len())
    }
}

/// In-memory append-only impression log.
#[derive(Debug, Default)]
pub struct MemoryImpressionLog {
    records: RwLock<Vec<ImpressionRecord>>,
}

impl MemoryImpressionLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log preloaded with records.
    pub fn with_records(records: Vec<ImpressionRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl ImpressionLog for MemoryImpressionLog {
    fn append(&self, record: ImpressionRecord) -> Result<()> {
        self.records.write().push(record);
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<ImpressionRecord>> {
        Ok(self.records.read().clone())
    }
}

/// In-memory dated snapshot store.
#[derive(Debug, Default)]
pub struct MemoryReportStore {
    snapshots: RwLock<BTreeMap<String, GapReport>>,
}

impl MemoryReportStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportStore for MemoryReportStore {
    fn write_snapshot(&self, date_key: &str, report: &GapReport) -> Result<()> {
        self.snapshots
            .write()
            .insert(date_key.to_string(), report.clone());
        Ok(())
    }

    fn read_snapshot(&self, date_key: &str) -> Result<Option<GapReport>> {
        Ok(self.snapshots.read().get(date_key).cloned())
    }

    fn list_dates(&self) -> Result<Vec<String>> {
        Ok(self.snapshots.read().keys().cloned().collect())
    }
}
