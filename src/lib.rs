//! # Sherpa
//!
//! A knowledge-base recommendation and evaluation engine for support
//! tickets.
//!
//! ## Features
//!
//! - Deterministic text normalization and embedding generation
//! - Combined lexical / semantic / intent relevance scoring
//! - Category-filtered top-k ranking with a never-empty fallback
//! - Feedback-derived and labeled-dataset evaluation metrics
//! - Impression/click gap analysis with dated snapshots
//! - Threshold alerting with pending-until-delivered semantics
//!
//! The [`engine::SupportEngine`] facade wires the pieces together;
//! every collaborator (embedding provider, category classifier, stores,
//! notification sink) is injected behind a trait.

pub mod alerts;
pub mod analysis;
pub mod classify;
pub mod cli;
pub mod document;
pub mod embedding;
pub mod engine;
pub mod error;
pub mod evaluation;
pub mod gap;
pub mod intent;
pub mod recommend;
pub mod storage;

pub mod prelude {
    //! Convenience re-exports for embedding the engine.

    pub use crate::document::{
        Article, ArticleDraft, Category, FeedbackEntry, LabeledExample, Ticket, TicketDraft,
        TicketStatus,
    };
    pub use crate::engine::{EngineConfig, EngineStores, SupportEngine};
    pub use crate::error::{Result, SherpaError};
    pub use crate::recommend::RankedArticle;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
