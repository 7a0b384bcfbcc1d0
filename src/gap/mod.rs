//! Gap analysis over impressions, clicks, and ticket outcomes.
//!
//! A scheduled (or on-demand) batch job that aggregates the impression
//! log and the feedback log into per-article click-through stats and an
//! overall coverage/resolution summary, then persists a dated snapshot.
//! Derived stats are disposable: every run recomputes them from the
//! ground-truth logs, nothing is incrementally patched.

pub mod analyzer;
pub mod report;

pub use analyzer::GapAnalyzer;
pub use report::{GapReport, GapSummary, PerArticleStat};

/// Articles with impressions but a click-through rate below this
/// percentage are flagged as under-performing.
pub const LOW_CTR_THRESHOLD: f64 = 10.0;
