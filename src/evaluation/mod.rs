//! Recommendation quality evaluation.
//!
//! Two read-only modes: metrics derived from the accumulated feedback
//! log, and evaluation of the live ranker against a labeled dataset.

pub mod dataset;
pub mod feedback;

pub use dataset::{DatasetReport, PredictionDetail, evaluate_dataset};
pub use feedback::{FeedbackMetrics, accuracy_percent, metrics_from_feedback};
