//! Classifier trait and outcome types.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::document::Category;
use crate::error::Result;

/// How a category was decided.
///
/// Fallback is a visible variant rather than a swallowed failure, so
/// callers (and their logs) can tell a keyword match from a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassificationSource {
    /// A taxonomy rule matched; carries the intent name that decided it.
    Rule {
        /// The intent whose trigger matched.
        intent: String,
    },
    /// No rule matched (or the collaborator declined); carries why.
    Fallback {
        /// Reason the default was used.
        reason: String,
    },
}

/// The result of classifying a piece of text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationOutcome {
    /// The decided category.
    pub category: Category,
    /// How the decision was made.
    pub source: ClassificationSource,
}

impl ClassificationOutcome {
    /// An explicit default-with-reason outcome.
    pub fn fallback<S: Into<String>>(reason: S) -> Self {
        Self {
            category: Category::Other,
            source: ClassificationSource::Fallback {
                reason: reason.into(),
            },
        }
    }
}

/// A category/tag classifier.
///
/// Implementations may be rule-based or remote. A remote implementation
/// owns its own timeout and returns an error past it; the engine
/// degrades to the documented defaults rather than propagating.
pub trait CategoryClassifier: Send + Sync + Debug {
    /// Classify the text into a support category.
    fn classify(&self, text: &str) -> Result<ClassificationOutcome>;

    /// Extract short descriptive tags from the text.
    fn tags(&self, text: &str) -> Result<Vec<String>>;

    /// Name of this classifier (for diagnostics).
    fn name(&self) -> &'static str;
}
