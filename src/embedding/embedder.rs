//! Embedding provider trait.

use std::fmt::Debug;

use crate::error::Result;

/// A provider that maps text to a fixed-dimension unit vector.
///
/// Implementations must be deterministic: identical input text yields the
/// identical vector, including across process restarts, so stored article
/// embeddings remain comparable to freshly computed query embeddings.
///
/// The returned vector is either empty ("no embedding available" — e.g.
/// for empty input, or a remote provider that timed out) or has exactly
/// `dimension()` components with unit L2 norm. Callers treat an empty
/// vector as disabling the similarity term for that comparison.
pub trait TextEmbedder: Send + Sync + Debug {
    /// Embed the given text.
    fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// The fixed output dimension of this provider.
    fn dimension(&self) -> usize;

    /// Name of this provider (for diagnostics).
    fn name(&self) -> &'static str;
}
