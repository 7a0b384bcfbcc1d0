//! Embedding providers and vector similarity.
//!
//! The [`TextEmbedder`] trait is the injection seam for embedding
//! computation: article ingestion and query scoring both go through it,
//! so a model-backed provider can replace the default without touching
//! the scoring engine.

pub mod embedder;
pub mod hash;
pub mod similarity;

pub use embedder::TextEmbedder;
pub use hash::HashEmbedder;
pub use similarity::{cosine_similarity, l2_normalize};
