//! Text analysis: normalization and tokenization.
//!
//! Every piece of text that enters the scoring pipeline — ticket
//! descriptions, queries, article titles and bodies — passes through
//! [`TextNormalizer`] first, so stored and freshly computed term sets
//! stay comparable.

pub mod normalizer;

pub use normalizer::TextNormalizer;
