//! Text normalizer implementation.

use ahash::AHashSet;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_ALPHANUMERIC: Regex = Regex::new(r"[^a-z0-9\s]").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Normalizes raw text into a canonical lowercase form.
///
/// `normalize` is pure and total: any input (including empty or garbage
/// text) produces a string containing only lowercase ASCII letters,
/// digits, and single spaces. Applying it twice yields the same result.
#[derive(Clone, Debug, Default)]
pub struct TextNormalizer;

impl TextNormalizer {
    /// Create a new text normalizer.
    pub fn new() -> Self {
        TextNormalizer
    }

    /// Lowercase, strip non-alphanumeric characters, collapse whitespace.
    ///
    /// Stripped characters are replaced with a space before collapsing,
    /// so hyphenated or punctuated words split into separate terms
    /// ("wrong-item" becomes "wrong item").
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let stripped = NON_ALPHANUMERIC.replace_all(&lowered, " ");
        WHITESPACE_RUN
            .replace_all(&stripped, " ")
            .trim()
            .to_string()
    }

    /// Split normalized text into terms on whitespace.
    pub fn tokenize(&self, normalized: &str) -> Vec<String> {
        normalized.split_whitespace().map(str::to_string).collect()
    }

    /// Normalize raw text and collect its distinct terms.
    pub fn term_set(&self, text: &str) -> AHashSet<String> {
        self.normalize(text)
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}
