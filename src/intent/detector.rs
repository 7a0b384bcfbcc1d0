//! Intent detector implementation.

use std::sync::Arc;

use crate::intent::taxonomy::{IntentDefinition, KeywordTaxonomy};

/// Detects which intents a normalized query expresses.
///
/// An intent matches when any of its trigger keywords appears as a
/// substring of the normalized query. Intents are not mutually
/// exclusive; a query about a damaged parcel can carry both `refund`
/// and `shipping`. Pure and deterministic.
#[derive(Debug, Clone)]
pub struct IntentDetector {
    taxonomy: Arc<KeywordTaxonomy>,
}

impl IntentDetector {
    /// Create a detector over the given taxonomy.
    pub fn new(taxonomy: Arc<KeywordTaxonomy>) -> Self {
        Self { taxonomy }
    }

    /// All intents triggered by the normalized query, in taxonomy order.
    pub fn detect(&self, normalized_query: &str) -> Vec<IntentDefinition> {
        self.taxonomy
            .intents()
            .iter()
            .filter(|intent| intent.triggered_by(normalized_query))
            .cloned()
            .collect()
    }

    /// Names of the triggered intents.
    pub fn detect_names(&self, normalized_query: &str) -> Vec<String> {
        self.detect(normalized_query)
            .into_iter()
            .map(|intent| intent.name)
            .collect()
    }

    /// The taxonomy this detector reads from.
    pub fn taxonomy(&self) -> &KeywordTaxonomy {
        &self.taxonomy
    }
}

impl Default for IntentDetector {
    fn default() -> Self {
        Self::new(Arc::new(KeywordTaxonomy::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_single_intent() {
        let detector = IntentDetector::default();
        let names = detector.detect_names("my package is delayed and has not arrived");
        assert_eq!(names, vec!["shipping"]);
    }

    #[test]
    fn test_detect_multiple_intents() {
        let detector = IntentDetector::default();
        let names = detector.detect_names("refund for a delayed delivery");
        assert_eq!(names, vec!["refund", "shipping"]);
    }

    #[test]
    fn test_detect_no_intent() {
        let detector = IntentDetector::default();
        assert!(detector.detect_names("how do i change my password").is_empty());
    }

    #[test]
    fn test_detect_empty_query() {
        let detector = IntentDetector::default();
        assert!(detector.detect_names("").is_empty());
    }
}
