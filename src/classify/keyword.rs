//! Rule-based classifier over the shared keyword taxonomy.

use std::sync::Arc;

use crate::analysis::TextNormalizer;
use crate::classify::classifier::{
    CategoryClassifier, ClassificationOutcome, ClassificationSource,
};
use crate::error::Result;
use crate::intent::KeywordTaxonomy;

/// Maximum number of tags produced per text.
const MAX_TAGS: usize = 3;

/// Minimum token length considered tag-worthy when no intent matched.
const MIN_TAG_TOKEN_LEN: usize = 4;

/// Keyword-rule classifier.
///
/// Walks the taxonomy in order and assigns the category of the first
/// intent whose trigger matches the normalized text. Reading the same
/// table the intent detector reads keeps classification and boosting
/// from drifting apart.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    taxonomy: Arc<KeywordTaxonomy>,
    normalizer: TextNormalizer,
}

impl KeywordClassifier {
    /// Create a classifier over the given taxonomy.
    pub fn new(taxonomy: Arc<KeywordTaxonomy>) -> Self {
        Self {
            taxonomy,
            normalizer: TextNormalizer::new(),
        }
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new(Arc::new(KeywordTaxonomy::default()))
    }
}

impl CategoryClassifier for KeywordClassifier {
    fn classify(&self, text: &str) -> Result<ClassificationOutcome> {
        let normalized = self.normalizer.normalize(text);

        for intent in self.taxonomy.intents() {
            if intent.triggered_by(&normalized) {
                return Ok(ClassificationOutcome {
                    category: intent.category,
                    source: ClassificationSource::Rule {
                        intent: intent.name.clone(),
                    },
                });
            }
        }

        Ok(ClassificationOutcome::fallback("no taxonomy keyword matched"))
    }

    fn tags(&self, text: &str) -> Result<Vec<String>> {
        let normalized = self.normalizer.normalize(text);

        let mut tags: Vec<String> = self
            .taxonomy
            .intents()
            .iter()
            .filter(|intent| intent.triggered_by(&normalized))
            .map(|intent| intent.name.clone())
            .take(MAX_TAGS)
            .collect();

        if tags.is_empty() {
            // No intent matched; fall back to the first few distinctive tokens.
            for token in self.normalizer.tokenize(&normalized) {
                if token.len() >= MIN_TAG_TOKEN_LEN && !tags.contains(&token) {
                    tags.push(token);
                    if tags.len() == MAX_TAGS {
                        break;
                    }
                }
            }
        }

        Ok(tags)
    }

    fn name(&self) -> &'static str {
        "keyword"
    }
}
