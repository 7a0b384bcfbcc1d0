//! The keyword taxonomy shared by intent detection, scoring boosts, and
//! rule-based category classification.

use serde::{Deserialize, Serialize};

use crate::document::Category;

/// One intent group: its trigger keywords, its boost gate, and the
/// category it implies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentDefinition {
    /// Intent name (e.g. "refund", "shipping").
    pub name: String,
    /// Category this intent maps to in rule-based classification.
    pub category: Category,
    /// Keywords/phrases that trigger the intent when they appear as a
    /// substring of the normalized query.
    pub triggers: Vec<String>,
    /// Keywords that must appear in the normalized article text for the
    /// boost to apply.
    pub content_keywords: Vec<String>,
    /// Additive score boost when the gate matches.
    pub boost: f64,
}

impl IntentDefinition {
    /// Whether any trigger appears as a substring of the normalized query.
    pub fn triggered_by(&self, normalized_query: &str) -> bool {
        self.triggers
            .iter()
            .any(|kw| normalized_query.contains(kw.as_str()))
    }

    /// Whether any content keyword appears as a substring of the
    /// normalized article text.
    pub fn gates_content(&self, normalized_content: &str) -> bool {
        self.content_keywords
            .iter()
            .any(|kw| normalized_content.contains(kw.as_str()))
    }
}

/// An ordered collection of intent definitions.
///
/// Order matters: rule-based classification assigns the category of the
/// FIRST triggered intent. The table is serde-loadable so a deployment
/// can replace the built-in e-commerce vocabulary with its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordTaxonomy {
    intents: Vec<IntentDefinition>,
}

impl KeywordTaxonomy {
    /// Build a taxonomy from an ordered list of definitions.
    pub fn new(intents: Vec<IntentDefinition>) -> Self {
        Self { intents }
    }

    /// The intent definitions, in classification order.
    pub fn intents(&self) -> &[IntentDefinition] {
        &self.intents
    }

    /// Look up a definition by intent name.
    pub fn get(&self, name: &str) -> Option<&IntentDefinition> {
        self.intents.iter().find(|i| i.name == name)
    }
}

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl Default for KeywordTaxonomy {
    /// The built-in e-commerce support vocabulary.
    fn default() -> Self {
        Self::new(vec![
            IntentDefinition {
                name: "refund".to_string(),
                category: Category::Product,
                triggers: strings(&[
                    "refund",
                    "return",
                    "replacement",
                    "exchange",
                    "damaged",
                    "broken",
                    "defective",
                    "replace",
                    "wrong item",
                    "incorrect product",
                ]),
                content_keywords: strings(&[
                    "refund", "return", "replace", "exchange", "damaged",
                ]),
                boost: 0.30,
            },
            IntentDefinition {
                name: "shipping".to_string(),
                category: Category::Shipping,
                triggers: strings(&[
                    "delivery",
                    "delayed",
                    "delay",
                    "not received",
                    "shipped",
                    "courier",
                    "tracking",
                    "dispatch",
                    "late",
                    "order status",
                    "order delay",
                ]),
                content_keywords: strings(&[
                    "delivery",
                    "tracking",
                    "delay",
                    "dispatched",
                    "order status",
                ]),
                boost: 0.35,
            },
            IntentDefinition {
                name: "billing".to_string(),
                category: Category::Billing,
                triggers: strings(&[
                    "payment",
                    "invoice",
                    "card",
                    "failed",
                    "charged",
                    "chargeback",
                    "transaction",
                    "credit card",
                    "billing",
                ]),
                content_keywords: strings(&[
                    "payment", "billing", "card", "charge", "invoice",
                ]),
                boost: 0.25,
            },
            IntentDefinition {
                name: "product".to_string(),
                category: Category::Product,
                triggers: strings(&[
                    "size",
                    "color",
                    "feature",
                    "quality",
                    "stock",
                    "availability",
                    "out of stock",
                ]),
                content_keywords: strings(&["product", "size", "color", "quality", "stock"]),
                boost: 0.15,
            },
        ])
    }
}
