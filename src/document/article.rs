//! Knowledge-base article types.

use serde::{Deserialize, Serialize};

/// Fixed set of support categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    /// Payments, invoices, charges.
    Billing,
    /// Login, profile, account access.
    Account,
    /// Product defects, bugs, technical failures.
    Technical,
    /// Product details, sizing, availability, returns.
    Product,
    /// Delivery, tracking, couriers.
    Shipping,
    /// Anything that fits nowhere else.
    #[default]
    Other,
}

impl Category {
    /// Canonical display name of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Billing => "Billing",
            Category::Account => "Account",
            Category::Technical => "Technical",
            Category::Product => "Product",
            Category::Shipping => "Shipping",
            Category::Other => "Other",
        }
    }

    /// All categories, in declaration order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Billing,
            Category::Account,
            Category::Technical,
            Category::Product,
            Category::Shipping,
            Category::Other,
        ]
    }

    /// Parse a category name, case-insensitively. Unknown names map to
    /// `Other` rather than failing — category input comes from external
    /// classifiers and user filters, and a bad value must not abort
    /// ticket intake.
    pub fn parse_lenient(s: &str) -> Category {
        let lowered = s.trim().to_lowercase();
        Category::all()
            .iter()
            .copied()
            .find(|c| c.as_str().to_lowercase() == lowered)
            .unwrap_or(Category::Other)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A knowledge-base article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Unique, stable identifier.
    pub id: String,
    /// Article title.
    pub title: String,
    /// Article body.
    pub content: String,
    /// Assigned category.
    #[serde(default)]
    pub category: Category,
    /// Short descriptive tags, in assignment order.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Unit embedding vector, computed once at creation. Empty means
    /// "no embedding available" and disables the similarity term.
    #[serde(default)]
    pub embedding: Vec<f32>,
}

impl Article {
    /// The text the article is matched against: title plus content.
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.title, self.content)
    }
}

/// Fields required to create an article; id, category, tags, and
/// embedding are assigned by the engine at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDraft {
    /// Article title.
    pub title: String,
    /// Article body.
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_lenient() {
        assert_eq!(Category::parse_lenient("shipping"), Category::Shipping);
        assert_eq!(Category::parse_lenient("  BILLING "), Category::Billing);
        assert_eq!(Category::parse_lenient("gibberish"), Category::Other);
        assert_eq!(Category::parse_lenient(""), Category::Other);
    }

    #[test]
    fn test_searchable_text() {
        let article = Article {
            id: "art_1".to_string(),
            title: "Tracking your order".to_string(),
            content: "delivery information".to_string(),
            category: Category::Shipping,
            tags: vec![],
            embedding: vec![],
        };
        assert_eq!(
            article.searchable_text(),
            "Tracking your order delivery information"
        );
    }
}
