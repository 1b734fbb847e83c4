//! Item categories and keyword-based category inference.

use std::fmt;

use canonical::normalize;
use serde::{Deserialize, Serialize};

use crate::config::{normalize_keywords, CategoryKeywords, LexiconError};
use crate::keywords::contains_keyword;
use crate::tables::default_category_table;

/// Item category as declared on a report or inferred from its text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    IdCard,
    Wallet,
    Phone,
    Electronics,
    Keys,
    Bag,
    Documents,
    WaterBottle,
    Stationery,
    Clothing,
    Accessories,
    Other,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::IdCard,
        Category::Wallet,
        Category::Phone,
        Category::Electronics,
        Category::Keys,
        Category::Bag,
        Category::Documents,
        Category::WaterBottle,
        Category::Stationery,
        Category::Clothing,
        Category::Accessories,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::IdCard => "id_card",
            Category::Wallet => "wallet",
            Category::Phone => "phone",
            Category::Electronics => "electronics",
            Category::Keys => "keys",
            Category::Bag => "bag",
            Category::Documents => "documents",
            Category::WaterBottle => "water_bottle",
            Category::Stationery => "stationery",
            Category::Clothing => "clothing",
            Category::Accessories => "accessories",
            Category::Other => "other",
        }
    }

    /// `Other` is a catch-all and carries no information for filtering.
    pub fn is_specific(&self) -> bool {
        !matches!(self, Category::Other)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Infers a [`Category`] from free text by keyword lookup (see
/// [`contains_keyword`]).
///
/// The table is ordered; the first category with a keyword hit wins. Keywords
/// are normalized once at construction.
///
/// ```rust
/// use lexicon::{Category, CategoryClassifier};
///
/// let classifier = CategoryClassifier::default();
/// assert_eq!(classifier.classify("พวงกุญแจ"), Some(Category::Keys));
/// assert_eq!(classifier.classify("Black WALLET"), Some(Category::Wallet));
/// assert_eq!(classifier.classify("something else"), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryClassifier {
    table: Vec<CategoryKeywords>,
}

impl CategoryClassifier {
    pub fn new(table: Vec<CategoryKeywords>) -> Result<Self, LexiconError> {
        if table.is_empty() {
            return Err(LexiconError::EmptyTable("categories"));
        }
        let table = table
            .into_iter()
            .map(|entry| {
                let keywords = normalize_keywords(entry.category.as_str(), entry.keywords)?;
                Ok(CategoryKeywords {
                    category: entry.category,
                    keywords,
                })
            })
            .collect::<Result<Vec<_>, LexiconError>>()?;
        Ok(Self { table })
    }

    pub fn classify(&self, text: &str) -> Option<Category> {
        let text = normalize(text);
        if text.is_empty() {
            return None;
        }
        self.table
            .iter()
            .find(|entry| entry.keywords.iter().any(|k| contains_keyword(&text, k)))
            .map(|entry| entry.category)
    }

    pub fn table(&self) -> &[CategoryKeywords] {
        &self.table
    }
}

impl Default for CategoryClassifier {
    fn default() -> Self {
        Self {
            table: default_category_table(),
        }
    }
}
