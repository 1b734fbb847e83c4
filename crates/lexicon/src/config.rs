//! Configuration and error types for the keyword lexicon.
//!
//! Keyword tables are plain data. The built-in Thai/English tables are the
//! default; deployments for another campus or language swap them through
//! [`LexiconConfig`] without touching the matching code.

use canonical::normalize;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::category::Category;
use crate::tables::{
    default_area_groups, default_brand_keywords, default_category_table, default_color_keywords,
};

/// Score assigned when two locations fall in the same keyword area group.
pub const DEFAULT_SAME_AREA_SCORE: f64 = 0.9;

/// Keywords that indicate one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryKeywords {
    pub category: Category,
    pub keywords: Vec<String>,
}

/// A named general area ("canteen", "library", ...) and its synonyms.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AreaGroup {
    pub name: String,
    pub keywords: Vec<String>,
}

/// Complete keyword configuration for classification, area grouping and
/// bonus signals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LexiconConfig {
    /// Ordered category table; first hit wins.
    #[serde(default = "default_category_table")]
    pub categories: Vec<CategoryKeywords>,
    /// Ordered area groups for location matching.
    #[serde(default = "default_area_groups")]
    pub areas: Vec<AreaGroup>,
    /// Brand and model keywords for the brand bonus.
    #[serde(default = "default_brand_keywords")]
    pub brands: Vec<String>,
    /// Color keywords for the color bonus.
    #[serde(default = "default_color_keywords")]
    pub colors: Vec<String>,
    /// Location score when both sides share an area group.
    #[serde(default = "LexiconConfig::default_same_area_score")]
    pub same_area_score: f64,
}

impl LexiconConfig {
    pub(crate) fn default_same_area_score() -> f64 {
        DEFAULT_SAME_AREA_SCORE
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(mut self, categories: Vec<CategoryKeywords>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_areas(mut self, areas: Vec<AreaGroup>) -> Self {
        self.areas = areas;
        self
    }

    pub fn with_brands(mut self, brands: Vec<String>) -> Self {
        self.brands = brands;
        self
    }

    pub fn with_colors(mut self, colors: Vec<String>) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_same_area_score(mut self, score: f64) -> Self {
        self.same_area_score = score;
        self
    }

    /// Validate table shape. Brand and color lists may be empty, which
    /// disables the corresponding bonus.
    pub fn validate(&self) -> Result<(), LexiconError> {
        if self.categories.is_empty() {
            return Err(LexiconError::EmptyTable("categories"));
        }
        if self.areas.is_empty() {
            return Err(LexiconError::EmptyTable("areas"));
        }
        for entry in &self.categories {
            check_keywords(entry.category.as_str(), &entry.keywords)?;
        }
        for area in &self.areas {
            if area.name.trim().is_empty() {
                return Err(LexiconError::UnnamedArea);
            }
            check_keywords(&area.name, &area.keywords)?;
        }
        check_keywords("brands", &self.brands)?;
        check_keywords("colors", &self.colors)?;
        if !(0.0..=1.0).contains(&self.same_area_score) {
            return Err(LexiconError::InvalidScore {
                name: "same_area_score",
                value: self.same_area_score,
            });
        }
        Ok(())
    }
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            categories: default_category_table(),
            areas: default_area_groups(),
            brands: default_brand_keywords(),
            colors: default_color_keywords(),
            same_area_score: DEFAULT_SAME_AREA_SCORE,
        }
    }
}

/// Errors returned when building lexicon components from configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LexiconError {
    #[error("keyword table `{0}` must not be empty")]
    EmptyTable(&'static str),

    #[error("group `{group}` contains an empty keyword")]
    EmptyKeyword { group: String },

    #[error("area group name must not be empty")]
    UnnamedArea,

    #[error("invalid {name}: {value} is outside [0, 1]")]
    InvalidScore { name: &'static str, value: f64 },
}

fn check_keywords(group: &str, keywords: &[String]) -> Result<(), LexiconError> {
    if keywords.iter().any(|k| k.trim().is_empty()) {
        return Err(LexiconError::EmptyKeyword {
            group: group.to_string(),
        });
    }
    Ok(())
}

/// Normalize every keyword so lookups can compare against normalized text.
pub(crate) fn normalize_keywords(
    group: &str,
    keywords: Vec<String>,
) -> Result<Vec<String>, LexiconError> {
    check_keywords(group, &keywords)?;
    Ok(keywords.iter().map(|k| normalize(k)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = LexiconConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.same_area_score, DEFAULT_SAME_AREA_SCORE);
        assert_eq!(cfg.areas.len(), 12);
    }

    #[test]
    fn empty_keyword_rejected() {
        let cfg = LexiconConfig::new().with_brands(vec!["apple".into(), "  ".into()]);
        assert_eq!(
            cfg.validate(),
            Err(LexiconError::EmptyKeyword {
                group: "brands".into()
            })
        );
    }

    #[test]
    fn empty_areas_rejected() {
        let cfg = LexiconConfig::new().with_areas(Vec::new());
        assert_eq!(cfg.validate(), Err(LexiconError::EmptyTable("areas")));
    }

    #[test]
    fn out_of_range_area_score_rejected() {
        let cfg = LexiconConfig::new().with_same_area_score(1.5);
        assert!(matches!(
            cfg.validate(),
            Err(LexiconError::InvalidScore {
                name: "same_area_score",
                ..
            })
        ));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: LexiconConfig =
            serde_json::from_str(r#"{"brands": ["acme"]}"#).expect("deserialize");
        assert_eq!(cfg.brands, vec!["acme".to_string()]);
        assert_eq!(cfg.categories, default_category_table());
        assert_eq!(cfg.same_area_score, DEFAULT_SAME_AREA_SCORE);
    }
}
