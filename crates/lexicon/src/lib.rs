//! Lost-and-found keyword lexicon.
//!
//! Everything the matcher knows about the vocabulary of lost items lives
//! here as immutable data:
//!
//! - [`CategoryClassifier`]: infers a [`Category`] from free text.
//! - [`LocationMatcher`]: groups location strings into general areas.
//! - [`KeywordList`]: brand and color lists for co-occurrence bonuses.
//!
//! [`Lexicon`] bundles all of them and is built once from a
//! [`LexiconConfig`]; nothing here holds global or mutable state, so tests
//! can swap in alternate tables freely.
//!
//! ```rust
//! use lexicon::{Category, Lexicon, LexiconConfig};
//!
//! let lexicon = Lexicon::from_config(&LexiconConfig::default()).expect("valid lexicon");
//! assert_eq!(lexicon.classifier().classify("กุญแจรถ"), Some(Category::Keys));
//! assert_eq!(lexicon.locations().location_similarity("ห้องสมุด", "library"), 0.9);
//! ```

mod category;
mod config;
mod keywords;
mod location;
mod tables;

pub use crate::category::{Category, CategoryClassifier};
pub use crate::config::{
    AreaGroup, CategoryKeywords, LexiconConfig, LexiconError, DEFAULT_SAME_AREA_SCORE,
};
pub use crate::keywords::{contains_keyword, KeywordList};
pub use crate::location::LocationMatcher;
pub use crate::tables::{
    default_area_groups, default_brand_keywords, default_category_table, default_color_keywords,
};

/// All keyword-driven components used by the match scorer.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexicon {
    classifier: CategoryClassifier,
    locations: LocationMatcher,
    brands: KeywordList,
    colors: KeywordList,
}

impl Lexicon {
    pub fn from_config(cfg: &LexiconConfig) -> Result<Self, LexiconError> {
        cfg.validate()?;
        Ok(Self {
            classifier: CategoryClassifier::new(cfg.categories.clone())?,
            locations: LocationMatcher::new(cfg.areas.clone(), cfg.same_area_score)?,
            brands: KeywordList::new("brands", cfg.brands.clone())?,
            colors: KeywordList::new("colors", cfg.colors.clone())?,
        })
    }

    pub fn classifier(&self) -> &CategoryClassifier {
        &self.classifier
    }

    pub fn locations(&self) -> &LocationMatcher {
        &self.locations
    }

    pub fn brands(&self) -> &KeywordList {
        &self.brands
    }

    pub fn colors(&self) -> &KeywordList {
        &self.colors
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            classifier: CategoryClassifier::default(),
            locations: LocationMatcher::default(),
            brands: KeywordList::new("brands", default_brand_keywords()).unwrap_or_default(),
            colors: KeywordList::new("colors", default_color_keywords()).unwrap_or_default(),
        }
    }
}
