//! Workspace umbrella crate for the lost & found matching engine.
//!
//! This crate re-exports the three stages (text similarity, keyword
//! lexicon, matcher) behind one import path and adds YAML configuration
//! loading, so a service can go from a config file to ranked matches with a
//! single dependency:
//!
//! ```no_run
//! use lostfound::{LostFoundConfig, LostItem, FoundItem};
//!
//! let config = LostFoundConfig::from_file("lostfound.yaml").expect("config");
//! let engine = config.build_engine().expect("engine");
//!
//! let lost: Vec<LostItem> = Vec::new();
//! let found: Vec<FoundItem> = Vec::new();
//! for m in engine.auto_match(&lost, &found) {
//!     println!("{} ↔ {} {}", m.lost.id, m.found.id, m.percentage());
//! }
//! ```

pub mod config;

pub use crate::config::{ConfigLoadError, LostFoundConfig};

pub use canonical::{
    collapse_whitespace, jaccard, ngrams, normalize, normalize_opt, similarity, word_overlap,
    NgramSet, DEFAULT_NGRAM_SIZE,
};
pub use lexicon::{
    AreaGroup, Category, CategoryClassifier, CategoryKeywords, KeywordList, Lexicon,
    LexiconConfig, LexiconError, LocationMatcher,
};
pub use matcher::{
    days_apart, format_percentage, set_match_metrics, top_matches, BonusConfig, CandidateFilter,
    CategoryScores, Confidence, ConfidenceThresholds, CriterionWeights, FilterStats, FoundItem,
    FoundStatus, ItemRecord, LostItem, LostStatus, MatchConfig, MatchDirection, MatchEngine,
    MatchError, MatchMetrics, MatchReason, MatchResult, MatchScorer, ReasonThresholds, Report,
    ScoreBreakdown, TimeTier,
};
