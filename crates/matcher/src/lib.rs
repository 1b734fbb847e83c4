//! # Lost & Found Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` pairs lost-item reports with found-item reports. It sits on top
//! of the text layer (`canonical`) and the keyword tables (`lexicon`) and is
//! responsible for narrowing candidates, scoring each pair on several
//! weighted criteria, explaining the score, and returning a ranked list.
//!
//! The crate is a pure library: it never fetches or persists records. Callers
//! load both collections from their own store, hand them in by reference and
//! get back [`MatchResult`] values that borrow those records.
//!
//! ## Core Types
//!
//! - [`LostItem`], [`FoundItem`]: report records with their lifecycle status.
//! - [`Report`]: either kind, tagged with `kind` for serde.
//! - [`MatchConfig`]: weights, sub-score tables, time tiers, bonuses,
//!   confidence thresholds, the validity gate and engine knobs.
//! - [`MatchScorer`]: scores one lost/found pair and collects [`MatchReason`]s.
//! - [`CandidateFilter`]: status, category and time-window narrowing.
//! - [`MatchEngine`]: orchestrates filter → scorer → gate → sort.
//!
//! ## Scoring
//!
//! | criterion   | weight | sub-score                                           |
//! |-------------|--------|-----------------------------------------------------|
//! | category    | 0.20   | 1.0 same, 0.3 different, 0.5 either side unknown    |
//! | item name   | 0.35   | lost item name vs found description                 |
//! | location    | 0.20   | exact 1.0, same area group 0.9, else fuzzy           |
//! | description | 0.15   | lost description vs found description               |
//! | time        | 0.10   | ≤1d 1.0, ≤3d 0.8, ≤7d 0.5, ≤14d 0.2, else 0          |
//!
//! A shared brand keyword adds 0.10 and a shared color keyword adds 0.05
//! (first match only); the total is clamped to `[0, 1]`. Results below 0.40 or
//! without any reason are dropped.
//!
//! ## Example Usage
//!
//! ```rust
//! use matcher::demo_utils::{demo_timestamp, found_item, lost_item};
//! use matcher::{Confidence, MatchEngine};
//!
//! let engine = MatchEngine::default();
//! let lost = lost_item("l-1", "กุญแจ", "สนามกีฬา", demo_timestamp());
//! let found = vec![
//!     found_item("f-1", "พวงกุญแจ", "สนามกีฬา", demo_timestamp()),
//!     found_item("f-2", "ขวดน้ำ", "ห้องสมุด", demo_timestamp()),
//! ];
//!
//! let matches = engine.find_matches_for_lost(&lost, &found);
//! assert_eq!(matches[0].found.id, "f-1");
//! assert_eq!(matches[0].confidence, Confidence::High);
//! for m in &matches {
//!     println!("{} {} {:?}", m.found.id, m.percentage(), m.reason_texts());
//! }
//! ```
//!
//! ## Observability
//!
//! Every engine call opens a `tracing` span and emits a `match_success`
//! event. Install a [`MatchMetrics`] implementation via [`set_match_metrics`]
//! to record latency, candidate and hit counts as well.

pub mod config;
pub mod engine;
pub mod filter;
pub mod metrics;
pub mod scorer;
pub mod types;

#[doc(hidden)]
pub mod demo_utils;

pub use crate::config::{
    BonusConfig, CategoryScores, ConfidenceThresholds, CriterionWeights, MatchConfig,
    ReasonThresholds, TimeTier,
};
pub use crate::engine::MatchEngine;
pub use crate::filter::{CandidateFilter, FilterStats};
pub use crate::metrics::{set_match_metrics, MatchDirection, MatchMetrics};
pub use crate::scorer::MatchScorer;
pub use crate::types::{
    days_apart, format_percentage, top_matches, Confidence, FoundItem, FoundStatus, ItemRecord,
    LostItem, LostStatus, MatchError, MatchReason, MatchResult, Report, ScoreBreakdown,
};
