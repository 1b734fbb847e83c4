//! Scoring policy for the match engine.
//!
//! Every weight, threshold and bonus the scorer uses is a named field here,
//! so a deployment can tune the policy (or a test can pin it) without
//! touching the algorithm. Defaults reproduce the production policy.

use serde::{Deserialize, Serialize};

use crate::types::{Confidence, MatchError};

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Weights of the five core criteria. They must sum to 1.0.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CriterionWeights {
    pub category: f64,
    pub item_name: f64,
    pub location: f64,
    pub description: f64,
    pub time: f64,
}

impl CriterionWeights {
    pub fn sum(&self) -> f64 {
        self.category + self.item_name + self.location + self.description + self.time
    }

    fn named(&self) -> [(&'static str, f64); 5] {
        [
            ("category", self.category),
            ("item_name", self.item_name),
            ("location", self.location),
            ("description", self.description),
            ("time", self.time),
        ]
    }
}

impl Default for CriterionWeights {
    fn default() -> Self {
        Self {
            category: 0.20,
            item_name: 0.35,
            location: 0.20,
            description: 0.15,
            time: 0.10,
        }
    }
}

/// Category agreement sub-scores.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryScores {
    /// Both categories known and equal.
    pub same: f64,
    /// Both categories known and different.
    pub different: f64,
    /// Either side unknown.
    pub unknown: f64,
}

impl Default for CategoryScores {
    fn default() -> Self {
        Self {
            same: 1.0,
            different: 0.3,
            unknown: 0.5,
        }
    }
}

/// Sub-score levels above which a human-readable reason is emitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReasonThresholds {
    pub item_name: f64,
    pub location: f64,
    pub description: f64,
    /// Time tiers up to this many days produce a reason.
    pub max_time_reason_days: u32,
}

impl Default for ReasonThresholds {
    fn default() -> Self {
        Self {
            item_name: 0.6,
            location: 0.5,
            description: 0.4,
            max_time_reason_days: 7,
        }
    }
}

/// Time-proximity step: a gap of at most `max_days` scores `score`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TimeTier {
    pub max_days: u32,
    pub score: f64,
}

impl TimeTier {
    pub const fn new(max_days: u32, score: f64) -> Self {
        Self { max_days, score }
    }
}

/// Additive bonuses applied after the weighted sum.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BonusConfig {
    pub brand: f64,
    pub color: f64,
}

impl Default for BonusConfig {
    fn default() -> Self {
        Self {
            brand: 0.10,
            color: 0.05,
        }
    }
}

/// Lower score bounds of the `high` and `medium` confidence tiers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfidenceThresholds {
    pub high: f64,
    pub medium: f64,
}

impl ConfidenceThresholds {
    pub fn classify(&self, score: f64) -> Confidence {
        if score >= self.high {
            Confidence::High
        } else if score >= self.medium {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self {
            high: 0.70,
            medium: 0.55,
        }
    }
}

/// Configuration for the scorer, candidate filter and engine.
///
/// Cheap to clone and serde-friendly, so it can be embedded in a YAML file
/// or passed across process boundaries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchConfig {
    /// Configuration schema version. Bump on any change that alters scores.
    #[serde(default = "MatchConfig::default_version")]
    pub version: u32,
    #[serde(default)]
    pub weights: CriterionWeights,
    #[serde(default)]
    pub category_scores: CategoryScores,
    #[serde(default)]
    pub reason_thresholds: ReasonThresholds,
    /// Ascending by `max_days`; gaps beyond the last tier score 0.
    #[serde(default = "MatchConfig::default_time_tiers")]
    pub time_tiers: Vec<TimeTier>,
    #[serde(default)]
    pub bonuses: BonusConfig,
    #[serde(default)]
    pub confidence: ConfidenceThresholds,
    /// Validity gate: minimum score for a result to be returned.
    #[serde(default = "MatchConfig::default_min_score")]
    pub min_score: f64,
    /// Validity gate: minimum number of reasons for a result to be returned.
    #[serde(default = "MatchConfig::default_min_reasons")]
    pub min_reasons: usize,
    /// Candidates further than this from the source date are never scored.
    #[serde(default = "MatchConfig::default_time_window_days")]
    pub time_window_days: u32,
    /// Optional cap on the results of a single-source lookup.
    #[serde(default)]
    pub max_results: Option<usize>,
    /// Score candidate pairs on the rayon thread pool.
    #[serde(default)]
    pub use_parallel: bool,
}

impl MatchConfig {
    pub(crate) fn default_version() -> u32 {
        1
    }

    pub(crate) fn default_time_tiers() -> Vec<TimeTier> {
        vec![
            TimeTier::new(1, 1.0),
            TimeTier::new(3, 0.8),
            TimeTier::new(7, 0.5),
            TimeTier::new(14, 0.2),
        ]
    }

    pub(crate) fn default_min_score() -> f64 {
        0.40
    }

    pub(crate) fn default_min_reasons() -> usize {
        1
    }

    pub(crate) fn default_time_window_days() -> u32 {
        30
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(mut self, weights: CriterionWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_time_tiers(mut self, tiers: Vec<TimeTier>) -> Self {
        self.time_tiers = tiers;
        self
    }

    pub fn with_bonuses(mut self, bonuses: BonusConfig) -> Self {
        self.bonuses = bonuses;
        self
    }

    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn with_time_window_days(mut self, days: u32) -> Self {
        self.time_window_days = days;
        self
    }

    pub fn with_max_results(mut self, max_results: Option<usize>) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }

    /// Time-proximity sub-score for a gap of `days`. Non-increasing in `days`
    /// for any tier list that passes [`validate`](Self::validate).
    pub fn time_score(&self, days: f64) -> f64 {
        self.time_tier(days).map(|tier| tier.score).unwrap_or(0.0)
    }

    /// First tier whose bound covers `days`.
    pub fn time_tier(&self, days: f64) -> Option<&TimeTier> {
        self.time_tiers
            .iter()
            .find(|tier| days <= f64::from(tier.max_days))
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        if self.version == 0 {
            return Err(invalid("version must be >= 1"));
        }

        for (name, weight) in self.weights.named() {
            check_unit(&format!("weights.{name}"), weight)?;
        }
        let sum = self.weights.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(invalid(format!("weights must sum to 1.0 (got {sum})")));
        }

        check_unit("category_scores.same", self.category_scores.same)?;
        check_unit("category_scores.different", self.category_scores.different)?;
        check_unit("category_scores.unknown", self.category_scores.unknown)?;

        check_unit("reason_thresholds.item_name", self.reason_thresholds.item_name)?;
        check_unit("reason_thresholds.location", self.reason_thresholds.location)?;
        check_unit("reason_thresholds.description", self.reason_thresholds.description)?;

        for pair in self.time_tiers.windows(2) {
            if pair[1].max_days <= pair[0].max_days {
                return Err(invalid("time_tiers must be strictly ascending by max_days"));
            }
            if pair[1].score > pair[0].score {
                return Err(invalid("time_tiers scores must not increase with distance"));
            }
        }
        for tier in &self.time_tiers {
            check_unit("time_tiers.score", tier.score)?;
        }

        check_unit("bonuses.brand", self.bonuses.brand)?;
        check_unit("bonuses.color", self.bonuses.color)?;

        check_unit("confidence.high", self.confidence.high)?;
        check_unit("confidence.medium", self.confidence.medium)?;
        if self.confidence.medium > self.confidence.high {
            return Err(invalid("confidence.medium must not exceed confidence.high"));
        }

        check_unit("min_score", self.min_score)?;
        if self.time_window_days == 0 {
            return Err(invalid("time_window_days must be greater than zero"));
        }
        if self.max_results == Some(0) {
            return Err(invalid("max_results must be greater than zero when set"));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            weights: CriterionWeights::default(),
            category_scores: CategoryScores::default(),
            reason_thresholds: ReasonThresholds::default(),
            time_tiers: Self::default_time_tiers(),
            bonuses: BonusConfig::default(),
            confidence: ConfidenceThresholds::default(),
            min_score: Self::default_min_score(),
            min_reasons: Self::default_min_reasons(),
            time_window_days: Self::default_time_window_days(),
            max_results: None,
            use_parallel: false,
        }
    }
}

fn invalid(msg: impl Into<String>) -> MatchError {
    MatchError::InvalidConfig(msg.into())
}

fn check_unit(name: &str, value: f64) -> Result<(), MatchError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(invalid(format!("{name} must be between 0.0 and 1.0 (got {value})")));
    }
    Ok(())
}
