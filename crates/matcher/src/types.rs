use std::fmt;

use chrono::{DateTime, Utc};
use lexicon::{Category, CategoryClassifier, LexiconError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle of a lost-item report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum LostStatus {
    /// Still looking; the only status that takes part in matching.
    #[default]
    Searching,
    Found,
    Claimed,
    Expired,
}

impl LostStatus {
    pub fn is_open(&self) -> bool {
        matches!(self, LostStatus::Searching)
    }
}

/// Lifecycle of a found-item report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FoundStatus {
    /// Handed in and waiting for an owner.
    #[default]
    Found,
    /// Someone has claimed it but the hand-over is not confirmed yet.
    Claimed,
    Returned,
    Disposed,
}

impl FoundStatus {
    pub fn is_open(&self) -> bool {
        matches!(self, FoundStatus::Found | FoundStatus::Claimed)
    }
}

/// A report of something lost, as supplied by the item store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LostItem {
    pub id: String,
    pub item_name: String,
    /// Declared category; inferred from the text when absent.
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub description: Option<String>,
    pub location_lost: String,
    pub date_lost: DateTime<Utc>,
    #[serde(default)]
    pub status: LostStatus,
    #[serde(default)]
    pub matched_found_id: Option<String>,
}

impl LostItem {
    /// Item name and description joined, for keyword lookups.
    pub fn search_text(&self) -> String {
        match self.description.as_deref() {
            Some(description) if !description.trim().is_empty() => {
                format!("{} {}", self.item_name, description)
            }
            _ => self.item_name.clone(),
        }
    }
}

/// A report of something found, as supplied by the item store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoundItem {
    pub id: String,
    pub description: String,
    pub location_found: String,
    pub date_found: DateTime<Utc>,
    #[serde(default)]
    pub status: FoundStatus,
    /// Declared category; inferred from the description when absent.
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub matched_lost_id: Option<String>,
}

/// Common view over both report kinds used by candidate filtering.
pub trait ItemRecord {
    fn id(&self) -> &str;
    /// When the item was lost or found.
    fn reported_at(&self) -> DateTime<Utc>;
    /// Open status and not yet paired with a report of the other kind.
    fn is_matchable(&self) -> bool;
    /// Declared category, falling back to keyword inference.
    fn resolved_category(&self, classifier: &CategoryClassifier) -> Option<Category>;
}

impl ItemRecord for LostItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn reported_at(&self) -> DateTime<Utc> {
        self.date_lost
    }

    fn is_matchable(&self) -> bool {
        self.status.is_open() && self.matched_found_id.is_none()
    }

    fn resolved_category(&self, classifier: &CategoryClassifier) -> Option<Category> {
        self.category
            .or_else(|| classifier.classify(&self.search_text()))
    }
}

impl ItemRecord for FoundItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn reported_at(&self) -> DateTime<Utc> {
        self.date_found
    }

    fn is_matchable(&self) -> bool {
        self.status.is_open() && self.matched_lost_id.is_none()
    }

    fn resolved_category(&self, classifier: &CategoryClassifier) -> Option<Category> {
        self.category
            .or_else(|| classifier.classify(&self.description))
    }
}

/// Either kind of report, tagged explicitly with `kind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Report {
    Lost(LostItem),
    Found(FoundItem),
}

impl Report {
    pub fn id(&self) -> &str {
        match self {
            Report::Lost(item) => &item.id,
            Report::Found(item) => &item.id,
        }
    }

    pub fn is_matchable(&self) -> bool {
        match self {
            Report::Lost(item) => item.is_matchable(),
            Report::Found(item) => item.is_matchable(),
        }
    }
}

/// Absolute distance between two timestamps in fractional days.
pub fn days_apart(a: DateTime<Utc>, b: DateTime<Utc>) -> f64 {
    (a - b).num_milliseconds().unsigned_abs() as f64 / 86_400_000.0
}

/// Coarse bucketing of a match score for display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a pair was proposed. Each reason renders as a short sentence for the
/// moderator and counts towards the validity gate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchReason {
    SameCategory { category: Category },
    SimilarItemName { similarity: f64 },
    NearbyLocation { similarity: f64, area: Option<String> },
    SimilarDescription { similarity: f64 },
    CloseInTime { within_days: u32 },
    SameBrand { keyword: String },
    SameColor { keyword: String },
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchReason::SameCategory { category } => write!(f, "same category ({category})"),
            MatchReason::SimilarItemName { similarity } => {
                write!(f, "item name matches found description ({})", format_percentage(*similarity))
            }
            MatchReason::NearbyLocation {
                area: Some(area), ..
            } => write!(f, "same area ({area})"),
            MatchReason::NearbyLocation {
                similarity,
                area: None,
            } => write!(f, "similar location ({})", format_percentage(*similarity)),
            MatchReason::SimilarDescription { similarity } => {
                write!(f, "similar description ({})", format_percentage(*similarity))
            }
            MatchReason::CloseInTime { within_days: 1 } => f.write_str("reported within 1 day"),
            MatchReason::CloseInTime { within_days } => {
                write!(f, "reported within {within_days} days")
            }
            MatchReason::SameBrand { keyword } => write!(f, "same brand ({keyword})"),
            MatchReason::SameColor { keyword } => write!(f, "same color ({keyword})"),
        }
    }
}

/// Per-criterion sub-scores behind a [`MatchResult`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ScoreBreakdown {
    pub lost_category: Option<Category>,
    pub found_category: Option<Category>,
    pub category: f64,
    pub item_name: f64,
    pub location: f64,
    pub description: f64,
    pub days_apart: f64,
    pub time: f64,
    /// Weighted sum of the five criteria, before bonuses.
    pub weighted: f64,
    pub brand_bonus: f64,
    pub color_bonus: f64,
}

/// A proposed lost/found pairing. Borrowed from the inputs, never persisted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MatchResult<'a> {
    pub lost: &'a LostItem,
    pub found: &'a FoundItem,
    /// Composite score in `[0, 1]`.
    pub score: f64,
    pub reasons: Vec<MatchReason>,
    pub confidence: Confidence,
    pub breakdown: ScoreBreakdown,
}

impl MatchResult<'_> {
    /// Deduplication key: `(lost_id, found_id)`.
    pub fn key(&self) -> (&str, &str) {
        (&self.lost.id, &self.found.id)
    }

    pub fn reason_texts(&self) -> Vec<String> {
        self.reasons.iter().map(ToString::to_string).collect()
    }

    pub fn percentage(&self) -> String {
        format_percentage(self.score)
    }
}

/// `round(score * 100)` followed by `%`.
///
/// ```rust
/// use matcher::format_percentage;
///
/// assert_eq!(format_percentage(0.8106), "81%");
/// assert_eq!(format_percentage(0.005), "1%");
/// assert_eq!(format_percentage(1.0), "100%");
/// ```
pub fn format_percentage(score: f64) -> String {
    format!("{}%", (score * 100.0).round() as i64)
}

/// The first `n` matches of an already ranked list.
pub fn top_matches<'r, 'a>(matches: &'r [MatchResult<'a>], n: usize) -> &'r [MatchResult<'a>] {
    &matches[..n.min(matches.len())]
}

/// Errors produced by the matching layer. Only configuration can fail;
/// scoring itself always degrades to a lower score instead.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Invalid scoring or filtering configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    /// Keyword tables failed validation.
    #[error("lexicon error: {0}")]
    Lexicon(#[from] LexiconError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, day, hour, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn days_apart_is_symmetric_and_fractional() {
        assert_eq!(days_apart(at(1, 0), at(3, 12)), 2.5);
        assert_eq!(days_apart(at(3, 12), at(1, 0)), 2.5);
        assert_eq!(days_apart(at(1, 0), at(1, 0) + Duration::hours(6)), 0.25);
    }

    #[test]
    fn status_eligibility() {
        assert!(LostStatus::Searching.is_open());
        assert!(!LostStatus::Claimed.is_open());
        assert!(FoundStatus::Found.is_open());
        assert!(FoundStatus::Claimed.is_open());
        assert!(!FoundStatus::Returned.is_open());
    }

    #[test]
    fn report_serializes_with_kind_tag() {
        let report = Report::Found(FoundItem {
            id: "f-1".into(),
            description: "พวงกุญแจ".into(),
            location_found: "สนามกีฬา".into(),
            date_found: at(1, 0),
            status: FoundStatus::Found,
            category: None,
            matched_lost_id: None,
        });
        let json = serde_json::to_value(&report).expect("serialize");
        assert_eq!(json["kind"], "found");
        assert_eq!(json["status"], "found");

        let back: Report = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, report);
        assert_eq!(back.id(), "f-1");
    }

    #[test]
    fn lost_item_defaults_from_minimal_json() {
        let item: LostItem = serde_json::from_str(
            r#"{"kind":"lost","id":"l-1","item_name":"Keys","location_lost":"gym",
                "date_lost":"2025-01-01T00:00:00Z"}"#,
        )
        .expect("deserialize");
        assert_eq!(item.status, LostStatus::Searching);
        assert!(item.category.is_none());
        assert!(item.is_matchable());
    }

    #[test]
    fn search_text_skips_blank_description() {
        let mut item = LostItem {
            id: "l-1".into(),
            item_name: "wallet".into(),
            category: None,
            description: Some("  ".into()),
            location_lost: "canteen".into(),
            date_lost: at(1, 0),
            status: LostStatus::Searching,
            matched_found_id: None,
        };
        assert_eq!(item.search_text(), "wallet");
        item.description = Some("black leather".into());
        assert_eq!(item.search_text(), "wallet black leather");
    }

    #[test]
    fn confidence_orders_low_to_high() {
        assert!(Confidence::Low < Confidence::Medium);
        assert!(Confidence::Medium < Confidence::High);
        assert_eq!(Confidence::High.to_string(), "high");
    }

    #[test]
    fn reason_text_renders() {
        let reason = MatchReason::CloseInTime { within_days: 3 };
        assert_eq!(reason.to_string(), "reported within 3 days");
        let reason = MatchReason::NearbyLocation {
            similarity: 0.9,
            area: Some("canteen".into()),
        };
        assert_eq!(reason.to_string(), "same area (canteen)");
    }
}
