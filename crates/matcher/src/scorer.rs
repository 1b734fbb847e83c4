//! Pairwise scoring of one lost report against one found report.

use canonical::similarity;
use lexicon::{Category, Lexicon};

use crate::config::MatchConfig;
use crate::types::{
    days_apart, FoundItem, ItemRecord, LostItem, MatchReason, MatchResult, ScoreBreakdown,
};

/// Weighted multi-criteria scorer. A cheap borrowed view over the engine's
/// configuration and keyword tables.
#[derive(Debug, Clone, Copy)]
pub struct MatchScorer<'c> {
    config: &'c MatchConfig,
    lexicon: &'c Lexicon,
}

impl<'c> MatchScorer<'c> {
    pub fn new(config: &'c MatchConfig, lexicon: &'c Lexicon) -> Self {
        Self { config, lexicon }
    }

    /// Score a pair. Always produces a result; whether it is worth showing is
    /// decided by [`passes_gate`](Self::passes_gate).
    pub fn score<'a>(&self, lost: &'a LostItem, found: &'a FoundItem) -> MatchResult<'a> {
        let cfg = self.config;
        let classifier = self.lexicon.classifier();
        let locations = self.lexicon.locations();

        let lost_category = lost.resolved_category(classifier);
        let found_category = found.resolved_category(classifier);
        let category = self.category_score(lost_category, found_category);

        let item_name = similarity(&lost.item_name, &found.description);
        let location = locations.location_similarity(&lost.location_lost, &found.location_found);
        let description = lost
            .description
            .as_deref()
            .map(|d| similarity(d, &found.description))
            .unwrap_or(0.0);
        let gap = days_apart(lost.date_lost, found.date_found);
        let time = cfg.time_score(gap);

        let w = &cfg.weights;
        let weighted = w.category * category
            + w.item_name * item_name
            + w.location * location
            + w.description * description
            + w.time * time;

        let lost_text = lost.search_text();
        let brand = self.lexicon.brands().first_shared(&lost_text, &found.description);
        let color = self.lexicon.colors().first_shared(&lost_text, &found.description);
        let brand_bonus = if brand.is_some() { cfg.bonuses.brand } else { 0.0 };
        let color_bonus = if color.is_some() { cfg.bonuses.color } else { 0.0 };

        let score = (weighted + brand_bonus + color_bonus).clamp(0.0, 1.0);

        let thresholds = &cfg.reason_thresholds;
        let mut reasons = Vec::new();
        if let (Some(a), Some(b)) = (lost_category, found_category) {
            if a == b {
                reasons.push(MatchReason::SameCategory { category: a });
            }
        }
        if item_name > thresholds.item_name {
            reasons.push(MatchReason::SimilarItemName {
                similarity: item_name,
            });
        }
        if location > thresholds.location {
            reasons.push(MatchReason::NearbyLocation {
                similarity: location,
                area: locations
                    .shared_area(&lost.location_lost, &found.location_found)
                    .map(str::to_string),
            });
        }
        if description > thresholds.description {
            reasons.push(MatchReason::SimilarDescription {
                similarity: description,
            });
        }
        if let Some(tier) = cfg.time_tier(gap) {
            if tier.max_days <= thresholds.max_time_reason_days {
                reasons.push(MatchReason::CloseInTime {
                    within_days: tier.max_days,
                });
            }
        }
        if let Some(keyword) = brand {
            reasons.push(MatchReason::SameBrand {
                keyword: keyword.to_string(),
            });
        }
        if let Some(keyword) = color {
            reasons.push(MatchReason::SameColor {
                keyword: keyword.to_string(),
            });
        }

        MatchResult {
            lost,
            found,
            score,
            reasons,
            confidence: cfg.confidence.classify(score),
            breakdown: ScoreBreakdown {
                lost_category,
                found_category,
                category,
                item_name,
                location,
                description,
                days_apart: gap,
                time,
                weighted,
                brand_bonus,
                color_bonus,
            },
        }
    }

    /// Validity gate: minimum score and minimum reason count.
    pub fn passes_gate(&self, result: &MatchResult<'_>) -> bool {
        result.score >= self.config.min_score && result.reasons.len() >= self.config.min_reasons
    }

    fn category_score(&self, lost: Option<Category>, found: Option<Category>) -> f64 {
        let scores = &self.config.category_scores;
        match (lost, found) {
            (Some(a), Some(b)) if a == b => scores.same,
            (Some(_), Some(_)) => scores.different,
            _ => scores.unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo_utils::{demo_timestamp, found_item, lost_item};
    use crate::types::Confidence;
    use chrono::Duration;

    fn fixtures() -> (MatchConfig, Lexicon) {
        (MatchConfig::default(), Lexicon::default())
    }

    #[test]
    fn keys_at_sports_field_same_day_is_high() {
        let (cfg, lexicon) = fixtures();
        let scorer = MatchScorer::new(&cfg, &lexicon);
        let mut lost = lost_item("l-1", "กุญแจ", "สนามกีฬา", demo_timestamp());
        lost.category = Some(Category::Keys);
        let found = found_item("f-1", "พวงกุญแจ", "สนามกีฬา", demo_timestamp());

        let result = scorer.score(&lost, &found);
        assert_eq!(result.breakdown.found_category, Some(Category::Keys));
        assert_eq!(result.breakdown.category, 1.0);
        assert_eq!(result.breakdown.location, 1.0);
        assert_eq!(result.breakdown.time, 1.0);
        assert_eq!(result.confidence, Confidence::High);
        assert!(result
            .reasons
            .iter()
            .any(|r| matches!(r, MatchReason::NearbyLocation { .. })));
        assert!(result
            .reasons
            .iter()
            .any(|r| matches!(r, MatchReason::SimilarItemName { .. })));
        assert!(scorer.passes_gate(&result));
    }

    #[test]
    fn missing_found_description_scores_zero_description() {
        let (cfg, lexicon) = fixtures();
        let scorer = MatchScorer::new(&cfg, &lexicon);
        let mut lost = lost_item("l-1", "wallet", "canteen", demo_timestamp());
        lost.description = Some("black leather wallet".into());
        let found = found_item("f-1", "", "canteen", demo_timestamp());

        let result = scorer.score(&lost, &found);
        assert_eq!(result.breakdown.description, 0.0);
        assert!(!result
            .reasons
            .iter()
            .any(|r| matches!(r, MatchReason::SimilarDescription { .. })));
    }

    #[test]
    fn explicit_opposite_categories_score_point_three() {
        let (cfg, lexicon) = fixtures();
        let scorer = MatchScorer::new(&cfg, &lexicon);
        let mut lost = lost_item("l-1", "umbrella", "library", demo_timestamp());
        lost.category = Some(Category::Accessories);
        let mut found = found_item("f-1", "umbrella", "library", demo_timestamp());
        found.category = Some(Category::Bag);

        let result = scorer.score(&lost, &found);
        assert_eq!(result.breakdown.category, 0.3);
        assert!(!result
            .reasons
            .iter()
            .any(|r| matches!(r, MatchReason::SameCategory { .. })));
    }

    #[test]
    fn unknown_category_is_neutral() {
        let (cfg, lexicon) = fixtures();
        let scorer = MatchScorer::new(&cfg, &lexicon);
        let lost = lost_item("l-1", "zzz", "library", demo_timestamp());
        let found = found_item("f-1", "พวงกุญแจ", "library", demo_timestamp());

        let result = scorer.score(&lost, &found);
        assert_eq!(result.breakdown.lost_category, None);
        assert_eq!(result.breakdown.category, 0.5);
    }

    #[test]
    fn brand_bonus_counts_first_match_only() {
        let (cfg, lexicon) = fixtures();
        let scorer = MatchScorer::new(&cfg, &lexicon);
        let lost = lost_item("l-1", "apple iphone airpods", "gym", demo_timestamp());
        let found = found_item("f-1", "apple iphone airpods", "library", demo_timestamp());

        let result = scorer.score(&lost, &found);
        assert_eq!(result.breakdown.brand_bonus, cfg.bonuses.brand);
        let brand_reasons: Vec<_> = result
            .reasons
            .iter()
            .filter(|r| matches!(r, MatchReason::SameBrand { .. }))
            .collect();
        assert_eq!(
            brand_reasons,
            vec![&MatchReason::SameBrand {
                keyword: "apple".into()
            }]
        );
    }

    #[test]
    fn color_reason_emitted_once() {
        let (cfg, lexicon) = fixtures();
        let scorer = MatchScorer::new(&cfg, &lexicon);
        let lost = lost_item("l-1", "black and white bag", "gym", demo_timestamp());
        let found = found_item("f-1", "white bag with black strap", "gym", demo_timestamp());

        let result = scorer.score(&lost, &found);
        assert_eq!(result.breakdown.color_bonus, cfg.bonuses.color);
        let colors = result
            .reasons
            .iter()
            .filter(|r| matches!(r, MatchReason::SameColor { .. }))
            .count();
        assert_eq!(colors, 1);
    }

    #[test]
    fn bonuses_clamp_score_to_one() {
        let (cfg, lexicon) = fixtures();
        let scorer = MatchScorer::new(&cfg, &lexicon);
        let mut lost = lost_item("l-1", "black samsung phone", "library", demo_timestamp());
        lost.description = Some("black samsung phone".into());
        let found = found_item("f-1", "black samsung phone", "library", demo_timestamp());

        let result = scorer.score(&lost, &found);
        assert!(result.breakdown.weighted + result.breakdown.brand_bonus > 1.0);
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn time_reason_only_within_a_week() {
        let (cfg, lexicon) = fixtures();
        let scorer = MatchScorer::new(&cfg, &lexicon);
        let lost = lost_item("l-1", "keys", "gym", demo_timestamp());

        let near = found_item("f-1", "keys", "gym", demo_timestamp() + Duration::days(2));
        let result = scorer.score(&lost, &near);
        assert!(result
            .reasons
            .contains(&MatchReason::CloseInTime { within_days: 3 }));

        let far = found_item("f-2", "keys", "gym", demo_timestamp() + Duration::days(10));
        let result = scorer.score(&lost, &far);
        assert_eq!(result.breakdown.time, 0.2);
        assert!(!result
            .reasons
            .iter()
            .any(|r| matches!(r, MatchReason::CloseInTime { .. })));
    }

    #[test]
    fn unrelated_pair_fails_gate() {
        let (cfg, lexicon) = fixtures();
        let scorer = MatchScorer::new(&cfg, &lexicon);
        let lost = lost_item("l-1", "กระเป๋าสตางค์สีดำ", "โรงอาหาร", demo_timestamp());
        let found = found_item(
            "f-1",
            "เอกสาร",
            "ที่จอดรถ",
            demo_timestamp() + Duration::days(20),
        );

        let result = scorer.score(&lost, &found);
        assert_eq!(result.breakdown.category, 0.3);
        assert_eq!(result.breakdown.time, 0.0);
        assert!(result.score < 0.40);
        assert_eq!(result.confidence, Confidence::Low);
        assert!(!scorer.passes_gate(&result));
    }
}
