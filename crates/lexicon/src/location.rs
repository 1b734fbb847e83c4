//! Location comparison via area keyword groups.
//!
//! Free-text locations rarely match verbatim ("โรงอาหาร" vs "ศูนย์อาหารชั้น 2",
//! "gym" vs "สนามกีฬา"). Two locations that mention keywords from the same
//! area group are treated as the same general area; everything else falls
//! back to fuzzy text similarity.

use canonical::{normalize, similarity};

use crate::config::{normalize_keywords, AreaGroup, LexiconError, DEFAULT_SAME_AREA_SCORE};
use crate::keywords::contains_keyword;
use crate::tables::default_area_groups;

#[derive(Debug, Clone, PartialEq)]
pub struct LocationMatcher {
    groups: Vec<AreaGroup>,
    same_area_score: f64,
}

impl LocationMatcher {
    pub fn new(groups: Vec<AreaGroup>, same_area_score: f64) -> Result<Self, LexiconError> {
        if groups.is_empty() {
            return Err(LexiconError::EmptyTable("areas"));
        }
        if !(0.0..=1.0).contains(&same_area_score) {
            return Err(LexiconError::InvalidScore {
                name: "same_area_score",
                value: same_area_score,
            });
        }
        let groups = groups
            .into_iter()
            .map(|group| {
                if group.name.trim().is_empty() {
                    return Err(LexiconError::UnnamedArea);
                }
                let keywords = normalize_keywords(&group.name, group.keywords)?;
                Ok(AreaGroup {
                    name: group.name,
                    keywords,
                })
            })
            .collect::<Result<Vec<_>, LexiconError>>()?;
        Ok(Self {
            groups,
            same_area_score,
        })
    }

    /// Similarity in `[0, 1]` between two location strings.
    ///
    /// 1.0 when equal after normalization, the same-area score (0.9 by
    /// default) when both mention a keyword of one area group, otherwise
    /// [`canonical::similarity`].
    ///
    /// ```rust
    /// use lexicon::LocationMatcher;
    ///
    /// let matcher = LocationMatcher::default();
    /// assert_eq!(matcher.location_similarity("สนามกีฬา", " สนามกีฬา "), 1.0);
    /// assert_eq!(matcher.location_similarity("โรงอาหาร", "canteen"), 0.9);
    /// ```
    pub fn location_similarity(&self, a: &str, b: &str) -> f64 {
        let a = normalize(a);
        let b = normalize(b);
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }
        if a == b {
            return 1.0;
        }
        if self.shared_area_normalized(&a, &b).is_some() {
            return self.same_area_score;
        }
        similarity(&a, &b)
    }

    /// Name of the first area group both locations mention, if any.
    pub fn shared_area(&self, a: &str, b: &str) -> Option<&str> {
        self.shared_area_normalized(&normalize(a), &normalize(b))
    }

    /// Name of the first area group the location mentions, if any.
    pub fn area_of(&self, location: &str) -> Option<&str> {
        let location = normalize(location);
        self.groups
            .iter()
            .find(|group| mentions(&location, group))
            .map(|group| group.name.as_str())
    }

    pub fn same_area_score(&self) -> f64 {
        self.same_area_score
    }

    pub fn groups(&self) -> &[AreaGroup] {
        &self.groups
    }

    fn shared_area_normalized(&self, a: &str, b: &str) -> Option<&str> {
        self.groups
            .iter()
            .find(|group| mentions(a, group) && mentions(b, group))
            .map(|group| group.name.as_str())
    }
}

impl Default for LocationMatcher {
    fn default() -> Self {
        Self {
            groups: default_area_groups(),
            same_area_score: DEFAULT_SAME_AREA_SCORE,
        }
    }
}

fn mentions(location: &str, group: &AreaGroup) -> bool {
    group.keywords.iter().any(|k| contains_keyword(location, k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_location_scores_one() {
        let m = LocationMatcher::default();
        assert_eq!(m.location_similarity("Library", "library"), 1.0);
    }

    #[test]
    fn same_area_group_scores_point_nine() {
        let m = LocationMatcher::default();
        assert_eq!(m.location_similarity("สนามกีฬา", "โรงยิมหลังใหม่"), 0.9);
        assert_eq!(m.location_similarity("ห้องน้ำชาย ชั้น 2", "toilet"), 0.9);
        assert_eq!(m.shared_area("หอพักหญิง", "dorm b"), Some("dormitory"));
    }

    #[test]
    fn unrelated_areas_fall_back_to_similarity() {
        let m = LocationMatcher::default();
        let score = m.location_similarity("ห้องสมุด", "ที่จอดรถ");
        assert_eq!(score, similarity("ห้องสมุด", "ที่จอดรถ"));
        assert!(score < 0.5);
        assert_eq!(m.shared_area("ห้องสมุด", "ที่จอดรถ"), None);
    }

    #[test]
    fn empty_location_scores_zero() {
        let m = LocationMatcher::default();
        assert_eq!(m.location_similarity("", "canteen"), 0.0);
        assert_eq!(m.location_similarity("", ""), 0.0);
    }

    #[test]
    fn area_of_reports_first_group() {
        let m = LocationMatcher::default();
        assert_eq!(m.area_of("Canteen, building 3"), Some("canteen"));
        assert_eq!(m.area_of("somewhere"), None);
    }

    #[test]
    fn custom_groups_and_score() {
        let m = LocationMatcher::new(
            vec![AreaGroup {
                name: "north_wing".into(),
                keywords: vec!["North Wing".into(), "nw".into()],
            }],
            0.75,
        )
        .expect("valid groups");
        assert_eq!(m.location_similarity("north wing 2f", "NW stairs"), 0.75);
        assert_eq!(m.same_area_score(), 0.75);
    }

    #[test]
    fn invalid_score_rejected() {
        let err = LocationMatcher::new(default_area_groups(), -0.1).expect_err("invalid");
        assert!(matches!(err, LexiconError::InvalidScore { .. }));
    }
}
