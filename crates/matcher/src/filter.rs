//! Hierarchical candidate narrowing ahead of pairwise scoring.
//!
//! Three cheap passes run in order over the opposite-kind collection:
//!
//! 1. status: open and not yet matched (hard)
//! 2. category: unknown or equal to the source category (soft)
//! 3. time window: within `time_window_days` of the source date (hard)
//!
//! The category pass is skipped whenever it would leave nothing to score, so
//! a declared category never hides every candidate. Candidate order is
//! preserved throughout.

use lexicon::CategoryClassifier;
use tracing::debug;

use crate::config::MatchConfig;
use crate::types::{days_apart, FoundItem, ItemRecord, LostItem};

/// Candidate counts after each filter stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterStats {
    pub total: usize,
    pub after_status: usize,
    pub after_category: usize,
    pub after_time: usize,
    /// The category pass would have emptied the set and was skipped.
    pub category_skipped: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct CandidateFilter<'c> {
    config: &'c MatchConfig,
    classifier: &'c CategoryClassifier,
}

impl<'c> CandidateFilter<'c> {
    pub fn new(config: &'c MatchConfig, classifier: &'c CategoryClassifier) -> Self {
        Self { config, classifier }
    }

    /// Narrow `candidates` for `source`; see the module docs for the stages.
    pub fn filter<'a, S, C>(&self, source: &S, candidates: &'a [C]) -> Vec<&'a C>
    where
        S: ItemRecord,
        C: ItemRecord,
    {
        self.filter_with_stats(source, candidates).0
    }

    pub fn filter_found<'a>(&self, lost: &LostItem, found: &'a [FoundItem]) -> Vec<&'a FoundItem> {
        self.filter(lost, found)
    }

    pub fn filter_lost<'a>(&self, found: &FoundItem, lost: &'a [LostItem]) -> Vec<&'a LostItem> {
        self.filter(found, lost)
    }

    pub fn filter_with_stats<'a, S, C>(
        &self,
        source: &S,
        candidates: &'a [C],
    ) -> (Vec<&'a C>, FilterStats)
    where
        S: ItemRecord,
        C: ItemRecord,
    {
        let mut stats = FilterStats {
            total: candidates.len(),
            ..FilterStats::default()
        };

        let open: Vec<&C> = candidates.iter().filter(|c| c.is_matchable()).collect();
        stats.after_status = open.len();

        let narrowed = match source.resolved_category(self.classifier) {
            Some(category) if category.is_specific() => {
                let same: Vec<&C> = open
                    .iter()
                    .copied()
                    .filter(|c| {
                        c.resolved_category(self.classifier)
                            .is_none_or(|other| other == category)
                    })
                    .collect();
                if same.is_empty() && !open.is_empty() {
                    debug!(
                        source_id = %source.id(),
                        category = %category,
                        candidates = open.len(),
                        "category_filter_skipped"
                    );
                    stats.category_skipped = true;
                    open
                } else {
                    same
                }
            }
            _ => open,
        };
        stats.after_category = narrowed.len();

        let window = f64::from(self.config.time_window_days);
        let source_date = source.reported_at();
        let in_window: Vec<&C> = narrowed
            .into_iter()
            .filter(|c| days_apart(source_date, c.reported_at()) <= window)
            .collect();
        stats.after_time = in_window.len();

        (in_window, stats)
    }
}
