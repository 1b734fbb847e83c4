use std::cmp::Ordering;
use std::collections::HashSet;
use std::time::Instant;

use lexicon::{Lexicon, LexiconConfig};
use rayon::prelude::*;
use tracing::{debug, info, Level};

use crate::config::MatchConfig;
use crate::filter::{CandidateFilter, FilterStats};
use crate::metrics::{metrics_recorder, MatchDirection};
use crate::scorer::MatchScorer;
use crate::types::{FoundItem, ItemRecord, LostItem, MatchError, MatchResult, Report};


/// Pairs lost reports with found reports.
///
/// Holds only immutable configuration, so a single engine can be shared
/// across threads behind an `Arc`. Every call is a pure function of its
/// arguments; results borrow the records they were computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchEngine {
    config: MatchConfig,
    lexicon: Lexicon,
}

impl MatchEngine {
    /// Construct an engine after validating `config`.
    pub fn new(config: MatchConfig, lexicon: Lexicon) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self { config, lexicon })
    }

    /// Construct an engine from the serde-level configuration of both layers.
    pub fn from_configs(config: MatchConfig, lexicon: &LexiconConfig) -> Result<Self, MatchError> {
        let lexicon = Lexicon::from_config(lexicon)?;
        Self::new(config, lexicon)
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn scorer(&self) -> MatchScorer<'_> {
        MatchScorer::new(&self.config, &self.lexicon)
    }

    pub fn filter(&self) -> CandidateFilter<'_> {
        CandidateFilter::new(&self.config, self.lexicon.classifier())
    }

    /// Ranked found candidates for one lost report.
    pub fn find_matches_for_lost<'a>(
        &self,
        lost: &'a LostItem,
        found: &'a [FoundItem],
    ) -> Vec<MatchResult<'a>> {
        let start = Instant::now();
        let span = tracing::span!(
            Level::INFO,
            "matcher.find_matches_for_lost",
            source_id = %lost.id
        );
        let _guard = span.enter();

        let mut results = self.rank_for_lost(lost, found);
        self.truncate(&mut results);
        self.observe(MatchDirection::LostToFound, start, found.len(), results.len());
        results
    }

    /// Ranked lost candidates for one found report.
    pub fn find_matches_for_found<'a>(
        &self,
        found: &'a FoundItem,
        lost: &'a [LostItem],
    ) -> Vec<MatchResult<'a>> {
        let start = Instant::now();
        let span = tracing::span!(
            Level::INFO,
            "matcher.find_matches_for_found",
            source_id = %found.id
        );
        let _guard = span.enter();

        let mut results = if self.is_eligible(found) {
            let (candidates, stats) = self.filter().filter_with_stats(found, lost);
            log_filter_stats(&found.id, &stats);
            let scorer = self.scorer();
            self.score_candidates(&candidates, |item| scorer.score(item, found))
        } else {
            Vec::new()
        };
        self.truncate(&mut results);
        self.observe(MatchDirection::FoundToLost, start, lost.len(), results.len());
        results
    }

    /// Dispatch on the report kind.
    pub fn find_matches<'a>(
        &self,
        report: &'a Report,
        lost: &'a [LostItem],
        found: &'a [FoundItem],
    ) -> Vec<MatchResult<'a>> {
        match report {
            Report::Lost(item) => self.find_matches_for_lost(item, found),
            Report::Found(item) => self.find_matches_for_found(item, lost),
        }
    }

    /// Everything that might match, across the whole system.
    ///
    /// Runs the lost-to-found lookup for every eligible lost report, keeps the
    /// first occurrence of each `(lost_id, found_id)` pair and returns the
    /// union sorted by descending score. `max_results` does not apply here.
    pub fn auto_match<'a>(
        &self,
        lost: &'a [LostItem],
        found: &'a [FoundItem],
    ) -> Vec<MatchResult<'a>> {
        let start = Instant::now();
        let span = tracing::span!(
            Level::INFO,
            "matcher.auto_match",
            lost_count = lost.len(),
            found_count = found.len()
        );
        let _guard = span.enter();

        let mut seen: HashSet<(&'a str, &'a str)> = HashSet::new();
        let mut merged = Vec::new();
        let mut duplicates = 0usize;
        for item in lost {
            for result in self.rank_for_lost(item, found) {
                let lost_ref: &'a LostItem = result.lost;
                let found_ref: &'a FoundItem = result.found;
                if seen.insert((lost_ref.id.as_str(), found_ref.id.as_str())) {
                    merged.push(result);
                } else {
                    duplicates += 1;
                }
            }
        }
        if duplicates > 0 {
            debug!(duplicates, "auto_match_duplicates_dropped");
        }

        sort_by_score(&mut merged);
        self.observe(MatchDirection::Batch, start, lost.len(), merged.len());
        merged
    }

    fn rank_for_lost<'a>(&self, lost: &'a LostItem, found: &'a [FoundItem]) -> Vec<MatchResult<'a>> {
        if !self.is_eligible(lost) {
            return Vec::new();
        }
        let (candidates, stats) = self.filter().filter_with_stats(lost, found);
        log_filter_stats(&lost.id, &stats);
        let scorer = self.scorer();
        self.score_candidates(&candidates, |item| scorer.score(lost, item))
    }

    fn is_eligible<S: ItemRecord>(&self, source: &S) -> bool {
        let eligible = source.is_matchable();
        if !eligible {
            debug!(source_id = %source.id(), "source_not_eligible");
        }
        eligible
    }

    /// Score every candidate, drop those failing the validity gate and sort.
    fn score_candidates<'a, C, F>(&self, candidates: &[&'a C], score: F) -> Vec<MatchResult<'a>>
    where
        C: Sync,
        F: Fn(&'a C) -> MatchResult<'a> + Sync,
    {
        let scorer = self.scorer();
        let gate = |candidate: &&'a C| {
            let result = score(*candidate);
            scorer.passes_gate(&result).then_some(result)
        };

        let mut results: Vec<MatchResult<'a>> = if self.config.use_parallel {
            candidates.par_iter().filter_map(gate).collect()
        } else {
            candidates.iter().filter_map(gate).collect()
        };
        sort_by_score(&mut results);
        results
    }

    fn truncate(&self, results: &mut Vec<MatchResult<'_>>) {
        if let Some(max) = self.config.max_results {
            results.truncate(max);
        }
    }

    fn observe(&self, direction: MatchDirection, start: Instant, candidates: usize, hits: usize) {
        let latency = start.elapsed();
        info!(
            direction = %direction,
            candidates,
            hits,
            elapsed_micros = latency.as_micros(),
            "match_success"
        );
        if let Some(recorder) = metrics_recorder() {
            recorder.record_match(direction, latency, candidates, hits);
        }
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self {
            config: MatchConfig::default(),
            lexicon: Lexicon::default(),
        }
    }
}

/// Descending by score. `sort_by` is stable, so ties keep candidate order.
fn sort_by_score(results: &mut [MatchResult<'_>]) {
    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
}

fn log_filter_stats(source_id: &str, stats: &FilterStats) {
    debug!(
        source_id,
        total = stats.total,
        after_status = stats.after_status,
        after_category = stats.after_category,
        after_time = stats.after_time,
        category_skipped = stats.category_skipped,
        "candidate_filter"
    );
}
