// Metrics hooks for the `matcher` crate.
//
// Callers install a global `MatchMetrics` implementation via [`set_match_metrics`],
// then every `MatchEngine` call reports latency, candidate count and result
// count. No metrics backend is linked in here.
use std::fmt;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

/// Which engine entry point produced an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchDirection {
    /// One lost report against the found collection.
    LostToFound,
    /// One found report against the lost collection.
    FoundToLost,
    /// A full `auto_match` sweep.
    Batch,
}

impl MatchDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchDirection::LostToFound => "lost_to_found",
            MatchDirection::FoundToLost => "found_to_lost",
            MatchDirection::Batch => "batch",
        }
    }
}

impl fmt::Display for MatchDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metrics observer for match operations.
pub trait MatchMetrics: Send + Sync {
    /// Record the outcome of a match call.
    ///
    /// `candidate_count` is the size of the opposite-kind collection handed in
    /// (for [`MatchDirection::Batch`], the number of lost reports swept), and
    /// `hit_count` is the number of results returned after gating and truncation.
    fn record_match(
        &self,
        direction: MatchDirection,
        latency: Duration,
        candidate_count: usize,
        hit_count: usize,
    );
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn MatchMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn MatchMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn MatchMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global match metrics recorder.
///
/// Usually called once at startup so every engine shares the same backend.
pub fn set_match_metrics(recorder: Option<Arc<dyn MatchMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}
