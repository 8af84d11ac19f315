//! Significance thresholds and caps.

use serde::{Deserialize, Serialize};

/// Keep at most `cap` keys by count, and only those with `count >= min_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankLimit {
    pub cap: usize,
    pub min_count: usize,
}

impl RankLimit {
    pub const fn new(cap: usize, min_count: usize) -> Self {
        Self { cap, min_count }
    }
}

/// All synthesis thresholds for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisThresholds {
    pub authors: RankLimit,
    pub models: RankLimit,
    pub institutions: RankLimit,
    /// Papers per topic before a trend event is emitted.
    pub trend_min: usize,
    /// Papers per year before a yearly milestone is emitted.
    pub yearly_milestone_min: usize,
    /// Papers per arXiv category before a category milestone is emitted.
    pub category_milestone_min: usize,
    /// Year stamped on trend and category milestone events.
    pub trend_year: i32,
}

impl Default for SynthesisThresholds {
    fn default() -> Self {
        Self {
            authors: RankLimit::new(200, 2),
            models: RankLimit::new(100, 3),
            institutions: RankLimit::new(50, 2),
            trend_min: 20,
            yearly_milestone_min: 50,
            category_milestone_min: 50,
            trend_year: 2024,
        }
    }
}
