//! Lending score and cross-channel ranking.
//!
//! The score is a fixed blend of raw average views and raw posting cadence.
//! Neither term is normalized, so high-view channels dominate the ranking.

use vendorscope_core::{ChannelMetrics, ChannelScorecard};

pub const VIEWS_WEIGHT: f64 = 0.5;
pub const CADENCE_WEIGHT: f64 = 0.5;

/// `0.5 * avg_views + 0.5 * posts_per_week`.
#[must_use]
pub fn lending_score(metrics: &ChannelMetrics) -> f64 {
    VIEWS_WEIGHT * metrics.avg_views + CADENCE_WEIGHT * metrics.posts_per_week
}

/// Attaches the lending score to a channel's metrics.
#[must_use]
pub fn score(metrics: ChannelMetrics) -> ChannelScorecard {
    let lending_score = lending_score(&metrics);
    ChannelScorecard::from_metrics(metrics, lending_score)
}

/// Row order of the output table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RankOrder {
    /// Channels in the order they were processed.
    #[default]
    Insertion,
    /// Highest lending score first; ties keep processing order.
    ByScoreDescending,
}

/// Final cross-channel result table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreTable {
    rows: Vec<ChannelScorecard>,
}

impl ScoreTable {
    #[must_use]
    pub fn rows(&self) -> &[ChannelScorecard] {
        &self.rows
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Builds the output table from scorecards listed in processing order.
#[must_use]
pub fn rank(scorecards: Vec<ChannelScorecard>, order: RankOrder) -> ScoreTable {
    let mut rows = scorecards;
    if order == RankOrder::ByScoreDescending {
        rows.sort_by(|a, b| b.lending_score.total_cmp(&a.lending_score));
    }
    ScoreTable { rows }
}
