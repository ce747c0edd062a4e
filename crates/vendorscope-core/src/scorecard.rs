use serde::Serialize;

/// Per-channel statistics before the lending score is applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelMetrics {
    pub channel: String,
    pub total_posts: usize,
    /// Whole days between the earliest and latest post in the sample.
    pub active_days: i64,
    pub posts_per_week: f64,
    pub avg_views: f64,
    pub max_views: u64,
    pub top_post_excerpt: String,
    pub top_post_price: String,
}

/// Per-channel summary for one analysis run. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelScorecard {
    pub channel: String,
    pub total_posts: usize,
    pub active_days: i64,
    pub posts_per_week: f64,
    pub avg_views: f64,
    pub max_views: u64,
    pub top_post_excerpt: String,
    pub top_post_price: String,
    pub lending_score: f64,
}

impl ChannelScorecard {
    #[must_use]
    pub fn from_metrics(metrics: ChannelMetrics, lending_score: f64) -> Self {
        Self {
            channel: metrics.channel,
            total_posts: metrics.total_posts,
            active_days: metrics.active_days,
            posts_per_week: metrics.posts_per_week,
            avg_views: metrics.avg_views,
            max_views: metrics.max_views,
            top_post_excerpt: metrics.top_post_excerpt,
            top_post_price: metrics.top_post_price,
            lending_score,
        }
    }
}
