//! Per-channel aggregation of a post sample.
//!
//! All statistics describe the sampled window only. `active_days` is the span
//! between the oldest and newest sampled post, not the channel's lifetime.

use std::sync::LazyLock;

use regex::Regex;
use vendorscope_core::{ChannelMetrics, PostRecord};

/// Excerpt used when the top post has no text.
pub const UNKNOWN_EXCERPT: &str = "Unknown";

/// Price used when no currency-prefixed amount is found.
pub const PRICE_NOT_SPECIFIED: &str = "Not specified";

const EXCERPT_WORDS: usize = 10;
const EXCERPT_MAX_CHARS: usize = 100;

static PRICE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[\$€£¥]|ETB|Birr)\s*(\d+[.,]?\d*)").expect("valid price regex")
});

/// Aggregates one channel's sample into [`ChannelMetrics`].
///
/// Posts may arrive in any order; they are sorted by timestamp (stable) before
/// the top post is picked, so ties on views resolve to the earliest post.
/// Returns `None` for an empty sample.
#[must_use]
pub fn aggregate(channel: &str, posts: &[PostRecord]) -> Option<ChannelMetrics> {
    let mut sorted: Vec<&PostRecord> = posts.iter().collect();
    sorted.sort_by_key(|p| p.timestamp);

    let first = *sorted.first()?;
    let last = *sorted.last()?;

    let total_posts = sorted.len();
    let active_days = (last.timestamp - first.timestamp).num_days();

    // Clamped at one week so a single-day sample divides by 1.
    #[allow(clippy::cast_precision_loss)]
    let weeks_active = (active_days as f64 / 7.0).max(1.0);
    #[allow(clippy::cast_precision_loss)]
    let posts_per_week = total_posts as f64 / weeks_active;

    let total_views = sorted
        .iter()
        .fold(0u128, |acc, p| acc + u128::from(p.views));
    #[allow(clippy::cast_precision_loss)]
    let avg_views = total_views as f64 / total_posts as f64;

    let top_post = sorted
        .iter()
        .copied()
        .reduce(|best, p| if p.views > best.views { p } else { best })?;

    let (top_post_excerpt, top_post_price) = match top_post.raw_text.as_deref() {
        Some(text) => (
            excerpt(text),
            extract_price(text).unwrap_or_else(|| PRICE_NOT_SPECIFIED.to_string()),
        ),
        None => (UNKNOWN_EXCERPT.to_string(), PRICE_NOT_SPECIFIED.to_string()),
    };

    Some(ChannelMetrics {
        channel: channel.to_string(),
        total_posts,
        active_days,
        posts_per_week,
        avg_views,
        max_views: top_post.views,
        top_post_excerpt,
        top_post_price,
    })
}

/// Product excerpt for a post: the first line if the text has several,
/// otherwise the first ten words. Longer than 100 characters is cut and
/// suffixed with `...`.
#[must_use]
pub fn excerpt(text: &str) -> String {
    let raw = if text.contains('\n') {
        text.split('\n').next().unwrap_or_default().to_string()
    } else {
        text.split_whitespace()
            .take(EXCERPT_WORDS)
            .collect::<Vec<_>>()
            .join(" ")
    };

    if raw.chars().count() > EXCERPT_MAX_CHARS {
        let mut cut: String = raw.chars().take(EXCERPT_MAX_CHARS).collect();
        cut.push_str("...");
        cut
    } else {
        raw
    }
}

/// First currency-prefixed amount in `text`, e.g. `$25`, `ETB 1,500`, `Birr3200`.
#[must_use]
pub fn extract_price(text: &str) -> Option<String> {
    PRICE_RE.find(text).map(|m| m.as_str().to_string())
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
