//! Pipeline orchestration.
//!
//! Channels are processed one at a time. A channel whose fetch fails or
//! returns no posts is logged and skipped; it never affects the others. Only
//! an authentication failure aborts the run, and it does so before any
//! channel is touched.

use vendorscope_core::{PostRecord, PostSource, RawPost};

use crate::aggregate::aggregate;
use crate::error::PipelineError;
use crate::record::PostRecordBuilder;
use crate::score::{rank, score, RankOrder, ScoreTable};
use crate::store::RecordStore;

async fn authenticate<S: PostSource>(source: &S) -> Result<(), PipelineError> {
    source
        .authenticate()
        .await
        .map_err(|e| PipelineError::Authentication(Box::new(e)))
}

/// Fetches one channel's sample, logging and swallowing failures.
async fn fetch_channel<S: PostSource>(
    source: &S,
    channel: &str,
    limit: u32,
) -> Option<Vec<RawPost>> {
    tracing::info!(channel, limit, "fetching channel posts");
    match source.fetch_posts(channel, limit).await {
        Ok(posts) if posts.is_empty() => {
            tracing::info!(channel, "no posts found; skipping channel");
            None
        }
        Ok(posts) => Some(posts),
        Err(e) => {
            tracing::warn!(channel, error = %e, "failed to fetch channel; skipping");
            None
        }
    }
}

/// Runs the scorecard analysis over `channels`.
///
/// Each channel's most recent `limit` posts are normalized, aggregated, and
/// scored. Records are computed in memory only; nothing is persisted here.
///
/// # Errors
///
/// Returns [`PipelineError::Authentication`] if the source rejects the
/// session. Per-channel failures are logged and skipped, not propagated.
pub async fn run_analysis<S: PostSource>(
    source: &S,
    channels: &[String],
    limit: u32,
    order: RankOrder,
) -> Result<ScoreTable, PipelineError> {
    authenticate(source).await?;
    tracing::info!(channels = channels.len(), "connected; starting analysis");

    let builder = PostRecordBuilder::new(source);
    let mut scorecards = Vec::with_capacity(channels.len());

    for channel in channels {
        let Some(raw_posts) = fetch_channel(source, channel, limit).await else {
            continue;
        };

        let mut records = Vec::with_capacity(raw_posts.len());
        for raw in &raw_posts {
            records.push(builder.build(raw, channel).await);
        }

        let Some(metrics) = aggregate(channel, &records) else {
            continue;
        };
        let card = score(metrics);
        tracing::info!(
            channel = %card.channel,
            total_posts = card.total_posts,
            lending_score = card.lending_score,
            "analysis complete for channel"
        );
        scorecards.push(card);
    }

    tracing::info!(
        scored = scorecards.len(),
        skipped = channels.len() - scorecards.len(),
        "analysis finished"
    );

    Ok(rank(scorecards, order))
}

/// Collects and persists the most recent `limit` posts of every channel.
///
/// Media is downloaded into the store's media directory and every record is
/// written as its own JSON document. Returns all records in fetch order.
///
/// # Errors
///
/// Returns [`PipelineError::Authentication`] if the source rejects the
/// session, or [`PipelineError::Store`] if the store directories cannot be
/// created. Per-channel and per-post failures are logged and skipped.
pub async fn run_collect<S: PostSource>(
    source: &S,
    store: &RecordStore,
    channels: &[String],
    limit: u32,
) -> Result<Vec<PostRecord>, PipelineError> {
    authenticate(source).await?;
    store.ensure_dirs().await?;

    let builder = PostRecordBuilder::new(source).with_store(store);
    let mut records = Vec::new();

    for channel in channels {
        let Some(raw_posts) = fetch_channel(source, channel, limit).await else {
            continue;
        };
        let before = records.len();
        for raw in &raw_posts {
            records.push(builder.build(raw, channel).await);
        }
        tracing::info!(
            channel = %channel,
            collected = records.len() - before,
            "collected channel posts"
        );
    }

    tracing::info!(total = records.len(), "collection finished");
    Ok(records)
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
