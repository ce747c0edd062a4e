//! `collect` command handler.
//!
//! Persists one JSON document per post plus any downloaded media, then writes
//! every collected record to a single table.

use vendorscope_analytics::{run_collect, save_records_csv, RecordStore};
use vendorscope_core::{AppConfig, PostSource};

use crate::analyze::effective_limit;

/// Collects recent posts for every channel and writes the records table to
/// `config.records_path`.
///
/// # Errors
///
/// Returns an error if authentication fails, the store directories cannot be
/// created, or the records table cannot be written. Per-channel and per-post
/// failures are logged and skipped.
pub(crate) async fn run_collect_posts<S: PostSource>(
    source: &S,
    config: &AppConfig,
    channels: &[String],
    limit: Option<u32>,
) -> anyhow::Result<()> {
    let limit = effective_limit(limit, config.collect_limit)?;
    let store = RecordStore::new(&config.data_dir, &config.media_dir);

    let records = run_collect(source, &store, channels, limit).await?;

    save_records_csv(&records, &config.records_path)?;
    println!(
        "Saved {} posts to {}",
        records.len(),
        config.records_path.display()
    );
    Ok(())
}
