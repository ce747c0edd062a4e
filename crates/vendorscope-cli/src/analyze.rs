//! `analyze` command handler.

use vendorscope_analytics::{run_analysis, RankOrder};
use vendorscope_core::{AppConfig, PostSource};

/// Scores every channel, prints the table, and writes it to
/// `config.output_path`.
///
/// # Errors
///
/// Returns an error if authentication with the source fails or the output
/// file cannot be written. Per-channel failures are logged and skipped.
pub(crate) async fn run_analyze<S: PostSource>(
    source: &S,
    config: &AppConfig,
    channels: &[String],
    limit: Option<u32>,
    sort_by_score: bool,
) -> anyhow::Result<()> {
    let limit = effective_limit(limit, config.sample_limit)?;
    let order = if sort_by_score {
        RankOrder::ByScoreDescending
    } else {
        RankOrder::Insertion
    };

    let table = run_analysis(source, channels, limit, order).await?;

    println!("\nVendor Performance Analysis:");
    if table.is_empty() {
        println!("no channels produced a scorecard");
    } else {
        println!("{}", table.render());
    }

    table.save_csv(&config.output_path)?;
    println!("\nResults saved to {}", config.output_path.display());
    Ok(())
}

/// Resolves a command-line limit against the configured default.
pub(crate) fn effective_limit(requested: Option<u32>, configured: u32) -> anyhow::Result<u32> {
    match requested {
        Some(0) => anyhow::bail!("--limit must be at least 1"),
        Some(n) => Ok(n),
        None => Ok(configured),
    }
}
