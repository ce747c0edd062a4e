mod analyze;
mod collect;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "vendorscope")]
#[command(about = "Channel vendor analytics")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Score every configured channel and write the scorecard table (default)
    Analyze {
        /// Order rows by lending score instead of channel-list order
        #[arg(long)]
        sort_by_score: bool,
        /// Posts sampled per channel (overrides VENDORSCOPE_SAMPLE_LIMIT)
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Fetch the most recent posts, persist them with their media, and write
    /// the processed-posts table
    Collect {
        /// Posts fetched per channel (overrides VENDORSCOPE_COLLECT_LIMIT)
        #[arg(long)]
        limit: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = vendorscope_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    tracing::debug!(?config, "configuration loaded");

    let channels = vendorscope_core::load_channels(&config.channels_path)?.handles();

    let client = vendorscope_feed::FeedClient::new(
        &config.feed_url,
        &config.feed_token,
        config.request_timeout_secs,
        &config.user_agent,
    )
    .map_err(|e| anyhow::anyhow!("failed to build feed client: {e}"))?;

    match cli.command {
        Some(Commands::Analyze {
            sort_by_score,
            limit,
        }) => analyze::run_analyze(&client, &config, &channels, limit, sort_by_score).await,
        None => analyze::run_analyze(&client, &config, &channels, None, false).await,
        Some(Commands::Collect { limit }) => {
            collect::run_collect_posts(&client, &config, &channels, limit).await
        }
    }
}
