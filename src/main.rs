use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use reqwest::Client;
use tracing::info;
use url::Url;

use sweatboard::mojang::DEFAULT_PROFILE_API;
use sweatboard::pipeline::{self, BotConfig};

#[derive(Parser, Debug)]
#[command(
    name = "sweatboard",
    about = "Post a Minecraft playtime leaderboard to a webhook when it changes"
)]
struct Args {
    /// Path to the Minecraft server root directory (contains world/stats/)
    server_dir: PathBuf,

    /// Webhook URL the leaderboard is posted to
    webhook_url: String,

    /// Snapshot file used for change detection between runs
    #[arg(long, default_value = "playtime_snapshot.json")]
    snapshot: PathBuf,

    /// Base URL of the profile lookup service
    #[arg(long, default_value = DEFAULT_PROFILE_API)]
    profile_api: String,

    /// Extra attempts for each HTTP call (0 = single attempt)
    #[arg(long, default_value_t = 0)]
    retries: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let args = Args::parse();
    let webhook_url = Url::parse(&args.webhook_url).context("Invalid webhook URL")?;
    let profile_api = Url::parse(&args.profile_api).context("Invalid profile API base URL")?;
    let client = Client::new();

    let config = BotConfig {
        server_dir: args.server_dir,
        webhook_url,
        profile_api,
        snapshot_path: args.snapshot,
        retries: args.retries,
    };

    info!("Reading playtime stats from {:?}", config.server_dir);
    pipeline::run(&client, &config).await?;
    Ok(())
}
