use std::path::PathBuf;

use anyhow::Result;
use reqwest::Client;
use tracing::{debug, error, info};
use url::Url;

use crate::discord;
use crate::error::BotError;
use crate::mojang;
use crate::player::PlayerRecord;
use crate::playtime::format_play_time;
use crate::snapshot;
use crate::stats;

pub struct BotConfig {
    pub server_dir: PathBuf,
    pub webhook_url: Url,
    pub profile_api: Url,
    pub snapshot_path: PathBuf,
    pub retries: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Stats match the snapshot; nothing was posted or written.
    Unchanged,
    /// Leaderboard posted and snapshot updated.
    Posted,
    /// Leaderboard changed but the webhook rejected it; snapshot kept as-is
    /// so the next run posts again.
    DeliveryFailed,
}

/// Execute one pass: read stats, resolve names, compare against the
/// snapshot, and post + persist when something changed.
pub async fn run(client: &Client, config: &BotConfig) -> Result<RunOutcome> {
    let players = collect_players(client, config).await?;
    info!("Collected {} player record(s)", players.len());

    let previous = snapshot::load_snapshot_or_empty(&config.snapshot_path);
    if players == previous {
        info!("Playtime stats unchanged since last run, nothing to post");
        return Ok(RunOutcome::Unchanged);
    }

    match discord::post_leaderboard(client, &config.webhook_url, &players, config.retries).await {
        Ok(()) => {
            snapshot::save_snapshot(&config.snapshot_path, &players)?;
            info!(
                "Posted leaderboard for {} player(s), snapshot updated at {:?}",
                players.len(),
                config.snapshot_path
            );
            Ok(RunOutcome::Posted)
        }
        Err(err) => {
            // Delivery failure is reported but never fatal. The snapshot is
            // only written after a confirmed post, so this change is still
            // pending on the next run.
            error!("Posting to webhook failed: {}", err);
            Ok(RunOutcome::DeliveryFailed)
        }
    }
}

/// Build the full player list, one record per stats file. Any locate, read,
/// or lookup error aborts the whole pass; a partial leaderboard is never
/// compared or posted.
async fn collect_players(client: &Client, config: &BotConfig) -> Result<Vec<PlayerRecord>, BotError> {
    let mut players = Vec::new();
    for path in stats::locate_stats_files(&config.server_dir)? {
        let uuid = stats::player_uuid(&path)?;
        let name = mojang::lookup_player_name(client, &config.profile_api, &uuid, config.retries).await?;
        let play_time = stats::read_play_time(&path)?;
        let display_time = format_play_time(play_time);
        debug!("Resolved {} as {} with {} ticks", uuid, name, play_time);

        players.push(PlayerRecord {
            name,
            play_time,
            display_time,
        });
    }
    Ok(players)
}
