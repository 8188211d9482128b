use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::BotError;

/// Per-player stats file as written by the server. Only the play-time
/// counter is consumed; everything else is ignored.
#[derive(Debug, Deserialize)]
struct StatsFile {
    stats: StatsSection,
}

#[derive(Debug, Deserialize)]
struct StatsSection {
    #[serde(rename = "minecraft:custom")]
    custom: Option<CustomStats>,
}

#[derive(Debug, Deserialize)]
struct CustomStats {
    #[serde(rename = "minecraft:play_time")]
    play_time: Option<u64>,
}

/// List the per-player stats files under `<server_dir>/world/stats/`.
///
/// Only regular files directly in the directory are returned, sorted by
/// filename so enumeration order is identical across runs and platforms.
pub fn locate_stats_files(server_dir: &Path) -> Result<Vec<PathBuf>, BotError> {
    let stats_dir = server_dir.join("world").join("stats");
    let entries = fs::read_dir(&stats_dir).map_err(|source| BotError::DirectoryNotFound {
        path: stats_dir.clone(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| BotError::DirectoryNotFound {
            path: stats_dir.clone(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Derive the player uuid from a stats file path (the undashed filename stem).
pub fn player_uuid(path: &Path) -> Result<String, BotError> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| stem.to_string())
        .ok_or_else(|| BotError::MalformedStats {
            path: path.to_path_buf(),
            reason: "filename is not valid UTF-8".to_string(),
        })
}

/// Read one stats file and extract the play-time tick count at
/// `stats.minecraft:custom.minecraft:play_time`.
pub fn read_play_time(path: &Path) -> Result<u64, BotError> {
    let raw = fs::read_to_string(path).map_err(|err| BotError::MalformedStats {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;

    let parsed: StatsFile = serde_json::from_str(&raw).map_err(|err| BotError::MalformedStats {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;

    parsed
        .stats
        .custom
        .and_then(|custom| custom.play_time)
        .ok_or_else(|| BotError::MalformedStats {
            path: path.to_path_buf(),
            reason: "missing stats.minecraft:custom.minecraft:play_time".to_string(),
        })
}
