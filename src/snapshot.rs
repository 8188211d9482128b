use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use crate::error::BotError;
use crate::player::PlayerRecord;

/// Load the last-posted leaderboard from the snapshot file.
///
/// A missing file means a first run and loads as the empty list. Anything
/// else that prevents reading the records comes back as `SnapshotCorrupt`.
pub fn load_snapshot(path: &Path) -> Result<Vec<PlayerRecord>, BotError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(BotError::SnapshotCorrupt(err.to_string())),
    };

    serde_json::from_str(&raw).map_err(|err| BotError::SnapshotCorrupt(err.to_string()))
}

/// Load the snapshot, treating an unreadable file as "no prior data".
/// Corruption is never fatal here; the run continues as if it were the first.
pub fn load_snapshot_or_empty(path: &Path) -> Vec<PlayerRecord> {
    match load_snapshot(path) {
        Ok(records) => records,
        Err(err) => {
            warn!("Ignoring snapshot {:?}: {}", path, err);
            Vec::new()
        }
    }
}

/// Overwrite the snapshot file with the freshly posted leaderboard.
pub fn save_snapshot(path: &Path, records: &[PlayerRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records).context("Failed to serialize snapshot")?;
    fs::write(path, json).with_context(|| format!("Failed to write snapshot file: {:?}", path))?;
    Ok(())
}
