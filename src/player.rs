use serde::{Deserialize, Serialize};

/// One leaderboard entry, built fresh each run and persisted as-is in the
/// snapshot file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub play_time: u64,
    pub display_time: String,
}

/// Rank players by play time, most played first. The sort is stable, so
/// players with equal play time keep their aggregation order.
pub fn sort_players(players: &[PlayerRecord]) -> Vec<PlayerRecord> {
    let mut ranked = players.to_vec();
    ranked.sort_by(|a, b| b.play_time.cmp(&a.play_time));
    ranked
}
