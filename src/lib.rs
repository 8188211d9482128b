pub mod discord;
pub mod error;
pub mod mojang;
pub mod pipeline;
pub mod player;
pub mod playtime;
pub mod snapshot;
pub mod stats;
