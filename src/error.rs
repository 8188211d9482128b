use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error("stats directory not found or unreadable: {path:?}")]
    DirectoryNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed stats file {path:?}: {reason}")]
    MalformedStats { path: PathBuf, reason: String },
    #[error("name lookup failed for uuid {uuid}: {reason}")]
    NameLookupFailed { uuid: String, reason: String },
    #[error("webhook delivery failed: {0}")]
    NotificationDeliveryFailed(String),
    #[error("snapshot file unreadable: {0}")]
    SnapshotCorrupt(String),
}
