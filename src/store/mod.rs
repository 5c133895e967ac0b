//! Browser-storage analogues backed by small JSON files
//!
//! The leaderboard plays the role of durable local storage (survives
//! indefinitely), the username jar the role of an expiring cookie.

mod leaderboard;
mod username;

pub use leaderboard::LeaderboardStore;
pub use username::UsernameMemory;

/// Errors that can occur while writing the stores.
///
/// Reads never error: missing or corrupt data degrades to "no data".
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
