use std::path::{Path, PathBuf};

use super::StoreResult;
use crate::types::ScoreEntry;

/// Durable, append-only score history.
///
/// Stored as one JSON array of `{username, score}` objects. Every append
/// reads the full list and rewrites the whole file, matching the
/// read-modify-write behavior of the storage slot it replaces. The list is
/// never deduplicated, sorted, or capped.
pub struct LeaderboardStore {
    path: PathBuf,
}

impl LeaderboardStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("leaderboard.json"),
        }
    }

    /// Read the full score history, oldest first.
    ///
    /// A missing file or unparseable contents yield an empty list; neither
    /// is surfaced to the caller as an error.
    pub async fn read_all(&self) -> Vec<ScoreEntry> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(
                    "Leaderboard at {} failed to parse, treating as empty: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Append one entry, rewriting the whole collection.
    pub async fn append(&self, entry: ScoreEntry) -> StoreResult<()> {
        let mut entries = self.read_all().await;
        entries.push(entry);

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(&entries)?;
        tokio::fs::write(&self.path, json).await?;

        tracing::debug!("Leaderboard now holds {} entries", entries.len());
        Ok(())
    }
}
