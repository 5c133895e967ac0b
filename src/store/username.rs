use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::StoreResult;

/// Key under which the last-used player name is remembered
const USERNAME_KEY: &str = "username";

/// One expiring key-value pair in the jar
#[derive(Debug, Clone, Serialize, Deserialize)]
struct JarEntry {
    name: String,
    value: String,
    expires: DateTime<Utc>,
}

/// Expiring username memory, modeled as a small cookie jar.
///
/// The jar is a JSON array of named entries with RFC3339 expiries. Recall is
/// a linear scan; the first live entry under the username key wins.
pub struct UsernameMemory {
    path: PathBuf,
}

impl UsernameMemory {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("cookies.json"),
        }
    }

    async fn read_jar(&self) -> Vec<JarEntry> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(
                    "Cookie jar at {} failed to parse, treating as empty: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    async fn write_jar(&self, entries: &[JarEntry]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(entries)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }

    /// Store the name under the username key, overwriting any prior value.
    /// The entry expires `ttl_days` from now.
    pub async fn remember(&self, name: &str, ttl_days: i64) -> StoreResult<()> {
        let mut entries = self.read_jar().await;
        entries.retain(|e| e.name != USERNAME_KEY);
        entries.push(JarEntry {
            name: USERNAME_KEY.to_string(),
            value: name.to_string(),
            expires: Utc::now() + Duration::days(ttl_days),
        });

        self.write_jar(&entries).await?;
        tracing::debug!("Remembered username for {} days", ttl_days);
        Ok(())
    }

    /// Return the remembered name, or an empty string if none is stored or
    /// the entry has expired.
    pub async fn recall(&self) -> String {
        let now = Utc::now();
        self.read_jar()
            .await
            .into_iter()
            .find(|e| e.name == USERNAME_KEY && e.expires > now)
            .map(|e| e.value)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_recall_empty_jar() {
        let dir = tempfile::tempdir().unwrap();
        let memory = UsernameMemory::new(dir.path());

        assert_eq!(memory.recall().await, "");
    }

    #[tokio::test]
    async fn test_remember_then_recall() {
        let dir = tempfile::tempdir().unwrap();
        let memory = UsernameMemory::new(dir.path());

        memory.remember("alice", 7).await.unwrap();
        assert_eq!(memory.recall().await, "alice");
    }

    #[tokio::test]
    async fn test_remember_overwrites_prior_value() {
        let dir = tempfile::tempdir().unwrap();
        let memory = UsernameMemory::new(dir.path());

        memory.remember("alice", 7).await.unwrap();
        memory.remember("bob", 7).await.unwrap();

        assert_eq!(memory.recall().await, "bob");

        // The overwrite replaced the entry rather than stacking a second one
        assert_eq!(memory.read_jar().await.len(), 1);
    }

    #[tokio::test]
    async fn test_expired_entry_recalls_empty() {
        let dir = tempfile::tempdir().unwrap();
        let memory = UsernameMemory::new(dir.path());

        let entries = vec![JarEntry {
            name: USERNAME_KEY.to_string(),
            value: "alice".to_string(),
            expires: Utc::now() - Duration::days(1),
        }];
        memory.write_jar(&entries).await.unwrap();

        assert_eq!(memory.recall().await, "");
    }

    #[tokio::test]
    async fn test_corrupt_jar_recalls_empty() {
        let dir = tempfile::tempdir().unwrap();
        let memory = UsernameMemory::new(dir.path());

        tokio::fs::write(dir.path().join("cookies.json"), "][")
            .await
            .unwrap();

        assert_eq!(memory.recall().await, "");
    }

    #[tokio::test]
    async fn test_unrelated_entries_survive_remember() {
        let dir = tempfile::tempdir().unwrap();
        let memory = UsernameMemory::new(dir.path());

        let entries = vec![JarEntry {
            name: "theme".to_string(),
            value: "dark".to_string(),
            expires: Utc::now() + Duration::days(30),
        }];
        memory.write_jar(&entries).await.unwrap();

        memory.remember("alice", 7).await.unwrap();

        let jar = memory.read_jar().await;
        assert_eq!(jar.len(), 2);
        assert!(jar.iter().any(|e| e.name == "theme"));
        assert_eq!(memory.recall().await, "alice");
    }
}
