//! Progress store implementations
//!
//! The scheduler reads and writes per-item state through the
//! `ProgressStore` trait. Two backends exist: an in-memory map for
//! tests and ephemeral deployments, and a JSON file store that
//! persists the document across restarts.

use crate::error::Result;
use crate::progress::{ItemProgress, StudyStats};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Durable per-item state store
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Get one item's progress, absent when never attempted
    async fn get(&self, item_id: &str) -> Result<Option<ItemProgress>>;

    /// Insert or overwrite one item's progress
    async fn set(&self, item_id: &str, progress: ItemProgress) -> Result<()>;

    /// Enumerate all stored items (for window-based analytics)
    async fn all(&self) -> Result<HashMap<String, ItemProgress>>;

    /// Aggregate study statistics
    async fn study_stats(&self) -> Result<StudyStats>;

    /// Record study activity for streak tracking
    async fn record_study_day(&self, today: NaiveDate) -> Result<()>;

    /// Full reset; the only path that deletes item state
    async fn reset(&self) -> Result<()>;
}

/// The persisted document: item map plus aggregate stats
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ProgressDocument {
    items: HashMap<String, ItemProgress>,
    stats: StudyStats,
}

impl ProgressDocument {
    fn set(&mut self, item_id: &str, progress: ItemProgress) {
        self.items.insert(item_id.to_string(), progress);
        let mut stats = std::mem::take(&mut self.stats);
        stats.refresh_counts(self.items.values());
        self.stats = stats;
    }
}

/// In-memory progress store
#[derive(Default)]
pub struct MemoryProgressStore {
    document: Arc<RwLock<ProgressDocument>>,
}

impl MemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProgressStore for MemoryProgressStore {
    async fn get(&self, item_id: &str) -> Result<Option<ItemProgress>> {
        Ok(self.document.read().await.items.get(item_id).cloned())
    }

    async fn set(&self, item_id: &str, progress: ItemProgress) -> Result<()> {
        self.document.write().await.set(item_id, progress);
        Ok(())
    }

    async fn all(&self) -> Result<HashMap<String, ItemProgress>> {
        Ok(self.document.read().await.items.clone())
    }

    async fn study_stats(&self) -> Result<StudyStats> {
        Ok(self.document.read().await.stats.clone())
    }

    async fn record_study_day(&self, today: NaiveDate) -> Result<()> {
        self.document.write().await.stats.record_study_day(today);
        Ok(())
    }

    async fn reset(&self) -> Result<()> {
        *self.document.write().await = ProgressDocument::default();
        Ok(())
    }
}

/// JSON-file-backed progress store.
///
/// The whole document is held in memory and rewritten on every
/// mutation; at single-user scale the file stays small enough that
/// this is simpler and safer than incremental updates.
pub struct JsonProgressStore {
    path: PathBuf,
    document: Arc<RwLock<ProgressDocument>>,
}

impl JsonProgressStore {
    /// Open the store, loading any existing document from disk
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let document = Self::load_from_disk(&path)?;
        Ok(Self {
            path,
            document: Arc::new(RwLock::new(document)),
        })
    }

    fn load_from_disk(path: &Path) -> Result<ProgressDocument> {
        if !path.exists() {
            return Ok(ProgressDocument::default());
        }
        let data = std::fs::read_to_string(path)?;
        let document = serde_json::from_str(&data)?;
        Ok(document)
    }

    async fn persist(&self, document: &ProgressDocument) -> Result<()> {
        let data = serde_json::to_string_pretty(document)?;
        tokio::fs::write(&self.path, data).await?;
        Ok(())
    }
}

#[async_trait]
impl ProgressStore for JsonProgressStore {
    async fn get(&self, item_id: &str) -> Result<Option<ItemProgress>> {
        Ok(self.document.read().await.items.get(item_id).cloned())
    }

    async fn set(&self, item_id: &str, progress: ItemProgress) -> Result<()> {
        let mut document = self.document.write().await;
        document.set(item_id, progress);
        self.persist(&document).await
    }

    async fn all(&self) -> Result<HashMap<String, ItemProgress>> {
        Ok(self.document.read().await.items.clone())
    }

    async fn study_stats(&self) -> Result<StudyStats> {
        Ok(self.document.read().await.stats.clone())
    }

    async fn record_study_day(&self, today: NaiveDate) -> Result<()> {
        let mut document = self.document.write().await;
        document.stats.record_study_day(today);
        self.persist(&document).await
    }

    async fn reset(&self) -> Result<()> {
        let mut document = self.document.write().await;
        *document = ProgressDocument::default();
        self.persist(&document).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::level::Level;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn sample(word: &str) -> ItemProgress {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        ItemProgress::new(word, Level::B1, now)
    }

    #[tokio::test]
    async fn test_memory_store_roundtrip() {
        let store = MemoryProgressStore::new();
        assert!(store.get("abandon").await.unwrap().is_none());

        store.set("abandon", sample("abandon")).await.unwrap();
        let loaded = store.get("abandon").await.unwrap().unwrap();
        assert_eq!(loaded.word, "abandon");

        let stats = store.study_stats().await.unwrap();
        assert_eq!(stats.learned_words, 1);
    }

    #[tokio::test]
    async fn test_memory_store_reset() {
        let store = MemoryProgressStore::new();
        store.set("abandon", sample("abandon")).await.unwrap();
        store.reset().await.unwrap();
        assert!(store.all().await.unwrap().is_empty());
        assert_eq!(store.study_stats().await.unwrap().learned_words, 0);
    }

    #[tokio::test]
    async fn test_json_store_persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("progress.json");

        {
            let store = JsonProgressStore::open(&path).unwrap();
            store.set("abandon", sample("abandon")).await.unwrap();
            store
                .record_study_day(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap())
                .await
                .unwrap();
        }

        let store = JsonProgressStore::open(&path).unwrap();
        assert!(store.get("abandon").await.unwrap().is_some());
        let stats = store.study_stats().await.unwrap();
        assert_eq!(stats.streak, 1);
    }

    #[tokio::test]
    async fn test_json_store_rejects_corrupt_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("progress.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            JsonProgressStore::open(&path),
            Err(Error::Corrupt(_))
        ));
    }
}
