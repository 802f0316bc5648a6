use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;

use crate::error::{Error, Result};

/// Where a collection lives and how big it is, for admin introspection.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StoreInfo {
    pub location: String,
    pub size: u64,
    pub modified: Option<DateTime<Utc>>,
}

/// Whole-collection persistence. Every save replaces the previous
/// collection; there is no incremental write path.
#[async_trait]
pub trait CollectionStore<T: Send + Sync>: Send + Sync {
    /// Seeds an empty collection when nothing has been persisted yet.
    async fn ensure(&self) -> Result<()> {
        Ok(())
    }

    async fn load(&self) -> Result<Vec<T>>;

    async fn save(&self, records: &[T]) -> Result<()>;

    async fn inspect(&self) -> Result<StoreInfo>;
}

// ---------------------------------------------------------------------------
// JSON file: one pretty-printed array per collection
// ---------------------------------------------------------------------------
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl<T> CollectionStore<T> for JsonFileStore
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    async fn ensure(&self) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| Error::io(dir, e))?;
        }
        let exists = tokio::fs::try_exists(&self.path)
            .await
            .map_err(|e| Error::io(&self.path, e))?;
        if !exists {
            tracing::info!(path = %self.path.display(), "seeding empty collection");
            tokio::fs::write(&self.path, "[]")
                .await
                .map_err(|e| Error::io(&self.path, e))?;
        }
        Ok(())
    }

    async fn load(&self) -> Result<Vec<T>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| Error::io(&self.path, e))?;

        // An empty file reads as an empty collection
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&raw).map_err(|source| Error::Corrupt {
            location: self.path.display().to_string(),
            source,
        })
    }

    async fn save(&self, records: &[T]) -> Result<()> {
        let body = serde_json::to_string_pretty(records).map_err(|source| Error::Corrupt {
            location: self.path.display().to_string(),
            source,
        })?;

        // Write beside the target, then swap, so readers never see half a file
        let staging = self.staging_path();
        tokio::fs::write(&staging, body)
            .await
            .map_err(|e| Error::io(&staging, e))?;
        tokio::fs::rename(&staging, &self.path)
            .await
            .map_err(|e| Error::io(&self.path, e))?;
        Ok(())
    }

    async fn inspect(&self) -> Result<StoreInfo> {
        let meta = tokio::fs::metadata(&self.path)
            .await
            .map_err(|e| Error::io(&self.path, e))?;
        Ok(StoreInfo {
            location: self.path.display().to_string(),
            size: meta.len(),
            modified: meta.modified().ok().map(DateTime::<Utc>::from),
        })
    }
}

// ---------------------------------------------------------------------------
// In-memory: for tests and throwaway instances
// ---------------------------------------------------------------------------
#[derive(Debug)]
pub struct MemoryStore<T> {
    records: RwLock<Vec<T>>,
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self { records: RwLock::new(Vec::new()) }
    }

    pub fn with_records(records: Vec<T>) -> Self {
        Self { records: RwLock::new(records) }
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> CollectionStore<T> for MemoryStore<T>
where
    T: Serialize + Clone + Send + Sync,
{
    async fn load(&self) -> Result<Vec<T>> {
        Ok(self.records.read().await.clone())
    }

    async fn save(&self, records: &[T]) -> Result<()> {
        *self.records.write().await = records.to_vec();
        Ok(())
    }

    async fn inspect(&self) -> Result<StoreInfo> {
        let records = self.records.read().await;
        let size = serde_json::to_vec_pretty(&*records)
            .map_err(|source| Error::Corrupt { location: "memory".to_string(), source })?
            .len() as u64;
        Ok(StoreInfo { location: "memory".to_string(), size, modified: None })
    }
}
