use std::sync::Arc;

use chrono::{DateTime, Utc};
use kpdf_core::models::document::Document;
use kpdf_core::models::request::Request;
use tokio::sync::Mutex;

use crate::error::{Error, Result};
use crate::ids::make_id;
use crate::store::{CollectionStore, StoreInfo};

/// A record kept in a flat collection, addressed by an opaque id.
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;

    /// Stamps the server-side identity fields on insert.
    fn assign_identity(&mut self, id: String, at: DateTime<Utc>);
}

impl Record for Document {
    fn id(&self) -> &str {
        &self.id
    }

    fn assign_identity(&mut self, id: String, at: DateTime<Utc>) {
        self.id = id;
        self.upload_date = at;
    }
}

impl Record for Request {
    fn id(&self) -> &str {
        &self.id
    }

    fn assign_identity(&mut self, id: String, at: DateTime<Utc>) {
        self.id = id;
        self.created_at = at;
    }
}

/// Snapshot used by the admin debug view.
#[derive(Debug, Clone)]
pub struct CollectionReport {
    pub info: StoreInfo,
    pub count: usize,
}

/// Newest-first collection over a [`CollectionStore`].
///
/// Every mutation is load → change in memory → save the whole collection.
/// Mutations from this process are serialized; a second process writing the
/// same store still races (last writer wins).
pub struct Repository<T: Record> {
    store: Arc<dyn CollectionStore<T>>,
    write_lock: Mutex<()>,
}

pub type DocumentRepository = Repository<Document>;
pub type RequestRepository = Repository<Request>;

impl<T: Record> Repository<T> {
    pub fn new(store: Arc<dyn CollectionStore<T>>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn ensure(&self) -> Result<()> {
        self.store.ensure().await
    }

    pub async fn list(&self) -> Result<Vec<T>> {
        self.store.load().await
    }

    pub async fn get(&self, id: &str) -> Result<T> {
        self.store
            .load()
            .await?
            .into_iter()
            .find(|r| r.id() == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Assigns a fresh id and timestamp, prepends, persists.
    pub async fn insert(&self, mut record: T) -> Result<T> {
        let _guard = self.write_lock.lock().await;
        let mut all = self.store.load().await?;

        let mut id = make_id();
        while all.iter().any(|r| r.id() == id) {
            id = make_id();
        }
        record.assign_identity(id, Utc::now());

        all.insert(0, record.clone());
        self.store.save(&all).await?;
        Ok(record)
    }

    /// Applies `change` to the matching record and persists.
    pub async fn update<F>(&self, id: &str, change: F) -> Result<T>
    where
        F: FnOnce(&mut T) + Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut all = self.store.load().await?;

        let record = all
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        change(record);
        let updated = record.clone();

        self.store.save(&all).await?;
        Ok(updated)
    }

    /// Removes the matching record. Nothing is written when the id is unknown.
    pub async fn remove(&self, id: &str) -> Result<T> {
        let _guard = self.write_lock.lock().await;
        let mut all = self.store.load().await?;

        let idx = all
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        let removed = all.remove(idx);

        self.store.save(&all).await?;
        Ok(removed)
    }

    pub async fn report(&self) -> Result<CollectionReport> {
        let info = self.store.inspect().await?;
        let count = self.store.load().await?.len();
        Ok(CollectionReport { info, count })
    }
}
