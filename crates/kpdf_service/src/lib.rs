pub mod config;
pub mod documents;
pub mod error;
pub mod requests;

use std::path::Path;
use std::sync::Arc;

use kpdf_core::models::document::{Document, DocumentPayload};
use kpdf_core::models::request::{Request, RequestPayload};
use kpdf_core::validation::ValidationEngine;
use kpdf_core::{get_request_validator, get_standard_validator};
use kpdf_db::{CollectionStore, DocumentRepository, JsonFileStore, MemoryStore, RequestRepository};

pub use error::{Error, Result};

use crate::config::{DOCUMENTS_FILE, REQUESTS_FILE};

/// Business operations over the document catalog and the request queue.
#[derive(Clone)]
pub struct CatalogService {
    pub documents: Arc<DocumentRepository>,
    pub requests: Arc<RequestRepository>,
    document_validator: Arc<ValidationEngine<DocumentPayload>>,
    request_validator: Arc<ValidationEngine<RequestPayload>>,
}

impl CatalogService {
    pub fn new(
        documents: Arc<dyn CollectionStore<Document>>,
        requests: Arc<dyn CollectionStore<Request>>,
    ) -> Self {
        Self {
            documents: Arc::new(DocumentRepository::new(documents)),
            requests: Arc::new(RequestRepository::new(requests)),
            document_validator: Arc::new(get_standard_validator()),
            request_validator: Arc::new(get_request_validator()),
        }
    }

    /// `pdfs.json` and `requests.json` under `data_dir`.
    pub fn open(data_dir: &Path) -> Self {
        Self::new(
            Arc::new(JsonFileStore::new(data_dir.join(DOCUMENTS_FILE))),
            Arc::new(JsonFileStore::new(data_dir.join(REQUESTS_FILE))),
        )
    }

    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryStore::<Document>::new()),
            Arc::new(MemoryStore::<Request>::new()),
        )
    }

    /// Seeds both collections on first run.
    pub async fn ensure_storage(&self) -> Result<()> {
        self.documents.ensure().await?;
        self.requests.ensure().await?;
        Ok(())
    }
}
