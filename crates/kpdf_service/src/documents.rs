use kpdf_core::filter::DocumentFilter;
use kpdf_core::models::document::{Document, DocumentPayload};
use kpdf_db::CollectionReport;

use crate::error::{Error, Result};
use crate::CatalogService;

impl CatalogService {
    /// Messages for every rule the payload breaks; empty when valid.
    pub fn validate_document(&self, payload: &DocumentPayload) -> Vec<String> {
        self.document_validator.messages(payload)
    }

    pub async fn list_documents(&self, filter: &DocumentFilter) -> Result<Vec<Document>> {
        let all = self.documents.list().await?;
        Ok(filter.apply(all))
    }

    pub async fn get_document(&self, id: &str) -> Result<Document> {
        Ok(self.documents.get(id).await?)
    }

    pub async fn create_document(&self, payload: DocumentPayload) -> Result<Document> {
        // 1. Validate (all rules, messages accumulate)
        let errors = self.validate_document(&payload);
        if !errors.is_empty() {
            tracing::info!(count = errors.len(), "document payload rejected");
            return Err(Error::Validation(errors));
        }

        // 2. Persist
        let doc = self.documents.insert(Document::from_payload(payload)).await?;
        tracing::info!(id = %doc.id, title = %doc.main_title, "document created");
        Ok(doc)
    }

    pub async fn delete_document(&self, id: &str) -> Result<Document> {
        let removed = self.documents.remove(id).await?;
        tracing::info!(id = %removed.id, "document deleted");
        Ok(removed)
    }

    pub async fn documents_report(&self) -> Result<CollectionReport> {
        Ok(self.documents.report().await?)
    }
}
