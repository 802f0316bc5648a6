use kpdf_core::models::request::{Request, RequestPayload, RequestStatus};

use crate::error::{Error, Result};
use crate::CatalogService;

impl CatalogService {
    /// Public submission. Only the title is checked; categories are kept as sent.
    pub async fn submit_request(&self, payload: RequestPayload, ip_address: String) -> Result<Request> {
        let errors = self.request_validator.messages(&payload);
        if !errors.is_empty() {
            return Err(Error::Validation(errors));
        }

        let req = self.requests.insert(Request::from_payload(payload, ip_address)).await?;
        tracing::info!(id = %req.id, ip = %req.ip_address, "request submitted");
        Ok(req)
    }

    pub async fn list_requests(&self) -> Result<Vec<Request>> {
        Ok(self.requests.list().await?)
    }

    /// The status is checked before the id is looked up.
    pub async fn update_request_status(&self, id: &str, status: &str) -> Result<Request> {
        let status: RequestStatus = status
            .parse()
            .map_err(|_| Error::InvalidStatus(status.to_string()))?;

        let updated = self.requests.update(id, |r| r.status = status).await?;
        tracing::info!(id = %updated.id, status = %updated.status, "request status changed");
        Ok(updated)
    }

    pub async fn delete_request(&self, id: &str) -> Result<Request> {
        let removed = self.requests.remove(id).await?;
        tracing::info!(id = %removed.id, "request deleted");
        Ok(removed)
    }
}
