use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::handlers::{admin, documents, enums, requests};
use crate::AppState;

pub fn app_router(state: AppState) -> Router {
    Router::new()
        // Public catalog
        .route("/api/enums", get(enums::get_enums))
        .route(
            "/api/pdfs",
            get(documents::list_documents).post(documents::create_document),
        )
        .route(
            "/api/pdfs/:id",
            get(documents::get_document).delete(documents::delete_document),
        )
        // Request queue (submit is public, the rest is admin)
        .route(
            "/api/requests",
            get(requests::list_requests).post(requests::submit_request),
        )
        .route(
            "/api/requests/:id",
            patch(requests::update_request).delete(requests::delete_request),
        )
        // Admin
        .route("/admin/login", post(admin::login))
        .route("/admin/debug-data", get(admin::debug_data))
        .with_state(state)
}
