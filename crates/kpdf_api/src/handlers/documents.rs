use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use kpdf_core::filter::DocumentFilter;
use kpdf_core::models::document::{Document, DocumentPayload};

use crate::auth::AdminAccess;
use crate::error::ApiError;
use crate::handlers::{json_or_empty, Removed};
use crate::AppState;

pub async fn list_documents(
    State(state): State<AppState>,
    Query(filter): Query<DocumentFilter>,
) -> Result<Json<Vec<Document>>, ApiError> {
    let docs = state.service.list_documents(&filter).await?;
    Ok(Json(docs))
}

pub async fn get_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Document>, ApiError> {
    let doc = state.service.get_document(&id).await?;
    Ok(Json(doc))
}

pub async fn create_document(
    _admin: AdminAccess,
    State(state): State<AppState>,
    payload: Result<Json<DocumentPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Document>), ApiError> {
    let payload = json_or_empty(payload)?;
    let doc = state.service.create_document(payload).await?;
    Ok((StatusCode::CREATED, Json(doc)))
}

pub async fn delete_document(
    _admin: AdminAccess,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Removed<Document>>, ApiError> {
    let removed = state.service.delete_document(&id).await?;
    Ok(Json(Removed::new(removed)))
}
