use std::net::SocketAddr;

use axum::{
    extract::{rejection::JsonRejection, ConnectInfo, Path, State},
    http::StatusCode,
    Json,
};
use kpdf_core::models::lenient;
use kpdf_core::models::request::{Request, RequestPayload};
use serde::{Deserialize, Serialize};

use crate::auth::AdminAccess;
use crate::error::ApiError;
use crate::handlers::{json_or_empty, Removed};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct Submitted {
    pub ok: bool,
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct Acknowledged {
    pub ok: bool,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    #[serde(default, deserialize_with = "lenient::string")]
    pub status: Option<String>,
}

pub async fn submit_request(
    State(state): State<AppState>,
    peer: Option<ConnectInfo<SocketAddr>>,
    payload: Result<Json<RequestPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Submitted>), ApiError> {
    let payload = json_or_empty(payload)?;
    let ip_address = peer
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let req = state
        .service
        .submit_request(payload, ip_address)
        .await
        .map_err(|err| match err {
            // Public form gets a single message, not a list
            kpdf_service::Error::Validation(errors) => ApiError::BadRequest(errors.join("; ")),
            other => other.into(),
        })?;

    Ok((StatusCode::CREATED, Json(Submitted { ok: true, id: req.id })))
}

pub async fn list_requests(
    _admin: AdminAccess,
    State(state): State<AppState>,
) -> Result<Json<Vec<Request>>, ApiError> {
    Ok(Json(state.service.list_requests().await?))
}

pub async fn update_request(
    _admin: AdminAccess,
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<StatusUpdate>, JsonRejection>,
) -> Result<Json<Acknowledged>, ApiError> {
    // A missing or unreadable body is just an invalid status
    let status = body.ok().and_then(|Json(update)| update.status).unwrap_or_default();
    state.service.update_request_status(&id, &status).await?;
    Ok(Json(Acknowledged { ok: true }))
}

pub async fn delete_request(
    _admin: AdminAccess,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Removed<Request>>, ApiError> {
    let removed = state.service.delete_request(&id).await?;
    Ok(Json(Removed::new(removed)))
}
