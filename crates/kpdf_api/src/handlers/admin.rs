use axum::{
    extract::{rejection::FormRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::AdminAccess;
use crate::error::ApiError;
use crate::session::SESSION_COOKIE;
use crate::AppState;

pub const ADMIN_HOME: &str = "/admin/";

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub password: Option<String>,
}

/// Password check → session cookie + redirect to the admin panel.
pub async fn login(
    State(state): State<AppState>,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Response {
    let password = form.ok().and_then(|Form(f)| f.password);
    let accepted = password.is_some_and(|p| state.config.password_matches(&p));
    if !accepted {
        tracing::warn!("admin login rejected");
        return (StatusCode::FORBIDDEN, "Forbidden").into_response();
    }

    let token = state.sessions.issue();
    let cookie = format!(
        "{}={}; Max-Age={}; HttpOnly; Path=/",
        SESSION_COOKIE,
        token,
        state.sessions.ttl().as_secs()
    );
    tracing::info!("admin session issued");

    (
        StatusCode::FOUND,
        [(header::SET_COOKIE, cookie), (header::LOCATION, ADMIN_HOME.to_string())],
    )
        .into_response()
}

#[derive(Debug, Serialize)]
pub struct DebugData {
    pub path: String,
    pub size: u64,
    pub mtime: Option<DateTime<Utc>>,
    pub count: usize,
}

/// Where the document catalog lives on disk and how many entries it holds.
pub async fn debug_data(
    _admin: AdminAccess,
    State(state): State<AppState>,
) -> Result<Json<DebugData>, ApiError> {
    let report = state
        .service
        .documents_report()
        .await
        .map_err(|e| ApiError::DataFile(e.to_string()))?;

    Ok(Json(DebugData {
        path: report.info.location,
        size: report.info.size,
        mtime: report.info.modified,
        count: report.count,
    }))
}
