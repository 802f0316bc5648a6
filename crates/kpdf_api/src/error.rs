use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to HTTP clients. Every body is JSON.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Payload broke one or more rules; all messages are returned together.
    #[error("validation failed")]
    Validation(Vec<String>),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("not found")]
    NotFound,

    #[error("forbidden")]
    Forbidden,

    /// Admin introspection could not read the data file.
    #[error("cannot read data file: {0}")]
    DataFile(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::DataFile(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            Self::Validation(errors) => json!({ "errors": errors }),
            Self::BadRequest(message) => json!({ "error": message }),
            Self::NotFound => json!({ "error": "Not found" }),
            Self::Forbidden => json!({ "error": "Forbidden" }),
            Self::DataFile(detail) => json!({ "error": "Cannot read data file", "detail": detail }),
            Self::Internal(detail) => {
                // Storage details stay in the log
                tracing::error!(%detail, "request failed");
                json!({ "error": "Internal server error" })
            }
        };
        (status, Json(body)).into_response()
    }
}

impl From<kpdf_service::Error> for ApiError {
    fn from(err: kpdf_service::Error) -> Self {
        match err {
            kpdf_service::Error::Validation(errors) => ApiError::Validation(errors),
            kpdf_service::Error::NotFound(_) => ApiError::NotFound,
            kpdf_service::Error::InvalidStatus(_) => ApiError::BadRequest("Invalid status".to_string()),
            kpdf_service::Error::Storage(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
