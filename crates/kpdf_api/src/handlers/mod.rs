pub mod admin;
pub mod documents;
pub mod enums;
pub mod requests;

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Serialize;

use crate::error::ApiError;

/// `{"ok": true, "removed": …}` body for deletions.
#[derive(Debug, Serialize)]
pub struct Removed<T> {
    pub ok: bool,
    pub removed: T,
}

impl<T> Removed<T> {
    pub fn new(removed: T) -> Self {
        Self { ok: true, removed }
    }
}

/// Unwraps a JSON body. A body sent without a JSON content type reads as an
/// empty payload, so it fails validation instead of being rejected outright.
pub fn json_or_empty<T: Default>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => Err(rejection.into()),
    }
}
