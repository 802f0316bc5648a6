use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::request::Parts;
use axum::http::HeaderMap;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::error::ApiError;
use crate::session::SESSION_COOKIE;
use crate::AppState;

/// Proof that the caller is the administrator. Add it as a handler argument
/// to gate the route; rejection is `403 {"error":"Forbidden"}`.
///
/// Accepted credentials, in order:
/// 1. `Authorization: Basic base64(user:password)`
/// 2. a live session token in the `kbspdf_auth` cookie
#[derive(Debug, Clone, Copy)]
pub struct AdminAccess;

#[async_trait]
impl FromRequestParts<AppState> for AdminAccess {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        if let Some((user, password)) = basic_credentials(&parts.headers) {
            if user == state.config.admin_user && state.config.password_matches(&password) {
                return Ok(AdminAccess);
            }
        }

        if let Some(token) = cookie_value(&parts.headers, SESSION_COOKIE) {
            if state.sessions.is_valid(&token) {
                return Ok(AdminAccess);
            }
        }

        tracing::warn!(path = %parts.uri.path(), "admin access denied");
        Err(ApiError::Forbidden)
    }
}

/// Decodes a Basic `Authorization` header into `(user, password)`.
pub fn basic_credentials(headers: &HeaderMap) -> Option<(String, String)> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let encoded = value.strip_prefix("Basic ")?.trim();
    let decoded = BASE64.decode(encoded).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (user, password) = decoded.split_once(':')?;
    Some((user.to_string(), password.to_string()))
}

/// Finds `name` across all `Cookie` headers.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| k.trim() == name)
        .map(|(_, v)| v.trim().to_string())
}
