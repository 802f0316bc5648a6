use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::lenient;

pub const DEFAULT_REQUEST_TYPE: &str = "자료요청";

// ---------------------------------------------------------------------------
// The Visitor Ask: Request
// "Please add this document", triaged by an administrator.
// ---------------------------------------------------------------------------
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Request {
    pub id: String,
    pub ip_address: String,
    pub requested_title: String,

    #[serde(default = "default_request_type")]
    pub request_type: String,

    // Free-form; not checked against the taxonomy
    #[serde(default)]
    pub category_l1: String,
    #[serde(default)]
    pub category_l2: String,
    #[serde(default)]
    pub category_l3: String,
    #[serde(default)]
    pub category_l4: String,

    #[serde(default)]
    pub comments: String,

    #[serde(default)]
    pub status: RequestStatus,

    pub created_at: DateTime<Utc>,
}

fn default_request_type() -> String {
    DEFAULT_REQUEST_TYPE.to_string()
}

impl Request {
    pub fn from_payload(payload: RequestPayload, ip_address: String) -> Self {
        Self {
            id: String::new(),
            ip_address,
            requested_title: payload.requested_title.unwrap_or_default(),
            request_type: lenient::non_empty(&payload.request_type)
                .map(str::to_string)
                .unwrap_or_else(default_request_type),
            category_l1: payload.category_l1.unwrap_or_default(),
            category_l2: payload.category_l2.unwrap_or_default(),
            category_l3: payload.category_l3.unwrap_or_default(),
            category_l4: payload.category_l4.unwrap_or_default(),
            comments: payload.comments.unwrap_or_default(),
            status: RequestStatus::Working,
            created_at: Utc::now(),
        }
    }
}

/// Public body for `POST /api/requests`.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct RequestPayload {
    #[serde(default, deserialize_with = "lenient::string")]
    pub requested_title: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub request_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub category_l1: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub category_l2: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub category_l3: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub category_l4: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub comments: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Working,
    Uploaded,
    Rejected,
}

impl RequestStatus {
    pub const ALL: [RequestStatus; 3] = [Self::Working, Self::Uploaded, Self::Rejected];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Working => "working",
            Self::Uploaded => "uploaded",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown request status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for RequestStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}
