use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lenient;

// ---------------------------------------------------------------------------
// The Catalog Entry: Document
// One downloadable file tagged with the four taxonomy levels.
// ---------------------------------------------------------------------------
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Document {
    pub id: String,

    // Education stage (L1), subject (L2), grade (L3), material type (L4)
    pub category_l1: String,
    pub category_l2: String,
    pub category_l3: String,
    pub category_l4: String,

    #[serde(default)]
    pub publisher: String,

    pub main_title: String,

    #[serde(default)]
    pub subtitle: String,

    // Always ends in .pdf or .hwp (checked on create)
    pub pdf_url: String,

    // Server-assigned
    pub upload_date: DateTime<Utc>,
}

impl Document {
    /// Builds an unsaved document from a payload that already passed validation.
    /// The repository assigns `id` and `upload_date` on insert.
    pub fn from_payload(payload: DocumentPayload) -> Self {
        Self {
            id: String::new(),
            category_l1: payload.category_l1.unwrap_or_default(),
            category_l2: payload.category_l2.unwrap_or_default(),
            category_l3: payload.category_l3.unwrap_or_default(),
            category_l4: payload.category_l4.unwrap_or_default(),
            publisher: payload.publisher.unwrap_or_default(),
            main_title: payload.main_title.unwrap_or_default(),
            subtitle: payload.subtitle.unwrap_or_default(),
            pdf_url: payload.pdf_url.unwrap_or_default(),
            upload_date: Utc::now(),
        }
    }
}

/// Admin-submitted body for `POST /api/pdfs`.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct DocumentPayload {
    #[serde(default, deserialize_with = "lenient::string")]
    pub category_l1: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub category_l2: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub category_l3: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub category_l4: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub publisher: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub main_title: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub pdf_url: Option<String>,
}
