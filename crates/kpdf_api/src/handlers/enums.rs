use axum::Json;
use kpdf_core::taxonomy::{enumerations, Enumerations};

pub async fn get_enums() -> Json<Enumerations> {
    Json(enumerations())
}
