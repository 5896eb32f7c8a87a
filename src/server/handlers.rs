use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Body of a successful `GET /get_images`.
#[derive(Debug, Clone, Serialize)]
pub struct ImagesResponse {
    pub brain_image: String,
    pub annotation_image: String,
}

pub async fn get_images(State(state): State<AppState>) -> Result<Json<ImagesResponse>, ApiError> {
    info!("Starting DICOM to PNG conversion for brain and annotation images");

    let images = tokio::task::spawn_blocking(move || state.convert_pair()).await??;

    info!("Preparing JSON response with encoded images");
    Ok(Json(images))
}

pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
