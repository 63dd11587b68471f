use crate::utils::UploadError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("upload error")]
    Upload(#[from] UploadError),
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let Self::Upload(err) = self;
        error!("Probe upload rejected: {err}");

        let body = Json(json!({ "error": err.to_string() }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}
