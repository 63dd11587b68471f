use crate::catalog::CatalogError;
use crate::utils::UploadError;
use crate::vision::VisionError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum PhotosError {
    #[error("vision service error")]
    Vision(#[from] VisionError),

    #[error("catalog error")]
    Catalog(#[from] CatalogError),

    #[error("upload error")]
    Upload(#[from] UploadError),
}

fn log_error(error: &PhotosError) {
    match error {
        PhotosError::Vision(e) => error!("Vision service call failed: {e}"),
        PhotosError::Catalog(e) => error!("Catalog call failed: {e}"),
        PhotosError::Upload(e) => error!("Upload rejected: {e}"),
    }
}

impl IntoResponse for PhotosError {
    fn into_response(self) -> Response {
        log_error(&self);

        let (status, error_message) = match self {
            Self::Vision(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "A vision service error occurred.".to_string(),
            ),
            Self::Catalog(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "A document store error occurred.".to_string(),
            ),
            Self::Upload(err) => (StatusCode::BAD_REQUEST, err.to_string()),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
