use crate::catalog::CatalogError;
use crate::vision::VisionError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum EventsError {
    #[error("vision service error")]
    Vision(#[from] VisionError),

    #[error("catalog error")]
    Catalog(#[from] CatalogError),
}

fn log_error(error: &EventsError) {
    match error {
        EventsError::Vision(e) => error!("Vision service call failed: {e}"),
        EventsError::Catalog(e) => error!("Catalog call failed: {e}"),
    }
}

impl IntoResponse for EventsError {
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
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
