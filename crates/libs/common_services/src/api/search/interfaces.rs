use crate::catalog::PhotoSummary;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// What a selfie search returns. Failures (including a missing face-index)
/// surface as a 200 body with an `error` field and an empty photo list.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum SearchPhotosResponse {
    Found {
        mensaje: String,
        fotos: Vec<PhotoSummary>,
    },
    Failed {
        error: String,
        fotos: Vec<PhotoSummary>,
    },
}

impl SearchPhotosResponse {
    pub fn no_matches() -> Self {
        Self::Found {
            mensaje: "No encontramos fotos tuyas".to_string(),
            fotos: Vec::new(),
        }
    }

    pub fn found(fotos: Vec<PhotoSummary>) -> Self {
        Self::Found {
            mensaje: format!("¡Encontramos {} fotos!", fotos.len()),
            fotos,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed {
            error: error.into(),
            fotos: Vec::new(),
        }
    }
}
