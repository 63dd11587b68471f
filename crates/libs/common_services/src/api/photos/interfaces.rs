use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Multipart shape of an image upload, for the API docs only.
#[derive(ToSchema)]
pub struct PhotoUploadForm {
    #[schema(value_type = String, format = Binary)]
    pub file: String,
}

/// Result of the upload → store → index → persist pipeline.
///
/// A pipeline failure is a structured 200 body, not a fault status: callers
/// must treat a body without `mongo_id` as a soft failure and inspect
/// `status`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ProcessPhotoResponse {
    Processed {
        status: String,
        caras_detectadas: usize,
        url: String,
        mongo_id: String,
    },
    Error {
        status: String,
        detalle: String,
    },
}

impl ProcessPhotoResponse {
    pub fn processed(caras_detectadas: usize, url: String, mongo_id: String) -> Self {
        Self::Processed {
            status: "procesado".to_string(),
            caras_detectadas,
            url,
            mongo_id,
        }
    }

    pub fn error(detalle: impl Into<String>) -> Self {
        Self::Error {
            status: "error".to_string(),
            detalle: detalle.into(),
        }
    }
}
