use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome of creating an event's face-index. Creation is idempotent; the
/// second and later calls produce the `AlreadyExists` shape.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum CreateEventResponse {
    Created {
        status: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        collection_arn: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        face_model_version: Option<String>,
    },
    AlreadyExists {
        message: String,
    },
}

impl CreateEventResponse {
    pub fn already_exists() -> Self {
        Self::AlreadyExists {
            message: "Ya existe".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListEventsResponse {
    pub eventos: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteEventResponse {
    pub status: String,
    pub message: String,
}
