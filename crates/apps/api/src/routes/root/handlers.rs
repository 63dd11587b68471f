use crate::api_state::ApiContext;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusBanner {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CheckDbResponse {
    pub status: String,
}

/// Liveness banner, also used by the hosting platform to see the service
/// is up.
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    responses(
        (status = 200, description = "Service is alive", body = StatusBanner)
    )
)]
pub async fn home() -> Json<StatusBanner> {
    Json(StatusBanner {
        status: "online".to_string(),
        message: "API de Reconocimiento Facial lista".to_string(),
    })
}

/// Document store connectivity probe. A store that cannot be reached within
/// its server-selection timeout reports `disconnected` with a 200, never a
/// fault.
#[utoipa::path(
    get,
    path = "/check-db",
    tag = "System",
    responses(
        (status = 200, description = "Connectivity status", body = CheckDbResponse)
    )
)]
pub async fn check_db(State(context): State<ApiContext>) -> Json<CheckDbResponse> {
    let is_connected = context.catalog.check_connection().await;
    Json(CheckDbResponse {
        status: if is_connected {
            "connected".to_string()
        } else {
            "disconnected".to_string()
        },
    })
}
