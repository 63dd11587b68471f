use crate::api_state::ApiContext;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common_services::api::events::error::EventsError;
use common_services::api::events::interfaces::{
    CreateEventResponse, DeleteEventResponse, ListEventsResponse,
};
use common_services::api::events::service::{create_event, delete_event, list_events};
use serde_json::json;
use tracing::{error, instrument};

/// Create the face-index for an event.
///
/// Idempotent: the face-index is created lazily on the first call; later
/// calls return the "Ya existe" shape and never fail.
#[utoipa::path(
    post,
    path = "/crear-evento/{evento}",
    tag = "Events",
    params(
        ("evento" = String, Path, description = "Event name")
    ),
    responses(
        (status = 200, description = "Face-index created, or it already existed.", body = CreateEventResponse),
        (status = 500, description = "The vision service rejected the creation."),
    )
)]
#[instrument(skip(context), err(Debug))]
pub async fn create_event_handler(
    State(context): State<ApiContext>,
    Path(evento): Path<String>,
) -> Result<Json<CreateEventResponse>, EventsError> {
    let result = create_event(context.vision.as_ref(), &evento).await?;
    Ok(Json(result))
}

/// List every known event, inferred from the catalog's prefixed collections.
#[utoipa::path(
    get,
    path = "/listar-eventos",
    tag = "Events",
    responses(
        (status = 200, description = "All known event names, prefix stripped.", body = ListEventsResponse),
        (status = 500, description = "A document store error occurred."),
    )
)]
#[instrument(skip(context), err(Debug))]
pub async fn list_events_handler(
    State(context): State<ApiContext>,
) -> Result<Json<ListEventsResponse>, EventsError> {
    let result = list_events(context.catalog.as_ref()).await?;
    Ok(Json(result))
}

/// Delete an event: drop its catalog collection and best-effort delete its
/// face-index. Deleting an event that does not exist still succeeds.
///
/// This is the one endpoint that signals failure through the HTTP status
/// code: any unexpected error becomes a 500 carrying the error text.
#[utoipa::path(
    delete,
    path = "/eliminar-evento/{evento}",
    tag = "Events",
    params(
        ("evento" = String, Path, description = "Event name")
    ),
    responses(
        (status = 200, description = "Event deleted (or it never existed).", body = DeleteEventResponse),
        (status = 500, description = "Deletion failed unexpectedly."),
    )
)]
#[instrument(skip(context))]
pub async fn delete_event_handler(
    State(context): State<ApiContext>,
    Path(evento): Path<String>,
) -> Response {
    match delete_event(context.vision.as_ref(), context.catalog.as_ref(), &evento).await {
        Ok(result) => Json(result).into_response(),
        Err(err) => {
            error!("Deleting event '{evento}' failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "status": "error", "detalle": err.to_string() })),
            )
                .into_response()
        }
    }
}
