use super::error::EventsError;
use super::interfaces::{CreateEventResponse, DeleteEventResponse, ListEventsResponse};
use crate::catalog::PhotoCatalog;
use crate::vision::{FaceVision, IndexOutcome};
use tracing::{info, instrument};

/// Idempotently creates the face-index for an event.
#[instrument(skip(vision))]
pub async fn create_event(
    vision: &dyn FaceVision,
    event: &str,
) -> Result<CreateEventResponse, EventsError> {
    match vision.ensure_index(event).await? {
        IndexOutcome::Created {
            collection_arn,
            face_model_version,
        } => {
            info!("Created face-index for event '{event}'");
            Ok(CreateEventResponse::Created {
                status: "creada".to_string(),
                collection_arn,
                face_model_version,
            })
        }
        IndexOutcome::AlreadyExists => Ok(CreateEventResponse::already_exists()),
    }
}

/// All known events, inferred from prefixed catalog collections.
#[instrument(skip(catalog))]
pub async fn list_events(catalog: &dyn PhotoCatalog) -> Result<ListEventsResponse, EventsError> {
    let eventos = catalog.list_events().await?;
    Ok(ListEventsResponse { eventos })
}

/// Drops the event's catalog collection, then best-effort deletes its
/// face-index. Deletion is irreversible and not transactional across the
/// two stores; an index-deletion failure does not affect the outcome.
#[instrument(skip(vision, catalog))]
pub async fn delete_event(
    vision: &dyn FaceVision,
    catalog: &dyn PhotoCatalog,
    event: &str,
) -> Result<DeleteEventResponse, EventsError> {
    catalog.drop_event(event).await?;
    vision.delete_index(event).await;
    info!("Deleted event '{event}'");
    Ok(DeleteEventResponse {
        status: "success".to_string(),
        message: format!("Evento '{event}' eliminado"),
    })
}
