use crate::routes::{events, photos, root, search};
use common_services::api::events::interfaces::{
    CreateEventResponse, DeleteEventResponse, ListEventsResponse,
};
use common_services::api::photos::interfaces::{PhotoUploadForm, ProcessPhotoResponse};
use common_services::api::search::interfaces::SearchPhotosResponse;
use common_services::catalog::PhotoSummary;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        root::handlers::home,
        root::handlers::check_db,
        // Event handlers
        events::handlers::create_event_handler,
        events::handlers::list_events_handler,
        events::handlers::delete_event_handler,
        // Photo handlers
        photos::handlers::process_photo_handler,
        // Search handlers
        search::handlers::search_photos_handler,
    ),
    components(
        schemas(
            CreateEventResponse,
            ListEventsResponse,
            DeleteEventResponse,
            ProcessPhotoResponse,
            PhotoUploadForm,
            SearchPhotosResponse,
            PhotoSummary,
        ),
    ),
    tags(
        (name = "Events", description = "Event lifecycle: face-index creation, listing, deletion"),
        (name = "Photos", description = "Photo ingestion: storage, face indexing, persistence"),
        (name = "Search", description = "Selfie-based photo retrieval"),
        (name = "System", description = "Liveness and connectivity checks"),
    )
)]
pub struct ApiDoc;
