mod api_doc;
pub mod events;
pub mod photos;
pub mod root;
pub mod search;

use crate::api_state::ApiContext;
use crate::routes::api_doc::ApiDoc;
use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// --- Router Construction ---
pub fn create_router(api_state: ApiContext) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .merge(root::router::root_router())
        .merge(events::router::events_router())
        .merge(photos::router::photos_router())
        .merge(search::router::search_router())
        .with_state(api_state)
}
