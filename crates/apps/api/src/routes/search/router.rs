use crate::api_state::ApiContext;
use crate::routes::search::handlers::search_photos_handler;
use axum::routing::post;
use axum::Router;

pub fn search_router() -> Router<ApiContext> {
    Router::new().route("/buscar-mis-fotos/{evento}", post(search_photos_handler))
}
