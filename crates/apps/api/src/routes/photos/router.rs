use crate::api_state::ApiContext;
use crate::routes::photos::handlers::process_photo_handler;
use axum::routing::post;
use axum::Router;

pub fn photos_router() -> Router<ApiContext> {
    Router::new().route("/procesar-foto-evento/{evento}", post(process_photo_handler))
}
