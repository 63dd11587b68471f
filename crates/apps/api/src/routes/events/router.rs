use crate::api_state::ApiContext;
use crate::routes::events::handlers::{
    create_event_handler, delete_event_handler, list_events_handler,
};
use axum::routing::{delete, get, post};
use axum::Router;

pub fn events_router() -> Router<ApiContext> {
    Router::new()
        .route("/crear-evento/{evento}", post(create_event_handler))
        .route("/listar-eventos", get(list_events_handler))
        .route("/eliminar-evento/{evento}", delete(delete_event_handler))
}
