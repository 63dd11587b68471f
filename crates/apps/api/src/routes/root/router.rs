use crate::api_state::ApiContext;
use crate::routes::root::handlers::{check_db, home};
use axum::{routing::get, Router};

pub fn root_router() -> Router<ApiContext> {
    Router::new()
        .route("/", get(home))
        .route("/check-db", get(check_db))
}
