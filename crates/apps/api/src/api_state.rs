use app_state::AppSettings;
use axum::extract::FromRef;
use common_services::catalog::PhotoCatalog;
use common_services::vision::FaceVision;
use std::sync::Arc;

/// Per-process application context injected into every handler.
///
/// The two client handles are constructed once at startup and shared across
/// all requests; both are stateless with respect to request data and safe
/// for concurrent use (the catalog multiplexes connections internally, the
/// vision client issues independent stateless calls).
#[derive(Clone)]
pub struct ApiContext {
    pub vision: Arc<dyn FaceVision>,
    pub catalog: Arc<dyn PhotoCatalog>,
    pub settings: AppSettings,
}

// These impls let extractors pull just the piece of state they need.
impl FromRef<ApiContext> for Arc<dyn FaceVision> {
    fn from_ref(state: &ApiContext) -> Self {
        state.vision.clone()
    }
}

impl FromRef<ApiContext> for Arc<dyn PhotoCatalog> {
    fn from_ref(state: &ApiContext) -> Self {
        state.catalog.clone()
    }
}

impl FromRef<ApiContext> for AppSettings {
    fn from_ref(state: &ApiContext) -> Self {
        state.settings.clone()
    }
}
