use crate::api_state::ApiContext;
use crate::create_router;
use app_state::AppSettings;
use axum::extract::DefaultBodyLimit;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use common_services::catalog::{MongoCatalog, PhotoCatalog};
use common_services::vision::{FaceVision, RekognitionVision};
use http::HeaderValue;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Uploads are buffered fully in memory before the external calls, so the
/// body limit is also the per-request memory bound.
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

pub async fn serve(settings: AppSettings) -> Result<()> {
    // --- Server Startup ---
    info!("🚀 Initializing server...");
    let vision: Arc<dyn FaceVision> = Arc::new(RekognitionVision::from_settings(&settings).await);
    let catalog: Arc<dyn PhotoCatalog> = Arc::new(MongoCatalog::connect(&settings).await?);
    let api_state = ApiContext {
        vision,
        catalog,
        settings: settings.clone(),
    };

    // --- CORS Configuration ---
    let allowed_origins: Vec<HeaderValue> = settings
        .api
        .allowed_origins
        .iter()
        .filter_map(|s| match s.parse() {
            Ok(hv) => Some(hv),
            Err(e) => {
                error!("Invalid CORS origin configured: {} - Error: {}", s, e);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_methods(cors::Any)
        .allow_origin(allowed_origins)
        .allow_headers(cors::Any);

    // --- Create Router ---
    let app = create_router(api_state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(RequestBodyLimitLayer::new(MAX_UPLOAD_BYTES));

    let addr: SocketAddr = format!("{}:{}", settings.api.host, settings.api.port)
        .parse()
        .map_err(|e| eyre!("Invalid address: {}", e))?;

    info!("📸 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
