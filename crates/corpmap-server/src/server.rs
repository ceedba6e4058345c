//! HTTP server implementation using Axum.

use crate::config::ServerArgs;
use crate::handler::{handle_health, handle_index, handle_list_companies};
use crate::service::DirectoryService;
use crate::source::DocumentSource;
use axum::{routing::get, Router};
use corpmap_core::config::ServerConfig;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Application state shared across handlers.
pub struct AppState {
    pub service: DirectoryService,
    /// Include error details in 500 responses.
    pub debug: bool,
}

/// Build the router: API, landing page, health check and static files.
pub fn build_router(state: Arc<AppState>, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handle_index))
        .route("/health", get(handle_health))
        .route(ServerConfig::COMPANIES_ROUTE, get(handle_list_companies))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(cors))
        .with_state(state)
}

/// Start the HTTP server.
///
/// Returns the actual address the server is bound to (useful when port=0).
pub async fn start_server(
    args: &ServerArgs,
    source: Arc<dyn DocumentSource>,
) -> anyhow::Result<SocketAddr> {
    let service = DirectoryService::new(source);
    info!("Serving companies from {}", service.source_description());

    let state = Arc::new(AppState {
        service,
        debug: args.debug,
    });
    let app = build_router(state, &args.static_dir);

    let addrs = args.bind_addrs()?;
    let listener = tokio::net::TcpListener::bind(addrs.as_slice()).await?;
    let actual_addr = listener.local_addr()?;

    info!("Server listening on {}", actual_addr);

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!("Server error: {}", e);
        }
    });

    Ok(actual_addr)
}
