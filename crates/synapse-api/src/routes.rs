//! Router setup with all routes and middleware.
//!
//! Configures the axum Router with CORS, tracing, compression,
//! and all endpoint handlers.

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use synapse_core::config::SynapseConfig;
use synapse_core::error::SynapseError;

use crate::handlers;
use crate::state::AppState;

/// Request bodies are small JSON objects carrying at most one chat message.
const BODY_LIMIT: usize = 64 * 1024;

/// Create the axum Router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let port = state.config.general.port;
    let origins: Vec<HeaderValue> = [
        format!("http://127.0.0.1:{}", port),
        format!("http://localhost:{}", port),
    ]
    .iter()
    .filter_map(|o| HeaderValue::from_str(o).ok())
    .collect();
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let pages = Router::new()
        .route("/", get(handlers::landing))
        .route("/chat", get(handlers::chat_page))
        .route("/history", get(handlers::history_page))
        .route("/health", get(handlers::health));

    let api = Router::new()
        .route("/respond", post(handlers::respond))
        .route("/conversations", get(handlers::conversations))
        .route("/sessions", post(handlers::create_session))
        .route("/sessions/{id}", get(handlers::get_session))
        .route("/sessions/{id}/transcript", get(handlers::transcript))
        .route("/sessions/{id}/messages", post(handlers::send_message))
        .route("/sessions/{id}/reset", post(handlers::reset_session))
        .route("/sessions/{id}/sidebar", post(handlers::toggle_sidebar))
        .route("/sessions/{id}/sidebar-query", post(handlers::sidebar_query));

    pages
        .nest("/api", api)
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server on the configured address.
///
/// Binds to 127.0.0.1 (localhost only) on the port from config.
pub async fn start_server(config: &SynapseConfig, state: AppState) -> Result<(), SynapseError> {
    let addr = format!("127.0.0.1:{}", config.general.port);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| SynapseError::Server(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!(addr = %addr, "Server listening");
    tracing::info!("Chat at http://{}/chat", addr);

    axum::serve(listener, router)
        .await
        .map_err(|e| SynapseError::Server(format!("Server error: {}", e)))?;

    Ok(())
}
