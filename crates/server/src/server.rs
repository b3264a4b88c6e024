//! Server initialization and routing
//!
//! Axum setup for the harness: router, middleware stack, tracing, and
//! graceful shutdown.

use crate::config::ServerConfig;
use crate::routes::{api_info, not_found};
use crate::routes::{client_ws, events, health};
use crate::state::ServerState;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Build the Axum router with all routes and middleware
pub fn build_router(state: Arc<ServerState>) -> Router {
    let cors = if state.config.enable_cors {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    Router::new()
        .route("/", get(api_info))
        .route("/health", get(health::health_check))
        .route("/v1/push", post(events::push))
        .route("/v1/notifications/{id}/click", post(events::click))
        .route("/v1/notifications/{id}/close", post(events::close))
        .route("/v1/subscription/expired", post(events::subscription_expired))
        .route("/v1/message", post(events::message))
        .route("/v1/client", get(client_ws::client_ws))
        .fallback(not_found)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(state.config.timeout_secs),
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the pushwork harness server
///
/// Initializes structured logging, shared state, and the router, then
/// serves until SIGTERM or Ctrl+C.
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        .with_target(false)
        .json()
        .init();

    let state = Arc::new(ServerState::new(config.clone()));
    let app = build_router(state);

    let addr: SocketAddr = config.socket_addr()?;
    tracing::info!(
        "Starting pushwork server on {} (timeout: {}s, cors: {})",
        addr,
        config.timeout_secs,
        config.enable_cors
    );
    tracing::info!(
        fallback_url = config.dispatcher.fallback_url(),
        icon = %config.dispatcher.default_icon_path,
        badge = %config.dispatcher.default_badge_path,
        "dispatch configuration loaded"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Shutdown signal handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
