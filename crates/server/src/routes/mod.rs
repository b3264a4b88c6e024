//! API route handlers
//!
//! - `health`: liveness + hub statistics
//! - `events`: simulated host lifecycle events (push delivery, notification
//!   interaction, subscription invalidation, control messages)
//! - `client_ws`: WebSocket registration of client views

pub mod client_ws;
pub mod events;
pub mod health;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info (GET /)
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "Pushwork",
        "version": env!("CARGO_PKG_VERSION"),
        "api_version": "v1",
        "endpoints": [
            "/v1/push",
            "/v1/notifications/{id}/click",
            "/v1/notifications/{id}/close",
            "/v1/subscription/expired",
            "/v1/message",
            "/v1/client",
            "/health"
        ]
    })))
}

/// 404 Not Found handler
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
