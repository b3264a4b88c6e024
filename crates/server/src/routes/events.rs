//! Simulated host lifecycle events.
//!
//! Each route forwards one host trigger to the dispatcher. The dispatcher
//! absorbs its own failures, so these handlers answer 202 for every
//! accepted event; only references to unknown notifications are client
//! errors here.

use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use dispatcher::{ActiveNotification, WorkerCommand};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

fn accepted() -> impl IntoResponse {
    (StatusCode::ACCEPTED, Json(json!({"status": "accepted"})))
}

/// POST /v1/push. Simulated push delivery. The raw body is the wire
/// payload; an empty body is a payload-less push.
pub async fn push(State(state): State<Arc<ServerState>>, body: Bytes) -> impl IntoResponse {
    let payload = if body.is_empty() {
        None
    } else {
        Some(body.as_ref())
    };
    state.dispatcher.on_push(payload).await;
    accepted()
}

/// POST /v1/notifications/{id}/click. User activated a displayed
/// notification.
pub async fn click(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
) -> ServerResult<impl IntoResponse> {
    let notification = state.hub.notification(id).ok_or(ServerError::NotFound)?;
    state.dispatcher.on_notification_click(&notification).await;
    Ok(accepted())
}

/// POST /v1/notifications/{id}/close. User dismissed a displayed
/// notification without activating it.
pub async fn close(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
) -> ServerResult<impl IntoResponse> {
    let notification = state.hub.notification(id).ok_or(ServerError::NotFound)?;
    state.dispatcher.on_notification_close(&notification).await;
    // Dismissal removes the displayed notification from the host.
    notification
        .close()
        .await
        .map_err(|err| ServerError::Internal(err.to_string()))?;
    Ok(accepted())
}

/// POST /v1/subscription/expired. The push subscription became invalid.
pub async fn subscription_expired(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    state.dispatcher.on_subscription_change().await;
    accepted()
}

/// POST /v1/message. Control message from a client view delivered over
/// HTTP instead of its WebSocket.
pub async fn message(
    State(state): State<Arc<ServerState>>,
    Json(command): Json<WorkerCommand>,
) -> impl IntoResponse {
    state.dispatcher.on_client_message(command).await;
    accepted()
}
