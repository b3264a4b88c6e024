//! WebSocket registration of client views.
//!
//! Each accepted socket becomes one "open client view" in the hub: outbound
//! protocol frames (`NAVIGATE`, `RESUBSCRIBE`, `NOTIFY`, `CLOSE`, `FOCUS`)
//! flow to the page, inbound text frames are parsed as worker commands.

use crate::state::ServerState;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use dispatcher::WorkerCommand;
use futures::{SinkExt, StreamExt};
use std::sync::Arc;
use uuid::Uuid;

/// GET /v1/client. Upgrade to a client-view session.
pub async fn client_ws(
    ws: WebSocketUpgrade,
    State(state): State<Arc<ServerState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<ServerState>) {
    let id = Uuid::new_v4();
    let mut outbound = state.hub.register(id);
    let (mut sink, mut stream) = socket.split();

    // Forward hub frames to the socket until the channel or socket closes.
    let forward = tokio::spawn(async move {
        while let Some(frame) = outbound.recv().await {
            if sink.send(Message::text(frame)).await.is_err() {
                break;
            }
        }
    });

    // Inbound text frames are worker commands; anything else is ignored.
    while let Some(Ok(message)) = stream.next().await {
        match message {
            Message::Text(text) => match serde_json::from_str::<WorkerCommand>(&text) {
                Ok(command) => state.dispatcher.on_client_message(command).await,
                Err(err) => {
                    tracing::debug!(client = %id, error = %err, "ignoring unrecognized client frame");
                }
            },
            Message::Close(_) => break,
            _ => {}
        }
    }

    state.hub.unregister(id);
    forward.abort();
}
