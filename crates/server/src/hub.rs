//! The WebSocket client hub, acting as the dispatcher's host platform.
//!
//! Connected WebSocket sessions play the role of open client views:
//! `clients()` snapshots the live registry on every call, protocol messages
//! become outbound JSON frames, and rendered notifications are broadcast to
//! every session (a page-side agent displays them through the browser
//! Notification API). The hub also keeps handles to currently displayed
//! notifications so interaction events can reference them by id.

use async_trait::async_trait;
use dashmap::DashMap;
use dispatcher::{ActiveNotification, ClientMessage, ClientView, Platform, PlatformError};
use normalizer::{NotificationData, NotificationDescriptor};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Outbound frames that are hub-specific rather than part of the
/// dispatcher's client protocol.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
enum HubFrame<'a> {
    /// Display this notification.
    #[serde(rename = "NOTIFY")]
    Notify {
        id: Uuid,
        title: &'a str,
        options: &'a normalizer::NotificationOptions,
    },
    /// Remove a displayed notification.
    #[serde(rename = "CLOSE")]
    Close { id: Uuid },
    /// Bring this view to the foreground.
    #[serde(rename = "FOCUS")]
    Focus,
}

/// Registry of connected client views and displayed notifications.
#[derive(Default)]
pub struct ClientHub {
    sessions: DashMap<Uuid, mpsc::UnboundedSender<String>>,
    notifications: DashMap<Uuid, NotificationData>,
}

impl ClientHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a WebSocket session. Frames pushed into the returned
    /// receiver's sender side are forwarded to the socket by the route.
    pub fn register(self: &Arc<Self>, id: Uuid) -> mpsc::UnboundedReceiver<String> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.sessions.insert(id, tx);
        tracing::info!(client = %id, total = self.sessions.len(), "client view connected");
        rx
    }

    pub fn unregister(&self, id: Uuid) {
        self.sessions.remove(&id);
        tracing::info!(client = %id, total = self.sessions.len(), "client view disconnected");
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Number of notifications currently displayed.
    pub fn notification_count(&self) -> usize {
        self.notifications.len()
    }

    /// Handle to a displayed notification, for interaction routes.
    pub fn notification(self: &Arc<Self>, id: Uuid) -> Option<HubNotification> {
        let data = self.notifications.get(&id)?.clone();
        Some(HubNotification {
            id,
            data,
            hub: self.clone(),
        })
    }

    fn remove_notification(&self, id: Uuid) -> bool {
        self.notifications.remove(&id).is_some()
    }

    fn broadcast(&self, frame: &str) {
        for session in self.sessions.iter() {
            if session.value().send(frame.to_string()).is_err() {
                tracing::warn!(client = %session.key(), "dropping frame for closed session");
            }
        }
    }
}

#[async_trait]
impl Platform for ClientHub {
    async fn show_notification(
        &self,
        descriptor: &NotificationDescriptor,
    ) -> Result<(), PlatformError> {
        let id = Uuid::new_v4();
        let frame = serde_json::to_string(&HubFrame::Notify {
            id,
            title: &descriptor.title,
            options: &descriptor.options,
        })
        .map_err(|err| PlatformError::new(format!("notification frame encoding: {err}")))?;

        self.notifications.insert(id, descriptor.options.data.clone());
        self.broadcast(&frame);
        tracing::info!(
            notification = %id,
            title = %descriptor.title,
            clients = self.sessions.len(),
            "notification rendered"
        );
        Ok(())
    }

    async fn clients(&self) -> Result<Vec<Arc<dyn ClientView>>, PlatformError> {
        // Fresh snapshot per event; the registry is never cached by callers.
        Ok(self
            .sessions
            .iter()
            .map(|session| {
                Arc::new(HubClient {
                    id: *session.key(),
                    sender: session.value().clone(),
                }) as Arc<dyn ClientView>
            })
            .collect())
    }

    async fn open_window(&self, url: &str) -> Result<(), PlatformError> {
        // Window creation belongs to a UI host this harness does not own;
        // surface the instruction operationally instead.
        tracing::info!(url, "no open client view, new window requested");
        Ok(())
    }
}

/// One connected WebSocket session, viewed through the dispatcher's seam.
struct HubClient {
    id: Uuid,
    sender: mpsc::UnboundedSender<String>,
}

#[async_trait]
impl ClientView for HubClient {
    fn id(&self) -> Uuid {
        self.id
    }

    async fn focus(&self) -> Result<(), PlatformError> {
        let frame = serde_json::to_string(&HubFrame::Focus)
            .map_err(|err| PlatformError::new(format!("focus frame encoding: {err}")))?;
        self.sender
            .send(frame)
            .map_err(|_| PlatformError::new(format!("client view {} channel closed", self.id)))
    }

    async fn post_message(&self, message: &ClientMessage) -> Result<(), PlatformError> {
        let frame = serde_json::to_string(message)
            .map_err(|err| PlatformError::new(format!("message encoding: {err}")))?;
        self.sender
            .send(frame)
            .map_err(|_| PlatformError::new(format!("client view {} channel closed", self.id)))
    }
}

/// A displayed notification, closable through the hub.
pub struct HubNotification {
    id: Uuid,
    data: NotificationData,
    hub: Arc<ClientHub>,
}

impl HubNotification {
    pub fn id(&self) -> Uuid {
        self.id
    }
}

#[async_trait]
impl ActiveNotification for HubNotification {
    fn data(&self) -> &NotificationData {
        &self.data
    }

    async fn close(&self) -> Result<(), PlatformError> {
        if !self.hub.remove_notification(self.id) {
            // Already gone; closing twice is not an error.
            return Ok(());
        }
        let frame = serde_json::to_string(&HubFrame::Close { id: self.id })
            .map_err(|err| PlatformError::new(format!("close frame encoding: {err}")))?;
        self.hub.broadcast(&frame);
        Ok(())
    }
}
