//! The event dispatcher.
//!
//! One handler per host lifecycle trigger: push arrival, notification
//! click, notification close, subscription invalidation, and inbound
//! client commands. Handlers are independent units of work: each one
//! catches, logs, and absorbs every failure, so a misbehaving push message
//! never surfaces as an unhandled rejection at the host boundary.
//!
//! Handlers are `async fn`s the embedding runtime awaits to completion;
//! that await is this system's rendition of extending the host event's
//! lifetime until the asynchronous work is done.

use crate::config::DispatcherConfig;
use crate::decode::decode_wire;
use crate::error::DispatchError;
use crate::message::{ClientMessage, TestNotification, WorkerCommand};
use crate::platform::{ActiveNotification, Platform};
use chrono::Utc;
use normalizer::{normalize, NotificationData, NotificationDescriptor, NotificationOptions};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Drives the push-event lifecycle against a host [`Platform`].
///
/// Holds no mutable state: every handler invocation operates on its own
/// payload and queries the host fresh for clients and notifications.
pub struct Dispatcher<P: Platform> {
    platform: Arc<P>,
    config: DispatcherConfig,
}

impl<P: Platform> Dispatcher<P> {
    pub fn new(platform: Arc<P>, config: DispatcherConfig) -> Self {
        Self { platform, config }
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// Inbound push arrival: decode, normalize, apply render defaults,
    /// render. A failed render is logged and absorbed.
    pub async fn on_push(&self, payload: Option<&[u8]>) {
        if let Err(err) = self.handle_push(payload).await {
            error!(error = %err, "push event handling failed");
        }
    }

    async fn handle_push(&self, payload: Option<&[u8]>) -> Result<(), DispatchError> {
        let raw = decode_wire(payload);
        debug!(kind = raw.kind(), "decoded push payload");

        let mut descriptor = normalize(raw, &self.config.normalizer);
        self.apply_render_defaults(&mut descriptor);

        self.platform
            .show_notification(&descriptor)
            .await
            .map_err(DispatchError::Render)
    }

    /// Notification activation: close it, then route its URL into an open
    /// client view, or open a new one when none exists.
    pub async fn on_notification_click(&self, notification: &dyn ActiveNotification) {
        if let Err(err) = self.handle_click(notification).await {
            warn!(error = %err, "notification click handling failed");
        }
    }

    async fn handle_click(
        &self,
        notification: &dyn ActiveNotification,
    ) -> Result<(), DispatchError> {
        // Close first, unconditionally. A failed close must not stop routing.
        if let Err(err) = notification.close().await {
            warn!(error = %err, "closing clicked notification failed");
        }

        let url = self.click_target(notification.data());
        let clients = self
            .platform
            .clients()
            .await
            .map_err(DispatchError::Clients)?;

        match clients.first() {
            // Routing within an already-open view beats opening a duplicate
            // window.
            Some(client) => {
                client.focus().await.map_err(DispatchError::Focus)?;
                client
                    .post_message(&ClientMessage::Navigate { url })
                    .await
                    .map_err(DispatchError::Message)
            }
            None => self
                .platform
                .open_window(&url)
                .await
                .map_err(DispatchError::OpenWindow),
        }
    }

    /// Notification dismissal. Extension point for future analytics or
    /// cleanup; deliberately a no-op today.
    pub async fn on_notification_close(&self, notification: &dyn ActiveNotification) {
        debug!(url = %notification.data().url, "notification dismissed");
    }

    /// Subscription invalidation: tell every open view to re-subscribe.
    /// Re-subscription needs permission state only a page owns, so the
    /// worker never attempts it silently.
    pub async fn on_subscription_change(&self) {
        let clients = match self.platform.clients().await {
            Ok(clients) => clients,
            Err(err) => {
                error!(error = %err, "client enumeration failed, resubscribe broadcast dropped");
                return;
            }
        };

        for client in clients {
            if let Err(err) = client.post_message(&ClientMessage::Resubscribe).await {
                warn!(client = %client.id(), error = %err, "resubscribe message not delivered");
            }
        }
    }

    /// Inbound control message from a client view.
    pub async fn on_client_message(&self, command: WorkerCommand) {
        match command {
            WorkerCommand::ShowTestNotification(test) => {
                if let Err(err) = self.handle_test_notification(test).await {
                    warn!(error = %err, "test notification render failed");
                }
            }
        }
    }

    /// Direct render bypassing normalization, for debugging without a real
    /// push event. Render-time defaults still apply.
    async fn handle_test_notification(
        &self,
        test: TestNotification,
    ) -> Result<(), DispatchError> {
        let mut descriptor = NotificationDescriptor {
            title: test.title().to_string(),
            options: NotificationOptions {
                body: test.body().to_string(),
                icon: test.icon().map(str::to_string),
                badge: test.badge().map(str::to_string),
                timestamp: None,
                data: NotificationData {
                    url: test
                        .url()
                        .unwrap_or(self.config.fallback_url())
                        .to_string(),
                    raw: None,
                },
            },
        };
        self.apply_render_defaults(&mut descriptor);

        self.platform
            .show_notification(&descriptor)
            .await
            .map_err(DispatchError::Render)
    }

    /// Post-normalization defaults the normalizer does not own: asset paths
    /// only when the payload set none, and a server-independent timestamp
    /// taken at render time, not at send.
    fn apply_render_defaults(&self, descriptor: &mut NotificationDescriptor) {
        let options = &mut descriptor.options;
        if options.icon.is_none() {
            options.icon = Some(self.config.default_icon_path.clone());
        }
        if options.badge.is_none() {
            options.badge = Some(self.config.default_badge_path.clone());
        }
        options.timestamp = Some(Utc::now().timestamp_millis());
    }

    fn click_target(&self, data: &NotificationData) -> String {
        if data.url.is_empty() {
            self.config.fallback_url().to_string()
        } else {
            data.url.clone()
        }
    }
}
