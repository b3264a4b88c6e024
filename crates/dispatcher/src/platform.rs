//! Host-platform seams.
//!
//! The dispatcher owns no process-wide state. Open client views and
//! displayed notifications belong to the host; the dispatcher queries them
//! fresh on each event through these traits and never caches the answers,
//! so there is no stale-cache consistency problem to manage.

use crate::message::ClientMessage;
use async_trait::async_trait;
use normalizer::{NotificationData, NotificationDescriptor};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// A host-platform call the host refused or could not complete.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct PlatformError(String);

impl PlatformError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// An open instance of the user-facing application.
///
/// The dispatcher can bring a view to the foreground or send it a protocol
/// message; it cannot create or destroy views except via
/// [`Platform::open_window`].
#[async_trait]
pub trait ClientView: Send + Sync {
    fn id(&self) -> Uuid;

    /// Bring this view to the foreground.
    async fn focus(&self) -> Result<(), PlatformError>;

    /// Deliver a protocol message to this view.
    async fn post_message(&self, message: &ClientMessage) -> Result<(), PlatformError>;
}

/// A notification currently displayed by the host.
///
/// The host owns the displayed notification's lifetime; the dispatcher only
/// reads its click data and asks for it to be closed.
#[async_trait]
pub trait ActiveNotification: Send + Sync {
    fn data(&self) -> &NotificationData;

    async fn close(&self) -> Result<(), PlatformError>;
}

/// The host platform's capabilities, queried per event.
#[async_trait]
pub trait Platform: Send + Sync {
    /// Display a notification.
    async fn show_notification(
        &self,
        descriptor: &NotificationDescriptor,
    ) -> Result<(), PlatformError>;

    /// Snapshot of the currently open client views, including ones this
    /// dispatcher did not create.
    async fn clients(&self) -> Result<Vec<Arc<dyn ClientView>>, PlatformError>;

    /// Open a new client view at `url`.
    async fn open_window(&self, url: &str) -> Result<(), PlatformError>;
}
