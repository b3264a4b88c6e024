use crate::platform::PlatformError;
use thiserror::Error;

/// Failures inside an event handler's fallible core.
///
/// These never cross the handler boundary: the public `on_*` handlers catch,
/// log, and absorb them so a misbehaving push message can never leave the
/// event unhandled at the host level.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("notification render rejected by host: {0}")]
    Render(#[source] PlatformError),

    #[error("client enumeration failed: {0}")]
    Clients(#[source] PlatformError),

    #[error("client focus failed: {0}")]
    Focus(#[source] PlatformError),

    #[error("client message delivery failed: {0}")]
    Message(#[source] PlatformError),

    #[error("window open failed: {0}")]
    OpenWindow(#[source] PlatformError),
}
