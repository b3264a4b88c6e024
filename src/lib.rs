//! Workspace umbrella crate for Pushwork.
//!
//! Pushwork turns asynchronous push messages of unknown, sender-controlled
//! shape into one canonical notification form and drives the resulting
//! user-interaction lifecycle. This crate stitches the two layers together
//! so callers get a single API entry point:
//!
//! - [`normalizer`]: pure, total payload normalization into
//!   `{title, options}` descriptors
//! - [`dispatcher`]: the event lifecycle around push delivery, from wire
//!   decoding through render defaults, click routing, and subscription
//!   recovery
//!
//! The host harness (HTTP + WebSocket) lives in the separate
//! `pushwork-server` crate.

pub use dispatcher::{
    decode_wire, ActiveNotification, ClientMessage, ClientView, DispatchError, Dispatcher,
    DispatcherConfig, Platform, PlatformError, TestNotification, WorkerCommand,
};
pub use normalizer::{
    normalize, AbsentPayloadCopy, NormalizerConfig, NotificationData, NotificationDescriptor,
    NotificationOptions, RawPayload,
};

/// Decode a raw wire payload and normalize it in one step.
///
/// This is the pure half of push handling: what the dispatcher does on
/// push arrival, minus the render-time defaults and the render itself.
/// Total: any byte sequence (or none) yields a valid descriptor.
pub fn normalize_wire(payload: Option<&[u8]>, cfg: &NormalizerConfig) -> NotificationDescriptor {
    normalize(decode_wire(payload), cfg)
}
