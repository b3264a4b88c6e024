//! Pushwork event dispatch layer.
//!
//! Sits on top of the host's push-event lifecycle: decodes the raw wire
//! payload, runs it through the [`normalizer`] crate, applies render-time
//! defaults, and drives the resulting user-interaction lifecycle (display,
//! click routing, subscription invalidation, test/debug triggering).
//!
//! The host platform is a seam, not a dependency: everything the dispatcher
//! needs from its surroundings (rendering, client enumeration, focus,
//! window creation, messaging) goes through the [`Platform`],
//! [`ClientView`], and [`ActiveNotification`] traits, queried fresh on
//! every event.
//!
//! ## Failure semantics
//!
//! No error crosses a handler boundary. Decode failures degrade to the
//! absent-payload branch, host-call failures are logged via `tracing` and
//! absorbed. There is no retry and no user-visible error surface at this
//! layer; failures show up only in logs.

mod config;
mod decode;
mod dispatcher;
mod error;
mod message;
mod platform;

pub use crate::config::DispatcherConfig;
pub use crate::decode::decode_wire;
pub use crate::dispatcher::Dispatcher;
pub use crate::error::DispatchError;
pub use crate::message::{ClientMessage, TestNotification, WorkerCommand};
pub use crate::platform::{ActiveNotification, ClientView, Platform, PlatformError};
