//! Pushwork server - host harness for the push dispatcher
//!
//! Plays the host platform around the [`dispatcher`] crate so the whole
//! push lifecycle can run end to end: HTTP routes simulate the events a
//! push-capable host would deliver, and WebSocket sessions stand in for
//! open client views.
//!
//! # Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness + hub statistics
//! - `POST /v1/push` - Simulated push delivery (raw body = wire payload)
//! - `POST /v1/notifications/{id}/click` - Notification activation
//! - `POST /v1/notifications/{id}/close` - Notification dismissal
//! - `POST /v1/subscription/expired` - Subscription invalidation
//! - `POST /v1/message` - Client control message over HTTP
//! - `GET /v1/client` - WebSocket upgrade registering a client view
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod hub;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use hub::{ClientHub, HubNotification};
pub use server::{build_router, start_server};
pub use state::ServerState;
