//! Pushwork payload normalization layer.
//!
//! Web push gateways relay payloads shaped by at least three incompatible
//! conventions: a generic `notification` object wrapper, flat key/value
//! fields, and the Apple-style `aps.alert` structure, plus plain strings
//! and outright garbage. This crate absorbs that heterogeneity at the single
//! point where messages enter the worker, so every downstream consumer is
//! schema-free.
//!
//! ## What we do
//!
//! - Match the payload against known shapes in fixed priority order
//! - Resolve field synonyms (`title`/`heading`, `body`/`message`)
//! - Resolve the navigation URL through its fallback chain
//! - Preserve the original payload under `data.raw` for downstream code
//! - Degrade unrecognized input to a truncated serialized preview
//!
//! ## Total function guarantee
//!
//! `normalize` never errors and never panics, for any input shape. No I/O,
//! no clock calls: `icon`/`badge` defaults and the render timestamp belong
//! to the dispatch layer, not here.

mod config;
mod descriptor;
mod payload;
mod shape;

pub use crate::config::{AbsentPayloadCopy, NormalizerConfig};
pub use crate::descriptor::{NotificationData, NotificationDescriptor, NotificationOptions};
pub use crate::payload::RawPayload;
pub use crate::shape::normalize;
