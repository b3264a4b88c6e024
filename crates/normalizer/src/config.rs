//! Configuration for the payload normalizer.
//!
//! Upstream gateways never agree on a payload schema, but the strings the
//! normalizer falls back to when a payload gives it nothing are pure
//! deployment policy. [`NormalizerConfig`] carries those: the route a click
//! navigates to when no payload supplied one, the generic title, and the
//! copy rendered when the transport delivered no payload body at all.
//!
//! The defaults reproduce the behavior the production worker has always had
//! (including the "New Wi-Fi order" absent-payload copy), so a
//! `NormalizerConfig::default()` is a drop-in for the legacy hard-coded
//! values.

use serde::{Deserialize, Serialize};

/// Configuration for [`normalize`](crate::normalize).
///
/// Cheap to clone, serde-friendly so it can be embedded in a larger
/// application config file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// Navigation target used whenever no URL can be derived from a payload.
    #[serde(default = "default_fallback_url")]
    pub fallback_url: String,

    /// Title used when a payload carries a body but no recognizable title.
    #[serde(default = "default_title")]
    pub default_title: String,

    /// Copy rendered when the push arrived with no payload at all.
    #[serde(default)]
    pub absent: AbsentPayloadCopy,

    /// Maximum number of characters of serialized payload used as the body
    /// on the unrecognized-shape fallback branch.
    #[serde(default = "default_preview_limit")]
    pub preview_limit: usize,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            fallback_url: default_fallback_url(),
            default_title: default_title(),
            absent: AbsentPayloadCopy::default(),
            preview_limit: default_preview_limit(),
        }
    }
}

/// Notification content for the no-payload branch.
///
/// Some push backends deliver an empty body to save bandwidth; the worker
/// still has to signal *something happened*. These strings are what it says.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AbsentPayloadCopy {
    #[serde(default = "default_absent_title")]
    pub title: String,
    #[serde(default = "default_absent_body")]
    pub body: String,
    #[serde(default = "default_fallback_url")]
    pub url: String,
}

impl Default for AbsentPayloadCopy {
    fn default() -> Self {
        Self {
            title: default_absent_title(),
            body: default_absent_body(),
            url: default_fallback_url(),
        }
    }
}

fn default_fallback_url() -> String {
    "/admin/dashboard".to_string()
}

fn default_title() -> String {
    "New notification".to_string()
}

fn default_absent_title() -> String {
    "New Wi-Fi order".to_string()
}

fn default_absent_body() -> String {
    "You have a new verified order".to_string()
}

fn default_preview_limit() -> usize {
    200
}
