//! The canonical notification descriptor.
//!
//! Every payload shape the worker accepts collapses into one
//! [`NotificationDescriptor`]: the `{title, options}` record handed to the
//! host's notification-rendering facility. Downstream code never sees the
//! sender's schema, only this form.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Canonical output of normalization.
///
/// Invariants, guaranteed for every input shape:
/// - `title` is never empty.
/// - `options.data.url` is always set (the configured fallback route when
///   the payload carried no URL).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationDescriptor {
    pub title: String,
    pub options: NotificationOptions,
}

/// Rendering options, mirroring the host notification API's options record.
///
/// `icon`, `badge`, and `timestamp` are left unset by the normalizer; the
/// dispatcher fills them at render time (assets are deployment config, the
/// timestamp is the render instant rather than anything the sender claims).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationOptions {
    /// Display body. May be empty.
    #[serde(default)]
    pub body: String,

    /// Icon asset URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Badge asset URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,

    /// Milliseconds since the Unix epoch, stamped at render time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,

    /// Data carried through to interaction handlers.
    pub data: NotificationData,
}

/// Click-handling data attached to a rendered notification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationData {
    /// Navigation target when the notification is activated.
    pub url: String,

    /// The original payload, preserved for downstream consumers. Omitted on
    /// the no-payload and unparseable-string fallback branches, where there
    /// is nothing structured to preserve.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<Value>,
}

impl NotificationDescriptor {
    /// Builds a descriptor with the fields every shape branch produces.
    pub(crate) fn new(title: String, body: String, url: String, raw: Option<Value>) -> Self {
        Self {
            title,
            options: NotificationOptions {
                body,
                icon: None,
                badge: None,
                timestamp: None,
                data: NotificationData { url, raw },
            },
        }
    }

    /// Navigation target for click handling.
    pub fn url(&self) -> &str {
        &self.options.data.url
    }
}
