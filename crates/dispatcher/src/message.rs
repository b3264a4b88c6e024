//! Client messaging protocol.
//!
//! Wire messages between the worker and its open client views. Tagged with
//! an uppercase `type` discriminator so existing page-side handlers keep
//! working unchanged.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Dispatcher → client view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum ClientMessage {
    /// Route to `url` inside the already-open view instead of opening a
    /// duplicate window.
    #[serde(rename = "NAVIGATE")]
    Navigate { url: String },

    /// The push subscription became invalid; the page must re-subscribe.
    /// Re-subscription needs user-visible permission state the worker does
    /// not own, so it is never attempted here.
    #[serde(rename = "RESUBSCRIBE")]
    Resubscribe,
}

/// Client view → dispatcher.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum WorkerCommand {
    /// Render a test notification directly, bypassing normalization.
    /// Debugging aid: lets a page exercise the render path without a real
    /// push event.
    #[serde(rename = "SHOW_TEST_NOTIFICATION")]
    ShowTestNotification(TestNotification),
}

/// Caller-supplied content for a test notification.
///
/// `options` is a loose JSON object rather than a typed record: test
/// callers poke at render behavior with partial shapes, and a debug surface
/// should not reject them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TestNotification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

impl TestNotification {
    fn option_str(&self, key: &str) -> Option<&str> {
        self.options.as_ref()?.get(key)?.as_str()
    }

    /// Title for the rendered notification.
    pub fn title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => "Test notification",
        }
    }

    /// Body, from the explicit field or the options object.
    pub fn body(&self) -> &str {
        self.body
            .as_deref()
            .or_else(|| self.option_str("body"))
            .unwrap_or_default()
    }

    /// Navigation target: `options.url`, `options.data.url`, or none.
    pub fn url(&self) -> Option<&str> {
        self.option_str("url").or_else(|| {
            self.options
                .as_ref()?
                .get("data")?
                .get("url")?
                .as_str()
        })
    }

    pub fn icon(&self) -> Option<&str> {
        self.option_str("icon")
    }

    pub fn badge(&self) -> Option<&str> {
        self.option_str("badge")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn client_messages_use_protocol_tags() {
        let navigate = serde_json::to_value(&ClientMessage::Navigate {
            url: "/admin/dashboard".into(),
        })
        .expect("serialize");
        assert_eq!(
            navigate,
            json!({"type": "NAVIGATE", "url": "/admin/dashboard"})
        );

        let resubscribe = serde_json::to_value(&ClientMessage::Resubscribe).expect("serialize");
        assert_eq!(resubscribe, json!({"type": "RESUBSCRIBE"}));
    }

    #[test]
    fn worker_command_deserializes_from_protocol_shape() {
        let command: WorkerCommand = serde_json::from_value(json!({
            "type": "SHOW_TEST_NOTIFICATION",
            "title": "Hi",
            "options": {"url": "/x"}
        }))
        .expect("deserialize");
        let WorkerCommand::ShowTestNotification(test) = command;
        assert_eq!(test.title(), "Hi");
        assert_eq!(test.url(), Some("/x"));
    }

    #[test]
    fn test_notification_defaults() {
        let test = TestNotification::default();
        assert_eq!(test.title(), "Test notification");
        assert_eq!(test.body(), "");
        assert_eq!(test.url(), None);
    }

    #[test]
    fn body_falls_back_to_options_object() {
        let test = TestNotification {
            options: Some(json!({"body": "from options", "data": {"url": "/nested"}})),
            ..Default::default()
        };
        assert_eq!(test.body(), "from options");
        assert_eq!(test.url(), Some("/nested"));
    }
}
