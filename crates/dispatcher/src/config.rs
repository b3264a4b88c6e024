//! Dispatcher configuration.

use normalizer::NormalizerConfig;
use serde::{Deserialize, Serialize};

/// Render-time configuration for the dispatch layer.
///
/// The normalizer deliberately leaves `icon` and `badge` unset; which assets
/// a deployment ships is render policy, applied here only when the payload
/// did not choose its own. The embedded [`NormalizerConfig`] also supplies
/// the fallback navigation route used by click handling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DispatcherConfig {
    /// Icon asset applied when a descriptor has none.
    #[serde(default = "default_icon_path")]
    pub default_icon_path: String,

    /// Badge asset applied when a descriptor has none.
    #[serde(default = "default_badge_path")]
    pub default_badge_path: String,

    /// Normalization settings, including the fallback route.
    #[serde(default)]
    pub normalizer: NormalizerConfig,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            default_icon_path: default_icon_path(),
            default_badge_path: default_badge_path(),
            normalizer: NormalizerConfig::default(),
        }
    }
}

impl DispatcherConfig {
    /// Navigation target used when a notification carries no URL.
    pub fn fallback_url(&self) -> &str {
        &self.normalizer.fallback_url
    }
}

fn default_icon_path() -> String {
    "/icons/icon-192x192.png".to_string()
}

fn default_badge_path() -> String {
    "/icons/badge-72x72.png".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_asset_paths() {
        let cfg = DispatcherConfig::default();
        assert_eq!(cfg.default_icon_path, "/icons/icon-192x192.png");
        assert_eq!(cfg.default_badge_path, "/icons/badge-72x72.png");
        assert_eq!(cfg.fallback_url(), "/admin/dashboard");
    }

    #[test]
    fn partial_config_fills_defaults() {
        let cfg: DispatcherConfig =
            serde_json::from_str(r#"{"default_icon_path": "/i.png"}"#).expect("valid config json");
        assert_eq!(cfg.default_icon_path, "/i.png");
        assert_eq!(cfg.default_badge_path, "/icons/badge-72x72.png");
        assert_eq!(cfg.normalizer, NormalizerConfig::default());
    }
}
