//! Storefront configuration.
//!
//! Defaults are compiled in from `STOREFRONT_*` environment variables. A page
//! can override any of them at runtime by defining `window.STOREFRONT_CONFIG`
//! before the wasm bundle loads.

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::error::ConfigError;

pub const WINDOW_CONFIG_KEY: &str = "STOREFRONT_CONFIG";

const DEFAULT_BACKEND_URL: &str = "http://localhost:54321";
const DEFAULT_ANNOUNCEMENT: &str = "Envíos a todo el país en compras mayoristas";

#[derive(Clone, Debug, PartialEq)]
pub struct StorefrontConfig {
    pub backend_url: String,
    pub backend_anon_key: String,
    pub webhook_url: String,
    pub announcement: String,
    pub log_level: Level,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        let log_level = option_env!("STOREFRONT_LOG_LEVEL")
            .and_then(|raw| parse_level(raw).ok())
            .unwrap_or(Level::INFO);

        Self {
            backend_url: option_env!("STOREFRONT_BACKEND_URL")
                .unwrap_or(DEFAULT_BACKEND_URL)
                .to_string(),
            backend_anon_key: option_env!("STOREFRONT_BACKEND_KEY")
                .unwrap_or_default()
                .to_string(),
            webhook_url: option_env!("STOREFRONT_WEBHOOK_URL")
                .unwrap_or_default()
                .to_string(),
            announcement: option_env!("STOREFRONT_ANNOUNCEMENT")
                .unwrap_or(DEFAULT_ANNOUNCEMENT)
                .to_string(),
            log_level,
        }
    }
}

/// Partial config as found on `window.STOREFRONT_CONFIG`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    pub backend_url: Option<String>,
    pub backend_anon_key: Option<String>,
    pub webhook_url: Option<String>,
    pub announcement: Option<String>,
    pub log_level: Option<String>,
}

impl StorefrontConfig {
    /// Compiled-in defaults, then the window overrides if present and valid.
    pub fn load() -> Self {
        let mut config = Self::default();
        match ConfigOverrides::from_window() {
            Ok(Some(overrides)) => {
                if let Err(e) = config.apply(overrides) {
                    tracing::warn!("Ignoring window config: {}", e);
                }
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("Ignoring window config: {}", e),
        }
        config
    }

    /// Applies every override or none of them.
    pub fn apply(&mut self, overrides: ConfigOverrides) -> Result<(), ConfigError> {
        let log_level = overrides.log_level.as_deref().map(parse_level).transpose()?;
        if overrides.backend_url.as_deref().is_some_and(|url| url.trim().is_empty()) {
            return Err(ConfigError::EmptyValue("backendUrl"));
        }

        if let Some(url) = overrides.backend_url {
            self.backend_url = url.trim_end_matches('/').to_string();
        }
        if let Some(key) = overrides.backend_anon_key {
            self.backend_anon_key = key;
        }
        if let Some(url) = overrides.webhook_url {
            self.webhook_url = url;
        }
        if let Some(text) = overrides.announcement {
            self.announcement = text;
        }
        if let Some(level) = log_level {
            self.log_level = level;
        }
        Ok(())
    }
}

impl ConfigOverrides {
    #[cfg(target_arch = "wasm32")]
    pub fn from_window() -> Result<Option<Self>, ConfigError> {
        let Some(window) = web_sys::window() else {
            return Ok(None);
        };
        let value = js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str(WINDOW_CONFIG_KEY))
            .map_err(|e| ConfigError::Decode(format!("{:?}", e)))?;
        if value.is_undefined() || value.is_null() {
            return Ok(None);
        }
        serde_wasm_bindgen::from_value(value)
            .map(Some)
            .map_err(|e| ConfigError::Decode(e.to_string()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_window() -> Result<Option<Self>, ConfigError> {
        Ok(None)
    }
}

pub fn parse_level(raw: &str) -> Result<Level, ConfigError> {
    raw.trim()
        .parse::<Level>()
        .map_err(|_| ConfigError::InvalidLogLevel(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_partial_overrides() {
        let mut config = StorefrontConfig::default();
        let original_key = config.backend_anon_key.clone();

        config
            .apply(ConfigOverrides {
                backend_url: Some("https://api.telas.example/".to_string()),
                announcement: Some("Liquidación de invierno".to_string()),
                log_level: Some("debug".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(config.backend_url, "https://api.telas.example");
        assert_eq!(config.announcement, "Liquidación de invierno");
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.backend_anon_key, original_key);
    }

    #[test]
    fn test_invalid_override_leaves_config_untouched() {
        let mut config = StorefrontConfig::default();
        let before = config.clone();

        let err = config
            .apply(ConfigOverrides {
                webhook_url: Some("https://hooks.example/contact".to_string()),
                log_level: Some("loud".to_string()),
                ..Default::default()
            })
            .unwrap_err();

        assert_eq!(err, ConfigError::InvalidLogLevel("loud".to_string()));
        assert_eq!(config, before);
    }

    #[test]
    fn test_empty_backend_url_rejected() {
        let mut config = StorefrontConfig::default();
        let err = config
            .apply(ConfigOverrides {
                backend_url: Some("  ".to_string()),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err, ConfigError::EmptyValue("backendUrl"));
    }

    #[test]
    fn test_overrides_use_camel_case_keys() {
        let overrides: ConfigOverrides =
            serde_json::from_str(r#"{"webhookUrl":"https://hooks.example/x","logLevel":"warn"}"#)
                .unwrap();
        assert_eq!(overrides.webhook_url.as_deref(), Some("https://hooks.example/x"));
        assert_eq!(overrides.log_level.as_deref(), Some("warn"));
        assert!(overrides.backend_url.is_none());
    }

    #[test]
    fn test_load_without_window_uses_defaults() {
        assert_eq!(StorefrontConfig::load(), StorefrontConfig::default());
    }
}
