use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::time::Duration;

use crate::domain::logging::{LogComponent, LogLevel};
use crate::{log_debug, log_warn};

/// Id of the optional `<script type="application/json">` carrying overrides
pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Prefix for REST calls; empty means same origin
    pub api_base: String,
    pub standings_path: String,
    pub reconnect_delay_ms: u64,
    pub log_level: LogLevel,
    pub notification_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            standings_path: "/ws/standings".to_string(),
            reconnect_delay_ms: 2000,
            log_level: LogLevel::Debug,
            notification_ms: 3000,
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn reconnect_delay(&self) -> Duration {
        Duration::from_millis(self.reconnect_delay_ms)
    }

    /// Reads overrides from the page; anything missing or invalid falls back to defaults
    pub fn from_document() -> Self {
        let raw = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|element| element.text_content());

        match raw {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|e| {
                log_warn!(
                    LogComponent::Infrastructure("Config"),
                    "⚠️ Invalid #{CONFIG_ELEMENT_ID} payload, using defaults: {e}"
                );
                Self::default()
            }),
            None => {
                log_debug!(
                    LogComponent::Infrastructure("Config"),
                    "No #{CONFIG_ELEMENT_ID} element, using defaults"
                );
                Self::default()
            }
        }
    }
}

static APP_CONFIG: OnceCell<AppConfig> = OnceCell::new();

/// Page-wide configuration, loaded on first use
pub fn app_config() -> &'static AppConfig {
    APP_CONFIG.get_or_init(AppConfig::from_document)
}
