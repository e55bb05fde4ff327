//! Board Configuration
//!
//! Optional JSON config embedded in the host page:
//!
//! ```html
//! <script id="ticket-board-config" type="application/json">
//!   { "backend": "fixture", "routes": { "details": "/tickets" } }
//! </script>
//! ```

use serde::Deserialize;

use crate::error::ConfigError;

/// Id of the `<script>` element holding the config JSON
pub const CONFIG_ELEMENT_ID: &str = "ticket-board-config";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Tauri IPC
    #[default]
    Tauri,
    /// Built-in sample tickets
    Fixture,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    pub add: String,
    pub details: String,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            add: "/add".to_string(),
            details: "/details".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub backend: BackendKind,
    pub list_command: String,
    pub routes: RouteConfig,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            list_command: "list_tickets".to_string(),
            routes: RouteConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.level_filter()?;
        Ok(config)
    }

    pub fn level_filter(&self) -> Result<log::LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    /// Read the config element from the current document.
    ///
    /// Falls back to defaults when the element is absent or invalid; the
    /// second value carries the parse error so it can be logged once the
    /// logger is up.
    pub fn from_document() -> (Self, Option<ConfigError>) {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(json) if !json.trim().is_empty() => match Self::from_json(&json) {
                Ok(config) => (config, None),
                Err(e) => (Self::default(), Some(e)),
            },
            _ => (Self::default(), None),
        }
    }
}
