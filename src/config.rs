//! Client settings persisted in browser storage.

use serde::{Deserialize, Serialize};

const CONFIG_STORAGE_KEY: &str = "finanzas_config";

/// When the category list is refreshed after an add-category write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshPolicy {
    /// Refresh after every write that reached the service, whatever it answered.
    #[default]
    Always,
    /// Refresh only when the service acknowledged the write with a truthy `ok`.
    OnConfirmedSuccess,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Prefix for every endpoint path. Empty means same origin.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default)]
    pub refresh_policy: RefreshPolicy,
}

fn default_api_base_url() -> String {
    option_env!("FINANZAS_API_BASE_URL")
        .unwrap_or("")
        .trim_end_matches('/')
        .to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_base_url: default_api_base_url(),
            refresh_policy: RefreshPolicy::default(),
        }
    }
}

impl ClientConfig {
    /// Parses a stored config, falling back to defaults when it is malformed.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<ClientConfig>(raw) {
            Ok(mut config) => {
                config.api_base_url = config.api_base_url.trim_end_matches('/').to_string();
                config
            }
            Err(err) => {
                tracing::warn!(error = %err, "ignoring malformed stored config");
                ClientConfig::default()
            }
        }
    }
}

pub fn load_config() -> ClientConfig {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(raw)) = storage.get_item(CONFIG_STORAGE_KEY) {
                return ClientConfig::from_json(&raw);
            }
        }
    }
    ClientConfig::default()
}
