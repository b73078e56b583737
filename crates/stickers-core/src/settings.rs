//! Runtime settings for the sticker service.
//!
//! Settings are read from an optional `local.settings.json` in a base
//! directory and then overlaid with environment variables. The file may hold
//! keys at the top level or under a `"Values"` object:
//!
//! ```json
//! { "Values": { "ConfigUri": "https://example.com/stickers.json" } }
//! ```

use crate::config::{AppConfig, NetworkConfig};
use crate::{Result, StickerError};
use serde_json::Value;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Settings consumed by the record source and the server.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Location of the sticker configuration document, if configured.
    pub config_uri: Option<Url>,
    /// Timeout for fetching the configuration document.
    pub request_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_uri: None,
            request_timeout: NetworkConfig::REQUEST_TIMEOUT,
        }
    }
}

impl Settings {
    /// Load settings from `base_dir/local.settings.json` and the process
    /// environment.
    pub fn load(base_dir: impl AsRef<Path>) -> Result<Self> {
        let path = base_dir.as_ref().join(AppConfig::SETTINGS_FILE_NAME);
        Self::from_sources(Some(&path), |key| std::env::var(key).ok())
    }

    /// Load settings from an optional JSON file and an environment lookup.
    ///
    /// A missing file is not an error; an unreadable or malformed one is.
    /// Environment values win over file values.
    pub fn from_sources(
        settings_file: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let file_values = match settings_file {
            Some(path) if path.exists() => Some(read_settings_file(path)?),
            Some(path) => {
                debug!("No settings file at {}", path.display());
                None
            }
            None => None,
        };

        let lookup = |key: &str| -> Option<String> {
            env(key).or_else(|| {
                file_values
                    .as_ref()
                    .and_then(|values| setting_value(values, key))
            })
        };

        Ok(Self {
            config_uri: absolute_uri(AppConfig::CONFIG_URI_KEY, lookup(AppConfig::CONFIG_URI_KEY)),
            ..Self::default()
        })
    }

    /// Replace the configuration URI, e.g. from a command-line flag.
    pub fn with_config_uri(mut self, config_uri: Option<Url>) -> Self {
        if config_uri.is_some() {
            self.config_uri = config_uri;
        }
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

fn read_settings_file(path: &Path) -> Result<Value> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| StickerError::io_with_path(e, path))?;
    serde_json::from_str(&contents).map_err(|e| StickerError::Config {
        message: format!("Invalid settings file {}: {}", path.display(), e),
    })
}

/// Look a key up at the top level first, then under `"Values"`.
fn setting_value(values: &Value, key: &str) -> Option<String> {
    values
        .get(key)
        .or_else(|| values.get("Values").and_then(|v| v.get(key)))
        .and_then(|v| v.as_str())
        .map(String::from)
}

fn absolute_uri(key: &str, value: Option<String>) -> Option<Url> {
    match value.as_deref().map(Url::parse) {
        Some(Ok(uri)) => Some(uri),
        _ => {
            info!("Config parameter '{}' not provided or is not a valid absolute URI.", key);
            None
        }
    }
}
