//! Centralized configuration constants for sticker search.
//!
//! Runtime settings that come from files or the environment live in
//! [`crate::settings`]; this module only holds compiled-in defaults.

use std::time::Duration;

/// Application-level configuration.
pub struct AppConfig;

impl AppConfig {
    pub const APP_NAME: &'static str = "Stickers";
    pub const USER_AGENT: &'static str = "Stickers-Search/1.0";
    pub const SETTINGS_FILE_NAME: &'static str = "local.settings.json";
    pub const CONFIG_URI_KEY: &'static str = "ConfigUri";
}

/// Query and pagination defaults.
pub struct SearchConfig;

impl SearchConfig {
    pub const DEFAULT_SKIP: usize = 0;
    pub const DEFAULT_PAGE_SIZE: usize = 25;
    pub const MIN_PAGE_SIZE: usize = 1;
    pub const MAX_PAGE_SIZE: usize = 100;
    pub const DEFAULT_SET_NAME: &'static str = "default";
    pub const FETCHED_SET_NAME: &'static str = "Stickers";
}

/// Network-related configuration for the record source.
pub struct NetworkConfig;

impl NetworkConfig {
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
    pub const MAX_RETRIES: u32 = 3;
    pub const RETRY_BASE_DELAY: Duration = Duration::from_millis(500);
    pub const RETRY_MAX_DELAY: Duration = Duration::from_secs(10);
}
