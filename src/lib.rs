//! Rickdex: a terminal client for the Rick and Morty character catalog.
//!
//! Rickdex provides:
//! - Paginated browsing of the remote character catalog
//! - Debounced name search
//! - A locally persisted favorites list with an accent color
//! - Tolerance for slow, failing and out-of-order network responses

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal driver (main.rs)                          │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching (Store)                       │
//! │  - Debounce, pagination                             │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ API Layer     │
//! │ (ui/)         │   │ (storage/)    │   │ (api/)        │
//! │ - View models │   │ - JSON slots  │   │ - reqwest     │
//! │ - Rendering   │   │ - Favorites   │   │ - ApiError    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Character model, errors (domain/)                │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber, rotating log file            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`api`]: Catalog client trait and HTTP implementation
//! - [`domain`]: Core domain types (Character, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`storage`]: Key-value persistence and favorites slots
//! - [`ui`]: View models and text rendering
//! - [`observability`]: Logging setup
//!
//! # Configuration
//!
//! Configuration comes from an optional TOML file, then environment overrides:
//!
//! ```toml
//! api_base_url = "https://rickandmortyapi.com/api"
//! data_dir = "~/.local/share/rickdex"
//! debounce_ms = 500
//! page_spread = 2
//! page_size = 20
//! request_timeout_secs = 30
//! log_level = "debug"
//! ```
//!
//! # Examples
//!
//! ```rust,no_run
//! use rickdex::{initialize, Config};
//!
//! # async fn run() -> rickdex::Result<()> {
//! let config = Config::default().apply_env();
//! let mut store = initialize(&config)?;
//!
//! store.load_initial();
//! store.settle().await;
//! println!("{} characters", store.state().catalog.total_items());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;

pub use api::{CatalogClient, HttpCatalogClient};
pub use app::{handle_event, Action, AppState, Event, Store};
pub use domain::{ApiError, Character, FavoriteColor, Result, RickdexError};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Default catalog endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// Runtime configuration.
///
/// Every field has a default, so any subset may be given in a TOML file or a
/// string map.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base URL of the character API, without the `/character` path.
    pub api_base_url: String,

    /// Directory for the favorites file and logs.
    ///
    /// A leading `~` is expanded. Default: platform data dir + `rickdex`.
    pub data_dir: PathBuf,

    /// Quiet period before typed search text is committed. Default: 500
    pub debounce_ms: u64,

    /// Pages shown on each side of the current page in the pager. Default: 2
    pub page_spread: u32,

    /// Items per page, for the "Showing X-Y of Z" summary. Default: 20
    pub page_size: u32,

    /// Per-request timeout. Default: 30
    pub request_timeout_secs: u64,

    /// Log filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `EnvFilter`
    /// directive. Default: `"info"`
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            data_dir: infrastructure::get_data_dir(),
            debounce_ms: 500,
            page_spread: 2,
            page_size: 20,
            request_timeout_secs: 30,
            log_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a string map with typed fallbacks.
    ///
    /// Unknown keys are ignored; values that fail to parse keep their default.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use rickdex::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("debounce_ms".to_string(), "250".to_string());
    /// map.insert("page_spread".to_string(), "not a number".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.debounce_ms, 250);
    /// assert_eq!(config.page_spread, 2);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let api_base_url = map
            .get("api_base_url")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.api_base_url);

        let data_dir = map
            .get("data_dir")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map_or(defaults.data_dir, infrastructure::expand_tilde);

        Self {
            api_base_url,
            data_dir,
            debounce_ms: parse_or(map, "debounce_ms", defaults.debounce_ms),
            page_spread: parse_or(map, "page_spread", defaults.page_spread),
            page_size: parse_or(map, "page_size", defaults.page_size),
            request_timeout_secs: parse_or(
                map,
                "request_timeout_secs",
                defaults.request_timeout_secs,
            ),
            log_level: map.get("log_level").cloned(),
        }
    }

    /// Parses TOML configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RickdexError::Config`] for invalid TOML, unknown keys or
    /// mistyped values.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let mut config: Self =
            toml::from_str(text).map_err(|e| RickdexError::Config(e.to_string()))?;
        config.data_dir = infrastructure::expand_tilde(&config.data_dir.to_string_lossy());
        Ok(config)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`RickdexError::Io`] if the file cannot be read, or
    /// [`RickdexError::Config`] if it does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Applies `RICKDEX_API_URL`, `RICKDEX_DATA_DIR` and `RICKDEX_LOG`.
    #[must_use]
    pub fn apply_env(self) -> Self {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from any variable lookup. Empty values are ignored.
    #[must_use]
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get("RICKDEX_API_URL") {
            self.api_base_url = url;
        }
        if let Some(dir) = get("RICKDEX_DATA_DIR") {
            self.data_dir = infrastructure::expand_tilde(&dir);
        }
        if let Some(level) = get("RICKDEX_LOG") {
            self.log_level = Some(level);
        }
        self
    }

    /// Checks values the rest of the crate relies on.
    ///
    /// # Errors
    ///
    /// Returns [`RickdexError::Config`] describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(RickdexError::Config("api_base_url is empty".to_string()));
        }
        if self.page_size == 0 {
            return Err(RickdexError::Config("page_size must be at least 1".to_string()));
        }
        if self.request_timeout_secs == 0 {
            return Err(RickdexError::Config(
                "request_timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Path of the favorites storage file.
    #[must_use]
    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join(infrastructure::STORAGE_FILE_NAME)
    }
}

fn parse_or<T: std::str::FromStr>(map: &BTreeMap<String, String>, key: &str, default: T) -> T {
    map.get(key)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

/// Builds the production store from configuration.
///
/// Opens (or creates) the favorites file under `data_dir`, hydrates favorites
/// from it, and prepares an HTTP client for the configured API. No request is
/// sent; call [`Store::load_initial`] to fetch the first page.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the data directory cannot
/// be created, or the HTTP client cannot be built.
pub fn initialize(config: &Config) -> Result<Store<HttpCatalogClient, storage::JsonStorage>> {
    config.validate()?;
    tracing::debug!(api = %config.api_base_url, data_dir = ?config.data_dir, "initializing rickdex");

    let storage = storage::JsonStorage::open(config.storage_path())?;
    let client = HttpCatalogClient::new(
        config.api_base_url.clone(),
        Duration::from_secs(config.request_timeout_secs),
    )?;

    Ok(Store::new(Arc::new(client), storage)
        .with_debounce(Duration::from_millis(config.debounce_ms))
        .with_layout(config.page_size, config.page_spread))
}
