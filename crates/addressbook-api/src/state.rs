//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor. Built once at startup; cloning is cheap and
//! every clone shares the same [`ContactStore`].

use addressbook_core::ContactStore;

/// Port used when `PORT` is unset or unparseable.
pub const DEFAULT_PORT: u16 = 3000;

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Runtime configuration, read from the environment by the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// TCP port to bind on all interfaces.
    pub port: u16,
    /// Start with the two demonstration contacts.
    pub seed_contacts: bool,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            seed_contacts: true,
            log_format: LogFormat::Text,
        }
    }
}

impl AppConfig {
    /// Build configuration from process environment variables.
    ///
    /// - `PORT`: listen port (default 3000)
    /// - `SEED_CONTACTS`: `false`/`0`/`no` starts empty (default seeded)
    /// - `LOG_FORMAT`: `json` for JSON logs (default text)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = lookup("PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(defaults.port);

        let seed_contacts = lookup("SEED_CONTACTS")
            .map(|v| !matches!(v.trim().to_lowercase().as_str(), "false" | "0" | "no"))
            .unwrap_or(defaults.seed_contacts);

        let log_format = match lookup("LOG_FORMAT") {
            Some(v) if v.trim().eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => defaults.log_format,
        };

        Self {
            port,
            seed_contacts,
            log_format,
        }
    }
}

/// Shared application state passed to all route handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub contacts: ContactStore,
}

impl AppState {
    /// Default configuration with an empty contact store.
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            contacts: ContactStore::new(),
        }
    }

    /// State for the given configuration, seeding contacts if it asks to.
    pub fn with_config(config: AppConfig) -> Self {
        let contacts = if config.seed_contacts {
            ContactStore::seeded()
        } else {
            ContactStore::new()
        };
        Self { config, contacts }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
