//! Client configuration loaded from environment variables.
//!
//! All settings have sensible defaults so the client runs with zero
//! configuration.  Command-line flags are applied on top afterwards.

use std::path::PathBuf;

use roast_shared::constants::DEFAULT_APP_URL;
use url::Url;

/// Where collections are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    /// SQLite file on disk.
    Sqlite,
    /// Process memory; nothing survives the run.
    Memory,
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite database file.
    /// Env: `ROAST_DB_PATH`
    /// Default: the platform data directory.
    pub db_path: Option<PathBuf>,

    /// Origin and path invite links point at.
    /// Env: `ROAST_APP_URL`
    /// Default: `http://localhost:3000/`
    pub app_url: Url,

    /// Storage backend.
    /// Env: `ROAST_STORAGE` (`sqlite` / `memory`)
    /// Default: `sqlite`
    pub storage: StorageKind,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            app_url: Url::parse(DEFAULT_APP_URL).expect("DEFAULT_APP_URL is a valid URL"),
            storage: StorageKind::Sqlite,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("ROAST_DB_PATH").filter(|p| !p.is_empty()) {
            config.db_path = Some(PathBuf::from(path));
        }

        if let Some(url) = lookup("ROAST_APP_URL") {
            match Url::parse(&url) {
                Ok(parsed) => config.app_url = parsed,
                Err(e) => {
                    tracing::warn!(value = %url, error = %e, "Invalid ROAST_APP_URL, using default");
                }
            }
        }

        if let Some(kind) = lookup("ROAST_STORAGE") {
            match kind.to_ascii_lowercase().as_str() {
                "sqlite" => config.storage = StorageKind::Sqlite,
                "memory" => config.storage = StorageKind::Memory,
                other => {
                    tracing::warn!(value = %other, "Invalid ROAST_STORAGE, using sqlite");
                }
            }
        }

        // RUST_LOG is handled directly by tracing-subscriber's EnvFilter,
        // so we do not store it here.

        config
    }
}
