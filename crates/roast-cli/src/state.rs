//! Application state shared by every command.
//!
//! [`AppState`] owns the store for the whole run, plus the views subscribed to
//! its notifications.

use std::sync::Arc;

use anyhow::{Context, Result};
use roast_store::{MemoryBackend, RoastStore, SqliteBackend};

use crate::config::{AppConfig, StorageKind};
use crate::views::{EventLog, UnreadBadge};

/// Central application state.
pub struct AppState {
    /// Handle to the local store.  Views hold a weak reference to it.
    pub store: Arc<RoastStore>,

    /// Configuration the store was opened with.
    pub config: AppConfig,

    /// Unread roasts for the current user, kept fresh by notifications.
    pub unread: UnreadBadge,

    _event_log: EventLog,
}

impl AppState {
    /// Open the store described by `config` and attach the views.
    pub fn open(config: AppConfig) -> Result<Self> {
        let store = match config.storage {
            StorageKind::Memory => RoastStore::new(MemoryBackend::new()),
            StorageKind::Sqlite => {
                let backend = match config.db_path {
                    Some(ref path) => SqliteBackend::open_at(path)
                        .with_context(|| format!("opening database at {}", path.display()))?,
                    None => SqliteBackend::open_default().context("opening default database")?,
                };
                RoastStore::new(backend)
            }
        };

        Ok(Self::with_store(store.with_app_url(config.app_url.clone()), config))
    }

    /// Wrap an already constructed store.
    pub fn with_store(store: RoastStore, config: AppConfig) -> Self {
        let store = Arc::new(store);
        let event_log = EventLog::attach(store.events());
        let unread = UnreadBadge::attach(&store);

        Self {
            store,
            config,
            unread,
            _event_log: event_log,
        }
    }
}
