//! The store handle every accessor hangs off.
//!
//! [`RoastStore`] owns the key-value backend, the event bus and the injected
//! clock, id and invite-code sources.  Construct it once per session and
//! share it (typically behind an `Arc`); all methods take `&self`.
//!
//! Every mutation is read-modify-write over a whole collection with no
//! concurrency check, so the last writer wins.

use chrono::{DateTime, Utc};
use roast_shared::constants::DEFAULT_APP_URL;
use roast_shared::invite::{CodeGenerator, RandomCodeGenerator};
use roast_shared::{IdGenerator, RecordId};
use url::Url;

use crate::backend::KvBackend;
use crate::clock::{Clock, SystemClock};
use crate::collections::Collection;
use crate::error::Result;
use crate::events::{EventBus, StoreEvent};

pub struct RoastStore {
    backend: Box<dyn KvBackend>,
    events: EventBus,
    clock: Box<dyn Clock>,
    codes: Box<dyn CodeGenerator>,
    ids: IdGenerator,
    app_url: Url,
}

impl RoastStore {
    pub fn new(backend: impl KvBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            events: EventBus::new(),
            clock: Box::new(SystemClock),
            codes: Box::new(RandomCodeGenerator),
            ids: IdGenerator::new(),
            app_url: default_app_url(),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_code_generator(mut self, codes: impl CodeGenerator + 'static) -> Self {
        self.codes = Box::new(codes);
        self
    }

    /// Origin and path invite links point at.
    pub fn with_app_url(mut self, app_url: Url) -> Self {
        self.app_url = app_url;
        self
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn app_url(&self) -> &Url {
        &self.app_url
    }

    // ------------------------------------------------------------------
    // Collection access
    // ------------------------------------------------------------------

    /// Load a collection, substituting its default when it is absent,
    /// unreadable or corrupt.  Never fails.
    pub fn read<C: Collection>(&self) -> C::Value {
        let raw = match self.backend.get(C::KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return C::Value::default(),
            Err(e) => {
                tracing::warn!(key = C::KEY, error = %e, "storage read failed, using default");
                return C::Value::default();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(key = C::KEY, error = %e, "corrupt collection, using default");
            C::Value::default()
        })
    }

    /// Load a collection for a read-modify-write cycle.
    ///
    /// Only an absent key yields the default.  Backend and decode errors are
    /// returned so the caller never writes a default over stored records.
    pub(crate) fn load<C: Collection>(&self) -> Result<C::Value> {
        match self.backend.get(C::KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(C::Value::default()),
        }
    }

    /// Replace a collection wholesale.
    pub fn write<C: Collection>(&self, value: &C::Value) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.backend.set(C::KEY, &raw)?;
        tracing::trace!(key = C::KEY, bytes = raw.len(), "collection written");
        Ok(())
    }

    /// Remove a collection entirely; the next read yields its default.
    pub fn clear<C: Collection>(&self) -> Result<()> {
        self.backend.remove(C::KEY)?;
        tracing::debug!(key = C::KEY, "collection cleared");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Helpers for accessors
    // ------------------------------------------------------------------

    pub(crate) fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// A fresh id, above every id in `existing`.
    pub(crate) fn next_id(&self, existing: impl IntoIterator<Item = RecordId>) -> RecordId {
        let floor = existing.into_iter().max();
        self.ids.next(self.now().timestamp_millis(), floor)
    }

    pub(crate) fn next_code(&self) -> String {
        self.codes.generate()
    }

    pub(crate) fn emit(&self, event: StoreEvent) {
        self.events.emit(event);
    }
}

impl std::fmt::Debug for RoastStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoastStore")
            .field("events", &self.events)
            .field("app_url", &self.app_url.as_str())
            .finish_non_exhaustive()
    }
}

fn default_app_url() -> Url {
    Url::parse(DEFAULT_APP_URL).expect("DEFAULT_APP_URL is a valid URL")
}
