//! String-keyed persistence behind the store.
//!
//! A backend only moves opaque JSON strings; it knows nothing about the
//! collections they encode.  Every call is synchronous and completes before
//! returning.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::{Result, StoreError};

/// Synchronous key-value storage scoped to one installation.
pub trait KvBackend: Send + Sync {
    /// Fetch the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace whatever is stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`.  Deleting a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Process-local backend, used by tests and `--memory` sessions.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the backend with raw entries.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: Mutex::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KvBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries().remove(key);
        Ok(())
    }
}

/// A backend that cannot be reached, e.g. no storage in the execution context.
///
/// Reads through the store degrade to defaults; writes report the failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableBackend;

impl KvBackend for UnavailableBackend {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(StoreError::Unavailable("no storage in this context".into()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(StoreError::Unavailable("no storage in this context".into()))
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Err(StoreError::Unavailable("no storage in this context".into()))
    }
}

impl<B: KvBackend + ?Sized> KvBackend for Box<B> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

impl<B: KvBackend + ?Sized> KvBackend for Arc<B> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
