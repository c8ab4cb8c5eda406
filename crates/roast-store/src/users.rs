//! The current-user slot.

use crate::collections::CurrentUserSlot;
use crate::error::{Result, StoreError};
use crate::events::StoreEvent;
use crate::models::CurrentUser;
use crate::store::RoastStore;

impl RoastStore {
    pub fn current_user(&self) -> Option<CurrentUser> {
        self.read::<CurrentUserSlot>()
    }

    /// Username of the current user.  A stored record with an empty name
    /// counts as no user.
    pub fn current_username(&self) -> Option<String> {
        self.current_user()
            .map(|user| user.username)
            .filter(|name| !name.is_empty())
    }

    /// Make `username` the current user and emit `user-changed`.
    ///
    /// Re-submitting the same username keeps its original id; a different
    /// username replaces the record with a fresh one.
    ///
    /// A slot that fails to decode is replaced; a backend failure is returned.
    pub fn set_current_user(&self, username: &str) -> Result<CurrentUser> {
        let existing = match self.load::<CurrentUserSlot>() {
            Ok(existing) => existing,
            Err(StoreError::Serialization(e)) => {
                tracing::warn!(error = %e, "replacing undecodable current user");
                None
            }
            Err(e) => return Err(e),
        };

        let user = match existing {
            Some(existing) if existing.username == username => existing,
            _ => CurrentUser {
                username: username.to_string(),
                id: self.next_id([]),
            },
        };

        self.write::<CurrentUserSlot>(&Some(user.clone()))?;
        tracing::debug!(username = %user.username, id = %user.id, "current user set");
        self.emit(StoreEvent::UserChanged);
        Ok(user)
    }
}
