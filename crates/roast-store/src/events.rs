//! Change notifications for independently mounted views.
//!
//! Events carry no payload: a subscriber re-reads whatever collection it
//! renders.  Emission is synchronous, each handler runs to completion before
//! [`EventBus::emit`] returns, and nothing is queued or replayed for late
//! subscribers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use thiserror::Error;

pub const EVENT_USER_CHANGED: &str = "user-changed";
pub const EVENT_FRIENDS_CHANGED: &str = "friends-changed";
pub const EVENT_ROAST_GENERATED: &str = "roast-generated";
pub const EVENT_MESSAGE_RECEIVED: &str = "message-received";
pub const EVENT_MESSAGE_READ: &str = "message-read";

/// Closed vocabulary of store notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreEvent {
    UserChanged,
    FriendsChanged,
    RoastGenerated,
    MessageReceived,
    MessageRead,
}

impl StoreEvent {
    pub const ALL: [StoreEvent; 5] = [
        StoreEvent::UserChanged,
        StoreEvent::FriendsChanged,
        StoreEvent::RoastGenerated,
        StoreEvent::MessageReceived,
        StoreEvent::MessageRead,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StoreEvent::UserChanged => EVENT_USER_CHANGED,
            StoreEvent::FriendsChanged => EVENT_FRIENDS_CHANGED,
            StoreEvent::RoastGenerated => EVENT_ROAST_GENERATED,
            StoreEvent::MessageReceived => EVENT_MESSAGE_RECEIVED,
            StoreEvent::MessageRead => EVENT_MESSAGE_READ,
        }
    }
}

impl std::fmt::Display for StoreEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown store event: {0}")]
pub struct ParseEventError(pub String);

impl std::str::FromStr for StoreEvent {
    type Err = ParseEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StoreEvent::ALL
            .into_iter()
            .find(|event| event.as_str() == s)
            .ok_or_else(|| ParseEventError(s.to_string()))
    }
}

type Handler = Arc<dyn Fn(StoreEvent) + Send + Sync>;

struct Entry {
    id: u64,
    event: StoreEvent,
    handler: Handler,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<Entry>,
}

/// Observer registry owned by the store.
///
/// Cloning yields another handle to the same registry.
#[derive(Clone, Default)]
pub struct EventBus {
    registry: Arc<Mutex<Registry>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call `handler` every time `event` is emitted, until the returned
    /// [`Subscription`] is dropped.
    pub fn subscribe<F>(&self, event: StoreEvent, handler: F) -> Subscription
    where
        F: Fn(StoreEvent) + Send + Sync + 'static,
    {
        self.subscribe_many(&[event], handler)
    }

    /// Register one handler for several events under a single subscription.
    pub fn subscribe_many<F>(&self, events: &[StoreEvent], handler: F) -> Subscription
    where
        F: Fn(StoreEvent) + Send + Sync + 'static,
    {
        let handler: Handler = Arc::new(handler);
        let mut registry = lock(&self.registry);
        let id = registry.next_id;
        registry.next_id += 1;

        for &event in events {
            registry.entries.push(Entry {
                id,
                event,
                handler: Arc::clone(&handler),
            });
        }

        tracing::trace!(id, count = events.len(), "subscribed");

        Subscription {
            registry: Arc::downgrade(&self.registry),
            id,
        }
    }

    /// Invoke every handler registered for `event`.  Returns how many ran.
    ///
    /// Handlers are snapshotted first and called with the registry unlocked,
    /// so they may re-read the store or change subscriptions.
    pub fn emit(&self, event: StoreEvent) -> usize {
        let handlers: Vec<Handler> = lock(&self.registry)
            .entries
            .iter()
            .filter(|entry| entry.event == event)
            .map(|entry| Arc::clone(&entry.handler))
            .collect();

        tracing::trace!(%event, subscribers = handlers.len(), "emitting store event");

        for handler in &handlers {
            handler(event);
        }
        handlers.len()
    }

    pub fn subscriber_count(&self, event: StoreEvent) -> usize {
        lock(&self.registry)
            .entries
            .iter()
            .filter(|entry| entry.event == event)
            .count()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let registry = lock(&self.registry);
        f.debug_struct("EventBus")
            .field("entries", &registry.entries.len())
            .finish()
    }
}

/// Disposer returned by [`EventBus::subscribe`].  Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    registry: Weak<Mutex<Registry>>,
    id: u64,
}

impl Subscription {
    /// Unsubscribe now.  Equivalent to dropping.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            lock(&registry).entries.retain(|entry| entry.id != self.id);
            tracing::trace!(id = self.id, "unsubscribed");
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}
