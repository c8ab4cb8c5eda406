//! Views kept fresh by store notifications.
//!
//! A view never caches collection contents handed to it by an event; on every
//! notification it re-reads the store through its read accessors.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Weak};

use roast_store::{EventBus, RoastStore, StoreEvent, Subscription};

/// Logs every store notification at debug level.
pub struct EventLog {
    _subscription: Subscription,
}

impl EventLog {
    pub fn attach(bus: &EventBus) -> Self {
        let subscription = bus.subscribe_many(&StoreEvent::ALL, |event| {
            tracing::debug!(event = %event, "store event");
        });
        Self {
            _subscription: subscription,
        }
    }
}

/// Unread-roast counter, refreshed on message and user changes.
pub struct UnreadBadge {
    count: Arc<AtomicUsize>,
    reported: AtomicUsize,
    _subscription: Subscription,
}

impl UnreadBadge {
    pub const EVENTS: [StoreEvent; 3] = [
        StoreEvent::MessageReceived,
        StoreEvent::MessageRead,
        StoreEvent::UserChanged,
    ];

    pub fn attach(store: &Arc<RoastStore>) -> Self {
        let initial = store.unread_count();
        let count = Arc::new(AtomicUsize::new(initial));

        let weak: Weak<RoastStore> = Arc::downgrade(store);
        let shared = Arc::clone(&count);
        let subscription = store.events().subscribe_many(&Self::EVENTS, move |event| {
            let Some(store) = weak.upgrade() else {
                return;
            };
            let unread = store.unread_count();
            let previous = shared.swap(unread, Ordering::SeqCst);
            if previous != unread {
                tracing::debug!(event = %event, previous, unread, "unread count changed");
            }
        });

        Self {
            count,
            reported: AtomicUsize::new(initial),
            _subscription: subscription,
        }
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// The current count if it moved since the last call (or since attach).
    pub fn take_change(&self) -> Option<usize> {
        let now = self.count();
        let before = self.reported.swap(now, Ordering::SeqCst);
        (before != now).then_some(now)
    }
}
