//! # roast-store
//!
//! Local state for the Roast Arena application: six JSON collections kept in
//! a string-keyed backend (SQLite on disk, or memory), typed accessors that
//! preserve each collection's invariants, a notification bus that tells
//! views which collection changed, and the invite workflow built on top.
//!
//! Everything is synchronous.  A [`RoastStore`] assumes it is the only
//! writer; concurrent writers to the same backend lose updates.

pub mod backend;
pub mod clock;
pub mod collections;
pub mod database;
pub mod events;
pub mod migrations;
pub mod models;
pub mod store;

mod error;
mod friends;
mod invites;
mod leaderboard;
mod messages;
mod templates;
mod users;

pub use backend::{KvBackend, MemoryBackend, UnavailableBackend};
pub use clock::{Clock, ManualClock, SystemClock};
pub use database::SqliteBackend;
pub use error::{Result, StoreError};
pub use events::{EventBus, StoreEvent, Subscription};
pub use models::*;
pub use roast_shared::RecordId;
pub use store::RoastStore;
