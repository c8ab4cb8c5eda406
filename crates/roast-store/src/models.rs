//! Domain model structs persisted as JSON collections.
//!
//! Field names are camelCase on disk so existing stores keep loading.
//! Relationships between records are by value (usernames and friend names),
//! never by id.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use roast_shared::RecordId;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Current user
// ---------------------------------------------------------------------------

/// The person using this installation.  At most one exists per store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub username: String,
    /// Creation timestamp in milliseconds; never reassigned for the same username.
    pub id: RecordId,
}

// ---------------------------------------------------------------------------
// Friend
// ---------------------------------------------------------------------------

/// A locally tracked friend.  Names are unique ignoring case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    pub name: String,
    pub id: RecordId,
    pub added_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

/// A roast sent from one user to another.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: RecordId,
    pub from: String,
    pub to: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    /// Starts `false`; only ever flipped to `true`.
    pub read: bool,
}

// ---------------------------------------------------------------------------
// Invite
// ---------------------------------------------------------------------------

/// An issued invite code and everyone who has redeemed it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Invite {
    pub code: String,
    /// Username of the issuer at the time of issue.
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    /// Append-only; the same redeemer may appear more than once.
    #[serde(default)]
    pub used_by: Vec<String>,
}

// ---------------------------------------------------------------------------
// Leaderboard
// ---------------------------------------------------------------------------

/// Roast target name -> number of roasts generated for it.
pub type Tally = BTreeMap<String, u64>;

/// One ranked leaderboard row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub name: String,
    pub count: u64,
}
