//! The six persisted collections and the keys they live under.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{CurrentUser, Friend, Invite, Message, Tally};

/// A named, independently serialized group of records.
///
/// `Value::default()` is what a read returns when the key is absent.
pub trait Collection {
    const KEY: &'static str;
    type Value: Serialize + DeserializeOwned + Default;
}

pub struct CurrentUserSlot;

impl Collection for CurrentUserSlot {
    const KEY: &'static str = "current_user";
    type Value = Option<CurrentUser>;
}

pub struct Friends;

impl Collection for Friends {
    const KEY: &'static str = "friends_list";
    type Value = Vec<Friend>;
}

pub struct CustomRoasts;

impl Collection for CustomRoasts {
    const KEY: &'static str = "custom_roasts";
    type Value = Vec<String>;
}

pub struct Messages;

impl Collection for Messages {
    const KEY: &'static str = "roast_messages";
    type Value = Vec<Message>;
}

pub struct Invites;

impl Collection for Invites {
    const KEY: &'static str = "invite_codes";
    type Value = Vec<Invite>;
}

pub struct Leaderboard;

impl Collection for Leaderboard {
    const KEY: &'static str = "roast_leaderboard";
    type Value = Tally;
}

/// Every key the store writes.
pub const ALL_KEYS: [&str; 6] = [
    CurrentUserSlot::KEY,
    Friends::KEY,
    CustomRoasts::KEY,
    Messages::KEY,
    Invites::KEY,
    Leaderboard::KEY,
];
