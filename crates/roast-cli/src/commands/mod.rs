//! Command handlers.
//!
//! Each sub-module groups related commands by domain.  Handlers validate
//! input (the store does not), call the store, and write either text or JSON
//! to an [`Output`].

pub mod friends;
pub mod inbox;
pub mod invites;
pub mod leaderboard;
pub mod roasts;
pub mod templates;
pub mod user;

use std::fmt::Display;
use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::cli::{Command, FriendsCommand, InviteCommand, RoastCommand, TemplatesCommand};
use crate::state::AppState;

/// Destination for command results.
pub struct Output<'a> {
    out: &'a mut dyn Write,
    json: bool,
}

impl<'a> Output<'a> {
    pub fn new(out: &'a mut dyn Write, json: bool) -> Self {
        Self { out, json }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Write one line of text.  Suppressed in JSON mode.
    pub fn line(&mut self, text: impl Display) -> Result<()> {
        if !self.json {
            writeln!(self.out, "{text}")?;
        }
        Ok(())
    }

    /// Write `value` as pretty JSON.  Only in JSON mode.
    pub fn json<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        if self.json {
            serde_json::to_writer_pretty(&mut *self.out, value)?;
            writeln!(self.out)?;
        }
        Ok(())
    }
}

pub fn dispatch(state: &AppState, command: Command, out: &mut Output<'_>) -> Result<()> {
    match command {
        Command::Setup { username, invite } => user::setup(state, &username, invite.as_deref(), out),
        Command::Whoami => user::whoami(state, out),

        Command::Friends(FriendsCommand::List) => friends::list(state, out),
        Command::Friends(FriendsCommand::Add { name }) => friends::add(state, &name, out),
        Command::Friends(FriendsCommand::Remove { name }) => friends::remove(state, &name, out),

        Command::Roast(RoastCommand::Generate { name }) => roasts::generate(state, &name, out),
        Command::Roast(RoastCommand::Send { friend, text, random }) => {
            roasts::send(state, &friend, text.as_deref(), random, out)
        }

        Command::Inbox { unread } => inbox::list(state, unread, out),
        Command::Read { id } => inbox::mark_read(state, id, out),

        Command::Templates(TemplatesCommand::List) => templates::list(state, out),
        Command::Templates(TemplatesCommand::Add { text }) => templates::add(state, &text, out),
        Command::Templates(TemplatesCommand::Remove { number }) => {
            templates::remove(state, number, out)
        }

        Command::Leaderboard { clear: false } => leaderboard::show(state, out),
        Command::Leaderboard { clear: true } => leaderboard::clear(state, out),

        Command::Invite(InviteCommand::Create) => invites::create(state, out),
        Command::Invite(InviteCommand::Redeem { link, redeemer }) => {
            invites::redeem(state, &link, redeemer.as_deref(), out)
        }
        Command::Invite(InviteCommand::List) => invites::list(state, out),
    }
}
