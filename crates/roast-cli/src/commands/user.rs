use anyhow::{Context, Result};
use roast_shared::invite::code_from_link;
use roast_shared::validation::validate_username;
use roast_store::CurrentUser;
use serde::Serialize;

use super::Output;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupResult {
    pub user: CurrentUser,
    /// `None` when no invite was given.
    pub invite_redeemed: Option<bool>,
    /// Issuer added through the invite, if any.
    pub invited_by: Option<String>,
}

/// Set the current user, then redeem the invite they arrived with.
pub fn setup(state: &AppState, username: &str, invite: Option<&str>, out: &mut Output<'_>) -> Result<()> {
    let username = validate_username(username)?;
    let user = state
        .store
        .set_current_user(username)
        .context("saving current user")?;

    let mut result = SetupResult {
        user,
        invite_redeemed: None,
        invited_by: None,
    };

    if let Some(link) = invite {
        let code = code_from_link(link)?;
        let redeemed = state
            .store
            .redeem_invite(&code, username)
            .context("redeeming invite")?;
        result.invite_redeemed = Some(redeemed);
        if redeemed {
            result.invited_by = state.store.find_invite(&code).map(|i| i.created_by);
        }
    }

    out.line(format!("Welcome to the arena, {}!", result.user.username))?;
    match (result.invite_redeemed, result.invited_by.as_deref()) {
        (Some(true), Some(issuer)) => out.line(format!("🎉 {issuer} is now on your friends list."))?,
        (Some(false), _) => out.line("That invite code was not recognised.")?,
        _ => {}
    }
    out.json(&result)
}

pub fn whoami(state: &AppState, out: &mut Output<'_>) -> Result<()> {
    let user = state.store.current_user();
    match user {
        Some(ref user) if !user.username.is_empty() => {
            out.line(format!("Player: {}", user.username))?;
        }
        _ => out.line("No user set up yet. Run `roast-arena setup <username>`.")?,
    }
    out.json(&user)
}
