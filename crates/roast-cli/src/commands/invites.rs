use anyhow::{bail, Context, Result};
use roast_shared::invite::code_from_link;
use serde_json::json;

use super::Output;
use crate::state::AppState;

pub fn create(state: &AppState, out: &mut Output<'_>) -> Result<()> {
    let Some(link) = state.store.invite_link().context("creating invite")? else {
        bail!("Set up a username before inviting friends.");
    };

    out.line("Share this link with a friend:")?;
    out.line(format!("  {link}"))?;
    out.json(&json!({ "link": link.as_str() }))
}

/// Redeem a link or bare code; the issuer joins the local friends list.
pub fn redeem(
    state: &AppState,
    link: &str,
    redeemer: Option<&str>,
    out: &mut Output<'_>,
) -> Result<()> {
    let redeemer = match redeemer {
        Some(name) => name.to_string(),
        None => match state.store.current_username() {
            Some(name) => name,
            None => bail!("Set up a username or pass --as <name> to redeem an invite."),
        },
    };

    let code = code_from_link(link)?;
    let redeemed = state
        .store
        .redeem_invite(&code, &redeemer)
        .context("redeeming invite")?;
    if !redeemed {
        bail!("Invite code {code} was not recognised");
    }

    let issuer = state.store.find_invite(&code).map(|i| i.created_by);
    if let Some(ref issuer) = issuer {
        out.line(format!("🎉 {issuer} is now on your friends list."))?;
    }
    out.json(&json!({ "code": code, "redeemer": redeemer, "friend": issuer }))
}

pub fn list(state: &AppState, out: &mut Output<'_>) -> Result<()> {
    let invites = state.store.invites();
    if invites.is_empty() {
        out.line("No invites issued yet.")?;
    }
    for invite in &invites {
        out.line(format!(
            "{}  by {} on {}  used {} time{}",
            invite.code,
            invite.created_by,
            invite.created_at.format("%Y-%m-%d"),
            invite.used_by.len(),
            if invite.used_by.len() == 1 { "" } else { "s" }
        ))?;
    }
    out.json(&invites)
}
