use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use roast_store::{Message, RecordId};

use super::Output;
use crate::state::AppState;

pub fn list(state: &AppState, unread_only: bool, out: &mut Output<'_>) -> Result<()> {
    if state.store.current_username().is_none() {
        bail!("No user set up yet. Run `roast-arena setup <username>`.");
    }

    let roasts: Vec<Message> = state
        .store
        .received_roasts()
        .into_iter()
        .filter(|m| !unread_only || !m.read)
        .collect();

    if roasts.is_empty() {
        out.line("No roasts yet. Ask your friends to send you some!")?;
    }

    let now = Utc::now();
    for roast in &roasts {
        let badge = if roast.read { "" } else { "  NEW" };
        out.line(format!(
            "[{}] From: {} · {}{badge}",
            roast.id,
            roast.from,
            format_age(now, roast.timestamp)
        ))?;
        out.line(format!("    \"{}\"", roast.text))?;
    }
    out.json(&roasts)
}

pub fn mark_read(state: &AppState, id: RecordId, out: &mut Output<'_>) -> Result<()> {
    let found = state
        .store
        .mark_roast_as_read(id)
        .context("marking roast as read")?;
    if !found {
        bail!("No roast with id {id}");
    }
    out.line(format!("Marked {id} as read."))?;
    out.json(&serde_json::json!({ "id": id, "read": true }))
}

/// "just now", "5m ago", "3h ago", then the calendar date.
pub fn format_age(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    let age = now.signed_duration_since(then);
    if age.num_seconds() < 60 {
        "just now".to_string()
    } else if age.num_minutes() < 60 {
        format!("{}m ago", age.num_minutes())
    } else if age.num_hours() < 24 {
        format!("{}h ago", age.num_hours())
    } else {
        then.format("%Y-%m-%d").to_string()
    }
}
