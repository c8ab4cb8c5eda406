use anyhow::{bail, Context, Result};
use roast_shared::validation::{validate_friend_name, validate_roast_text};
use serde_json::json;

use super::Output;
use crate::state::AppState;

/// Roast `name` with a random template and count it on the leaderboard.
pub fn generate(state: &AppState, name: &str, out: &mut Output<'_>) -> Result<()> {
    let name = validate_friend_name(name)?;
    let roast = state.store.generate_roast(name).context("generating roast")?;
    let count = state.store.leaderboard().get(name).copied().unwrap_or_default();

    out.line(format!("\"{roast}\""))?;
    out.line(format!("→ {name} (roasted {count} time{})", if count == 1 { "" } else { "s" }))?;
    out.json(&json!({ "target": name, "roast": roast, "count": count }))
}

/// Send a roast to someone on the friends list.
pub fn send(
    state: &AppState,
    friend: &str,
    text: Option<&str>,
    random: bool,
    out: &mut Output<'_>,
) -> Result<()> {
    if !state.store.friends().iter().any(|f| f.name == friend) {
        bail!("{friend} is not on your friends list. Add friends first to send roasts!");
    }

    let text = if random {
        state.store.random_roast(friend)
    } else {
        validate_roast_text(text.unwrap_or_default())?.to_string()
    };

    let message = state
        .store
        .send_roast(friend, &text)
        .context("sending roast")?;

    out.line(format!("✓ Roast sent to {friend}!"))?;
    out.json(&message)
}
