use anyhow::{Context, Result};
use roast_shared::validation::validate_friend_name;
use serde_json::json;

use super::Output;
use crate::state::AppState;

pub fn list(state: &AppState, out: &mut Output<'_>) -> Result<()> {
    let friends = state.store.friends();
    if friends.is_empty() {
        out.line("No friends added yet. Add your first friend!")?;
    }
    for friend in &friends {
        out.line(format!("👤 {}", friend.name))?;
    }
    out.json(&friends)
}

pub fn add(state: &AppState, name: &str, out: &mut Output<'_>) -> Result<()> {
    let name = validate_friend_name(name)?;
    let added = state.store.add_friend(name).context("adding friend")?;
    if added {
        out.line(format!("Added {name} to your friends."))?;
    } else {
        out.line("Friend already added")?;
    }
    out.json(&json!({ "added": added }))
}

pub fn remove(state: &AppState, name: &str, out: &mut Output<'_>) -> Result<()> {
    let removed = state.store.remove_friend(name).context("removing friend")?;
    if removed > 0 {
        out.line(format!("Removed {name}."))?;
    } else {
        out.line(format!("No friend named {name}."))?;
    }
    out.json(&json!({ "removed": removed }))
}

#[cfg(test)]
mod tests {
    use crate::commands::test_support::{run, state};

    #[test]
    fn add_list_remove() {
        let state = state();
        assert!(run(&state, &["friends", "add", "Ana"]).unwrap().contains("Added Ana"));
        assert_eq!(
            run(&state, &["friends", "add", "ANA"]).unwrap().trim(),
            "Friend already added"
        );
        assert_eq!(run(&state, &["friends", "ls"]).unwrap().trim(), "👤 Ana");
        assert!(run(&state, &["friends", "rm", "Ana"]).unwrap().contains("Removed Ana"));
        assert!(state.store.friends().is_empty());
    }

    #[test]
    fn blank_name_is_rejected() {
        let state = state();
        assert!(run(&state, &["friends", "add", "  "]).is_err());
        assert!(state.store.friends().is_empty());
    }
}
