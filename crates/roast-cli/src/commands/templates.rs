use anyhow::{bail, Context, Result};
use roast_shared::validation::validate_template;
use serde_json::json;

use super::Output;
use crate::state::AppState;

/// Custom templates, numbered from 1.
pub fn list(state: &AppState, out: &mut Output<'_>) -> Result<()> {
    let roasts = state.store.custom_roasts();
    if roasts.is_empty() {
        out.line("No custom roasts yet. Add one with `roast-arena templates add \"...{name}...\"`.")?;
    }
    for (i, roast) in roasts.iter().enumerate() {
        out.line(format!("{:>3}. {roast}", i + 1))?;
    }
    out.json(&roasts)
}

pub fn add(state: &AppState, text: &str, out: &mut Output<'_>) -> Result<()> {
    let text = validate_template(text)?;
    state
        .store
        .add_custom_roast(text)
        .context("saving custom roast")?;

    out.line("Custom roast saved.")?;
    out.json(&json!({ "added": text, "total": state.store.custom_roasts().len() }))
}

pub fn remove(state: &AppState, number: usize, out: &mut Output<'_>) -> Result<()> {
    let Some(index) = number.checked_sub(1) else {
        bail!("Template numbers start at 1");
    };
    let removed = state
        .store
        .remove_custom_roast(index)
        .context("removing custom roast")?;

    match removed {
        Some(ref text) => out.line(format!("Removed: {text}"))?,
        None => out.line(format!("No custom roast number {number}."))?,
    }
    out.json(&json!({ "removed": removed }))
}

#[cfg(test)]
mod tests {
    use crate::commands::test_support::{run, state};

    #[test]
    fn add_requires_placeholder() {
        let state = state();
        let err = run(&state, &["templates", "add", "no name here"]).unwrap_err();
        assert_eq!(err.to_string(), "Include {name} placeholder in your roast!");
        assert!(state.store.custom_roasts().is_empty());
    }

    #[test]
    fn numbered_list_and_removal() {
        let state = state();
        run(&state, &["templates", "add", "{name} one"]).unwrap();
        run(&state, &["templates", "add", "{name} two"]).unwrap();

        let out = run(&state, &["templates", "list"]).unwrap();
        assert!(out.contains("  1. {name} one"));
        assert!(out.contains("  2. {name} two"));

        let out = run(&state, &["templates", "rm", "1"]).unwrap();
        assert!(out.contains("Removed: {name} one"));
        assert_eq!(state.store.custom_roasts(), vec!["{name} two".to_string()]);

        let out = run(&state, &["templates", "rm", "5"]).unwrap();
        assert!(out.contains("No custom roast number 5."));
        assert!(run(&state, &["templates", "rm", "0"]).is_err());
    }
}
