use anyhow::{Context, Result};

use super::Output;
use crate::state::AppState;

fn medal(rank: usize) -> &'static str {
    match rank {
        0 => "🥇",
        1 => "🥈",
        2 => "🥉",
        _ => "🔥",
    }
}

pub fn show(state: &AppState, out: &mut Output<'_>) -> Result<()> {
    let entries = state.store.ranked_leaderboard();
    if entries.is_empty() {
        out.line("Nobody has been roasted yet.")?;
    }
    for (rank, entry) in entries.iter().enumerate() {
        out.line(format!("{} {:>3}. {} ({})", medal(rank), rank + 1, entry.name, entry.count))?;
    }
    out.json(&entries)
}

pub fn clear(state: &AppState, out: &mut Output<'_>) -> Result<()> {
    state
        .store
        .clear_leaderboard()
        .context("clearing leaderboard")?;
    out.line("Leaderboard cleared.")?;
    out.json(&serde_json::json!({ "cleared": true }))
}

#[cfg(test)]
mod tests {
    use crate::commands::test_support::{run, state};

    #[test]
    fn ranks_with_medals() {
        let state = state();
        for name in ["Bo", "Ana", "Ana", "Cy", "Di", "Di", "Di"] {
            state.store.add_roast(name).unwrap();
        }

        let out = run(&state, &["leaderboard"]).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "🥇   1. Di (3)");
        assert_eq!(lines[1], "🥈   2. Ana (2)");
        assert_eq!(lines[2], "🥉   3. Bo (1)");
        assert_eq!(lines[3], "🔥   4. Cy (1)");
    }

    #[test]
    fn clear_empties_the_board() {
        let state = state();
        state.store.add_roast("Ana").unwrap();
        run(&state, &["leaderboard", "--clear"]).unwrap();
        assert!(run(&state, &["leaderboard"]).unwrap().contains("Nobody"));

        let json = run(&state, &["--json", "leaderboard"]).unwrap();
        assert_eq!(json.trim(), "[]");
    }
}
