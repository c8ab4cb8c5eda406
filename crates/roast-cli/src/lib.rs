//! # roast-cli
//!
//! Terminal front end for Roast Arena.  Parses the command line, opens the
//! local store and hands the command to a handler in [`commands`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod state;
pub mod views;

use std::io::Write;

use clap::Parser;
use roast_shared::constants::APP_NAME;
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::Cli;
use crate::commands::Output;
use crate::config::AppConfig;
use crate::state::AppState;

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("roast_cli_lib=debug,roast_store=debug,warn")
        } else {
            EnvFilter::new("roast_cli_lib=info,roast_store=info,warn")
        }
    });

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting {} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    let mut config = AppConfig::from_env();
    cli.apply(&mut config);
    tracing::debug!(?config, "Loaded configuration");

    let state = AppState::open(config)?;

    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    let mut out = Output::new(&mut lock, cli.json);
    commands::dispatch(&state, cli.command, &mut out)?;

    if !out.is_json() {
        if let Some(unread) = state.unread.take_change() {
            out.line(format!(
                "📬 You have {unread} unread roast{}",
                if unread == 1 { "" } else { "s" }
            ))?;
        }
    }
    drop(out);
    lock.flush()?;

    Ok(())
}
