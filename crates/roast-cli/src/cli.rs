//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use roast_store::RecordId;
use url::Url;

use crate::config::{AppConfig, StorageKind};

/// roast-arena - roast your friends, locally
#[derive(Parser, Debug)]
#[command(name = "roast-arena")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the SQLite database (overrides ROAST_DB_PATH)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Keep everything in memory for this run (overrides ROAST_STORAGE)
    #[arg(long, global = true)]
    pub memory: bool,

    /// App URL invite links point at (overrides ROAST_APP_URL)
    #[arg(long, global = true)]
    pub app_url: Option<Url>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Debug logging (RUST_LOG still wins when set)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Apply command-line overrides on top of the environment configuration.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(ref db) = self.db {
            config.db_path = Some(db.clone());
            config.storage = StorageKind::Sqlite;
        }
        if self.memory {
            config.storage = StorageKind::Memory;
        }
        if let Some(ref url) = self.app_url {
            config.app_url = url.clone();
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Choose your username, optionally following an invite link
    Setup {
        /// Your username (at least 2 characters)
        username: String,

        /// Invite link or bare code to redeem once set up
        #[arg(long)]
        invite: Option<String>,
    },

    /// Show the current user
    Whoami,

    /// Manage your friends list
    #[command(subcommand)]
    Friends(FriendsCommand),

    /// Generate or send roasts
    #[command(subcommand)]
    Roast(RoastCommand),

    /// Roasts sent to you, newest first
    Inbox {
        /// Only show roasts you have not read yet
        #[arg(long)]
        unread: bool,
    },

    /// Mark a received roast as read
    Read {
        /// Message id as shown by `inbox`
        id: RecordId,
    },

    /// Manage custom roast templates
    #[command(subcommand)]
    Templates(TemplatesCommand),

    /// Show who is getting roasted the most
    Leaderboard {
        /// Wipe all roast counts
        #[arg(long)]
        clear: bool,
    },

    /// Create and redeem invite links
    #[command(subcommand)]
    Invite(InviteCommand),
}

#[derive(Subcommand, Debug)]
pub enum FriendsCommand {
    /// List friends
    #[command(alias = "ls")]
    List,

    /// Add a friend by name
    Add { name: String },

    /// Remove a friend (exact name)
    #[command(alias = "rm")]
    Remove { name: String },
}

#[derive(Subcommand, Debug)]
pub enum RoastCommand {
    /// Roast someone with a random template and count it on the leaderboard
    Generate { name: String },

    /// Send a roast to a friend
    Send {
        /// Friend to send to
        friend: String,

        /// Roast text
        text: Option<String>,

        /// Use a random template personalised for the friend
        #[arg(long, conflicts_with = "text")]
        random: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum TemplatesCommand {
    /// List custom templates
    #[command(alias = "ls")]
    List,

    /// Add a template; it must contain {name}
    Add { text: String },

    /// Remove a template by its number in `templates list`
    #[command(alias = "rm")]
    Remove { number: usize },
}

#[derive(Subcommand, Debug)]
pub enum InviteCommand {
    /// Create a new invite link
    Create,

    /// Redeem an invite link or code
    Redeem {
        /// Invite link or bare code
        link: String,

        /// Redeem on behalf of this username (defaults to the current user)
        #[arg(long = "as")]
        redeemer: Option<String>,
    },

    /// List issued invites
    #[command(alias = "ls")]
    List,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_send_with_text() {
        let cli = Cli::try_parse_from(["roast-arena", "roast", "send", "Ana", "hi {name}"]).unwrap();
        match cli.command {
            Command::Roast(RoastCommand::Send { friend, text, random }) => {
                assert_eq!(friend, "Ana");
                assert_eq!(text.as_deref(), Some("hi {name}"));
                assert!(!random);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_random_conflicts_with_text() {
        let parsed = Cli::try_parse_from(["roast-arena", "roast", "send", "Ana", "hi", "--random"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_overrides_apply() {
        let cli = Cli::try_parse_from([
            "roast-arena",
            "--memory",
            "--app-url",
            "https://roast.example/",
            "whoami",
        ])
        .unwrap();
        let mut config = AppConfig::default();
        cli.apply(&mut config);
        assert_eq!(config.storage, StorageKind::Memory);
        assert_eq!(config.app_url.as_str(), "https://roast.example/");
    }

    #[test]
    fn test_read_takes_numeric_id() {
        let cli = Cli::try_parse_from(["roast-arena", "read", "1718000000000"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Read { id } if id == RecordId(1_718_000_000_000)
        ));
        assert!(Cli::try_parse_from(["roast-arena", "read", "abc"]).is_err());
    }
}
