pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "herald")]
#[command(about = "MangaUpdates release checker with push notifications", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check the reading list against the release feed and notify
    Check {
        /// Print the digest instead of sending it
        #[arg(long)]
        dry_run: bool,
    },
    /// Log in to the site and persist session cookies
    Login,
    /// Print the reading list
    List {
        /// Emit entries as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the release feed
    Feed {
        /// Emit entries as JSON
        #[arg(long)]
        json: bool,
    },
}
