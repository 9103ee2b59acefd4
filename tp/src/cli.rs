//! CLI argument parsing for tourplan

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tp")]
#[command(author, version, about = "Personalized tour plan bot", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short, long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the interactive planning session (the default)
    Plan,

    /// Show the stored preferences for a user
    Show {
        /// User identifier
        #[arg(required = true)]
        user_id: String,
    },

    /// Generate an itinerary from a user's stored preferences
    Generate {
        /// User identifier
        #[arg(required = true)]
        user_id: String,
    },
}
