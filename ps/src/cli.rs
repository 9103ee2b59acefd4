//! CLI argument parsing for prefstore

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ps")]
#[command(author, version, about = "Trip preference store", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the stored preferences for a user
    Get {
        /// User identifier
        #[arg(required = true)]
        user_id: String,
    },

    /// Store (or overwrite) preferences for a user
    Put {
        /// User identifier
        #[arg(required = true)]
        user_id: String,

        /// City being visited
        #[arg(long)]
        city: String,

        /// Available time range, e.g. "10am - 4pm"
        #[arg(long)]
        available_time: String,

        /// Budget for the day
        #[arg(long)]
        budget: String,

        /// Interests (culture, adventure, food, ...)
        #[arg(long)]
        interests: String,

        /// Starting point (hotel, first attraction)
        #[arg(long)]
        starting_point: String,
    },

    /// List all stored preference records
    List,

    /// Delete a user's stored preferences
    Delete {
        /// User identifier
        #[arg(required = true)]
        user_id: String,
    },
}
