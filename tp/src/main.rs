//! Tourplan - Personalized Tour Plan Bot
//!
//! CLI entry point for the interactive planning session.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use tracing::{debug, info};

use prefstore::PreferenceStore;
use tourplan::cli::{Cli, Command};
use tourplan::config::Config;
use tourplan::itinerary::ItineraryGenerator;
use tourplan::llm::create_client;
use tourplan::session::SessionFlow;

fn setup_logging(cli_log_level: Option<&str>) -> Result<()> {
    // Log to a file so the interactive prompts stay clean
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tourplan")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let level = match cli_log_level.map(|s| s.to_uppercase()) {
        Some(s) => match s.as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        },
        None => tracing::Level::INFO,
    };

    let log_file = fs::File::create(log_dir.join("tourplan.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        None | Some(Command::Plan) => cmd_plan(&config).await,
        Some(Command::Show { user_id }) => cmd_show(&config, &user_id),
        Some(Command::Generate { user_id }) => cmd_generate(&config, &user_id).await,
    }
}

/// Run the interactive planning session
async fn cmd_plan(config: &Config) -> Result<()> {
    config.validate()?;

    let store = PreferenceStore::open(&config.storage.db_path).context("Failed to open preference store")?;

    // One-time client construction; shared read-only for the session
    let llm = create_client(&config.llm).context("Failed to create LLM client")?;
    let generator = ItineraryGenerator::new(llm, config.llm.max_tokens);

    let flow = SessionFlow::new(store, generator);
    flow.run().await
}

/// Print the stored preferences for a user
fn cmd_show(config: &Config, user_id: &str) -> Result<()> {
    let store = PreferenceStore::open(&config.storage.db_path).context("Failed to open preference store")?;

    match store.get(user_id)? {
        Some(record) => {
            println!("{}", user_id.cyan().bold());
            println!("  {:16} {}", "city".dimmed(), record.city);
            println!("  {:16} {}", "available time".dimmed(), record.available_time);
            println!("  {:16} {}", "budget".dimmed(), record.budget);
            println!("  {:16} {}", "interests".dimmed(), record.interests);
            println!("  {:16} {}", "starting point".dimmed(), record.starting_point);
        }
        None => {
            println!("{} No preferences stored for: {}", "?".yellow(), user_id);
        }
    }

    Ok(())
}

/// One-shot: generate an itinerary from stored preferences
async fn cmd_generate(config: &Config, user_id: &str) -> Result<()> {
    config.validate()?;

    let store = PreferenceStore::open(&config.storage.db_path).context("Failed to open preference store")?;

    let Some(record) = store.get(user_id)? else {
        println!("{} No preferences stored for: {}", "?".yellow(), user_id);
        return Ok(());
    };

    let llm = create_client(&config.llm).context("Failed to create LLM client")?;
    let generator = ItineraryGenerator::new(llm, config.llm.max_tokens);

    let itinerary = generator
        .generate(&record)
        .await
        .context("Failed to generate itinerary")?;

    println!("{}", "Here's your personalized itinerary:".bright_cyan().bold());
    println!("{}", itinerary);
    Ok(())
}
