use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use prefstore::cli::Cli;
use prefstore::config::Config;
use prefstore::{PreferenceRecord, PreferenceStore};

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("prefstore starting");

    let store = PreferenceStore::open(&config.db_path)?;

    match cli.command {
        prefstore::cli::Command::Get { user_id } => match store.get(&user_id)? {
            Some(record) => {
                println!("{}", serde_json::to_string_pretty(&record)?);
            }
            None => {
                println!("{} No preferences stored for: {}", "?".yellow(), user_id.cyan());
            }
        },
        prefstore::cli::Command::Put {
            user_id,
            city,
            available_time,
            budget,
            interests,
            starting_point,
        } => {
            let record = PreferenceRecord {
                city,
                available_time,
                budget,
                interests,
                starting_point,
            };
            store.put(&user_id, &record)?;
            println!("{} Saved preferences for: {}", "✓".green(), user_id.cyan());
        }
        prefstore::cli::Command::List => {
            let records = store.list()?;
            if records.is_empty() {
                println!("No preferences stored");
            } else {
                for (user_id, record) in records {
                    println!(
                        "{} {} ({}, {})",
                        user_id.cyan(),
                        record.city,
                        record.available_time.dimmed(),
                        record.budget.dimmed()
                    );
                }
            }
        }
        prefstore::cli::Command::Delete { user_id } => {
            if store.delete(&user_id)? {
                println!("{} Deleted preferences for: {}", "✓".green(), user_id);
            } else {
                println!("{} No preferences stored for: {}", "?".yellow(), user_id);
            }
        }
    }

    Ok(())
}
