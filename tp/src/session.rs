//! Interactive session flow
//!
//! Two-state flow: await a user id, then collect preferences. The
//! terminal loop is a thin layer over `SessionFlow::greeting` and
//! `SessionFlow::submit`, which carry the actual behavior (store
//! lookup, validation, upsert, generation) and are unit testable
//! without a terminal.

use colored::Colorize;
use eyre::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{debug, info};

use prefstore::{PreferenceRecord, PreferenceStore};

use crate::itinerary::ItineraryGenerator;

/// The five free-text form fields, as entered
///
/// No format validation anywhere; the only check is non-emptiness at
/// submission time.
#[derive(Debug, Clone, Default)]
pub struct PreferenceForm {
    pub city: String,
    pub available_time: String,
    pub budget: String,
    pub interests: String,
    pub starting_point: String,
}

impl PreferenceForm {
    /// Names of fields that are blank (empty or whitespace-only)
    pub fn blank_fields(&self) -> Vec<&'static str> {
        let mut blank = Vec::new();
        for (name, value) in [
            ("city", &self.city),
            ("available time", &self.available_time),
            ("budget", &self.budget),
            ("interests", &self.interests),
            ("starting point", &self.starting_point),
        ] {
            if value.trim().is_empty() {
                blank.push(name);
            }
        }
        blank
    }

    fn into_record(self) -> PreferenceRecord {
        PreferenceRecord {
            city: self.city,
            available_time: self.available_time,
            budget: self.budget,
            interests: self.interests,
            starting_point: self.starting_point,
        }
    }
}

/// Result of one submission attempt
#[derive(Debug)]
pub enum Outcome {
    /// Some required fields were blank; nothing was stored or generated
    MissingInput(Vec<&'static str>),
    /// Preferences stored and an itinerary generated
    Itinerary(String),
}

/// Orchestrates store lookups, submissions, and itinerary rendering
pub struct SessionFlow {
    store: PreferenceStore,
    generator: ItineraryGenerator,
}

impl SessionFlow {
    pub fn new(store: PreferenceStore, generator: ItineraryGenerator) -> Self {
        Self { store, generator }
    }

    /// Greeting for a user id, based on any prior record
    ///
    /// A returning user is always reminded of the interests and city
    /// from the stored record, whatever they go on to enter this time.
    pub fn greeting(&self, user_id: &str) -> Result<String> {
        let prior = self.store.get(user_id).context("Failed to look up preferences")?;
        debug!(user_id, returning = prior.is_some(), "greeting");

        Ok(match prior {
            Some(record) => format!(
                "Welcome back! I remember you were interested in {} in {}.",
                record.interests, record.city
            ),
            None => "Hello! Let's plan your trip.".to_string(),
        })
    }

    /// Handle one submission: validate, persist, generate
    ///
    /// Blank fields short-circuit before any store write or model
    /// call. Storage and generation failures are fatal to the request
    /// and propagate to the caller.
    pub async fn submit(&self, user_id: &str, form: PreferenceForm) -> Result<Outcome> {
        let blank = form.blank_fields();
        if !blank.is_empty() {
            debug!(user_id, ?blank, "submit: missing input");
            return Ok(Outcome::MissingInput(blank));
        }

        let record = form.into_record();
        self.store.put(user_id, &record).context("Failed to save preferences")?;

        let itinerary = self
            .generator
            .generate(&record)
            .await
            .context("Failed to generate itinerary")?;

        info!(user_id, "submit: itinerary generated");
        Ok(Outcome::Itinerary(itinerary))
    }

    /// Run the interactive terminal session
    pub async fn run(&self) -> Result<()> {
        self.print_welcome();

        let mut rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;

        // AwaitingUserId: loop until a non-blank id or EOF
        let user_id = loop {
            match read_line(&mut rl, "Enter your user ID: ")? {
                Some(input) if input.trim().is_empty() => {
                    println!("{} Please enter a user ID.", "!".red());
                }
                Some(input) => break input.trim().to_string(),
                None => {
                    println!("Goodbye!");
                    return Ok(());
                }
            }
        };
        let _ = rl.add_history_entry(&user_id);

        println!();
        println!("{}", self.greeting(&user_id)?.bright_cyan());
        println!();

        // CollectingPreferences: one form round per pass, until EOF
        loop {
            let form = match self.collect_form(&mut rl)? {
                Some(form) => form,
                None => break,
            };

            match self.submit(&user_id, form).await? {
                Outcome::MissingInput(blank) => {
                    println!("{} Please fill in all fields. Missing: {}", "!".red(), blank.join(", "));
                }
                Outcome::Itinerary(text) => {
                    println!();
                    println!("{}", "Here's your personalized itinerary:".bright_cyan().bold());
                    println!("{}", text);
                }
            }

            println!();
            match read_line(&mut rl, "Plan another day? [y/N] ")? {
                Some(answer) if answer.trim().eq_ignore_ascii_case("y") => {
                    println!();
                }
                _ => break,
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    /// Prompt for the five form fields; None means the user bailed out
    fn collect_form(&self, rl: &mut DefaultEditor) -> Result<Option<PreferenceForm>> {
        let prompts = [
            "Which city are you visiting? ",
            "How much time do you have for the trip (e.g., 10am - 4pm)? ",
            "What is your budget for the day? ",
            "What are your interests? (culture, adventure, food, shopping, etc.): ",
            "Where will you start from (hotel, first attraction)? ",
        ];

        let mut answers = Vec::with_capacity(prompts.len());
        for prompt in prompts {
            match read_line(rl, prompt)? {
                Some(answer) => answers.push(answer.trim().to_string()),
                None => return Ok(None),
            }
        }

        let mut fields = answers.into_iter();
        Ok(Some(PreferenceForm {
            city: fields.next().unwrap_or_default(),
            available_time: fields.next().unwrap_or_default(),
            budget: fields.next().unwrap_or_default(),
            interests: fields.next().unwrap_or_default(),
            starting_point: fields.next().unwrap_or_default(),
        }))
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", "Personalized Tour Plan Bot".bright_cyan().bold());
        println!("Press {} to quit at any prompt", "Ctrl+D".yellow());
        println!();
    }
}

/// Read one line; Ok(None) means the user ended the session (Ctrl+D)
fn read_line(rl: &mut DefaultEditor, prompt: &str) -> Result<Option<String>> {
    loop {
        match rl.readline(prompt) {
            Ok(line) => return Ok(Some(line)),
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C - re-show the same prompt
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!();
                return Ok(None);
            }
            Err(err) => return Err(eyre::eyre!("Readline error: {}", err)),
        }
    }
}
