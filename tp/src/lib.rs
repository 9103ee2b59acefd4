//! Tourplan - Personalized Tour Plan Bot
//!
//! Collects a user's trip preferences in an interactive terminal
//! session, persists them per user id via [`prefstore`], and produces
//! a natural-language itinerary with one completion call to a hosted
//! language model.
//!
//! # Modules
//!
//! - [`llm`] - LLM client trait and Anthropic implementation
//! - [`itinerary`] - prompt construction and generation
//! - [`session`] - interactive session flow
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod cli;
pub mod config;
pub mod itinerary;
pub mod llm;
pub mod session;

// Re-export commonly used types
pub use config::{Config, LlmConfig, StorageConfig};
pub use itinerary::{ItineraryGenerator, build_prompt};
pub use llm::{AnthropicClient, CompletionRequest, CompletionResponse, LlmClient, LlmError, create_client};
pub use session::{Outcome, PreferenceForm, SessionFlow};
