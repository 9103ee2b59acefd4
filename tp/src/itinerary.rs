//! Itinerary generation from a preference record
//!
//! One preference record in, one natural-language itinerary out. The
//! prompt is pure string interpolation of the five fields into a fixed
//! template sentence; field content is passed through untouched.

use std::sync::Arc;

use prefstore::PreferenceRecord;
use tracing::{debug, info};

use crate::llm::{CompletionRequest, LlmClient, LlmError, Message};

/// System prompt framing the model for every generation call
const SYSTEM_PROMPT: &str = "You are a helpful travel assistant. \
     Given a visitor's city, available time, budget, interests, and \
     starting point, suggest a personalized day itinerary.";

/// Build the generation prompt from a preference record
///
/// Deterministic interpolation; every field appears verbatim.
pub fn build_prompt(record: &PreferenceRecord) -> String {
    format!(
        "I am visiting {}. I have {} available and a budget of {}. \
         I'm interested in {} and starting from {}. \
         Can you suggest a personalized itinerary for my trip?",
        record.city, record.available_time, record.budget, record.interests, record.starting_point
    )
}

/// Wraps the shared LLM client for itinerary generation
///
/// The client is injected once at startup and reused across calls;
/// the model itself is stateless between requests.
pub struct ItineraryGenerator {
    llm: Arc<dyn LlmClient>,
    max_tokens: u32,
}

impl ItineraryGenerator {
    /// Create a generator over a shared LLM client
    pub fn new(llm: Arc<dyn LlmClient>, max_tokens: u32) -> Self {
        Self { llm, max_tokens }
    }

    /// Generate a natural-language itinerary for the record
    ///
    /// One synchronous completion call; any model failure is fatal to
    /// this request. An empty reply counts as a generation failure.
    pub async fn generate(&self, record: &PreferenceRecord) -> Result<String, LlmError> {
        let prompt = build_prompt(record);
        debug!(city = %record.city, prompt_len = prompt.len(), "generate: called");

        let request = CompletionRequest {
            system_prompt: SYSTEM_PROMPT.to_string(),
            messages: vec![Message::user(prompt)],
            max_tokens: self.max_tokens,
        };

        let response = self.llm.complete(request).await?;
        info!(
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "generate: completed"
        );

        match response.content {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(LlmError::EmptyResponse),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::client::mock::MockLlmClient;

    fn record() -> PreferenceRecord {
        PreferenceRecord {
            city: "Paris".to_string(),
            available_time: "9am-5pm".to_string(),
            budget: "$100".to_string(),
            interests: "food, art".to_string(),
            starting_point: "hotel".to_string(),
        }
    }

    #[test]
    fn test_build_prompt_template() {
        let prompt = build_prompt(&record());
        assert_eq!(
            prompt,
            "I am visiting Paris. I have 9am-5pm available and a budget of $100. \
             I'm interested in food, art and starting from hotel. \
             Can you suggest a personalized itinerary for my trip?"
        );
    }

    #[test]
    fn test_build_prompt_contains_all_fields() {
        let prompt = build_prompt(&record());
        for field in ["Paris", "9am-5pm", "$100", "food, art", "hotel"] {
            assert!(prompt.contains(field), "prompt missing field: {}", field);
        }
    }

    #[tokio::test]
    async fn test_generate_returns_model_text() {
        let llm = Arc::new(MockLlmClient::with_text("Start at the Louvre."));
        let generator = ItineraryGenerator::new(llm.clone(), 1024);

        let itinerary = generator.generate(&record()).await.unwrap();
        assert_eq!(itinerary, "Start at the Louvre.");
        assert_eq!(llm.call_count(), 1);

        // The model saw the interpolated prompt, not the raw record
        let requests = llm.requests();
        assert!(requests[0].messages[0].content.contains("food, art"));
    }

    #[tokio::test]
    async fn test_generate_empty_reply_is_error() {
        let llm = Arc::new(MockLlmClient::with_text("   "));
        let generator = ItineraryGenerator::new(llm, 1024);

        let result = generator.generate(&record()).await;
        assert!(matches!(result, Err(LlmError::EmptyResponse)));
    }
}
