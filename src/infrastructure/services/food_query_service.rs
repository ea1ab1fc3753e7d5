//! Free-form answers: food questions and the catch-all persona

use std::sync::Arc;

use super::prompts::{persona_messages, ASSISTANT_PERSONA_PROMPT, FOOD_EXPERT_PROMPT};
use crate::domain::assistant::{messages, AssistantResponse};
use crate::domain::CompletionClient;

#[derive(Debug)]
pub struct FoodQueryService {
    completion: Arc<dyn CompletionClient>,
}

impl FoodQueryService {
    pub fn new(completion: Arc<dyn CompletionClient>) -> Self {
        Self { completion }
    }

    /// Allergen, ingredient, calorie and similar questions
    pub async fn answer_food_question(&self, query_text: &str) -> AssistantResponse {
        self.answer(FOOD_EXPERT_PROMPT, query_text).await
    }

    /// Reply for queries no rule recognised
    pub async fn fallback(&self, query_text: &str) -> AssistantResponse {
        self.answer(ASSISTANT_PERSONA_PROMPT, query_text).await
    }

    async fn answer(&self, system_prompt: &str, query_text: &str) -> AssistantResponse {
        match self
            .completion
            .complete(persona_messages(system_prompt, query_text))
            .await
        {
            Ok(text) if !text.trim().is_empty() => AssistantResponse::text(text.trim()),
            Ok(_) => {
                tracing::warn!("Model returned an empty reply");
                AssistantResponse::text(messages::FALLBACK_APOLOGY)
            }
            Err(e) => {
                tracing::error!(error = %e, "Completion failed");
                AssistantResponse::text(messages::FALLBACK_APOLOGY)
            }
        }
    }
}
