use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::llm::FinishReason;
use crate::domain::{CompletionClient, DomainError, LlmProvider, LlmRequest, Message};

/// Binds a provider to one model and temperature, exposing plain-text
/// completions
#[derive(Debug, Clone)]
pub struct LlmCompletionClient {
    provider: Arc<dyn LlmProvider>,
    model: String,
    temperature: f32,
}

impl LlmCompletionClient {
    pub fn new(provider: Arc<dyn LlmProvider>, model: impl Into<String>, temperature: f32) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionClient for LlmCompletionClient {
    async fn complete(&self, messages: Vec<Message>) -> Result<String, DomainError> {
        let request = LlmRequest::builder()
            .messages(messages)
            .temperature(self.temperature)
            .build();

        tracing::debug!(
            provider = self.provider.provider_name(),
            model = %self.model,
            "Requesting completion"
        );

        let response = self.provider.chat(&self.model, request).await?;

        if let Some(usage) = &response.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Completion usage"
            );
        }
        if response.finish_reason == Some(FinishReason::Length) {
            tracing::warn!(model = %self.model, "Completion was cut off at the token limit");
        }

        Ok(response.content().trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::llm::MockLlmProvider;
    use crate::domain::LlmResponse;

    #[tokio::test]
    async fn test_complete_trims_and_forwards_settings() {
        let provider = Arc::new(MockLlmProvider::new("openai").with_response(LlmResponse::new(
            "id".to_string(),
            "gpt-4o-mini".to_string(),
            Message::assistant("  Replace Order \n"),
        )));
        let client = LlmCompletionClient::new(provider.clone(), "gpt-4o-mini", 0.7);

        let text = client
            .complete(vec![Message::system("judge"), Message::user("claim")])
            .await
            .unwrap();
        assert_eq!(text, "Replace Order");

        let requests = provider.requests();
        assert_eq!(requests.len(), 1);
        let (model, request) = &requests[0];
        assert_eq!(model, "gpt-4o-mini");
        assert_eq!(request.temperature, Some(0.7));
        assert_eq!(request.messages.len(), 2);
    }

    #[tokio::test]
    async fn test_provider_failure_propagates() {
        let provider = Arc::new(MockLlmProvider::new("openai").with_error("timeout"));
        let client = LlmCompletionClient::new(provider, "gpt-4o-mini", 0.7);

        let result = client.complete(vec![Message::user("hi")]).await;
        assert!(matches!(result, Err(DomainError::Provider { .. })));
    }
}
