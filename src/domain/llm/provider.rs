use async_trait::async_trait;
use std::fmt::Debug;

use super::{LlmRequest, LlmResponse};
use crate::domain::DomainError;

/// Trait for chat-completion providers (OpenAI and compatible endpoints)
#[async_trait]
pub trait LlmProvider: Send + Sync + Debug {
    /// Send a chat completion request
    async fn chat(&self, model: &str, request: LlmRequest) -> Result<LlmResponse, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug)]
    pub struct MockLlmProvider {
        name: &'static str,
        response: Option<LlmResponse>,
        error: Option<String>,
        requests: Mutex<Vec<(String, LlmRequest)>>,
    }

    impl MockLlmProvider {
        pub fn new(name: &'static str) -> Self {
            Self {
                name,
                response: None,
                error: None,
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn with_response(mut self, response: LlmResponse) -> Self {
            self.response = Some(response);
            self
        }

        pub fn with_error(mut self, error: impl Into<String>) -> Self {
            self.error = Some(error.into());
            self
        }

        /// Requests received so far, with the model they targeted
        pub fn requests(&self) -> Vec<(String, LlmRequest)> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LlmProvider for MockLlmProvider {
        async fn chat(&self, model: &str, request: LlmRequest) -> Result<LlmResponse, DomainError> {
            self.requests
                .lock()
                .unwrap()
                .push((model.to_string(), request));

            if let Some(ref error) = self.error {
                return Err(DomainError::provider(self.name, error));
            }

            self.response
                .clone()
                .ok_or_else(|| DomainError::provider(self.name, "No mock response configured"))
        }

        fn provider_name(&self) -> &'static str {
            self.name
        }
    }
}
