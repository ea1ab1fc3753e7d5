use std::sync::Arc;
use std::time::Duration;

use super::http_client::HttpClient;
use super::openai::{OpenAiProvider, DEFAULT_OPENAI_BASE_URL};
use crate::domain::{DomainError, LlmProvider};

/// Factory for creating LLM providers
#[derive(Debug)]
pub struct LlmProviderFactory;

impl LlmProviderFactory {
    /// Create an OpenAI-compatible provider. A missing or blank API key is a
    /// configuration error.
    pub fn create_openai(
        api_key: Option<&str>,
        base_url: Option<&str>,
        timeout: Duration,
    ) -> Result<Arc<dyn LlmProvider>, DomainError> {
        let api_key = api_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                DomainError::configuration(
                    "An API key is required: set llm.api_key or OPENAI_API_KEY",
                )
            })?;

        let client = HttpClient::with_timeout(timeout)?;
        let base_url = base_url.unwrap_or(DEFAULT_OPENAI_BASE_URL);

        Ok(Arc::new(OpenAiProvider::with_base_url(client, api_key, base_url)))
    }
}
