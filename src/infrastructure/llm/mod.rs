//! LLM provider implementations

mod completion_client;
mod factory;
mod http_client;
mod openai;

pub use completion_client::LlmCompletionClient;
pub use factory::LlmProviderFactory;
pub use http_client::{HttpClient, HttpClientTrait};
pub use openai::{OpenAiProvider, DEFAULT_OPENAI_BASE_URL};
