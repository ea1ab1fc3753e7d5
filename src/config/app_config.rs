use serde::Deserialize;

use crate::domain::assistant::DEFAULT_MAX_EDIT_DISTANCE;
use crate::infrastructure::services::{
    AssistantSettings, ClaimLimits, DEFAULT_DESCRIPTION_MAX_CHARS, DEFAULT_FEATURED_FOOD_ITEM_ID,
    DEFAULT_IMAGE_MAX_CHARS,
};

/// Environment variable consulted when `llm.api_key` is unset
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub storage: StorageSettings,
    pub llm: LlmConfig,
    pub uploads: UploadsConfig,
    pub assistant: AssistantConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// `memory` or `postgres`
    pub backend: String,
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// OpenAI-compatible endpoint; the public API when unset
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UploadsConfig {
    pub directory: String,
    /// Largest accepted request body, multipart uploads included
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub image_max_chars: usize,
    pub description_max_chars: usize,
    pub featured_food_item_id: String,
    /// Largest misspelling distance accepted when matching cuisines; 0 disables it
    pub cuisine_max_edit_distance: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: "memory".to_string(),
            database_url: None,
            max_connections: 10,
            connect_timeout_secs: 30,
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            timeout_secs: 60,
        }
    }
}

impl LlmConfig {
    /// Configured key, else the `OPENAI_API_KEY` environment variable
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| std::env::var(OPENAI_API_KEY_ENV).ok())
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            directory: "uploads".to_string(),
            max_body_bytes: 10 * 1024 * 1024,
        }
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            image_max_chars: DEFAULT_IMAGE_MAX_CHARS,
            description_max_chars: DEFAULT_DESCRIPTION_MAX_CHARS,
            featured_food_item_id: DEFAULT_FEATURED_FOOD_ITEM_ID.to_string(),
            cuisine_max_edit_distance: DEFAULT_MAX_EDIT_DISTANCE,
        }
    }
}

impl AssistantConfig {
    pub fn settings(&self) -> AssistantSettings {
        AssistantSettings {
            claim_limits: ClaimLimits {
                image_max_chars: self.image_max_chars,
                description_max_chars: self.description_max_chars,
            },
            featured_food_item_id: self.featured_food_item_id.clone(),
            cuisine_max_edit_distance: self.cuisine_max_edit_distance,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.backend, "memory");
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.temperature, 0.7);
        assert_eq!(config.uploads.directory, "uploads");
        assert_eq!(config.assistant.image_max_chars, 10_000);
        assert_eq!(config.assistant.description_max_chars, 100);
        assert_eq!(config.assistant.featured_food_item_id, "1");
    }

    #[test]
    fn test_partial_sources_keep_defaults() {
        let config: AppConfig = config::Config::builder()
            .set_override("llm.model", "gpt-4o")
            .unwrap()
            .set_override("assistant.description_max_chars", 50)
            .unwrap()
            .set_override("logging.format", "json")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.llm.model, "gpt-4o");
        assert_eq!(config.llm.timeout_secs, 60);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.assistant.description_max_chars, 50);
        assert_eq!(config.assistant.image_max_chars, 10_000);
    }

    #[test]
    fn test_assistant_settings() {
        let config = AssistantConfig {
            image_max_chars: 20,
            description_max_chars: 5,
            featured_food_item_id: "7".to_string(),
            cuisine_max_edit_distance: 0,
        };

        let settings = config.settings();
        assert_eq!(settings.claim_limits.image_max_chars, 20);
        assert_eq!(settings.claim_limits.description_max_chars, 5);
        assert_eq!(settings.featured_food_item_id, "7");
        assert_eq!(settings.cuisine_max_edit_distance, 0);
    }

    #[test]
    fn test_configured_api_key_wins() {
        let llm = LlmConfig {
            api_key: Some("sk-configured".to_string()),
            ..Default::default()
        };
        assert_eq!(llm.resolved_api_key().as_deref(), Some("sk-configured"));
    }
}
