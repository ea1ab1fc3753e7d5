mod app_config;

pub use app_config::{
    AppConfig, AssistantConfig, LlmConfig, LogFormat, LoggingConfig, ServerConfig, StorageSettings,
    UploadsConfig,
};
