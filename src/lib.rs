//! Cuisine Connect assistant
//!
//! Routes customer queries by intent to one of several workflows:
//! - greetings and fallback answers
//! - cuisine-based dish recommendations from the catalog
//! - food questions answered by the language model
//! - damaged/fraudulent item claims adjudicated from a photo
//! - order status lookup and order placement

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::{FoodItem, Order};
use infrastructure::{
    attachment::FilesystemAttachmentStore,
    catalog::{seed_food_items, StorageCatalogRepository},
    llm::{LlmCompletionClient, LlmProviderFactory},
    services::AssistantService,
    storage::{StorageConfig, StorageFactory},
};
use tracing::info;

const FOOD_ITEMS_TABLE: &str = "food_items";
const ORDERS_TABLE: &str = "orders";

/// Create the application state with all services initialized
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage_config = StorageConfig::from_settings(
        &config.storage.backend,
        config.storage.database_url.as_deref(),
    )?
    .with_pool_limits(
        config.storage.max_connections,
        config.storage.connect_timeout_secs,
    );
    info!(backend = ?storage_config.storage_type(), "Storage backend selected");

    let food_items = StorageFactory::create::<FoodItem>(&storage_config, FOOD_ITEMS_TABLE).await?;
    let orders = StorageFactory::create::<Order>(&storage_config, ORDERS_TABLE).await?;

    let seeded = seed_food_items(food_items.as_ref()).await?;
    if seeded > 0 {
        info!(count = seeded, "Seeded sample food items");
    }

    let api_key = config.llm.resolved_api_key();
    let provider = LlmProviderFactory::create_openai(
        api_key.as_deref(),
        config.llm.base_url.as_deref(),
        config.llm.timeout(),
    )?;
    let completion = Arc::new(LlmCompletionClient::new(
        provider,
        config.llm.model.clone(),
        config.llm.temperature,
    ));
    info!(model = %config.llm.model, "Completion client ready");

    let catalog = Arc::new(StorageCatalogRepository::new(food_items, orders));
    let attachments = Arc::new(FilesystemAttachmentStore::new(&config.uploads.directory));

    let assistant = AssistantService::new(
        completion,
        catalog,
        attachments,
        config.assistant.settings(),
    );

    Ok(AppState::new(Arc::new(assistant)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    fn config() -> AppConfig {
        let mut config = AppConfig::default();
        config.llm.api_key = Some("sk-test".to_string());
        config.uploads.directory = std::env::temp_dir()
            .join("cuisine-connect-state-test")
            .to_string_lossy()
            .into_owned();
        config
    }

    #[tokio::test]
    async fn test_in_memory_state_builds() {
        assert_ok!(create_app_state_with_config(&config()).await);
    }

    #[tokio::test]
    async fn test_postgres_without_url_is_rejected() {
        let mut config = config();
        config.storage.backend = "postgres".to_string();
        config.storage.database_url = None;

        assert_err!(create_app_state_with_config(&config).await.map(|_| ()));
    }

    #[tokio::test]
    async fn test_unknown_backend_is_rejected() {
        let mut config = config();
        config.storage.backend = "redis".to_string();

        assert_err!(create_app_state_with_config(&config).await.map(|_| ()));
    }
}
