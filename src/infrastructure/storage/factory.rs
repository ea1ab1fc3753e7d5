//! Storage factory for runtime storage selection

use std::sync::Arc;

use crate::domain::storage::{Storage, StorageEntity};
use crate::domain::DomainError;

use super::in_memory::InMemoryStorage;
use super::postgres::{PostgresConfig, PostgresStorage};

/// Supported storage types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageType {
    /// In-memory storage (for testing/development)
    InMemory,
    /// PostgreSQL storage
    Postgres,
}

impl StorageType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Some(Self::InMemory),
            "postgres" | "postgresql" | "pg" => Some(Self::Postgres),
            _ => None,
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone)]
pub enum StorageConfig {
    InMemory,
    Postgres(PostgresConfig),
}

impl StorageConfig {
    /// Creates a PostgreSQL configuration from a URL
    pub fn postgres_url(url: impl Into<String>) -> Self {
        Self::Postgres(PostgresConfig::new(url))
    }

    /// Resolves the backend named in application config.
    /// Postgres without a database URL is a configuration error.
    pub fn from_settings(backend: &str, database_url: Option<&str>) -> Result<Self, DomainError> {
        match StorageType::from_str(backend) {
            Some(StorageType::InMemory) => Ok(Self::InMemory),
            Some(StorageType::Postgres) => database_url
                .filter(|url| !url.trim().is_empty())
                .map(Self::postgres_url)
                .ok_or_else(|| {
                    DomainError::configuration("storage.database_url is required for postgres")
                }),
            None => Err(DomainError::configuration(format!(
                "Unknown storage backend: {}",
                backend
            ))),
        }
    }

    /// Sizes the connection pool; the in-memory backend ignores it
    pub fn with_pool_limits(self, max_connections: u32, connect_timeout_secs: u64) -> Self {
        match self {
            Self::Postgres(pg) => Self::Postgres(
                pg.with_max_connections(max_connections)
                    .with_connect_timeout(connect_timeout_secs),
            ),
            Self::InMemory => Self::InMemory,
        }
    }

    pub fn storage_type(&self) -> StorageType {
        match self {
            Self::InMemory => StorageType::InMemory,
            Self::Postgres(_) => StorageType::Postgres,
        }
    }
}

/// Factory for creating storage instances
#[derive(Debug)]
pub struct StorageFactory;

impl StorageFactory {
    /// Creates a storage instance based on the configuration
    pub async fn create<E>(
        config: &StorageConfig,
        table_name: &str,
    ) -> Result<Arc<dyn Storage<E>>, DomainError>
    where
        E: StorageEntity + 'static,
    {
        match config {
            StorageConfig::InMemory => Ok(Arc::new(InMemoryStorage::<E>::new())),
            StorageConfig::Postgres(pg_config) => {
                let storage = PostgresStorage::<E>::connect(pg_config, table_name).await?;
                storage.ensure_table().await?;
                Ok(Arc::new(storage))
            }
        }
    }
}
