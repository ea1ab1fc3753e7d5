//! In-memory storage implementation

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::storage::{Storage, StorageEntity, StorageKey};
use crate::domain::DomainError;

/// Thread-safe in-memory storage implementation
///
/// Used for development and tests. Data is lost when the process terminates.
#[derive(Debug)]
pub struct InMemoryStorage<E>
where
    E: StorageEntity,
{
    entities: RwLock<HashMap<String, E>>,
}

impl<E> Default for InMemoryStorage<E>
where
    E: StorageEntity,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> InMemoryStorage<E>
where
    E: StorageEntity,
{
    /// Creates a new empty in-memory storage
    pub fn new() -> Self {
        Self {
            entities: RwLock::new(HashMap::new()),
        }
    }

    /// Creates storage pre-populated with entities
    #[cfg(test)]
    pub fn with_entities(entities: Vec<E>) -> Self {
        let map = entities
            .into_iter()
            .map(|entity| (entity.key().as_str().to_string(), entity))
            .collect();

        Self {
            entities: RwLock::new(map),
        }
    }

    fn read_error<T>(e: T) -> DomainError
    where
        T: std::fmt::Display,
    {
        DomainError::storage(format!("Failed to acquire read lock: {}", e))
    }
}

#[async_trait]
impl<E> Storage<E> for InMemoryStorage<E>
where
    E: StorageEntity + 'static,
{
    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError> {
        let entities = self.entities.read().map_err(Self::read_error)?;
        Ok(entities.get(key.as_str()).cloned())
    }

    async fn list(&self) -> Result<Vec<E>, DomainError> {
        let entities = self.entities.read().map_err(Self::read_error)?;
        Ok(entities.values().cloned().collect())
    }

    async fn create(&self, entity: E) -> Result<E, DomainError> {
        let key = entity.key().as_str().to_string();
        let mut entities = self.entities.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if entities.contains_key(&key) {
            return Err(DomainError::conflict(format!(
                "Entity with key '{}' already exists",
                key
            )));
        }

        entities.insert(key, entity.clone());
        Ok(entity)
    }

    async fn exists(&self, key: &E::Key) -> Result<bool, DomainError> {
        let entities = self.entities.read().map_err(Self::read_error)?;
        Ok(entities.contains_key(key.as_str()))
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let entities = self.entities.read().map_err(Self::read_error)?;
        Ok(entities.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::FoodItem;
    use crate::domain::storage::FieldFilter;

    fn item(id: &str, name: &str, cuisine: &str) -> FoodItem {
        FoodItem::new(id, name, "tasty", 10.0, cuisine)
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let storage: InMemoryStorage<FoodItem> = InMemoryStorage::new();
        let tacos = item("1", "Tacos", "Mexican");

        storage.create(tacos.clone()).await.unwrap();

        let result = storage.get(&"1".to_string()).await.unwrap();
        assert_eq!(result, Some(tacos));
    }

    #[tokio::test]
    async fn test_create_conflict() {
        let storage: InMemoryStorage<FoodItem> = InMemoryStorage::new();
        storage.create(item("1", "Tacos", "Mexican")).await.unwrap();

        let result = storage.create(item("1", "Burrito", "Mexican")).await;
        assert!(matches!(result.unwrap_err(), DomainError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_with_entities_and_count() {
        let storage = InMemoryStorage::with_entities(vec![
            item("1", "Tacos", "Mexican"),
            item("2", "Ramen", "Japanese"),
        ]);

        assert_eq!(storage.count().await.unwrap(), 2);
        assert!(storage.exists(&"2".to_string()).await.unwrap());
        assert!(!storage.exists(&"3".to_string()).await.unwrap());
    }

    #[tokio::test]
    async fn test_find_where() {
        let storage = InMemoryStorage::with_entities(vec![
            item("1", "Tacos", "Mexican"),
            item("2", "Ramen", "Japanese"),
            item("3", "Quesadilla", "Tex-Mex"),
        ]);

        let mut found = storage
            .find_where(&FieldFilter::contains_ignore_case("cuisine", "mex"))
            .await
            .unwrap();
        found.sort_by(|a, b| a.id.cmp(&b.id));

        let names: Vec<&str> = found.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Tacos", "Quesadilla"]);
    }
}
