//! Storage-backed catalog repository implementation

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::catalog::{CatalogRepository, FoodItem, Order, OrderId};
use crate::domain::storage::{FieldFilter, Storage};
use crate::domain::DomainError;

/// Storage-backed implementation of CatalogRepository
#[derive(Debug)]
pub struct StorageCatalogRepository {
    food_items: Arc<dyn Storage<FoodItem>>,
    orders: Arc<dyn Storage<Order>>,
}

impl StorageCatalogRepository {
    pub fn new(food_items: Arc<dyn Storage<FoodItem>>, orders: Arc<dyn Storage<Order>>) -> Self {
        Self { food_items, orders }
    }
}

#[async_trait]
impl CatalogRepository for StorageCatalogRepository {
    async fn find_order(&self, id: &OrderId) -> Result<Option<Order>, DomainError> {
        self.orders.get(id).await
    }

    async fn insert_order(&self, order: Order) -> Result<Order, DomainError> {
        if self.orders.exists(&order.order_id).await? {
            return Err(DomainError::conflict(format!(
                "Order '{}' already exists",
                order.order_id
            )));
        }

        self.orders.create(order).await
    }

    async fn find_food_item(&self, id: &str) -> Result<Option<FoodItem>, DomainError> {
        self.food_items.get(&id.to_string()).await
    }

    async fn find_food_items_by_cuisine(
        &self,
        cuisine: &str,
    ) -> Result<Vec<FoodItem>, DomainError> {
        let mut items = self
            .food_items
            .find_where(&FieldFilter::contains_ignore_case("cuisine", cuisine))
            .await?;

        items.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(items)
    }
}
