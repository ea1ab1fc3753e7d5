//! Catalog/order repository trait

use async_trait::async_trait;

use super::{FoodItem, Order, OrderId};
use crate::domain::DomainError;

/// Lookups and inserts against the food-item and order stores
#[async_trait]
pub trait CatalogRepository: Send + Sync + std::fmt::Debug {
    /// Get an order by its identifier
    async fn find_order(&self, id: &OrderId) -> Result<Option<Order>, DomainError>;

    /// Insert a new order; an existing identifier is a conflict
    async fn insert_order(&self, order: Order) -> Result<Order, DomainError>;

    /// Get a food item by its identifier
    async fn find_food_item(&self, id: &str) -> Result<Option<FoodItem>, DomainError>;

    /// Food items whose cuisine contains `cuisine`, case-insensitive
    async fn find_food_items_by_cuisine(&self, cuisine: &str)
        -> Result<Vec<FoodItem>, DomainError>;
}
