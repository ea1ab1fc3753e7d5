//! Catalog domain - food items and orders

mod food_item;
mod order;
mod repository;

pub use food_item::FoodItem;
pub use order::{
    Order, OrderDetails, OrderId, OrderStatus, UserDetails, GENERATED_ORDER_DIGITS,
    ORDER_ID_PREFIX,
};
pub use repository::CatalogRepository;
