//! Catalog infrastructure implementations

mod seed;
mod storage_repository;

pub use seed::{sample_food_items, seed_food_items};
pub use storage_repository::StorageCatalogRepository;
