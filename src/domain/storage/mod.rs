//! Storage domain - Generic storage abstraction layer

mod entity;
mod filter;
mod repository;

pub use entity::{StorageEntity, StorageKey};
pub use filter::{FieldFilter, FieldOperator};
pub use repository::Storage;

#[cfg(test)]
pub use repository::mock;
