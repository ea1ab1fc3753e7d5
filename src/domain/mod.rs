//! Domain layer - Core business logic and entities

pub mod assistant;
pub mod attachment;
pub mod catalog;
pub mod error;
pub mod llm;
pub mod storage;

pub use assistant::{
    AssistantResponse, Attachments, ClaimDecision, Classification, Intent, Query, ResponseBody,
};
pub use attachment::{AttachmentHandle, AttachmentStore, UploadedFile};
pub use catalog::{CatalogRepository, FoodItem, Order, OrderDetails, OrderId, OrderStatus, UserDetails};
pub use error::DomainError;
pub use llm::{CompletionClient, LlmProvider, LlmRequest, LlmResponse, Message, MessageRole};
pub use storage::{FieldFilter, Storage, StorageEntity, StorageKey};
