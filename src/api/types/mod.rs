//! API request and response types

mod error;
mod json;
mod query;

pub use error::{ApiError, ApiErrorDetail, ApiErrorResponse, ApiErrorType};
pub use json::Json;
pub use query::{AttachmentsPayload, ImagePayload, QueryInput, QueryRequest};
