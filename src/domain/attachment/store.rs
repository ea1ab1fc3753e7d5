//! Attachment store trait

use async_trait::async_trait;
use bytes::Bytes;

use super::{AttachmentHandle, UploadedFile};
use crate::domain::DomainError;

/// Durable storage for uploaded binaries
#[async_trait]
pub trait AttachmentStore: Send + Sync + std::fmt::Debug {
    /// Persist the upload and return a handle to it
    async fn save(&self, file: &UploadedFile) -> Result<AttachmentHandle, DomainError>;

    /// Read back a stored attachment
    async fn read(&self, handle: &AttachmentHandle) -> Result<Bytes, DomainError>;
}
