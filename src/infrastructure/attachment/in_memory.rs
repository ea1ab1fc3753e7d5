//! In-memory attachment store

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use bytes::Bytes;
use uuid::Uuid;

use crate::domain::attachment::{AttachmentHandle, AttachmentStore, UploadedFile};
use crate::domain::DomainError;

/// Keeps uploads in process memory. Used in tests and when no upload
/// directory is configured.
#[derive(Debug, Default)]
pub struct InMemoryAttachmentStore {
    files: RwLock<HashMap<String, Bytes>>,
}

impl InMemoryAttachmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.files.read().map(|files| files.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl AttachmentStore for InMemoryAttachmentStore {
    async fn save(&self, file: &UploadedFile) -> Result<AttachmentHandle, DomainError> {
        let handle = format!("{}-{}", Uuid::new_v4(), file.file_name);
        let mut files = self
            .files
            .write()
            .map_err(|e| DomainError::attachment(format!("Failed to acquire write lock: {}", e)))?;

        files.insert(handle.clone(), file.data.clone());
        Ok(AttachmentHandle::new(handle))
    }

    async fn read(&self, handle: &AttachmentHandle) -> Result<Bytes, DomainError> {
        let files = self
            .files
            .read()
            .map_err(|e| DomainError::attachment(format!("Failed to acquire read lock: {}", e)))?;

        files
            .get(handle.as_str())
            .cloned()
            .ok_or_else(|| DomainError::attachment(format!("Attachment '{}' not found", handle)))
    }
}
