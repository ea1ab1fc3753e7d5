//! Directory-backed attachment store

use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use uuid::Uuid;

use crate::domain::attachment::{AttachmentHandle, AttachmentStore, UploadedFile};
use crate::domain::DomainError;

/// Writes each upload to `<directory>/<uuid>-<sanitized name>`.
/// The directory is created on first save.
#[derive(Debug, Clone)]
pub struct FilesystemAttachmentStore {
    directory: PathBuf,
}

impl FilesystemAttachmentStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Handles are bare file names; anything with a path component is rejected
    fn resolve(&self, handle: &AttachmentHandle) -> Result<PathBuf, DomainError> {
        let name = handle.as_str();
        if name.is_empty() || name.contains(['/', '\\']) || name.starts_with('.') {
            return Err(DomainError::attachment(format!(
                "Invalid attachment handle: {}",
                name
            )));
        }

        Ok(self.directory.join(name))
    }
}

/// Keeps ASCII alphanumerics, `.`, `-` and `_` from the final path segment
pub fn sanitize_file_name(file_name: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    let sanitized: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let sanitized = sanitized.trim_start_matches('.');
    if sanitized.is_empty() {
        "upload".to_string()
    } else {
        sanitized.to_string()
    }
}

#[async_trait]
impl AttachmentStore for FilesystemAttachmentStore {
    async fn save(&self, file: &UploadedFile) -> Result<AttachmentHandle, DomainError> {
        tokio::fs::create_dir_all(&self.directory)
            .await
            .map_err(|e| {
                DomainError::attachment(format!(
                    "Failed to create upload directory {}: {}",
                    self.directory.display(),
                    e
                ))
            })?;

        let name = format!("{}-{}", Uuid::new_v4(), sanitize_file_name(&file.file_name));
        let path = self.directory.join(&name);

        tokio::fs::write(&path, &file.data).await.map_err(|e| {
            DomainError::attachment(format!("Failed to write {}: {}", path.display(), e))
        })?;

        tracing::debug!(
            path = %path.display(),
            media_type = %file.media_type(),
            bytes = file.data.len(),
            "Saved attachment"
        );
        Ok(AttachmentHandle::new(name))
    }

    async fn read(&self, handle: &AttachmentHandle) -> Result<Bytes, DomainError> {
        let path = self.resolve(handle)?;

        tokio::fs::read(&path)
            .await
            .map(Bytes::from)
            .map_err(|e| DomainError::attachment(format!("Failed to read {}: {}", path.display(), e)))
    }
}
