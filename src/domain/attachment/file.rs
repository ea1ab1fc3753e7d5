//! Uploaded file and stored-attachment handle

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A binary received from the caller, as produced by a multipart upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl UploadedFile {
    pub fn new(file_name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            data: data.into(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// A genuine upload carries a file name and at least one byte
    pub fn is_genuine_upload(&self) -> bool {
        !self.file_name.trim().is_empty() && !self.data.is_empty()
    }

    /// Declared content type, or one guessed from the file name
    pub fn media_type(&self) -> String {
        self.content_type.clone().unwrap_or_else(|| {
            mime_guess::from_path(&self.file_name)
                .first_or_octet_stream()
                .essence_str()
                .to_string()
        })
    }
}

/// Opaque reference to a stored attachment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttachmentHandle(String);

impl AttachmentHandle {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AttachmentHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genuine_upload() {
        assert!(UploadedFile::new("box.jpg", vec![1u8, 2, 3]).is_genuine_upload());
        assert!(!UploadedFile::new("  ", vec![1u8]).is_genuine_upload());
        assert!(!UploadedFile::new("box.jpg", Vec::<u8>::new()).is_genuine_upload());
    }

    #[test]
    fn test_media_type() {
        let guessed = UploadedFile::new("box.png", vec![0u8]);
        assert_eq!(guessed.media_type(), "image/png");

        let declared = UploadedFile::new("blob", vec![0u8]).with_content_type("image/jpeg");
        assert_eq!(declared.media_type(), "image/jpeg");

        let unknown = UploadedFile::new("blob", vec![0u8]);
        assert_eq!(unknown.media_type(), "application/octet-stream");
    }
}
