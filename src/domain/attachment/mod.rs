//! Attachment domain - uploaded binaries and their storage

mod encoding;
mod file;
mod store;

pub use encoding::encode_truncated;
pub use file::{AttachmentHandle, UploadedFile};
pub use store::AttachmentStore;
