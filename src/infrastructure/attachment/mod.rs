//! Attachment store implementations

mod filesystem;
mod in_memory;

pub use filesystem::{sanitize_file_name, FilesystemAttachmentStore};
pub use in_memory::InMemoryAttachmentStore;
