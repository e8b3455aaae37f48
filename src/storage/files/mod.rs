//! Temporary file storage
//!
//! `UploadStore` owns the upload directory and hands out `TempFile` guards
//! that delete their file when dropped.

mod local;
mod temp;

// Re-export public types
pub use local::UploadStore;
pub use temp::{STREAM_CHUNK_SIZE, TempFile};
