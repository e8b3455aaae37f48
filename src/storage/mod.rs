//! Storage layer for the relay
//!
//! Only short-lived files exist: the uploaded audio and its re-synthesized
//! counterpart, both removed once the response is done with them.

/// File storage module
pub mod files;

pub use files::{TempFile, UploadStore};
