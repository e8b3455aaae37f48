//! Error handling for the relay
//!
//! This module defines the error type used throughout the service and how
//! each variant is rendered as an HTTP response.

mod conversions;
mod helpers;
mod response;
mod types;

pub use response::{ErrorEntry, ErrorListResponse, PayloadTooLargeResponse, UploadErrorResponse};
pub use types::{RelayError, Result};
