//! Configuration data models
//!
//! This module defines all configuration structures used by the relay.

#![allow(missing_docs)]

pub mod provider;
pub mod server;
pub mod upload;

// Re-export all configuration types
pub use provider::*;
pub use server::*;
pub use upload::*;

/// Default bind address
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default maximum JSON/urlencoded body size in bytes
pub fn default_max_body_size() -> usize {
    25 * 1024 * 1024 // 25MB
}

/// Default maximum uploaded audio file size in bytes
pub fn default_max_file_size() -> u64 {
    25 * 1024 * 1024 // 25MB
}

/// Check that a configured endpoint is an absolute http(s) URL
pub(crate) fn validate_http_url(value: &str, context: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err(format!("{} is required", context));
    }

    let url = url::Url::parse(value)
        .map_err(|e| format!("{} has invalid URL format: {}", context, e))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(format!(
            "{} must use http:// or https:// scheme, got: {}",
            context, scheme
        )),
    }
}
