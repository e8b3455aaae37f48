//! Error types for the relay

use thiserror::Error;

/// Result type alias for the relay
pub type Result<T> = std::result::Result<T, RelayError>;

/// Main error type for the relay
#[derive(Error, Debug)]
pub enum RelayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Listener and runtime IO failures
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed YAML config file
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Upload rejected because of its extension
    #[error("Invalid file type: {0}")]
    InvalidFileType(String),

    /// Request carried no `audio` file
    #[error("No audio file uploaded")]
    MissingFile,

    /// Multipart parsing or upload limit failures
    #[error("File upload error: {0}")]
    Upload(String),

    /// Failure persisting the upload to disk
    #[error("Upload storage error: {0}")]
    UploadStorage(String),

    /// Speech-to-text call failed
    #[error("Transcription failed: {0}")]
    Transcription(String),

    /// Text-to-speech call failed
    #[error("Synthesis failed: {0}")]
    Synthesis(String),

    /// Synthesized payload could not be decoded
    #[error("Audio decoding failed: {0}")]
    Decode(String),

    /// File storage errors
    #[error("File storage error: {0}")]
    FileStorage(String),

    /// Request body is not valid JSON
    #[error("Invalid JSON body")]
    InvalidJson,

    /// Request body exceeds the configured limit
    #[error("Payload too large")]
    PayloadTooLarge,

    /// No route matches the path
    #[error("Resource not found")]
    NotFound,

    /// Path exists but not for this method
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
