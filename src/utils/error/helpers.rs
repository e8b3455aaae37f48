//! Helper functions for creating specific error types

use super::types::RelayError;

impl RelayError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn invalid_file_type<S: Into<String>>(message: S) -> Self {
        Self::InvalidFileType(message.into())
    }

    pub fn upload<S: Into<String>>(message: S) -> Self {
        Self::Upload(message.into())
    }

    pub fn upload_storage<S: Into<String>>(message: S) -> Self {
        Self::UploadStorage(message.into())
    }

    pub fn transcription<S: Into<String>>(message: S) -> Self {
        Self::Transcription(message.into())
    }

    pub fn synthesis<S: Into<String>>(message: S) -> Self {
        Self::Synthesis(message.into())
    }

    pub fn file_storage<S: Into<String>>(message: S) -> Self {
        Self::FileStorage(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether the error happened inside the transcribe/synthesize pipeline
    pub fn is_pipeline_error(&self) -> bool {
        matches!(
            self,
            Self::Transcription(_) | Self::Synthesis(_) | Self::Decode(_) | Self::FileStorage(_)
        )
    }

    /// Message surfaced to clients in the `details` field
    pub fn details(&self) -> String {
        match self {
            Self::Config(msg)
            | Self::InvalidFileType(msg)
            | Self::Upload(msg)
            | Self::UploadStorage(msg)
            | Self::Transcription(msg)
            | Self::Synthesis(msg)
            | Self::Decode(msg)
            | Self::FileStorage(msg)
            | Self::Internal(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}
