//! Type conversions for RelayError

use super::types::RelayError;

impl From<base64::DecodeError> for RelayError {
    fn from(err: base64::DecodeError) -> Self {
        RelayError::Decode(err.to_string())
    }
}

impl From<actix_multipart::MultipartError> for RelayError {
    fn from(err: actix_multipart::MultipartError) -> Self {
        RelayError::Upload(err.to_string())
    }
}
