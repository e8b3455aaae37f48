//! HTTP response handling for errors

use super::types::RelayError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};

/// Body returned for upload and pipeline failures on `/audio`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Single entry of an [`ErrorListResponse`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorEntry {
    pub code: u16,
    pub msg: String,
}

/// Body returned by the routing and body-parsing error handlers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorListResponse {
    pub errors: Vec<ErrorEntry>,
}

impl ErrorListResponse {
    pub fn single<S: Into<String>>(status: StatusCode, msg: S) -> Self {
        Self {
            errors: vec![ErrorEntry {
                code: status.as_u16(),
                msg: msg.into(),
            }],
        }
    }
}

/// Body returned when a request body exceeds the size limit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadTooLargeResponse {
    pub title: String,
}

impl Default for PayloadTooLargeResponse {
    fn default() -> Self {
        Self {
            title: "Payload Too Large".to_string(),
        }
    }
}

impl RelayError {
    fn upload_body(&self) -> Option<UploadErrorResponse> {
        let (error, details) = match self {
            RelayError::InvalidFileType(_) => ("Invalid file type", Some(self.details())),
            RelayError::MissingFile => ("No audio file uploaded.", None),
            RelayError::Upload(_) => ("File upload error", Some(self.details())),
            RelayError::UploadStorage(_) => ("Unknown error", Some(self.details())),
            e if e.is_pipeline_error() => ("Transcription error", Some(self.details())),
            _ => return None,
        };

        Some(UploadErrorResponse {
            error: error.to_string(),
            details,
        })
    }
}

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::InvalidFileType(_) | RelayError::MissingFile | RelayError::InvalidJson => {
                StatusCode::BAD_REQUEST
            }
            RelayError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            RelayError::NotFound => StatusCode::NOT_FOUND,
            RelayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if let Some(body) = self.upload_body() {
            return HttpResponse::build(status).json(body);
        }

        match self {
            RelayError::PayloadTooLarge => {
                HttpResponse::build(status).json(PayloadTooLargeResponse::default())
            }
            RelayError::InvalidJson => {
                HttpResponse::build(status).json(ErrorListResponse::single(status, "invalid JSON"))
            }
            RelayError::NotFound => HttpResponse::build(status)
                .json(ErrorListResponse::single(status, "Resource not found")),
            RelayError::MethodNotAllowed => HttpResponse::build(status).json(
                ErrorListResponse::single(status, "Method not allowed for the resource specified"),
            ),
            _ => HttpResponse::build(status)
                .json(ErrorListResponse::single(status, "Internal server error")),
        }
    }
}
