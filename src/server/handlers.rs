//! Fallback handlers for unmatched routes and methods

use crate::utils::error::RelayError;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use tracing::debug;

/// Any path without a route
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    debug!(method = %req.method(), path = %req.path(), "No route matched");
    RelayError::NotFound.error_response()
}

/// A known path hit with a method it does not serve
pub async fn method_not_allowed(req: HttpRequest) -> HttpResponse {
    debug!(method = %req.method(), path = %req.path(), "Method not allowed");
    RelayError::MethodNotAllowed.error_response()
}
