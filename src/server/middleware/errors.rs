//! Fallback rendering for unhandled server errors

use crate::utils::error::RelayError;
use actix_web::ResponseError;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::{CONTENT_TYPE, HeaderMap};
use actix_web::middleware::{ErrorHandlerResponse, ErrorHandlers};
use tracing::error;

/// Error handlers that give every bare 500 the standard error list body
pub fn error_handlers<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().handler(StatusCode::INTERNAL_SERVER_ERROR, render_internal_error)
}

fn render_internal_error<B>(
    res: ServiceResponse<B>,
) -> actix_web::Result<ErrorHandlerResponse<B>> {
    // Already rendered by a handler
    if has_json_body(res.headers()) {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    error!(
        method = %res.request().method(),
        path = %res.request().path(),
        "Unhandled internal error"
    );

    let (req, _) = res.into_parts();
    let response = RelayError::internal("unhandled").error_response();
    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, response).map_into_right_body(),
    ))
}

fn has_json_body(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"))
}
