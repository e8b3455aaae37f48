//! HTTP middleware implementations
//!
//! - Body guard: size limit and JSON validation ahead of routing
//! - Error handlers: standard body for unhandled 500s

mod body_guard;
mod errors;


pub use body_guard::{BodyGuard, BodyGuardService, GuardedBody, is_valid_json_body};
pub use errors::error_handlers;
