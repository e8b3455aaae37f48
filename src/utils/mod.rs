//! Utility modules
//!
//! - **error**: the relay error type and its HTTP rendering
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;
