//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::RelayPipeline;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Everything is behind an `Arc`; cloning the state per worker is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Relay configuration (shared read-only)
    pub config: Arc<Config>,
    /// Transcription and synthesis pipeline
    pub pipeline: Arc<RelayPipeline>,
}

impl AppState {
    pub fn new(config: Config, pipeline: RelayPipeline) -> Self {
        Self {
            config: Arc::new(config),
            pipeline: Arc::new(pipeline),
        }
    }
}
