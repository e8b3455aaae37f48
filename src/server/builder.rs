//! Server builder and run_server function

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{RelayError, Result};
use tracing::info;

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| RelayError::Config("Configuration is required".to_string()))?;

        HttpServer::new(&config).await
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Load configuration from the environment and run the server until it
/// shuts down
pub async fn run_server() -> Result<()> {
    info!("Starting audio relay v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load().await?;
    let server = ServerBuilder::new().with_config(config).build().await?;

    info!(
        "Server starting at: http://{}",
        server.config().address()
    );
    info!("   POST /audio - Transcribe and re-synthesize an audio file");

    server.start().await
}
