//! Server configuration

use super::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Number of worker threads
    pub workers: Option<usize>,
    /// Maximum JSON or urlencoded request body size in bytes
    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,
    /// Cross-origin policy
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
            max_body_size: default_max_body_size(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Get the server address
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the number of workers (defaults to CPU count)
    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(num_cpus::get)
    }

    /// Validate server configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("Port cannot be 0".to_string());
        }

        if self.max_body_size == 0 {
            return Err("Max body size cannot be 0".to_string());
        }

        if self.workers == Some(0) {
            return Err("Worker count cannot be 0".to_string());
        }

        Ok(())
    }
}

/// Cross-origin policy for browser clients of `/audio`.
///
/// The default is fully permissive: any origin, the usual verbs, and whatever
/// headers the preflight asks for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// When false the relay answers no cross-origin requests at all
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Exact origins such as `https://app.example`; empty or `*` admits all
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    #[serde(default = "default_cors_methods")]
    pub allowed_methods: Vec<String>,
    /// Empty echoes back any requested header
    #[serde(default)]
    pub allowed_headers: Vec<String>,
    /// Seconds a browser may cache a preflight answer
    pub max_age: Option<u32>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: Vec::new(),
            allowed_methods: default_cors_methods(),
            allowed_headers: Vec::new(),
            max_age: None,
        }
    }
}

impl CorsConfig {
    /// True when no origin list narrows the policy
    pub fn allows_all_origins(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }

    /// Every listed origin must be a bare `scheme://host[:port]`
    pub fn validate(&self) -> Result<(), String> {
        if self.enabled && self.allows_all_origins() {
            debug!("Relay accepts cross-origin uploads from any origin");
        }

        for origin in self.allowed_origins.iter().filter(|o| o.as_str() != "*") {
            let parsed = url::Url::parse(origin)
                .map_err(|e| format!("Invalid CORS origin {}: {}", origin, e))?;
            if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
                return Err(format!("CORS origin {} must be an http(s) origin", origin));
            }
        }

        Ok(())
    }
}

fn default_true() -> bool {
    true
}

fn default_cors_methods() -> Vec<String> {
    ["GET", "HEAD", "PUT", "PATCH", "POST", "DELETE"]
        .iter()
        .map(|m| m.to_string())
        .collect()
}
