//! Configuration management for the relay
//!
//! Configuration comes from environment variables (a `.env` file is honoured),
//! optionally layered over a YAML file named by `AUDIO_RELAY_CONFIG`.

pub mod models;

pub use models::*;

use crate::utils::error::{RelayError, Result};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Environment variable naming an optional YAML config file
pub const CONFIG_FILE_ENV: &str = "AUDIO_RELAY_CONFIG";

/// Main configuration struct for the relay
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Temporary file settings
    #[serde(default)]
    pub upload: UploadConfig,
    /// Speech-to-text provider
    #[serde(default)]
    pub groq: GroqConfig,
    /// Text-to-speech provider
    #[serde(default)]
    pub speechify: SpeechifyConfig,
}

impl Config {
    /// Load configuration the way the binary does: YAML file if
    /// `AUDIO_RELAY_CONFIG` is set, environment variables on top.
    pub async fn load() -> Result<Self> {
        match std::env::var(CONFIG_FILE_ENV) {
            Ok(path) if !path.is_empty() => Self::from_file(path).await,
            _ => Self::from_env(),
        }
    }

    /// Load configuration from a YAML file, then apply environment overrides
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| RelayError::Config(format!("Failed to read config file: {}", e)))?;

        let mut config = Self::from_yaml(&content)?;
        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Parse a YAML document without validating it
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Overlay values found through `lookup` onto this configuration.
    ///
    /// Empty values are treated as unset. Numeric values that fail to parse
    /// are ignored with a warning and the current value is kept.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(host) = get("HOST") {
            self.server.host = host;
        }
        if let Some(port) = parse_var(&get, "PORT") {
            self.server.port = port;
        }
        if let Some(workers) = parse_var(&get, "WORKERS") {
            self.server.workers = Some(workers);
        }
        if let Some(limit) = parse_var(&get, "MAX_BODY_SIZE") {
            self.server.max_body_size = limit;
        }
        if let Some(origins) = get("CORS_ALLOWED_ORIGINS") {
            self.server.cors.allowed_origins = origins
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect();
        }

        if let Some(path) = get("UPLOAD_PATH") {
            self.upload.path = PathBuf::from(path);
        }
        if let Some(limit) = parse_var(&get, "MAX_UPLOAD_SIZE") {
            self.upload.max_file_size = limit;
        }

        if let Some(key) = get("GROQ_API_KEY") {
            self.groq.api_key = key;
        }
        if let Some(base) = get("GROQ_API_BASE") {
            self.groq.api_base = base;
        }
        if let Some(model) = get("GROQ_MODEL") {
            self.groq.model = model;
        }
        if let Some(timeout) = parse_var(&get, "GROQ_TIMEOUT_SECS") {
            self.groq.timeout_secs = Some(timeout);
        }

        if let Some(url) = get("SPEECHIFY_API_URL") {
            self.speechify.api_url = url;
        }
        if let Some(key) = get("SPEECHIFY_API_KEY") {
            self.speechify.api_key = key;
        }
        if let Some(voice) = get("SPEECHIFY_VOICE_ID") {
            self.speechify.voice_id = voice;
        }
        if let Some(model) = get("SPEECHIFY_MODEL") {
            self.speechify.model = model;
        }
        if let Some(timeout) = parse_var(&get, "SPEECHIFY_TIMEOUT_SECS") {
            self.speechify.timeout_secs = Some(timeout);
        }
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| RelayError::Config(format!("Server config error: {}", e)))?;

        self.server
            .cors
            .validate()
            .map_err(|e| RelayError::Config(format!("CORS config error: {}", e)))?;

        self.upload
            .validate()
            .map_err(|e| RelayError::Config(format!("Upload config error: {}", e)))?;

        self.groq
            .validate()
            .map_err(|e| RelayError::Config(format!("Groq config error: {}", e)))?;

        self.speechify
            .validate()
            .map_err(|e| RelayError::Config(format!("Speechify config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }
}

fn parse_var<T, G>(get: &G, key: &str) -> Option<T>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    let raw = get(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(variable = key, value = %raw, "Ignoring unparsable configuration value");
            None
        }
    }
}
