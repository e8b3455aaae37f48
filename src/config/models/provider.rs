//! Upstream speech provider configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Groq speech-to-text configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroqConfig {
    /// API key for Groq authentication
    #[serde(default)]
    pub api_key: String,
    /// API base URL
    #[serde(default = "default_groq_api_base")]
    pub api_base: String,
    /// Transcription model
    #[serde(default = "default_groq_model")]
    pub model: String,
    /// Request timeout in seconds, unbounded when unset
    pub timeout_secs: Option<u64>,
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: default_groq_api_base(),
            model: default_groq_model(),
            timeout_secs: None,
        }
    }
}

impl GroqConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Full URL of the transcription endpoint
    pub fn transcriptions_url(&self) -> String {
        format!("{}/audio/transcriptions", self.api_base.trim_end_matches('/'))
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.is_empty() {
            return Err("GROQ_API_KEY is required".to_string());
        }

        if self.model.is_empty() {
            return Err("Groq model cannot be empty".to_string());
        }

        if self.timeout_secs == Some(0) {
            return Err("Timeout must be greater than 0".to_string());
        }

        validate_http_url(&self.api_base, "GROQ_API_BASE")
    }
}

fn default_groq_api_base() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_groq_model() -> String {
    "distil-whisper-large-v3-en".to_string()
}

/// Speechify text-to-speech configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechifyConfig {
    /// Full URL of the speech endpoint
    #[serde(default)]
    pub api_url: String,
    /// API key for Speechify authentication
    #[serde(default)]
    pub api_key: String,
    /// Voice used for synthesis
    #[serde(default = "default_voice_id")]
    pub voice_id: String,
    /// Synthesis model
    #[serde(default = "default_speechify_model")]
    pub model: String,
    /// Request timeout in seconds, unbounded when unset
    pub timeout_secs: Option<u64>,
}

impl Default for SpeechifyConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            api_key: String::new(),
            voice_id: default_voice_id(),
            model: default_speechify_model(),
            timeout_secs: None,
        }
    }
}

impl SpeechifyConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.is_empty() {
            return Err("SPEECHIFY_API_KEY is required".to_string());
        }

        if self.voice_id.is_empty() || self.model.is_empty() {
            return Err("Speechify voice and model cannot be empty".to_string());
        }

        if self.timeout_secs == Some(0) {
            return Err("Timeout must be greater than 0".to_string());
        }

        validate_http_url(&self.api_url, "SPEECHIFY_API_URL")
    }
}

fn default_voice_id() -> String {
    "henry".to_string()
}

fn default_speechify_model() -> String {
    "simba-english".to_string()
}
