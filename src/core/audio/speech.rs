//! Text-to-speech functionality

use crate::config::SpeechifyConfig;
use crate::utils::error::{RelayError, Result};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use tracing::{debug, info};

use super::types::{SpeechOptions, SpeechRequest, SpeechResponse};

const LANGUAGE: &str = "en-US";

/// Text-to-speech backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Synthesizer: Send + Sync {
    /// Speak `text`, asking for `format` (e.g. "wav") as output
    async fn synthesize(&self, text: &str, format: &str) -> Result<SpeechResponse>;
}

/// Speechify synthesis client
pub struct SpeechifySynthesizer {
    client: reqwest::Client,
    config: SpeechifyConfig,
}

impl SpeechifySynthesizer {
    pub fn new(config: SpeechifyConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| RelayError::Config(format!("Failed to build Speechify client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Build the request body sent to Speechify
    pub fn build_request(&self, text: &str, format: &str) -> SpeechRequest {
        SpeechRequest {
            audio_format: format.to_string(),
            input: text.to_string(),
            language: LANGUAGE.to_string(),
            model: self.config.model.clone(),
            options: SpeechOptions {
                loudness_normalization: true,
            },
            voice_id: self.config.voice_id.clone(),
        }
    }
}

#[async_trait]
impl Synthesizer for SpeechifySynthesizer {
    async fn synthesize(&self, text: &str, format: &str) -> Result<SpeechResponse> {
        info!(
            "Generating speech: model={}, voice={}, text_len={}",
            self.config.model,
            self.config.voice_id,
            text.len()
        );

        let request = self.build_request(text, format);

        let response = self
            .client
            .post(&self.config.api_url)
            .header(ACCEPT, "*/*")
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| RelayError::synthesis(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(RelayError::synthesis(format!("status {}: {}", status, body)));
        }

        let speech: SpeechResponse = response
            .json()
            .await
            .map_err(|e| RelayError::synthesis(format!("body: {}", e)))?;

        debug!(format = %speech.audio_format, "Speechify synthesis completed");
        Ok(speech)
    }
}
