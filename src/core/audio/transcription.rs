//! Audio transcription functionality

use crate::config::GroqConfig;
use crate::utils::error::{RelayError, Result};
use async_trait::async_trait;
use reqwest::multipart;
use std::path::Path;
use tracing::{debug, info};

use super::types::{file_extension, mime_for_extension};

/// Language hint sent with every transcription
const LANGUAGE: &str = "en";
/// Response format requested from the API
const RESPONSE_FORMAT: &str = "text";
/// Decoding temperature
const TEMPERATURE: f32 = 0.0;

/// Speech-to-text backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe the audio file at `audio` into plain text
    async fn transcribe(&self, audio: &Path) -> Result<String>;
}

/// Groq Whisper transcription client
pub struct GroqTranscriber {
    client: reqwest::Client,
    config: GroqConfig,
}

impl GroqTranscriber {
    pub fn new(config: GroqConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| RelayError::Config(format!("Failed to build Groq client: {}", e)))?;

        Ok(Self { client, config })
    }

    fn create_multipart_form(&self, file_name: &str, file: Vec<u8>) -> Result<multipart::Form> {
        let extension = file_extension(file_name);
        let file_part = multipart::Part::bytes(file)
            .file_name(file_name.to_string())
            .mime_str(mime_for_extension(&extension))
            .map_err(|e| RelayError::transcription(format!("Invalid MIME type: {}", e)))?;

        Ok(multipart::Form::new()
            .part("file", file_part)
            .text("model", self.config.model.clone())
            .text("response_format", RESPONSE_FORMAT)
            .text("language", LANGUAGE)
            .text("temperature", TEMPERATURE.to_string()))
    }
}

#[async_trait]
impl Transcriber for GroqTranscriber {
    async fn transcribe(&self, audio: &Path) -> Result<String> {
        let file = tokio::fs::read(audio)
            .await
            .map_err(|e| RelayError::transcription(format!("Failed to read audio file: {}", e)))?;

        info!(
            "Transcribing audio: model={}, file_size={}",
            self.config.model,
            file.len()
        );

        let file_name = audio
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio".to_string());
        let form = self.create_multipart_form(&file_name, file)?;

        let url = self.config.transcriptions_url();
        debug!(url = %url, "Sending audio to Groq");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| RelayError::transcription(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(RelayError::transcription(format!(
                "status {}: {}",
                status, body
            )));
        }

        let transcript = response
            .text()
            .await
            .map_err(|e| RelayError::transcription(format!("body: {}", e)))?;

        Ok(transcript.trim().to_string())
    }
}
