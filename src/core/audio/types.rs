//! Audio API type definitions

use crate::utils::error::Result;
use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upload extensions accepted by the relay, compared case-insensitively
pub const ALLOWED_EXTENSIONS: &[&str] = &[".mp3", ".wav", ".ogg"];

/// Extension of a client-supplied file name, including the leading dot.
///
/// Returns an empty string for names without one, including dot-files such
/// as `.wav`.
pub fn file_extension(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

pub fn is_allowed_extension(extension: &str) -> bool {
    let lower = extension.to_lowercase();
    ALLOWED_EXTENSIONS.contains(&lower.as_str())
}

/// Format hint for synthesis: the extension without its dot, lowercased
pub fn format_hint(extension: &str) -> String {
    extension
        .strip_prefix('.')
        .unwrap_or(extension)
        .to_lowercase()
}

/// `Content-Type` for a synthesized audio format
pub fn content_type_for(format: &str) -> String {
    format!("audio/{}", format)
}

/// MIME type sent upstream for an uploaded file
pub fn mime_for_extension(extension: &str) -> &'static str {
    match format_hint(extension).as_str() {
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        _ => "application/octet-stream",
    }
}

/// Text-to-speech request body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpeechRequest {
    /// Requested output format (mp3, wav, ogg)
    pub audio_format: String,
    /// Text to speak
    pub input: String,
    /// BCP-47 language tag
    pub language: String,
    /// Synthesis model
    pub model: String,
    pub options: SpeechOptions,
    /// Voice to use for speech generation
    pub voice_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpeechOptions {
    pub loudness_normalization: bool,
}

/// Text-to-speech response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechResponse {
    /// Base64 encoded audio
    pub audio_data: String,
    /// Format of the encoded audio
    #[serde(default)]
    pub audio_format: String,
}

impl SpeechResponse {
    /// Decode the base64 payload
    pub fn decode_audio(&self) -> Result<Vec<u8>> {
        Ok(general_purpose::STANDARD.decode(self.audio_data.trim())?)
    }
}
