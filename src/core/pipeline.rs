//! Transcribe-then-resynthesize pipeline
//!
//! Each step returns a `Result`; the first failure short-circuits and every
//! `TempFile` owned so far is dropped, which removes it from disk.

use crate::config::Config;
use crate::core::audio::{
    GroqTranscriber, SpeechifySynthesizer, Synthesizer, Transcriber, content_type_for,
    format_hint,
};
use crate::storage::{TempFile, UploadStore};
use crate::utils::error::{RelayError, Result};
use actix_web::http::header::HeaderValue;
use std::sync::Arc;
use tracing::{debug, info};

/// Result of a successful run, ready to be streamed
#[derive(Debug)]
pub struct RelayOutput {
    /// Synthesized audio on disk
    pub audio: TempFile,
    /// The original upload, kept alive until the response is done
    pub upload: TempFile,
    /// `Content-Type` of `audio`
    pub content_type: String,
}

/// Upload → transcription → synthesis → file write
pub struct RelayPipeline {
    store: Arc<UploadStore>,
    transcriber: Arc<dyn Transcriber>,
    synthesizer: Arc<dyn Synthesizer>,
}

impl RelayPipeline {
    pub fn new(
        store: Arc<UploadStore>,
        transcriber: Arc<dyn Transcriber>,
        synthesizer: Arc<dyn Synthesizer>,
    ) -> Self {
        Self {
            store,
            transcriber,
            synthesizer,
        }
    }

    /// Build a pipeline backed by the Groq and Speechify clients
    pub fn from_config(config: &Config, store: Arc<UploadStore>) -> Result<Self> {
        let transcriber = GroqTranscriber::new(config.groq.clone())?;
        let synthesizer = SpeechifySynthesizer::new(config.speechify.clone())?;

        Ok(Self::new(store, Arc::new(transcriber), Arc::new(synthesizer)))
    }

    pub fn store(&self) -> &UploadStore {
        &self.store
    }

    /// Run every step for one stored upload
    #[tracing::instrument(skip_all, fields(upload = %upload.file_name()))]
    pub async fn run(&self, upload: TempFile) -> Result<RelayOutput> {
        let transcript = self.transcriber.transcribe(upload.path()).await?;
        info!(chars = transcript.len(), "Transcription completed");
        debug!(transcript = %transcript, "Transcription");

        let format = format_hint(&upload.extension());
        let speech = self.synthesizer.synthesize(&transcript, &format).await?;

        let audio_bytes = speech.decode_audio()?;
        let audio_format = if speech.audio_format.is_empty() {
            format
        } else {
            speech.audio_format
        };
        let content_type = content_type_for(&audio_format);
        if HeaderValue::from_str(&content_type).is_err() {
            return Err(RelayError::synthesis(format!(
                "unusable audio format {:?}",
                audio_format
            )));
        }

        let file_name = UploadStore::synthesized_file_name(upload.file_name());
        let audio = self.store.write(&file_name, &audio_bytes).await?;

        info!(
            bytes = audio_bytes.len(),
            format = %audio_format,
            "Synthesized audio stored"
        );

        Ok(RelayOutput {
            audio,
            upload,
            content_type,
        })
    }
}
