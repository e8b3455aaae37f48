//! E2E tests for the transcription and synthesis clients
//!
//! These tests make real API calls and require API keys.
//! Run with: cargo test -- --ignored

#[cfg(test)]
mod tests {
    use crate::skip_without_env;
    use audio_relay::Config;
    use audio_relay::core::audio::{SpeechifySynthesizer, Synthesizer};

    fn live_config() -> Config {
        let mut config = Config::default();
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Requires SPEECHIFY_API_KEY and SPEECHIFY_API_URL
    #[tokio::test]
    #[ignore]
    async fn test_speechify_synthesis() {
        skip_without_env!("SPEECHIFY_API_KEY");
        skip_without_env!("SPEECHIFY_API_URL");

        let config = live_config();
        let synthesizer = SpeechifySynthesizer::new(config.speechify).unwrap();

        let speech = synthesizer
            .synthesize("Hello from the relay test suite.", "wav")
            .await
            .unwrap();
        let audio = speech.decode_audio().unwrap();

        assert!(!audio.is_empty());
        println!("Synthesized {} bytes of {}", audio.len(), speech.audio_format);
    }

    /// Requires all provider variables; synthesizes a clip and transcribes it back
    #[tokio::test]
    #[ignore]
    async fn test_synthesize_then_transcribe() {
        use audio_relay::core::audio::{GroqTranscriber, Transcriber};

        skip_without_env!("GROQ_API_KEY");
        skip_without_env!("SPEECHIFY_API_KEY");
        skip_without_env!("SPEECHIFY_API_URL");

        let config = live_config();
        let synthesizer = SpeechifySynthesizer::new(config.speechify.clone()).unwrap();
        let transcriber = GroqTranscriber::new(config.groq.clone()).unwrap();

        let speech = synthesizer
            .synthesize("The quick brown fox.", "mp3")
            .await
            .unwrap();

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("audio-e2e.mp3");
        std::fs::write(&path, speech.decode_audio().unwrap()).unwrap();

        let transcript = transcriber.transcribe(&path).await.unwrap();
        println!("Transcript: {}", transcript);
        assert!(transcript.to_lowercase().contains("fox"));
    }
}
