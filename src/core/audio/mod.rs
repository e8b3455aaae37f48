//! Audio API module for speech-to-text and text-to-speech
//!
//! The relay talks to one provider per direction: Groq Whisper for
//! transcription and Speechify for synthesis. Both sit behind traits so the
//! pipeline can be exercised without network access.

mod speech;
mod transcription;
mod types;

pub use speech::{SpeechifySynthesizer, Synthesizer};
pub use transcription::{GroqTranscriber, Transcriber};
pub use types::{
    ALLOWED_EXTENSIONS, SpeechOptions, SpeechRequest, SpeechResponse, content_type_for,
    file_extension, format_hint, is_allowed_extension, mime_for_extension,
};

#[cfg(test)]
pub use speech::MockSynthesizer;
#[cfg(test)]
pub use transcription::MockTranscriber;
