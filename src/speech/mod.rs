//! Speech capabilities used around the date interpreter
//!
//! Recognition and synthesis are external capabilities. They sit behind the
//! [`SpeechRecognizer`] and [`SpeechSynthesizer`] traits so the interpreter
//! and the calculator stay pure and can be driven without a microphone or a
//! speaker.
//!
//! - [`recognition`]: one-shot listening sessions with toggle semantics
//! - [`synthesis`]: fire-and-forget spoken output

pub mod recognition;
pub mod synthesis;

use crate::error::Result;

pub use recognition::{TerminalRecognizer, VoiceInput, VoiceOutcome, VoiceStatus};
pub use synthesis::{
    strip_html, synthesizer_from_config, CommandSynthesizer, LogSynthesizer, Utterance,
};

/// Language tag handed to the recognizer.
pub const DEFAULT_LANGUAGE: &str = "en-US";
/// Default speaking rate relative to normal speed.
pub const DEFAULT_SPEECH_RATE: f32 = 0.9;

/// Events a recognizer delivers for a listening session.
///
/// A session produces at most one `Transcript` or one `Error`, followed by
/// `End`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionEvent {
    Transcript(String),
    /// Error code reported by the capability, e.g. "not-allowed" or "no-speech".
    Error(String),
    End,
}

/// Speech-to-text capability.
pub trait SpeechRecognizer {
    /// Begin a one-shot listening session.
    fn start(&mut self, language: &str) -> Result<()>;

    /// Stop the active session. The recognizer still reports `End`.
    fn stop(&mut self);

    /// Next pending event, if any.
    fn poll_event(&mut self) -> Option<RecognitionEvent>;
}

/// Text-to-speech capability. Playback is never awaited.
pub trait SpeechSynthesizer {
    fn speak(&self, utterance: &Utterance);
}
