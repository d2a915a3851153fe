//! Voice input sessions
//
// `VoiceInput` owns the recognizer and turns its events into outcomes the
// calculator understands. Starting while a session is active stops it
// instead, mirroring a record button that toggles.

use super::{RecognitionEvent, SpeechRecognizer};
use crate::date::CalendarDate;
use crate::error::{CycleError, Result};
use crate::parser::{ParsedDate, VoiceDateInterpreter};
use log::{debug, info, warn};
use serde::Serialize;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceStatus {
    /// No recognizer in this environment. Permanent for the process.
    Unavailable,
    Ready,
    Listening,
}

/// What a finished listening session produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceOutcome {
    Recognized { transcript: String, date: CalendarDate },
    Unrecognized { transcript: String },
    /// The capability reported an error code.
    Failed(String),
    /// The session ended without a transcript.
    Ended,
}

pub struct VoiceInput<R> {
    recognizer: Option<R>,
    language: String,
    listening: bool,
}

impl<R: SpeechRecognizer> VoiceInput<R> {
    pub fn new(recognizer: Option<R>, language: impl Into<String>) -> Self {
        if recognizer.is_none() {
            info!("Voice input not supported in this environment");
        }
        Self { recognizer, language: language.into(), listening: false }
    }

    pub fn status(&self) -> VoiceStatus {
        match (&self.recognizer, self.listening) {
            (None, _) => VoiceStatus::Unavailable,
            (Some(_), true) => VoiceStatus::Listening,
            (Some(_), false) => VoiceStatus::Ready,
        }
    }

    pub fn recognizer_mut(&mut self) -> Option<&mut R> {
        self.recognizer.as_mut()
    }

    /// Start listening, or stop the session already in progress.
    pub fn toggle(&mut self) -> Result<VoiceStatus> {
        let recognizer = self.recognizer.as_mut().ok_or(CycleError::CapabilityUnavailable)?;
        if self.listening {
            debug!("Stopping active listening session");
            recognizer.stop();
            self.listening = false;
            return Ok(VoiceStatus::Ready);
        }
        recognizer.start(&self.language)?;
        info!("Listening for a date ({})", self.language);
        self.listening = true;
        Ok(VoiceStatus::Listening)
    }

    /// Drain recognizer events until one produces an outcome.
    pub fn poll(
        &mut self,
        interpreter: &VoiceDateInterpreter,
        reference: CalendarDate,
    ) -> Option<VoiceOutcome> {
        let recognizer = self.recognizer.as_mut()?;
        while let Some(event) = recognizer.poll_event() {
            match event {
                RecognitionEvent::Transcript(transcript) => {
                    self.listening = false;
                    debug!("Transcript received: '{}'", transcript);
                    return Some(match interpreter.interpret(&transcript, reference) {
                        ParsedDate::Recognized(date) => VoiceOutcome::Recognized { transcript, date },
                        ParsedDate::Unrecognized => VoiceOutcome::Unrecognized { transcript },
                    });
                }
                RecognitionEvent::Error(code) => {
                    self.listening = false;
                    warn!("Speech recognition error: {}", code);
                    return Some(VoiceOutcome::Failed(code));
                }
                RecognitionEvent::End => {
                    if self.listening {
                        self.listening = false;
                        return Some(VoiceOutcome::Ended);
                    }
                }
            }
        }
        None
    }
}

/// Recognizer for the interactive terminal: the line typed while listening
/// stands in for the spoken transcript.
#[derive(Debug, Default)]
pub struct TerminalRecognizer {
    active: bool,
    pending: VecDeque<RecognitionEvent>,
}

impl TerminalRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Hand over the typed line as the session's transcript.
    pub fn deliver(&mut self, line: &str) {
        if !self.active {
            return;
        }
        let transcript = line.trim();
        if transcript.is_empty() {
            self.pending.push_back(RecognitionEvent::Error("no-speech".to_string()));
        } else {
            self.pending.push_back(RecognitionEvent::Transcript(transcript.to_string()));
        }
        self.pending.push_back(RecognitionEvent::End);
        self.active = false;
    }
}

impl SpeechRecognizer for TerminalRecognizer {
    fn start(&mut self, _language: &str) -> Result<()> {
        if self.active {
            return Err(CycleError::CapabilityRuntime("already-started".to_string()));
        }
        self.pending.clear();
        self.active = true;
        Ok(())
    }

    fn stop(&mut self) {
        if self.active {
            self.active = false;
            self.pending.push_back(RecognitionEvent::End);
        }
    }

    fn poll_event(&mut self) -> Option<RecognitionEvent> {
        self.pending.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> CalendarDate {
        "2025-03-10".parse().unwrap()
    }

    fn terminal_input() -> VoiceInput<TerminalRecognizer> {
        VoiceInput::new(Some(TerminalRecognizer::new()), "en-US")
    }

    #[test]
    fn test_unavailable_without_recognizer() {
        let mut voice: VoiceInput<TerminalRecognizer> = VoiceInput::new(None, "en-US");
        assert_eq!(voice.status(), VoiceStatus::Unavailable);
        assert_eq!(voice.toggle(), Err(CycleError::CapabilityUnavailable));
        assert_eq!(voice.status(), VoiceStatus::Unavailable);
        assert_eq!(voice.poll(&VoiceDateInterpreter::default(), reference()), None);
    }

    #[test]
    fn test_toggle_starts_then_stops() {
        let mut voice = terminal_input();
        assert_eq!(voice.toggle(), Ok(VoiceStatus::Listening));
        assert!(voice.recognizer_mut().unwrap().is_active());
        assert_eq!(voice.toggle(), Ok(VoiceStatus::Ready));
        assert!(!voice.recognizer_mut().unwrap().is_active());
        // The End that follows a user stop is not reported again.
        assert_eq!(voice.poll(&VoiceDateInterpreter::default(), reference()), None);
    }

    #[test]
    fn test_transcript_is_interpreted() {
        let mut voice = terminal_input();
        voice.toggle().unwrap();
        voice.recognizer_mut().unwrap().deliver("Yesterday");
        let outcome = voice.poll(&VoiceDateInterpreter::default(), reference());
        assert_eq!(
            outcome,
            Some(VoiceOutcome::Recognized {
                transcript: "Yesterday".to_string(),
                date: "2025-03-09".parse().unwrap(),
            })
        );
        assert_eq!(voice.status(), VoiceStatus::Ready);
        assert_eq!(voice.poll(&VoiceDateInterpreter::default(), reference()), None);
    }

    #[test]
    fn test_unrecognized_transcript() {
        let mut voice = terminal_input();
        voice.toggle().unwrap();
        voice.recognizer_mut().unwrap().deliver("banana");
        assert_eq!(
            voice.poll(&VoiceDateInterpreter::default(), reference()),
            Some(VoiceOutcome::Unrecognized { transcript: "banana".to_string() })
        );
    }

    #[test]
    fn test_empty_line_is_no_speech_error() {
        let mut voice = terminal_input();
        voice.toggle().unwrap();
        voice.recognizer_mut().unwrap().deliver("   ");
        assert_eq!(
            voice.poll(&VoiceDateInterpreter::default(), reference()),
            Some(VoiceOutcome::Failed("no-speech".to_string()))
        );
        assert_eq!(voice.status(), VoiceStatus::Ready);
    }

    #[test]
    fn test_deliver_ignored_when_not_listening() {
        let mut recognizer = TerminalRecognizer::new();
        recognizer.deliver("today");
        assert_eq!(recognizer.poll_event(), None);
    }
}
