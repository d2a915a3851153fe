//! Spoken output
//
// Playback is fire-and-forget: a synthesizer never reports completion and a
// failure to speak is logged, not returned.

use super::SpeechSynthesizer;
use crate::config::SpeechConfig;
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::process::{Command, Stdio};

static HTML_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Placeholder in synthesizer command arguments replaced by the speaking rate.
pub const RATE_PLACEHOLDER: &str = "{rate}";

/// Text ready for speech, with markup already removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub rate: f32,
}

impl Utterance {
    pub fn new(text: &str, rate: f32) -> Self {
        Self { text: strip_html(text), rate }
    }
}

/// Remove HTML tags and collapse the whitespace they leave behind.
pub fn strip_html(text: &str) -> String {
    HTML_TAG_RE
        .replace_all(text, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Writes what would be spoken to the log.
#[derive(Debug, Default)]
pub struct LogSynthesizer;

impl SpeechSynthesizer for LogSynthesizer {
    fn speak(&self, utterance: &Utterance) {
        info!("🔊 ({}x) {}", utterance.rate, utterance.text);
    }
}

/// Speaks through an external program such as `espeak` or `say`.
///
/// The text is passed as the last argument; `{rate}` in the configured
/// arguments is replaced by the speaking rate.
#[derive(Debug, Clone)]
pub struct CommandSynthesizer {
    program: String,
    args: Vec<String>,
}

impl CommandSynthesizer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self { program: program.into(), args }
    }

    pub fn command_args(&self, utterance: &Utterance) -> Vec<String> {
        let rate = utterance.rate.to_string();
        self.args
            .iter()
            .map(|arg| arg.replace(RATE_PLACEHOLDER, &rate))
            .chain(std::iter::once(utterance.text.clone()))
            .collect()
    }
}

impl SpeechSynthesizer for CommandSynthesizer {
    fn speak(&self, utterance: &Utterance) {
        let args = self.command_args(utterance);
        debug!("Spawning speech command: {} {:?}", self.program, args);
        let spawned = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            // Reap the child in the background so playback never blocks.
            Ok(mut child) => {
                std::thread::spawn(move || {
                    let _ = child.wait();
                });
            }
            Err(e) => warn!("Failed to run speech command '{}': {}", self.program, e),
        }
    }
}

/// Build the synthesizer described by the configuration, if speech is on.
pub fn synthesizer_from_config(config: &SpeechConfig) -> Option<Box<dyn SpeechSynthesizer>> {
    if !config.enabled {
        return None;
    }
    match &config.command {
        Some(program) if !program.trim().is_empty() => {
            Some(Box::new(CommandSynthesizer::new(program.trim(), config.args.clone())))
        }
        _ => Some(Box::new(LogSynthesizer)),
    }
}
