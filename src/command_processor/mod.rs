use crate::report;
use crate::session::Session;
use crate::speech::SpeechRecognizer;
use crate::state::CalculatorState;
use anyhow::{anyhow, Result};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::fmt::Debug;

pub mod calculate_handler;
pub mod config_handler;
pub mod exit_handler;
pub mod help_handler;
pub mod voice_handler;

/// Flags that never take a value.
pub const BOOLEAN_FLAGS: &[&str] = &["json"];
/// Flags that consume the following token as their value.
pub const VALUE_FLAGS: &[&str] = &["cycle-length"];

/// Command line arguments structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandArgs {
    pub command: String,
    pub args: Vec<String>,
    pub flags: HashMap<String, Option<String>>,
}

impl CommandArgs {
    /// Split a terminal line into command, arguments and `--flags`.
    ///
    /// Quoting and escapes follow shell rules. Only the flags in
    /// [`BOOLEAN_FLAGS`] and [`VALUE_FLAGS`] are accepted.
    pub fn parse(input: &str) -> Result<Self> {
        let normalized_input = input.replace('\u{a0}', " ");
        debug!("Normalized input: {}", normalized_input);
        let tokens = shell_words::split(&normalized_input)
            .map_err(|e| anyhow!("Tokenization error: {}", e))?;
        debug!("Tokenized input: {:?}", tokens);

        let mut tokens_iter = tokens.into_iter();
        let first_token = tokens_iter
            .next()
            .ok_or_else(|| anyhow!("No command provided"))?;
        let command = if first_token.eq_ignore_ascii_case("shewell") {
            tokens_iter
                .next()
                .ok_or_else(|| anyhow!("No command provided after 'shewell'"))?
                .to_lowercase()
        } else {
            first_token.to_lowercase()
        };

        let mut args = Vec::new();
        let mut flags = HashMap::new();
        while let Some(token) = tokens_iter.next() {
            let Some(name) = token.strip_prefix("--") else {
                args.push(token);
                continue;
            };
            if BOOLEAN_FLAGS.contains(&name) {
                flags.insert(name.to_string(), None);
            } else if VALUE_FLAGS.contains(&name) {
                let value = tokens_iter
                    .next()
                    .ok_or_else(|| anyhow!("Flag --{} needs a value", name))?;
                debug!("Flag --{} has value: '{}'", name, value);
                flags.insert(name.to_string(), Some(value));
            } else {
                return Err(anyhow!("Unknown flag --{}", name));
            }
        }
        debug!("Parsed command: {:?}, args: {:?}, flags: {:?}", command, args, flags);
        Ok(CommandArgs { command, args, flags })
    }

    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.contains_key(name)
    }

    pub fn flag_value(&self, name: &str) -> Option<&str> {
        self.flags.get(name).and_then(|value| value.as_deref())
    }

    /// Positional arguments joined back into one phrase.
    pub fn joined_args(&self) -> String {
        self.args.join(" ")
    }
}

pub trait CommandHandler<R: SpeechRecognizer>: Debug {
    fn execute(&self, args: &CommandArgs, session: &mut Session<R>) -> Result<()>;
    fn can_handle(&self, command: &str) -> bool;
}

#[derive(Debug)]
pub struct CommandProcessor<R: SpeechRecognizer> {
    handlers: Vec<Box<dyn CommandHandler<R>>>,
}

impl<R: SpeechRecognizer + 'static> CommandProcessor<R> {
    pub fn new() -> Self {
        let handlers: Vec<Box<dyn CommandHandler<R>>> = vec![
            Box::new(calculate_handler::CalculateHandler),
            Box::new(calculate_handler::DateHandler),
            Box::new(calculate_handler::StatusHandler),
            Box::new(voice_handler::VoiceHandler),
            Box::new(voice_handler::SayHandler),
            Box::new(config_handler::ConfigHandler),
            Box::new(help_handler::HelpHandler),
            Box::new(exit_handler::ExitHandler),
        ];
        Self { handlers }
    }

    /// Run the handler for `args.command`. Returns `false` when none matched.
    pub fn execute(&self, args: &CommandArgs, session: &mut Session<R>) -> Result<bool> {
        debug!("Attempting to execute command: {}", args.command);
        for handler in &self.handlers {
            if handler.can_handle(&args.command) {
                info!("Executing command '{}' with arguments: {:?}", args.command, args.args);
                if let Err(e) = handler.execute(args, session) {
                    log::error!("Failed to execute command '{}': {:?}", args.command, e);
                    return Err(e);
                }
                return Ok(true);
            }
        }
        warn!("Unrecognized command: {}", args.command);
        println!("Unrecognized command. Type 'help' for a list of available commands.");
        Ok(false)
    }

    pub fn execute_line(&self, line: &str, session: &mut Session<R>) -> Result<bool> {
        let args = CommandArgs::parse(line)?;
        self.execute(&args, session)
    }
}

impl<R: SpeechRecognizer + 'static> Default for CommandProcessor<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Print the voice status, the calculation notice and, if present, the
/// prediction for `state`.
pub fn print_state(state: &CalculatorState, json: bool) -> Result<()> {
    if let Some(notice) = &state.voice_notice {
        println!("🎤 [{}] {}", notice.level(), notice.message());
    }
    if let Some(notice) = &state.notice {
        println!("[{}] {}", notice.level(), notice.message());
    }
    if let Some(prediction) = &state.prediction {
        if json {
            println!("{}", report::prediction_json(prediction)?);
        } else {
            println!("{}", report::format_prediction(prediction));
        }
    }
    Ok(())
}
