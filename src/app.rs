use crate::cli::{Commands, ConfigActions};
use crate::command_processor::{print_state, CommandArgs, CommandProcessor};
use crate::config::{get_config_path, Config};
use crate::cycle::CycleCalculator;
use crate::date::CalendarDate;
use crate::parser::{parse_date_input, ParsedDate};
use crate::report;
use crate::session::Session;
use crate::speech::TerminalRecognizer;
use anyhow::{anyhow, Context, Result};
use rustyline::DefaultEditor;
use std::path::PathBuf;

const PROMPT: &str = "🌸 ";
const LISTENING_PROMPT: &str = "🎤 ";

pub struct Application {
    config: Config,
    config_path: Option<PathBuf>,
    command_processor: CommandProcessor<TerminalRecognizer>,
}

impl Application {
    pub fn new(config: Config, config_path: Option<PathBuf>) -> Self {
        Self { config, config_path, command_processor: CommandProcessor::new() }
    }

    pub fn run(&self, command: Option<Commands>) -> Result<()> {
        match command {
            None => self.run_terminal(),
            Some(Commands::Predict { date, cycle_length, reference, json }) => {
                self.predict(&date.join(" "), cycle_length, reference.as_deref(), json)
            }
            Some(Commands::Interpret { text, reference, json }) => {
                self.interpret(&text.join(" "), reference.as_deref(), json)
            }
            Some(Commands::Config { action }) => self.config_command(action),
        }
    }

    fn predict(
        &self,
        date: &str,
        cycle_length: Option<u32>,
        reference: Option<&str>,
        json: bool,
    ) -> Result<()> {
        let calculator = match cycle_length {
            Some(days) => CycleCalculator::new(days)?,
            None => self.config.calculator()?,
        };
        let reference = resolve_reference(reference)?;
        let last_period = parse_date_input(date, &self.config.interpreter(), reference)
            .with_context(|| format!("Could not read last period date '{}'", date))?;
        let prediction = calculator.predict(last_period)?;

        if json {
            println!("{}", report::prediction_json(&prediction)?);
        } else {
            println!("{}", report::format_prediction(&prediction));
        }
        Ok(())
    }

    fn interpret(&self, text: &str, reference: Option<&str>, json: bool) -> Result<()> {
        let reference = resolve_reference(reference)?;
        let parsed = self.config.interpreter().interpret(text, reference);
        if json {
            println!("{}", report::parsed_date_json(&parsed)?);
            return Ok(());
        }
        match parsed {
            ParsedDate::Recognized(date) => {
                println!("{}", date);
                Ok(())
            }
            ParsedDate::Unrecognized => Err(anyhow!("Could not recognize a date in '{}'", text)),
        }
    }

    /// The file the active configuration came from.
    fn active_config_path(&self) -> Result<PathBuf> {
        match &self.config_path {
            Some(path) => Ok(path.clone()),
            None => get_config_path(),
        }
    }

    fn config_command(&self, action: ConfigActions) -> Result<()> {
        let path = self.active_config_path()?;
        match action {
            ConfigActions::Show => print!("{}", toml::to_string_pretty(&self.config)?),
            ConfigActions::Path => println!("{}", path.display()),
            ConfigActions::Reset => {
                Config::default().save_to(&path)?;
                println!("Configuration reset: {}", path.display());
            }
        }
        Ok(())
    }

    pub fn run_terminal(&self) -> Result<()> {
        log::info!("Starting SheWell Terminal");
        let mut session = Session::from_config(&self.config, Some(TerminalRecognizer::new()))?
            .with_config_path(self.active_config_path()?);
        let mut rl = DefaultEditor::new()?;

        println!("Welcome to SheWell! Type 'help' for commands.");
        println!("Example: calculate 2025-01-01, or say 3 days ago");

        while !session.exit_requested() {
            let prompt = if session.is_listening() { LISTENING_PROMPT } else { PROMPT };
            match rl.readline(prompt) {
                Ok(line) => {
                    if line.trim().is_empty() && !session.is_listening() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line.as_str());
                    if let Err(err) = self.process_input(&line, &mut session) {
                        log::error!("Failed to process command: {:?}", err);
                    }
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }
        Ok(())
    }

    /// Handle one terminal line. While listening, the line is the transcript
    /// unless it is the command that stops listening.
    pub fn process_input(
        &self,
        line: &str,
        session: &mut Session<TerminalRecognizer>,
    ) -> Result<()> {
        if session.is_listening() {
            if is_stop_command(line) {
                session.toggle_voice();
                return print_state(session.state(), false);
            }
            if let Some(recognizer) = session.voice_mut().recognizer_mut() {
                recognizer.deliver(line);
            }
            let reference = session.reference_date();
            if session.poll_voice(reference).is_some() {
                print_state(session.state(), false)?;
            }
            return Ok(());
        }
        self.command_processor.execute_line(line, session)?;
        Ok(())
    }
}

fn is_stop_command(line: &str) -> bool {
    CommandArgs::parse(line)
        .map(|args| matches!(args.command.as_str(), "voice" | "listen" | "mic" | "stop"))
        .unwrap_or(false)
}

fn resolve_reference(reference: Option<&str>) -> Result<CalendarDate> {
    match reference {
        Some(value) => CalendarDate::parse_iso(value)
            .with_context(|| format!("Invalid reference date '{}'", value)),
        None => Ok(CalendarDate::today()),
    }
}
