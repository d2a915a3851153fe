//! Calculator command handlers
//!
//! Handles setting the last-period date, running the prediction and showing
//! the current state.

use super::{print_state, CommandArgs, CommandHandler};
use crate::cycle::CycleCalculator;
use crate::session::Session;
use crate::speech::SpeechRecognizer;
use anyhow::{anyhow, Result};

/// `calculate [date] [--cycle-length N]`: predict from the given date or the
/// current field.
#[derive(Debug)]
pub struct CalculateHandler;

impl<R: SpeechRecognizer> CommandHandler<R> for CalculateHandler {
    fn execute(&self, args: &CommandArgs, session: &mut Session<R>) -> Result<()> {
        let calculator = match args.flag_value("cycle-length") {
            Some(value) => {
                let days: u32 = value
                    .parse()
                    .map_err(|_| anyhow!("Invalid --cycle-length '{}'", value))?;
                CycleCalculator::new(days)?
            }
            None => *session.calculator(),
        };
        if !args.args.is_empty() {
            session.set_last_period(&args.joined_args());
        }
        let reference = session.reference_date();
        session.calculate_with(calculator, reference);
        print_state(session.state(), args.has_flag("json"))
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "calculate" || command == "calc" || command == "predict"
    }
}

/// `date <value>`: edit the last-period field without calculating.
#[derive(Debug)]
pub struct DateHandler;

impl<R: SpeechRecognizer> CommandHandler<R> for DateHandler {
    fn execute(&self, args: &CommandArgs, session: &mut Session<R>) -> Result<()> {
        if args.args.is_empty() {
            println!("Usage: date <YYYY-MM-DD | phrase>");
            return Ok(());
        }
        let state = session.set_last_period(&args.joined_args());
        println!("Last period date: {}", state.last_period);
        Ok(())
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "date" || command == "set"
    }
}

/// `status`: show the field, voice state and last result.
#[derive(Debug)]
pub struct StatusHandler;

impl<R: SpeechRecognizer> CommandHandler<R> for StatusHandler {
    fn execute(&self, args: &CommandArgs, session: &mut Session<R>) -> Result<()> {
        let state = session.state();
        let field: &str = if state.last_period.is_empty() { "(empty)" } else { &state.last_period };
        println!("Last period date: {}", field);
        println!("Voice input: {:?}", state.voice);
        println!("Cycle length: {} days", session.calculator().cycle_length());
        print_state(state, args.has_flag("json"))
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "status"
    }
}
