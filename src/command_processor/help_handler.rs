//! Help command handler for SheWell
//!
//! Handles help-related commands.

use super::{CommandArgs, CommandHandler};
use crate::session::Session;
use crate::speech::SpeechRecognizer;
use anyhow::Result;

#[derive(Debug)]
pub struct HelpHandler;

impl<R: SpeechRecognizer> CommandHandler<R> for HelpHandler {
    fn execute(&self, _args: &CommandArgs, _session: &mut Session<R>) -> Result<()> {
        print_help();
        Ok(())
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "help" || command == "--help" || command == "-h"
    }
}

fn print_help() {
    println!("SheWell - cycle calculator with natural language and voice date input");
    println!();
    println!("COMMANDS:");
    println!("  calculate [date]  Predict the next period (date or phrase, default: current field)");
    println!("                    --cycle-length N uses an N-day cycle for this calculation");
    println!("  date <value>      Set the last period date without calculating");
    println!("  voice             Start listening for a spoken date, or stop listening");
    println!("  say <phrase>      Interpret a phrase as if spoken, then calculate");
    println!("  status            Show the current date field, voice state and result");
    println!("  config [show|path] Show configuration");
    println!("  help              Show this help message");
    println!("  exit              Exit the application");
    println!();
    println!("Add --json to calculate, say or status for JSON output.");
    println!();
    println!("EXAMPLES:");
    println!("  calculate 2025-01-01");
    println!("  say 3 days ago");
    println!("  say march 1st");
}
