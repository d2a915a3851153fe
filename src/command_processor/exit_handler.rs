//! Exit command handler for SheWell
//!
//! Handles exit and quit commands.

use super::{CommandArgs, CommandHandler};
use crate::session::Session;
use crate::speech::SpeechRecognizer;
use anyhow::Result;

#[derive(Debug)]
pub struct ExitHandler;

impl<R: SpeechRecognizer> CommandHandler<R> for ExitHandler {
    fn execute(&self, _args: &CommandArgs, session: &mut Session<R>) -> Result<()> {
        println!("Exiting SheWell...");
        session.request_exit();
        Ok(())
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "exit" || command == "quit"
    }
}
