//! Config command handler for SheWell
//!
//! Handles `config show` and `config path` for the configuration the
//! running session was built from.

use crate::command_processor::{CommandArgs, CommandHandler};
use crate::session::Session;
use crate::speech::SpeechRecognizer;
use anyhow::Result;

#[derive(Debug)]
pub struct ConfigHandler;

impl<R: SpeechRecognizer> CommandHandler<R> for ConfigHandler {
    fn execute(&self, args: &CommandArgs, session: &mut Session<R>) -> Result<()> {
        match args.args.first().map(|s| s.as_str()) {
            Some("show") | None => {
                match session.config() {
                    Some(config) => print!("{}", toml::to_string_pretty(config)?),
                    None => println!("No configuration loaded for this session"),
                }
                Ok(())
            }
            Some("path") => {
                match session.config_path() {
                    Some(path) => println!("{}", path.display()),
                    None => println!("No configuration file for this session"),
                }
                Ok(())
            }
            _ => {
                println!("Unknown config command. Available commands: show, path");
                Ok(())
            }
        }
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "config"
    }
}
