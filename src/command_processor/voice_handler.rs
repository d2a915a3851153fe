//! Voice command handlers
//!
//! `voice` toggles a listening session; `say <phrase>` feeds a typed phrase
//! through the same interpretation as a transcript.

use super::{print_state, CommandArgs, CommandHandler};
use crate::session::Session;
use crate::speech::{SpeechRecognizer, VoiceStatus};
use anyhow::Result;

#[derive(Debug)]
pub struct VoiceHandler;

impl<R: SpeechRecognizer> CommandHandler<R> for VoiceHandler {
    fn execute(&self, args: &CommandArgs, session: &mut Session<R>) -> Result<()> {
        let status = session.toggle_voice();
        print_state(session.state(), args.has_flag("json"))?;
        if status == VoiceStatus::Listening {
            println!("(type what you would say, e.g. \"3 days ago\"; run 'voice' again to stop)");
        }
        Ok(())
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "voice" || command == "listen" || command == "mic"
    }
}

#[derive(Debug)]
pub struct SayHandler;

impl<R: SpeechRecognizer> CommandHandler<R> for SayHandler {
    fn execute(&self, args: &CommandArgs, session: &mut Session<R>) -> Result<()> {
        if args.args.is_empty() {
            println!("Usage: say <phrase>   e.g. say last week");
            return Ok(());
        }
        let reference = session.reference_date();
        session.hear(&args.joined_args(), reference);
        print_state(session.state(), args.has_flag("json"))
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "say" || command == "when"
    }
}
