//! SheWell parser module
//!
//! Date input parsing: ISO dates typed into the date field and natural
//! language phrases from voice transcripts.
pub mod natural_language;

pub use natural_language::{interpret, ParsedDate, VoiceDateInterpreter, DEFAULT_MAX_DAYS_AGO};

use crate::date::CalendarDate;
use crate::error::{CycleError, Result};

/// Parse what the user put in the last-period field.
///
/// ISO dates are taken as-is; anything else goes through the phrase rules so
/// "yesterday" typed into the field behaves like the same phrase spoken.
pub fn parse_date_input(
    input: &str,
    interpreter: &VoiceDateInterpreter,
    reference: CalendarDate,
) -> Result<CalendarDate> {
    match CalendarDate::parse_iso(input) {
        Ok(date) => Ok(date),
        Err(CycleError::MissingDate) => Err(CycleError::MissingDate),
        Err(e) => interpreter.interpret(input, reference).date().ok_or(e),
    }
}
