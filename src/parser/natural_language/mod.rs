//! Natural language date interpretation
//!
//! Turns a spoken or typed phrase such as "yesterday", "3 days ago" or
//! "march 15th" into a calendar date relative to a reference day. Matching is
//! case-insensitive and substring-based; the first rule that matches wins:
//!
//! 1. "today"
//! 2. "yesterday"
//! 3. "week ago" / "last week"
//! 4. "<N> day(s) ago"
//! 5. "<month> <day>[st|nd|rd|th]"
//!
//! Text that matches none of them is reported as [`ParsedDate::Unrecognized`];
//! it is never an error.

pub mod utils;

use crate::date::CalendarDate;
use crate::error::Result;
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub use utils::{first_number, month_number, normalize_utterance};

/// Default upper bound for "<N> days ago".
pub const DEFAULT_MAX_DAYS_AGO: u32 = 365;

static DAYS_AGO_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+\s?days?\s+ago").unwrap());

static MONTH_DAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(january|february|march|april|may|june|july|august|september|october|november|december)\s+([0-9]{1,2})(?:st|nd|rd|th)?\b",
    )
    .unwrap()
});

/// Outcome of interpreting an utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "date", rename_all = "lowercase")]
pub enum ParsedDate {
    Recognized(CalendarDate),
    Unrecognized,
}

impl ParsedDate {
    pub fn date(&self) -> Option<CalendarDate> {
        match self {
            ParsedDate::Recognized(date) => Some(*date),
            ParsedDate::Unrecognized => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        matches!(self, ParsedDate::Recognized(_))
    }

    /// ISO-8601 form of the recognized date.
    pub fn to_iso_string(&self) -> Option<String> {
        self.date().map(CalendarDate::to_iso_string)
    }
}

impl From<Option<CalendarDate>> for ParsedDate {
    fn from(date: Option<CalendarDate>) -> Self {
        date.map_or(ParsedDate::Unrecognized, ParsedDate::Recognized)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceDateInterpreter {
    max_days_ago: u32,
}

impl VoiceDateInterpreter {
    /// `max_days_ago` bounds the "<N> days ago" rule; larger N is unrecognized.
    pub fn new(max_days_ago: u32) -> Self {
        Self { max_days_ago }
    }

    pub fn max_days_ago(&self) -> u32 {
        self.max_days_ago
    }

    pub fn interpret(&self, utterance: &str, reference: CalendarDate) -> ParsedDate {
        let text = normalize_utterance(utterance);
        debug!("Interpreting utterance '{}' relative to {}", text, reference);

        if text.contains("today") {
            debug!("Matched 'today'");
            return ParsedDate::Recognized(reference);
        }
        if text.contains("yesterday") {
            debug!("Matched 'yesterday'");
            return reference.sub_days(1).ok().into();
        }
        if text.contains("week ago") || text.contains("last week") {
            debug!("Matched 'week ago'");
            return reference.sub_days(7).ok().into();
        }
        if DAYS_AGO_RE.is_match(&text) {
            return self.days_ago(&text, reference);
        }
        if let Some(caps) = MONTH_DAY_RE.captures(&text) {
            let month = month_number(&caps[1]);
            let day = caps[2].parse::<u32>().ok();
            debug!("Matched month/day: {} {}", &caps[1], &caps[2]);
            return match (month, day) {
                (Some(m), Some(d)) => CalendarDate::from_ymd(reference.year(), m, d).into(),
                _ => ParsedDate::Unrecognized,
            };
        }

        debug!("No date phrase matched '{}'", text);
        ParsedDate::Unrecognized
    }

    /// Interpret against a reference date given as `YYYY-MM-DD`.
    ///
    /// Fails only when the reference itself is missing or invalid.
    pub fn interpret_str(&self, utterance: &str, reference: &str) -> Result<ParsedDate> {
        let reference = CalendarDate::parse_iso(reference)?;
        Ok(self.interpret(utterance, reference))
    }

    fn days_ago(&self, text: &str, reference: CalendarDate) -> ParsedDate {
        // The count comes from the first digit run in the utterance.
        let Some(days) = first_number(text) else {
            return ParsedDate::Unrecognized;
        };
        debug!("Matched '{} days ago'", days);
        if days > u64::from(self.max_days_ago) {
            warn!(
                "Ignoring '{} days ago': more than {} days back",
                days, self.max_days_ago
            );
            return ParsedDate::Unrecognized;
        }
        // Bounded by max_days_ago (u32), so the cast cannot wrap.
        reference.sub_days(days as i64).ok().into()
    }
}

impl Default for VoiceDateInterpreter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DAYS_AGO)
    }
}

/// Interpret with the default bounds.
pub fn interpret(utterance: &str, reference: CalendarDate) -> ParsedDate {
    VoiceDateInterpreter::default().interpret(utterance, reference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CycleError;
    use test_case::test_case;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    #[test_case("today", "2025-03-10" ; "today")]
    #[test_case("It started Today", "2025-03-10" ; "today mid sentence")]
    #[test_case("yesterday", "2025-03-09" ; "yesterday")]
    #[test_case("last week", "2025-03-03" ; "last week")]
    #[test_case("about a week ago", "2025-03-03" ; "week ago")]
    #[test_case("3 days ago", "2025-03-07" ; "days ago")]
    #[test_case("1 day ago", "2025-03-09" ; "one day ago")]
    #[test_case("12days ago", "2025-02-26" ; "no space before days")]
    #[test_case("march 1st", "2025-03-01" ; "month with ordinal")]
    #[test_case("On February 14", "2025-02-14" ; "month without ordinal")]
    #[test_case("december 25th", "2025-12-25" ; "later month keeps reference year")]
    fn test_recognized_phrases(utterance: &str, expected: &str) {
        let reference = date("2025-03-10");
        assert_eq!(
            interpret(utterance, reference),
            ParsedDate::Recognized(date(expected))
        );
    }

    #[test_case("banana" ; "unrelated word")]
    #[test_case("" ; "empty")]
    #[test_case("some days ago" ; "no count")]
    #[test_case("february 30th" ; "impossible day")]
    #[test_case("march 123" ; "three digit day")]
    #[test_case("dec 5" ; "abbreviated month")]
    fn test_unrecognized_phrases(utterance: &str) {
        assert_eq!(interpret(utterance, date("2025-03-10")), ParsedDate::Unrecognized);
    }

    #[test]
    fn test_rule_priority() {
        let reference = date("2025-03-10");
        // "today" wins over everything else in the same utterance.
        assert_eq!(
            interpret("not today but 3 days ago", reference),
            ParsedDate::Recognized(reference)
        );
        assert_eq!(
            interpret("yesterday, march 1st", reference),
            ParsedDate::Recognized(date("2025-03-09"))
        );
        assert_eq!(
            interpret("last week or 2 days ago", reference),
            ParsedDate::Recognized(date("2025-03-03"))
        );
    }

    #[test]
    fn test_days_ago_uses_first_digit_run() {
        let reference = date("2025-03-10");
        assert_eq!(
            interpret("maybe 2 or 5 days ago", reference),
            ParsedDate::Recognized(date("2025-03-08"))
        );
        // Only ASCII digits count.
        assert_eq!(
            interpret("٣ or 4 days ago", reference),
            ParsedDate::Recognized(date("2025-03-06"))
        );
    }

    #[test]
    fn test_days_ago_bound() {
        let reference = date("2025-03-10");
        let interpreter = VoiceDateInterpreter::new(30);
        assert!(interpreter.interpret("30 days ago", reference).is_recognized());
        assert_eq!(
            interpreter.interpret("31 days ago", reference),
            ParsedDate::Unrecognized
        );
        assert_eq!(interpret("9999 days ago", reference), ParsedDate::Unrecognized);
    }

    #[test]
    fn test_interpret_str() {
        let interpreter = VoiceDateInterpreter::default();
        assert_eq!(
            interpreter.interpret_str("yesterday", "2025-03-10").unwrap(),
            ParsedDate::Recognized(date("2025-03-09"))
        );
        assert_eq!(
            interpreter.interpret_str("banana", "2025-03-10").unwrap(),
            ParsedDate::Unrecognized
        );
        assert_eq!(
            interpreter.interpret_str("today", ""),
            Err(CycleError::MissingDate)
        );
        assert!(matches!(
            interpreter.interpret_str("today", "2025-02-30"),
            Err(CycleError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_iso_output_and_serialization() {
        let parsed = interpret("yesterday", date("2025-03-10"));
        assert_eq!(parsed.to_iso_string().as_deref(), Some("2025-03-09"));
        assert_eq!(
            serde_json::to_string(&parsed).unwrap(),
            r#"{"status":"recognized","date":"2025-03-09"}"#
        );
        assert_eq!(
            serde_json::to_string(&ParsedDate::Unrecognized).unwrap(),
            r#"{"status":"unrecognized"}"#
        );
    }
}
