//! Calendar dates without a time-of-day component.
//
// Wraps `chrono::NaiveDate` so every value is a valid Gregorian date and all
// day arithmetic is checked instead of panicking at the edges of the range.

use crate::error::{CycleError, Result};
use chrono::{Datelike, Days, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ISO-8601 calendar date format used for interchange.
pub const ISO_FORMAT: &str = "%Y-%m-%d";
/// Long-form display, e.g. "January 29, 2025".
pub const LONG_FORMAT: &str = "%B %-d, %Y";
/// Short month-day display, e.g. "Jan 10".
pub const SHORT_FORMAT: &str = "%b %-d";

/// Years that have a plain four-digit `YYYY-MM-DD` form.
pub const MIN_YEAR: i32 = 0;
pub const MAX_YEAR: i32 = 9999;

// Wider than the whole span chrono can represent.
const MAX_SHIFT_DAYS: u64 = 200_000_000;

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from its parts, `None` if the parts do not name a real day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Today's date on the local clock.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Parse a `YYYY-MM-DD` string. Surrounding whitespace is ignored.
    pub fn parse_iso(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CycleError::MissingDate);
        }
        if !ISO_DATE_RE.is_match(trimmed) {
            return Err(CycleError::InvalidDate(format!(
                "'{}' (expected YYYY-MM-DD)",
                trimmed
            )));
        }
        NaiveDate::parse_from_str(trimmed, ISO_FORMAT)
            .map(Self)
            .map_err(|e| CycleError::InvalidDate(format!("'{}': {}", trimmed, e)))
    }

    /// Shift by a signed number of days, rolling over months and years.
    ///
    /// Results outside years 0 through 9999 are out of range, since they
    /// have no `YYYY-MM-DD` form to round-trip through.
    pub fn add_days(self, days: i64) -> Result<Self> {
        let magnitude = days.unsigned_abs();
        if magnitude > MAX_SHIFT_DAYS {
            return Err(CycleError::DateOutOfRange(format!("{} {:+} days", self, days)));
        }
        let shifted = if days >= 0 {
            self.0.checked_add_days(Days::new(magnitude))
        } else {
            self.0.checked_sub_days(Days::new(magnitude))
        };
        shifted
            .filter(|date| (MIN_YEAR..=MAX_YEAR).contains(&date.year()))
            .map(Self)
            .ok_or_else(|| CycleError::DateOutOfRange(format!("{} {:+} days", self, days)))
    }

    pub fn sub_days(self, days: i64) -> Result<Self> {
        match days.checked_neg() {
            Some(negated) => self.add_days(negated),
            None => Err(CycleError::DateOutOfRange(format!("{} - {} days", self, days))),
        }
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(self, other: CalendarDate) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    pub fn to_iso_string(self) -> String {
        self.0.format(ISO_FORMAT).to_string()
    }

    pub fn to_long_string(self) -> String {
        self.0.format(LONG_FORMAT).to_string()
    }

    pub fn to_short_string(self) -> String {
        self.0.format(SHORT_FORMAT).to_string()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_iso_string()
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = CycleError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse_iso(&value)
    }
}

impl FromStr for CalendarDate {
    type Err = CycleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_iso(s)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_FORMAT))
    }
}
