//! Cycle prediction from the start of the last period.
//!
//! All offsets are counted backwards from the predicted next period start,
//! so only the distance from the last period depends on the cycle length:
//!
//! - next period: `last + cycle_length`
//! - ovulation: `next - 14`
//! - fertile window: `next - 19` through `next - 15`

use crate::date::CalendarDate;
use crate::error::{CycleError, Result};
use log::debug;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CYCLE_LENGTH: u32 = 28;
pub const MIN_CYCLE_LENGTH: u32 = 20;
pub const MAX_CYCLE_LENGTH: u32 = 45;

const OVULATION_OFFSET: i64 = 14;
const FERTILE_START_OFFSET: i64 = 19;
const FERTILE_END_OFFSET: i64 = 15;

/// Predicted dates for the cycle following a given last period start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CyclePrediction {
    pub last_period_start: CalendarDate,
    pub next_period_start: CalendarDate,
    pub ovulation_date: CalendarDate,
    pub fertile_window_start: CalendarDate,
    pub fertile_window_end: CalendarDate,
}

impl CyclePrediction {
    /// Fertile window length in days, counted between its bounds.
    pub fn fertile_window_days(&self) -> i64 {
        self.fertile_window_start.days_until(self.fertile_window_end)
    }

    /// Whether `date` falls inside the fertile window, bounds included.
    pub fn is_fertile(&self, date: CalendarDate) -> bool {
        date >= self.fertile_window_start && date <= self.fertile_window_end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleCalculator {
    cycle_length: u32,
}

impl CycleCalculator {
    pub fn new(cycle_length: u32) -> Result<Self> {
        validate_cycle_length(cycle_length)?;
        Ok(Self { cycle_length })
    }

    pub fn cycle_length(&self) -> u32 {
        self.cycle_length
    }

    pub fn predict(&self, last_period_start: CalendarDate) -> Result<CyclePrediction> {
        let next_period_start = last_period_start.add_days(i64::from(self.cycle_length))?;
        let prediction = CyclePrediction {
            last_period_start,
            next_period_start,
            ovulation_date: next_period_start.sub_days(OVULATION_OFFSET)?,
            fertile_window_start: next_period_start.sub_days(FERTILE_START_OFFSET)?,
            fertile_window_end: next_period_start.sub_days(FERTILE_END_OFFSET)?,
        };
        debug!(
            "Predicted cycle from {} ({} days): next {}, ovulation {}, fertile {}..{}",
            last_period_start,
            self.cycle_length,
            prediction.next_period_start,
            prediction.ovulation_date,
            prediction.fertile_window_start,
            prediction.fertile_window_end
        );
        Ok(prediction)
    }

    /// Predict from raw user input such as the contents of a date field.
    pub fn predict_str(&self, last_period_start: &str) -> Result<CyclePrediction> {
        let date = CalendarDate::parse_iso(last_period_start)?;
        self.predict(date)
    }
}

impl Default for CycleCalculator {
    fn default() -> Self {
        Self { cycle_length: DEFAULT_CYCLE_LENGTH }
    }
}

/// Predict with the default 28-day cycle.
pub fn predict(last_period_start: CalendarDate) -> Result<CyclePrediction> {
    CycleCalculator::default().predict(last_period_start)
}

pub fn validate_cycle_length(days: u32) -> Result<()> {
    if !(MIN_CYCLE_LENGTH..=MAX_CYCLE_LENGTH).contains(&days) {
        return Err(CycleError::InvalidCycleLength(days));
    }
    Ok(())
}
