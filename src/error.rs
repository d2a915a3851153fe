//! Error types for cycle and voice-date operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CycleError {
    #[error("No date provided")]
    MissingDate,

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Date out of range: {0}")]
    DateOutOfRange(String),

    #[error("Invalid cycle length: {0} days (expected {min}-{max})", min = crate::cycle::MIN_CYCLE_LENGTH, max = crate::cycle::MAX_CYCLE_LENGTH)]
    InvalidCycleLength(u32),

    #[error("Voice input not supported in this environment")]
    CapabilityUnavailable,

    #[error("Error: {0}")]
    CapabilityRuntime(String),
}

pub type Result<T> = std::result::Result<T, CycleError>;
