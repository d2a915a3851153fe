//! Calculator view state and its reducer
//!
//! The calculator screen is described by one immutable [`CalculatorState`]
//! value. Every change goes through [`reduce`], which returns the next state
//! for an [`Action`] and never touches anything else.

use crate::cycle::CyclePrediction;
use crate::error::CycleError;
use crate::speech::{VoiceOutcome, VoiceStatus};

pub const MSG_MISSING_DATE: &str = "Please enter your last period date.";
pub const MSG_INVALID_DATE: &str = "Invalid date format. Please try again.";
pub const MSG_LISTENING: &str = "Listening... Speak now";
pub const MSG_DATE_RECOGNIZED: &str = "Date recognized";
pub const MSG_UNRECOGNIZED: &str = "Could not recognize date. Please try again.";
pub const MSG_VOICE_UNAVAILABLE: &str = "Voice input not supported in this environment";

/// A non-blocking message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Success(String),
    Warning(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Info(m) | Notice::Success(m) | Notice::Warning(m) | Notice::Error(m) => m,
        }
    }

    pub fn level(&self) -> &'static str {
        match self {
            Notice::Info(_) => "info",
            Notice::Success(_) => "success",
            Notice::Warning(_) => "warning",
            Notice::Error(_) => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorState {
    /// Contents of the last-period field, as entered.
    pub last_period: String,
    pub voice: VoiceStatus,
    pub prediction: Option<CyclePrediction>,
    /// Outcome of the last calculation attempt.
    pub notice: Option<Notice>,
    /// Status of the voice input, shown next to the microphone.
    pub voice_notice: Option<Notice>,
}

impl CalculatorState {
    pub fn new(voice: VoiceStatus) -> Self {
        let voice_notice = (voice == VoiceStatus::Unavailable)
            .then(|| Notice::Warning(MSG_VOICE_UNAVAILABLE.to_string()));
        Self { last_period: String::new(), voice, prediction: None, notice: None, voice_notice }
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new(VoiceStatus::Ready)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    EditLastPeriod(String),
    Calculated(CyclePrediction),
    CalculationFailed(CycleError),
    VoiceStarted,
    VoiceStopped,
    VoiceFinished(VoiceOutcome),
    /// Starting a session failed; the payload is the capability error.
    VoiceError(CycleError),
}

pub fn reduce(state: &CalculatorState, action: Action) -> CalculatorState {
    let mut next = state.clone();
    match action {
        Action::EditLastPeriod(value) => {
            next.last_period = value;
            next.prediction = None;
            next.notice = None;
        }
        Action::Calculated(prediction) => {
            next.last_period = prediction.last_period_start.to_iso_string();
            next.prediction = Some(prediction);
            next.notice = None;
        }
        Action::CalculationFailed(error) => {
            next.prediction = None;
            let message = match error {
                CycleError::MissingDate => MSG_MISSING_DATE.to_string(),
                CycleError::InvalidDate(_) | CycleError::DateOutOfRange(_) => {
                    MSG_INVALID_DATE.to_string()
                }
                other => other.to_string(),
            };
            next.notice = Some(Notice::Error(message));
        }
        Action::VoiceStarted if state.voice != VoiceStatus::Unavailable => {
            next.voice = VoiceStatus::Listening;
            next.voice_notice = Some(Notice::Info(MSG_LISTENING.to_string()));
        }
        Action::VoiceStopped if state.voice != VoiceStatus::Unavailable => {
            next.voice = VoiceStatus::Ready;
            next.voice_notice = None;
        }
        // Typed phrases finish like spoken ones even without a recognizer.
        Action::VoiceFinished(outcome) => {
            if state.voice != VoiceStatus::Unavailable {
                next.voice = VoiceStatus::Ready;
            }
            match outcome {
                VoiceOutcome::Recognized { date, .. } => {
                    next.last_period = date.to_iso_string();
                    next.prediction = None;
                    next.notice = None;
                    next.voice_notice = Some(Notice::Success(MSG_DATE_RECOGNIZED.to_string()));
                }
                VoiceOutcome::Unrecognized { .. } => {
                    next.voice_notice = Some(Notice::Error(MSG_UNRECOGNIZED.to_string()));
                }
                VoiceOutcome::Failed(code) => {
                    next.voice_notice = Some(Notice::Error(format!("Error: {}", code)));
                }
                VoiceOutcome::Ended => {
                    if state.voice != VoiceStatus::Unavailable {
                        next.voice_notice = None;
                    }
                }
            }
        }
        Action::VoiceError(CycleError::CapabilityUnavailable) => {
            next.voice = VoiceStatus::Unavailable;
            next.voice_notice = Some(Notice::Warning(MSG_VOICE_UNAVAILABLE.to_string()));
        }
        Action::VoiceError(error) if state.voice != VoiceStatus::Unavailable => {
            next.voice = VoiceStatus::Ready;
            next.voice_notice = Some(Notice::Error(error.to_string()));
        }
        // Voice actions cannot bring back an unavailable capability.
        Action::VoiceStarted | Action::VoiceStopped | Action::VoiceError(_) => {}
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::predict;
    use crate::date::CalendarDate;
    use pretty_assertions::assert_eq;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_edit_clears_stale_prediction() {
        let state = reduce(
            &CalculatorState::default(),
            Action::Calculated(predict(date("2025-01-01")).unwrap()),
        );
        assert!(state.prediction.is_some());

        let edited = reduce(&state, Action::EditLastPeriod("2025-02-01".to_string()));
        assert_eq!(edited.last_period, "2025-02-01");
        assert_eq!(edited.prediction, None);
        // The previous state is untouched.
        assert!(state.prediction.is_some());
    }

    #[test]
    fn test_calculation_failures_become_notices() {
        let state = CalculatorState::default();
        let missing = reduce(&state, Action::CalculationFailed(CycleError::MissingDate));
        assert_eq!(missing.notice, Some(Notice::Error(MSG_MISSING_DATE.to_string())));

        let invalid = reduce(
            &state,
            Action::CalculationFailed(CycleError::InvalidDate("x".to_string())),
        );
        assert_eq!(invalid.notice, Some(Notice::Error(MSG_INVALID_DATE.to_string())));
    }

    #[test]
    fn test_voice_lifecycle() {
        let listening = reduce(&CalculatorState::default(), Action::VoiceStarted);
        assert_eq!(listening.voice, VoiceStatus::Listening);
        assert_eq!(listening.voice_notice, Some(Notice::Info(MSG_LISTENING.to_string())));

        let recognized = reduce(
            &listening,
            Action::VoiceFinished(VoiceOutcome::Recognized {
                transcript: "yesterday".to_string(),
                date: date("2025-03-09"),
            }),
        );
        assert_eq!(recognized.voice, VoiceStatus::Ready);
        assert_eq!(recognized.last_period, "2025-03-09");
        assert_eq!(
            recognized.voice_notice,
            Some(Notice::Success(MSG_DATE_RECOGNIZED.to_string()))
        );

        let failed = reduce(
            &listening,
            Action::VoiceFinished(VoiceOutcome::Failed("not-allowed".to_string())),
        );
        assert_eq!(failed.voice, VoiceStatus::Ready);
        assert_eq!(failed.voice_notice, Some(Notice::Error("Error: not-allowed".to_string())));

        let unrecognized = reduce(
            &listening,
            Action::VoiceFinished(VoiceOutcome::Unrecognized { transcript: "banana".to_string() }),
        );
        assert_eq!(
            unrecognized.voice_notice,
            Some(Notice::Error(MSG_UNRECOGNIZED.to_string()))
        );
        assert_eq!(unrecognized.last_period, "");
    }

    #[test]
    fn test_unavailable_is_permanent() {
        let state = CalculatorState::new(VoiceStatus::Unavailable);
        assert_eq!(
            state.voice_notice,
            Some(Notice::Warning(MSG_VOICE_UNAVAILABLE.to_string()))
        );

        let after = reduce(&state, Action::VoiceStarted);
        assert_eq!(after.voice, VoiceStatus::Unavailable);
        let after = reduce(&after, Action::VoiceFinished(VoiceOutcome::Ended));
        assert_eq!(after.voice, VoiceStatus::Unavailable);
        assert_eq!(after.voice_notice, state.voice_notice);
    }

    #[test]
    fn test_calculation_keeps_voice_status() {
        let recognized = reduce(
            &reduce(&CalculatorState::default(), Action::VoiceStarted),
            Action::VoiceFinished(VoiceOutcome::Recognized {
                transcript: "yesterday".to_string(),
                date: date("2025-03-09"),
            }),
        );
        let calculated =
            reduce(&recognized, Action::Calculated(predict(date("2025-03-09")).unwrap()));
        assert!(calculated.prediction.is_some());
        assert_eq!(calculated.notice, None);
        assert_eq!(
            calculated.voice_notice,
            Some(Notice::Success(MSG_DATE_RECOGNIZED.to_string()))
        );

        let failed = reduce(&recognized, Action::CalculationFailed(CycleError::MissingDate));
        assert_eq!(failed.notice, Some(Notice::Error(MSG_MISSING_DATE.to_string())));
        assert_eq!(failed.voice_notice, recognized.voice_notice);
    }
}
