//! Calculator session
//!
//! Holds the current [`CalculatorState`] together with the collaborators
//! that produce actions for it: the cycle calculator, the date interpreter,
//! the voice input and an optional synthesizer.

use crate::config::Config;
use crate::cycle::{CycleCalculator, CyclePrediction};
use crate::date::CalendarDate;
use crate::parser::{parse_date_input, VoiceDateInterpreter};
use crate::report;
use crate::speech::{
    synthesizer_from_config, SpeechRecognizer, SpeechSynthesizer, Utterance, VoiceInput,
    VoiceOutcome, VoiceStatus,
};
use crate::state::{reduce, Action, CalculatorState};
use anyhow::Result;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

pub struct Session<R> {
    state: CalculatorState,
    calculator: CycleCalculator,
    interpreter: VoiceDateInterpreter,
    voice: VoiceInput<R>,
    synthesizer: Option<Box<dyn SpeechSynthesizer>>,
    speech_rate: f32,
    reference: Option<CalendarDate>,
    config: Option<Config>,
    config_path: Option<PathBuf>,
    exit_requested: bool,
}

impl<R: SpeechRecognizer> Session<R> {
    pub fn new(
        calculator: CycleCalculator,
        interpreter: VoiceDateInterpreter,
        voice: VoiceInput<R>,
        synthesizer: Option<Box<dyn SpeechSynthesizer>>,
        speech_rate: f32,
    ) -> Self {
        Self {
            state: CalculatorState::new(voice.status()),
            calculator,
            interpreter,
            voice,
            synthesizer,
            speech_rate,
            reference: None,
            config: None,
            config_path: None,
            exit_requested: false,
        }
    }

    /// Build a session from configuration. `recognizer` is dropped when voice
    /// input is disabled.
    pub fn from_config(config: &Config, recognizer: Option<R>) -> Result<Self> {
        let recognizer = if config.voice.enabled { recognizer } else { None };
        let mut session = Self::new(
            config.calculator()?,
            config.interpreter(),
            VoiceInput::new(recognizer, config.voice.language.clone()),
            synthesizer_from_config(&config.speech),
            config.speech.rate,
        );
        session.config = Some(config.clone());
        Ok(session)
    }

    /// Record the file the session's configuration was loaded from.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Configuration the session was built from, if any.
    pub fn config(&self) -> Option<&Config> {
        self.config.as_ref()
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Fix the day relative phrases are resolved against. Defaults to today.
    pub fn with_reference_date(mut self, reference: CalendarDate) -> Self {
        self.reference = Some(reference);
        self
    }

    pub fn reference_date(&self) -> CalendarDate {
        self.reference.unwrap_or_else(CalendarDate::today)
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn calculator(&self) -> &CycleCalculator {
        &self.calculator
    }

    pub fn interpreter(&self) -> &VoiceDateInterpreter {
        &self.interpreter
    }

    pub fn voice_mut(&mut self) -> &mut VoiceInput<R> {
        &mut self.voice
    }

    pub fn is_listening(&self) -> bool {
        self.state.voice == VoiceStatus::Listening
    }

    pub fn dispatch(&mut self, action: Action) -> &CalculatorState {
        debug!("Dispatching {:?}", action);
        self.state = reduce(&self.state, action);
        &self.state
    }

    pub fn set_last_period(&mut self, value: &str) -> &CalculatorState {
        self.dispatch(Action::EditLastPeriod(value.trim().to_string()))
    }

    /// Run the calculation for the current field contents.
    pub fn calculate(&mut self, reference: CalendarDate) -> Option<CyclePrediction> {
        self.calculate_with(self.calculator, reference)
    }

    /// Like [`Session::calculate`], with a one-off calculator.
    pub fn calculate_with(
        &mut self,
        calculator: CycleCalculator,
        reference: CalendarDate,
    ) -> Option<CyclePrediction> {
        let outcome = parse_date_input(&self.state.last_period, &self.interpreter, reference)
            .and_then(|date| calculator.predict(date));
        match outcome {
            Ok(prediction) => {
                info!("Next period expected {}", prediction.next_period_start);
                self.dispatch(Action::Calculated(prediction));
                self.speak(&report::spoken_summary(&prediction));
                Some(prediction)
            }
            Err(e) => {
                warn!("Calculation failed: {}", e);
                self.dispatch(Action::CalculationFailed(e));
                None
            }
        }
    }

    /// Start listening, or stop the session in progress.
    pub fn toggle_voice(&mut self) -> VoiceStatus {
        match self.voice.toggle() {
            Ok(VoiceStatus::Listening) => {
                self.dispatch(Action::VoiceStarted);
            }
            Ok(_) => {
                self.dispatch(Action::VoiceStopped);
            }
            Err(e) => {
                self.dispatch(Action::VoiceError(e));
            }
        }
        self.state.voice
    }

    /// Collect the outcome of a finished listening session, if there is one.
    ///
    /// A recognized date fills the field and triggers the calculation.
    pub fn poll_voice(&mut self, reference: CalendarDate) -> Option<VoiceOutcome> {
        let outcome = self.voice.poll(&self.interpreter, reference)?;
        self.dispatch(Action::VoiceFinished(outcome.clone()));
        if matches!(outcome, VoiceOutcome::Recognized { .. }) {
            self.calculate(reference);
        }
        Some(outcome)
    }

    /// Treat typed text as if it had been spoken.
    ///
    /// Works without a recognizer; an active listening session is stopped.
    pub fn hear(&mut self, text: &str, reference: CalendarDate) -> VoiceOutcome {
        if self.is_listening() {
            self.toggle_voice();
        }
        let outcome = match self.interpreter.interpret(text, reference).date() {
            Some(date) => VoiceOutcome::Recognized { transcript: text.to_string(), date },
            None => VoiceOutcome::Unrecognized { transcript: text.to_string() },
        };
        self.dispatch(Action::VoiceFinished(outcome.clone()));
        if matches!(outcome, VoiceOutcome::Recognized { .. }) {
            self.calculate(reference);
        }
        outcome
    }

    pub fn speak(&self, text: &str) {
        if let Some(synthesizer) = &self.synthesizer {
            synthesizer.speak(&Utterance::new(text, self.speech_rate));
        }
    }

    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}
