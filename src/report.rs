//! Rendering of predictions and parsed dates for the terminal and for speech.

use crate::cycle::CyclePrediction;
use crate::parser::ParsedDate;
use anyhow::Result;

/// The three result lines shown after a calculation.
pub fn format_prediction(prediction: &CyclePrediction) -> String {
    format!(
        "Next Period: {}\nFertile Window: {}\nOvulation Date: {}",
        prediction.next_period_start.to_long_string(),
        format_fertile_window(prediction),
        prediction.ovulation_date.to_long_string()
    )
}

pub fn format_fertile_window(prediction: &CyclePrediction) -> String {
    format!(
        "{} to {}",
        prediction.fertile_window_start.to_short_string(),
        prediction.fertile_window_end.to_short_string()
    )
}

/// Sentence handed to the synthesizer after a successful calculation.
pub fn spoken_summary(prediction: &CyclePrediction) -> String {
    format!(
        "Your next period is expected around {}",
        prediction.next_period_start.to_long_string()
    )
}

pub fn prediction_json(prediction: &CyclePrediction) -> Result<String> {
    Ok(serde_json::to_string_pretty(prediction)?)
}

pub fn parsed_date_json(parsed: &ParsedDate) -> Result<String> {
    Ok(serde_json::to_string_pretty(parsed)?)
}
