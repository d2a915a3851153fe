use once_cell::sync::Lazy;
use regex::Regex;

/// English month names, indexed from January.
pub const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

static FIRST_DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

/// Month number (1-12) for a full English month name, case-insensitive.
pub fn month_number(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|m| *m == lower)
        .map(|idx| idx as u32 + 1)
}

/// The first run of ASCII digits in `input`, parsed as a number.
///
/// Returns `None` when there are no digits or the run does not fit in a `u64`.
pub fn first_number(input: &str) -> Option<u64> {
    FIRST_DIGITS_RE
        .find(input)
        .and_then(|m| m.as_str().parse::<u64>().ok())
}

/// Lower-case and collapse runs of whitespace, the way transcripts are matched.
pub fn normalize_utterance(input: &str) -> String {
    input
        .replace('\u{a0}', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
