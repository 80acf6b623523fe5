//! Numeric token extraction.

use regex::Regex;
use std::sync::LazyLock;

/// Optional minus, digits, optional fraction. ASCII digits only.
static NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?[0-9]+(?:\.[0-9]+)?").expect("number regex should compile"));

/// One number found in the input, with its position preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericToken {
    pub text: String,
    pub value: f64,
    pub offset: usize,
}

impl NumericToken {
    fn new(text: &str, offset: usize) -> Self {
        // The pattern only admits valid float syntax. Values too large for f64 become 0.
        let value = text
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0);
        Self {
            text: text.to_string(),
            value,
            offset,
        }
    }
}

/// Returns every number in `input`, left to right, without overlap.
///
/// Everything that is not part of a number is skipped, so `°`, `'`, commas
/// and direction letters all act as separators. An input without digits
/// yields an empty vector.
pub fn extract_numbers(input: &str) -> Vec<NumericToken> {
    NUMBER_PATTERN
        .find_iter(input)
        .map(|m| NumericToken::new(m.as_str(), m.start()))
        .collect()
}
