//! Input checks run before any number is interpreted.

use crate::extract::{NumericToken, extract_numbers};
use crate::types::ParseError;
use regex::Regex;
use std::sync::LazyLock;

/// Maximum numbers across both axes: degrees, minutes, seconds per axis.
pub const MAX_NUMBERS: usize = 6;

/// Any ASCII letter except N, E, S, W and D.
static DISALLOWED_LETTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-CF-MO-RT-VX-Za-cf-mo-rt-vx-z]").expect("letter regex should compile")
});

/// At most one N/S, then at most one E/W, anything else around them.
static ORIENTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^NSEWnsew]*[NSns]?[^NSEWnsew]*[EWew]?[^NSEWnsew]*$")
        .expect("orientation regex should compile")
});

/// Rejects letters other than the direction letters and `D`.
///
/// `D` is tolerated because some sources write it as a degree marker; it is
/// never consulted afterwards.
pub fn check_letters(input: &str) -> Result<(), ParseError> {
    match DISALLOWED_LETTER.find(input) {
        Some(m) => Err(ParseError::InvalidCharacter {
            character: m.as_str().chars().next().unwrap_or_default(),
            position: m.start(),
        }),
        None => Ok(()),
    }
}

pub fn check_orientation(input: &str) -> Result<(), ParseError> {
    if ORIENTATION.is_match(input) {
        Ok(())
    } else {
        Err(ParseError::InvalidOrientation)
    }
}

/// Count must be non-zero, at most [`MAX_NUMBERS`] and even, checked in that order.
pub fn check_token_count(count: usize) -> Result<(), ParseError> {
    if count == 0 {
        return Err(ParseError::NoNumbersFound);
    }
    if count > MAX_NUMBERS {
        return Err(ParseError::TooManyNumbers(count));
    }
    if count % 2 != 0 {
        return Err(ParseError::UnevenNumberCount(count));
    }
    Ok(())
}

/// Runs every check and hands back the extracted numbers on success.
pub fn validate(input: &str) -> Result<Vec<NumericToken>, ParseError> {
    check_letters(input)?;
    check_orientation(input)?;

    let tokens = extract_numbers(input);
    check_token_count(tokens.len())?;
    Ok(tokens)
}
