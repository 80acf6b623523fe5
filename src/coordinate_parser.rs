//! The parse pipeline: validate, extract, group, interpret, convert.

use crate::grouping::{AxisTokens, TokenSequence};
use crate::interpret::{AxisFormat, ResolvedComponents};
use crate::types::{Axis, Coordinate, ParseError};
use crate::validation::validate;
use std::str::FromStr;

/// How one axis of an input was read.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisReport {
    pub axis: Axis,
    pub tokens: Vec<String>,
    pub components: ResolvedComponents,
    /// Whether the axis' negative direction letter (S or W) was present.
    pub direction_negated: bool,
    pub value: f64,
}

impl AxisReport {
    fn build(axis: Axis, tokens: &AxisTokens<'_>, input: &str) -> Self {
        let components = ResolvedComponents::resolve(tokens);
        let direction_negated = contains_letter(input, axis.negative_letter());

        // Direction sign multiplies the numeric sign: "-45 S" is +45.
        let mut value = components.to_decimal();
        if direction_negated {
            value *= -1.0;
        }

        Self {
            axis,
            tokens: tokens.texts().into_iter().map(str::to_string).collect(),
            components,
            direction_negated,
            value,
        }
    }

    pub fn format(&self) -> AxisFormat {
        self.components.format
    }
}

/// Full parse result including per-axis interpretation details.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseReport {
    pub latitude: AxisReport,
    pub longitude: AxisReport,
}

impl ParseReport {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude.value, self.longitude.value)
    }
}

fn contains_letter(input: &str, letter: char) -> bool {
    input.chars().any(|c| c.eq_ignore_ascii_case(&letter))
}

/// Parses `input` and reports how each axis was interpreted.
pub fn parse_detailed(input: &str) -> Result<ParseReport, ParseError> {
    let sequence = TokenSequence::new(validate(input)?);
    let (latitude, longitude) = sequence.split();

    Ok(ParseReport {
        latitude: AxisReport::build(Axis::Latitude, &latitude, input),
        longitude: AxisReport::build(Axis::Longitude, &longitude, input),
    })
}

/// Parses free-form coordinate text into signed decimal degrees.
///
/// ```
/// use coordparse::parse_coordinate;
///
/// let coord = parse_coordinate("40 26.767 N 79 58.933 W").unwrap();
/// assert!((coord.latitude - 40.446117).abs() < 1e-6);
/// assert!((coord.longitude + 79.982217).abs() < 1e-6);
/// ```
pub fn parse_coordinate(input: &str) -> Result<Coordinate, ParseError> {
    parse_detailed(input).map(|report| report.coordinate())
}

impl Coordinate {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parse_coordinate(input)
    }
}

impl FromStr for Coordinate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_coordinate(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn decimal_pair() {
        let coord = parse_coordinate("40.7484, -73.9857").unwrap();
        assert_close(coord.latitude, 40.7484);
        assert_close(coord.longitude, -73.9857);
    }

    #[test]
    fn degrees_decimal_minutes_with_letters() {
        let coord = parse_coordinate("40 26.767 N 79 58.933 W").unwrap();
        assert_close(coord.latitude, 40.446116666);
        assert_close(coord.longitude, -79.982216666);
    }

    #[test]
    fn degrees_minutes_seconds_with_symbols() {
        let coord: Coordinate = "40°44'54.84\" N 73°59'08.52\" W".parse().unwrap();
        assert_close(coord.latitude, 40.748566666);
        assert_close(coord.longitude, -73.9857);
    }

    #[test]
    fn direction_sign_compounds_with_numeric_sign() {
        assert_close(parse_coordinate("-45 S 10 E").unwrap().latitude, 45.0);
        assert_close(parse_coordinate("45 S 10 E").unwrap().latitude, -45.0);
        assert_close(parse_coordinate("-45 10").unwrap().latitude, -45.0);
        assert_close(parse_coordinate("10 -45 W").unwrap().longitude, 45.0);
    }

    #[test]
    fn lowercase_letters_count() {
        let coord = parse_coordinate("12 s 34 w").unwrap();
        assert_close(coord.latitude, -12.0);
        assert_close(coord.longitude, -34.0);
    }

    #[test]
    fn packed_axes() {
        let coord = parse_coordinate("4026.767 N 07958.933 W").unwrap();
        assert_close(coord.latitude, 40.446116666);
        assert_close(coord.longitude, -79.982216666);

        let coord = parse_coordinate("402646 0795856").unwrap();
        assert_close(coord.latitude, 40.446111111);
        assert_close(coord.longitude, 79.982222222);
    }

    #[test]
    fn report_exposes_formats() {
        let report = parse_detailed("4026.767 N, -73.9857").unwrap();
        assert_eq!(report.latitude.format(), AxisFormat::PackedDegreesMinutes);
        assert_eq!(report.longitude.format(), AxisFormat::DecimalDegrees);
        assert_eq!(report.latitude.tokens, vec!["4026.767"]);
        assert!(!report.latitude.direction_negated);
        assert_eq!(report.coordinate(), parse_coordinate("4026.767 N, -73.9857").unwrap());
    }

    #[test]
    fn errors_propagate() {
        assert_eq!(parse_coordinate("N E"), Err(ParseError::NoNumbersFound));
        assert_eq!(
            parse_coordinate("40 26 46 79 58 56 12"),
            Err(ParseError::TooManyNumbers(7))
        );
        assert_eq!(
            parse_coordinate("40 N 79 E S"),
            Err(ParseError::InvalidOrientation)
        );
        assert_eq!(parse_coordinate("1 2 3"), Err(ParseError::UnevenNumberCount(3)));
    }

    #[test]
    fn parsing_is_repeatable() {
        let first = parse_coordinate("4026.767 N 07958.933 W").unwrap();
        let second = parse_coordinate("4026.767 N 07958.933 W").unwrap();
        assert_eq!(first.latitude.to_bits(), second.latitude.to_bits());
        assert_eq!(first.longitude.to_bits(), second.longitude.to_bits());
    }
}
