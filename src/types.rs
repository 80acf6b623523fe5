use std::fmt;
use thiserror::Error;

/// Reasons a coordinate string is rejected.
///
/// Checks run in a fixed order (letters, orientation, numbers) and the first
/// failing check wins; no partial coordinate is ever produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Coordinate contains invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },
    #[error("Invalid cardinal direction: expected at most one of N/S followed by at most one of E/W")]
    InvalidOrientation,
    #[error("Could not find any coordinate number")]
    NoNumbersFound,
    #[error("Uneven count of latitude/longitude numbers: found {0}")]
    UnevenNumberCount(usize),
    #[error("Too many coordinate numbers: found {0}, expected at most 6")]
    TooManyNumbers(usize),
}

/// Which half of a coordinate a set of numbers belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Direction letter that flips the sign of this axis.
    pub fn negative_letter(self) -> char {
        match self {
            Axis::Latitude => 'S',
            Axis::Longitude => 'W',
        }
    }
}

/// A parsed coordinate in signed decimal degrees.
///
/// No range clamping is applied: packed or scaled inputs can legitimately
/// produce values outside ±90/±180.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_problem() {
        let err = ParseError::InvalidCharacter {
            character: 'x',
            position: 3,
        };
        assert_eq!(
            err.to_string(),
            "Coordinate contains invalid character 'x' at position 3"
        );
        assert!(ParseError::TooManyNumbers(7).to_string().contains('7'));
        assert!(ParseError::UnevenNumberCount(3).to_string().contains('3'));
    }

    #[test]
    fn display_uses_six_decimals() {
        let coord = Coordinate::new(40.7484, -73.9857);
        assert_eq!(coord.to_string(), "40.748400, -73.985700");
    }

    #[test]
    fn axis_letters() {
        assert_eq!(Axis::Latitude.negative_letter(), 'S');
        assert_eq!(Axis::Longitude.negative_letter(), 'W');
    }
}
