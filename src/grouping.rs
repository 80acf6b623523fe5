//! Splitting the numbers of a coordinate into latitude and longitude halves.

use crate::extract::NumericToken;

/// Numbers belonging to one axis, in (degrees, minutes, seconds) order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTokens<'a> {
    tokens: &'a [NumericToken],
}

impl<'a> AxisTokens<'a> {
    pub fn new(tokens: &'a [NumericToken]) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Raw value at `index`, `None` when the component was not written.
    pub fn value(&self, index: usize) -> Option<f64> {
        self.tokens.get(index).map(|t| t.value)
    }

    pub fn texts(&self) -> Vec<&'a str> {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }
}

/// All numbers of one input, already validated.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenSequence {
    tokens: Vec<NumericToken>,
}

impl TokenSequence {
    pub fn new(tokens: Vec<NumericToken>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// First half is latitude, last half is longitude.
    ///
    /// With an odd count the middle number belongs to neither half; the
    /// validator rules that case out before grouping.
    pub fn split(&self) -> (AxisTokens<'_>, AxisTokens<'_>) {
        let half = self.tokens.len() / 2;
        let latitude = &self.tokens[..half];
        let longitude = &self.tokens[self.tokens.len() - half..];
        (AxisTokens::new(latitude), AxisTokens::new(longitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_numbers;

    #[test]
    fn splits_in_half() {
        let seq = TokenSequence::new(extract_numbers("40 26 46 79 58 56"));
        let (lat, lon) = seq.split();
        assert_eq!(lat.texts(), vec!["40", "26", "46"]);
        assert_eq!(lon.texts(), vec!["79", "58", "56"]);
    }

    #[test]
    fn single_pair() {
        let seq = TokenSequence::new(extract_numbers("40.7484, -73.9857"));
        let (lat, lon) = seq.split();
        assert_eq!(lat.value(0), Some(40.7484));
        assert_eq!(lat.value(1), None);
        assert_eq!(lon.value(0), Some(-73.9857));
    }

    #[test]
    fn odd_count_drops_middle() {
        let seq = TokenSequence::new(extract_numbers("1 2 3"));
        let (lat, lon) = seq.split();
        assert_eq!(lat.texts(), vec!["1"]);
        assert_eq!(lon.texts(), vec!["3"]);
    }

    #[test]
    fn empty_sequence_gives_empty_axes() {
        let seq = TokenSequence::new(Vec::new());
        let (lat, lon) = seq.split();
        assert!(lat.is_empty());
        assert!(lon.is_empty());
    }
}
