//! Collapsing resolved axis components into decimal degrees.

use crate::interpret::ResolvedComponents;

const MINUTES_PER_DEGREE: f64 = 60.0;
const SECONDS_PER_DEGREE: f64 = 3600.0;
const MILLISECONDS_PER_DEGREE: f64 = 3_600_000.0;

/// Collapses resolved components into signed decimal degrees.
pub fn to_decimal(components: &ResolvedComponents) -> f64 {
    components.sign
        * (components.degrees
            + components.minutes / MINUTES_PER_DEGREE
            + components.seconds / SECONDS_PER_DEGREE
            + components.milliseconds / MILLISECONDS_PER_DEGREE)
}

impl ResolvedComponents {
    pub fn to_decimal(&self) -> f64 {
        to_decimal(self)
    }
}
