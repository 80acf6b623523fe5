//! Deciding what a lone axis number encodes.
//!
//! When an axis is written as a single number it may be plain decimal
//! degrees or one of several packed encodings. Legitimate decimal degrees
//! never exceed 360 in magnitude, so anything larger is unpacked according
//! to the tier its magnitude falls into:
//!
//! | magnitude            | encoding                         |
//! |----------------------|----------------------------------|
//! | `<= 360`             | decimal degrees                  |
//! | `360 < d <= 9090`    | packed `DDDMM[.m]`               |
//! | `9090 < d <= 909090` | packed `DDDMMSS`                 |
//! | `> 909090`           | milliseconds, no degree part     |
//!
//! Each packed form stays below the next tier's threshold, so the tiers do
//! not overlap.

use crate::grouping::AxisTokens;
use std::fmt;

pub const DEGREES_MINUTES_THRESHOLD: f64 = 360.0;
pub const DEGREES_MINUTES_SECONDS_THRESHOLD: f64 = 9090.0;
pub const MILLISECONDS_THRESHOLD: f64 = 909090.0;

/// How the numbers of one axis were read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisFormat {
    /// Two or three numbers, taken at face value as degrees, minutes, seconds.
    Separated,
    DecimalDegrees,
    PackedDegreesMinutes,
    PackedDegreesMinutesSeconds,
    Milliseconds,
}

impl AxisFormat {
    /// Magnitude tiers for a single-number axis. Order matters: largest first.
    pub fn classify(magnitude: f64) -> Self {
        match magnitude {
            d if d > MILLISECONDS_THRESHOLD => AxisFormat::Milliseconds,
            d if d > DEGREES_MINUTES_SECONDS_THRESHOLD => AxisFormat::PackedDegreesMinutesSeconds,
            d if d > DEGREES_MINUTES_THRESHOLD => AxisFormat::PackedDegreesMinutes,
            _ => AxisFormat::DecimalDegrees,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AxisFormat::Separated => "separated",
            AxisFormat::DecimalDegrees => "decimal",
            AxisFormat::PackedDegreesMinutes => "packed-dm",
            AxisFormat::PackedDegreesMinutesSeconds => "packed-dms",
            AxisFormat::Milliseconds => "milliseconds",
        }
    }
}

impl fmt::Display for AxisFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Degrees, minutes, seconds and milliseconds of one axis, all non-negative,
/// with the sign of the written degrees kept separately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedComponents {
    pub sign: f64,
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
    pub milliseconds: f64,
    pub format: AxisFormat,
}

impl ResolvedComponents {
    /// Reads an axis, unpacking a lone number when its magnitude demands it.
    ///
    /// The sign comes from the first number only; `-0` counts as positive.
    /// Missing components are zero.
    pub fn resolve(tokens: &AxisTokens<'_>) -> Self {
        let raw_degrees = tokens.value(0).unwrap_or(0.0);
        let sign = if raw_degrees >= 0.0 { 1.0 } else { -1.0 };

        let components = Self {
            sign,
            degrees: raw_degrees.abs(),
            minutes: tokens.value(1).unwrap_or(0.0),
            seconds: tokens.value(2).unwrap_or(0.0),
            milliseconds: 0.0,
            format: AxisFormat::Separated,
        };

        if tokens.len() > 1 {
            return components;
        }
        components.unpack(AxisFormat::classify(components.degrees))
    }

    fn unpack(self, format: AxisFormat) -> Self {
        let d = self.degrees;
        match format {
            AxisFormat::Milliseconds => Self {
                degrees: 0.0,
                milliseconds: d,
                format,
                ..self
            },
            AxisFormat::PackedDegreesMinutesSeconds => {
                let degrees = (d / 10000.0).floor();
                let minutes = ((d - degrees * 10000.0) / 100.0).floor();
                let seconds = (d - degrees * 10000.0 - minutes * 100.0).floor();
                Self {
                    degrees,
                    minutes,
                    seconds,
                    format,
                    ..self
                }
            }
            AxisFormat::PackedDegreesMinutes => {
                let degrees = (d / 100.0).floor();
                Self {
                    degrees,
                    minutes: d - degrees * 100.0,
                    format,
                    ..self
                }
            }
            AxisFormat::DecimalDegrees | AxisFormat::Separated => Self { format, ..self },
        }
    }
}
