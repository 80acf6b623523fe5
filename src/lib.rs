//! Parse free-form geographic coordinate text into signed decimal degrees.
//!
//! Accepts decimal degrees, degrees with decimal minutes, degrees/minutes/
//! seconds and packed forms such as `4026.767`, optionally annotated with
//! N/S/E/W letters:
//!
//! ```
//! use coordparse::Coordinate;
//!
//! let coord: Coordinate = "40°44'54.84\" N 73°59'08.52\" W".parse().unwrap();
//! assert!((coord.longitude + 73.9857).abs() < 1e-9);
//! ```

pub mod convert;
pub mod coordinate_parser;
pub mod extract;
pub mod grouping;
pub mod interpret;
pub mod types;
pub mod validation;

pub use coordinate_parser::{AxisReport, ParseReport, parse_coordinate, parse_detailed};
pub use interpret::{AxisFormat, ResolvedComponents};
pub use types::{Axis, Coordinate, ParseError};
