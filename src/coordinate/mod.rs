//! Coordinate parsing API
//!
//! Free-text latitude/longitude fields are accepted as decimal degrees,
//! degrees-minutes-seconds (`33°14'11"N`, `33 14 11`, `33-14-11`) or
//! degrees-minutes (`33°14.5'`, `33 14.5 S`) and normalized to signed
//! decimal degrees.

use std::fmt;

mod parser;

pub use parser::{detect_format, parse_coordinate};

/// Which half of a position a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    pub fn min(self) -> f64 {
        -self.max()
    }

    pub fn max(self) -> f64 {
        match self {
            Axis::Latitude => 90.0,
            Axis::Longitude => 180.0,
        }
    }

    /// Inclusive range check. NaN is never contained.
    pub fn contains(self, degrees: f64) -> bool {
        self.min() <= degrees && degrees <= self.max()
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => f.write_str("latitude"),
            Axis::Longitude => f.write_str("longitude"),
        }
    }
}

/// Notation a raw coordinate was typed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateFormat {
    /// Plain floating point degrees
    Decimal,
    /// Degrees, minutes and seconds
    Dms,
    /// Degrees and decimal minutes
    Dm,
}

/// A range-checked coordinate together with the notation it came from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedCoordinate {
    pub degrees: f64,
    pub format: CoordinateFormat,
}

impl ParsedCoordinate {
    /// True when the input was not already decimal degrees
    pub fn is_converted(&self) -> bool {
        self.format != CoordinateFormat::Decimal
    }

    /// Decimal degrees with 6 places, the form echoed back into the field
    pub fn canonical(&self) -> String {
        format!("{:.6}", self.degrees)
    }

    /// Text the UI should write back into the field, if any
    pub fn echo(&self) -> Option<String> {
        if self.is_converted() {
            Some(self.canonical())
        } else {
            None
        }
    }

    /// Value to store on a waypoint.
    ///
    /// Converted inputs are rounded to the 6 places of their echo, decimal
    /// input is kept as typed.
    pub fn normalized(&self) -> f64 {
        if self.is_converted() {
            (self.degrees * 1e6).round() / 1e6
        } else {
            self.degrees
        }
    }
}
