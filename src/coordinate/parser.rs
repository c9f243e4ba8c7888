//! Coordinate format detection and conversion

use lazy_static::lazy_static;
use log::debug;
use regex::{Captures, Regex};

use super::{Axis, CoordinateFormat, ParsedCoordinate};
use crate::error::CoordinateError;

lazy_static! {
    // 33°14'11"N, 33 14 11, 33-14-11, 33° 14' 11.5" S
    static ref DMS_REGEX: Regex = Regex::new(
        r#"(?i)^(-?[0-9]+)[°\s\-]+\s*([0-9]+)['\s\-]+\s*([0-9]+(?:\.[0-9]+)?)["\s]*([NSEW])?$"#
    )
    .unwrap();

    // 33°14.5', 33 14.5, 33-14.5 W
    static ref DM_REGEX: Regex = Regex::new(
        r#"(?i)^(-?[0-9]+)[°\s\-]+\s*([0-9]+(?:\.[0-9]+)?)['\s]*([NSEW])?$"#
    )
    .unwrap();
}

/// Detect the notation of a raw coordinate, `None` when empty or unknown
pub fn detect_format(raw: &str) -> Option<CoordinateFormat> {
    let value = raw.trim();

    if value.is_empty() {
        return None;
    }

    if value.parse::<f64>().is_ok() {
        Some(CoordinateFormat::Decimal)
    } else if DMS_REGEX.is_match(value) {
        Some(CoordinateFormat::Dms)
    } else if DM_REGEX.is_match(value) {
        Some(CoordinateFormat::Dm)
    } else {
        None
    }
}

/// Parse a raw coordinate into range-checked decimal degrees
pub fn parse_coordinate(raw: &str, axis: Axis) -> Result<ParsedCoordinate, CoordinateError> {
    let value = raw.trim();

    if value.is_empty() {
        return Err(CoordinateError::EmptyValue { axis });
    }

    let parsed = match value.parse::<f64>() {
        Ok(degrees) => Some(ParsedCoordinate {
            degrees,
            format: CoordinateFormat::Decimal,
        }),
        Err(_) => from_dms(value).or_else(|| from_dm(value)),
    };

    let parsed = parsed.ok_or_else(|| CoordinateError::UnrecognizedFormat {
        axis,
        value: value.to_string(),
    })?;

    if !axis.contains(parsed.degrees) {
        return Err(CoordinateError::OutOfRange {
            axis,
            value: parsed.degrees,
        });
    }

    debug!(
        "{} `{}` read as {:?}: {}",
        axis, value, parsed.format, parsed.degrees
    );

    Ok(parsed)
}

fn from_dms(value: &str) -> Option<ParsedCoordinate> {
    let cap = DMS_REGEX.captures(value)?;

    // sign read from the token text, `-0 14 11` stays negative
    let (degrees, negative) = degrees_token(&cap[1])?;
    let minutes: f64 = cap[2].parse().ok()?;
    let seconds: f64 = cap[3].parse().ok()?;

    let decimal = degrees + minutes / 60.0 + seconds / 3600.0;

    Some(ParsedCoordinate {
        degrees: apply_sign(decimal, negative, direction(&cap, 4)),
        format: CoordinateFormat::Dms,
    })
}

fn from_dm(value: &str) -> Option<ParsedCoordinate> {
    let cap = DM_REGEX.captures(value)?;

    // sign read from the token text, `-0 30` stays negative
    let (degrees, negative) = degrees_token(&cap[1])?;
    let minutes: f64 = cap[2].parse().ok()?;

    let decimal = degrees + minutes / 60.0;

    Some(ParsedCoordinate {
        degrees: apply_sign(decimal, negative, direction(&cap, 3)),
        format: CoordinateFormat::Dm,
    })
}

/// Absolute degrees and whether the token was typed with a minus sign.
/// The sign comes from the text, so `-0 30` is -0.5 rather than 0.5.
fn degrees_token(token: &str) -> Option<(f64, bool)> {
    let degrees: f64 = token.parse().ok()?;

    Some((degrees.abs(), token.starts_with('-')))
}

fn direction<'a>(cap: &Captures<'a>, group: usize) -> Option<&'a str> {
    cap.get(group).map(|m| m.as_str())
}

/// A direction letter wins over the typed sign
fn apply_sign(decimal: f64, negative: bool, direction: Option<&str>) -> f64 {
    let negative = match direction {
        Some(dir) => dir.eq_ignore_ascii_case("S") || dir.eq_ignore_ascii_case("W"),
        None => negative,
    };

    if negative {
        -decimal
    } else {
        decimal
    }
}
