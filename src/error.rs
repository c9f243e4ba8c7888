//! Error types

use std::fmt;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

use crate::coordinate::Axis;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure to turn a raw coordinate field into decimal degrees
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    #[error("{axis} is empty")]
    EmptyValue { axis: Axis },

    #[error("{axis} `{value}` is not in decimal, DMS or DM format")]
    UnrecognizedFormat { axis: Axis, value: String },

    #[error("{axis} {value} is out of range ({}..={})", .axis.min(), .axis.max())]
    OutOfRange { axis: Axis, value: f64 },
}

impl CoordinateError {
    pub fn axis(&self) -> Axis {
        match self {
            CoordinateError::EmptyValue { axis }
            | CoordinateError::UnrecognizedFormat { axis, .. }
            | CoordinateError::OutOfRange { axis, .. } => *axis,
        }
    }
}

/// Form fields the caller must fill before a waypoint can be built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Time,
    Latitude,
    Longitude,
    Name,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Time => "time",
            Field::Latitude => "latitude",
            Field::Longitude => "longitude",
            Field::Name => "name",
        };
        f.write_str(label)
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Coordinate(#[from] CoordinateError),

    #[error("{0} is required")]
    MissingRequiredField(Field),

    #[error("Failed on write `{}`: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("XML serialization failed: {0}")]
    Serialize(#[from] std::io::Error),

    #[error("Serialized document is not UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),

    #[error("Failed on format the timestamp: {0}")]
    TimeFormat(#[from] time::error::Format),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),
}
