//! gpxcreator - single waypoint GPX 1.1 file creator
//!
//! A form front end collects the raw fields, [`WaypointForm::validate`] turns
//! them into a [`Waypoint`], [`build_document`] renders the GPX text and
//! [`write_text_file`] stores it.

mod config;
mod coordinate;
mod error;
mod generator;
mod output;

pub use config::{load_configs, Configs, Profile};
pub use coordinate::{
    detect_format, parse_coordinate, Axis, CoordinateFormat, ParsedCoordinate,
};
pub use error::{CoordinateError, Error, Field, Result};
pub use generator::{
    build_document, current_utc_timestamp, derive_bounds, now_utc_timestamp, Bounds,
    GpxGenerator, Waypoint, WaypointForm, DEFAULT_SYMBOL,
};
pub use output::{suggest_file_name, write_text_file};
