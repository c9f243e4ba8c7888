//! Waypoint and GPX document generation

pub mod gpx;
pub mod waypoint;

#[cfg(test)]
mod tests;

pub use gpx::{build_document, GpxGenerator};
pub use waypoint::{
    current_utc_timestamp, derive_bounds, now_utc_timestamp, Bounds, Waypoint, WaypointForm,
    DEFAULT_SYMBOL,
};
