//! Waypoint definition

use geo::{Point, Rect};
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};
use uuid::Uuid;

use crate::coordinate::{parse_coordinate, Axis, ParsedCoordinate};
use crate::error::{Field, Result};
use crate::Error;

/// Symbol used when the form leaves it empty
pub const DEFAULT_SYMBOL: &str = "WayPoint";

/// Format an instant as `YYYY-MM-DDTHH:MM:SS.mmmZ` in UTC
pub fn current_utc_timestamp(now: OffsetDateTime) -> Result<String> {
    let format = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    );

    Ok(now.to_offset(UtcOffset::UTC).format(format)?)
}

/// [`current_utc_timestamp`] for the system clock
pub fn now_utc_timestamp() -> Result<String> {
    current_utc_timestamp(OffsetDateTime::now_utc())
}

/// GPX `bounds` of a document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub minlat: f64,
    pub minlon: f64,
    pub maxlat: f64,
    pub maxlon: f64,
}

impl Bounds {
    /// `(minlat, minlon, maxlat, maxlon)`
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.minlat, self.minlon, self.maxlat, self.maxlon)
    }
}

impl From<Rect<f64>> for Bounds {
    fn from(rect: Rect<f64>) -> Self {
        Self {
            minlat: rect.min().y,
            minlon: rect.min().x,
            maxlat: rect.max().y,
            maxlon: rect.max().x,
        }
    }
}

/// Bounding box of a single point: both corners are the point itself
pub fn derive_bounds(lat: f64, lon: f64) -> Bounds {
    let point = Point::new(lon, lat);

    Rect::new(point, point).into()
}

/// A single named point, ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    timestamp: String,
    coordinates: Point,
    /// Coordinate text as written into the document
    latitude_text: String,
    longitude_text: String,
    name: String,
    symbol: String,
    id: Uuid,
}

impl Waypoint {
    pub fn new(timestamp: String, coordinates: Point, name: String, id: Uuid) -> Self {
        Self {
            timestamp,
            latitude_text: coordinates.y().to_string(),
            longitude_text: coordinates.x().to_string(),
            coordinates,
            name,
            symbol: DEFAULT_SYMBOL.to_string(),
            id,
        }
    }

    /// Replace the default symbol. Blank symbols keep the default.
    pub fn with_symbol(mut self, symbol: &str) -> Self {
        if !symbol.trim().is_empty() {
            self.symbol = symbol.to_string();
        }

        self
    }

    /// Keep the caller's coordinate text for the document
    pub fn with_coordinate_text(mut self, latitude: &str, longitude: &str) -> Self {
        self.latitude_text = latitude.to_string();
        self.longitude_text = longitude.to_string();

        self
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn coordinates(&self) -> Point {
        self.coordinates
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates.y()
    }

    pub fn longitude(&self) -> f64 {
        self.coordinates.x()
    }

    pub fn latitude_text(&self) -> &str {
        &self.latitude_text
    }

    pub fn longitude_text(&self) -> &str {
        &self.longitude_text
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn bounds(&self) -> Bounds {
        derive_bounds(self.latitude(), self.longitude())
    }
}

/// Raw text fields as collected by a form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaypointForm {
    pub time: String,
    pub latitude: String,
    pub longitude: String,
    pub name: String,
    pub symbol: String,
}

impl WaypointForm {
    /// Check the required fields and parse both coordinates
    pub fn coordinates(&self) -> Result<(ParsedCoordinate, ParsedCoordinate)> {
        required(&self.time, Field::Time)?;
        required(&self.latitude, Field::Latitude)?;
        required(&self.longitude, Field::Longitude)?;
        required(&self.name, Field::Name)?;

        let lat = parse_coordinate(&self.latitude, Axis::Latitude)?;
        let lon = parse_coordinate(&self.longitude, Axis::Longitude)?;

        Ok((lat, lon))
    }

    /// Build the waypoint with a freshly minted id
    pub fn validate(&self, id: Uuid) -> Result<Waypoint> {
        let (lat, lon) = self.coordinates()?;

        let waypoint = Waypoint::new(
            self.time.clone(),
            Point::new(lon.normalized(), lat.normalized()),
            self.name.clone(),
            id,
        )
        .with_coordinate_text(
            &written_text(&lat, &self.latitude),
            &written_text(&lon, &self.longitude),
        )
        .with_symbol(&self.symbol);

        Ok(waypoint)
    }
}

/// Echo for converted input, the trimmed typed text otherwise
fn written_text(parsed: &ParsedCoordinate, raw: &str) -> String {
    parsed.echo().unwrap_or_else(|| raw.trim().to_string())
}

fn required(value: &str, field: Field) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::MissingRequiredField(field));
    }

    Ok(())
}
