//! gpxcreator cli - single waypoint GPX file creator

use std::path::PathBuf;

use argopt::{cmd_group, subcmd};
use time::OffsetDateTime;
use uuid::Uuid;

use gpxcreator::{
    load_configs, now_utc_timestamp, parse_coordinate, suggest_file_name,
    write_text_file, Axis, Configs, CoordinateError, Error, GpxGenerator, WaypointForm,
};

/// CLI of gpxcreator - Write a named waypoint into a GPX 1.1 file
#[cmd_group(commands = [create, convert])]
fn main() -> Result<(), String> {}

/// Create a GPX file holding a single waypoint
#[subcmd]
fn create(
    /// Waypoint name
    name: String,
    /// Latitude: decimal degrees, DMS (33°14'11"N) or DM (33°14.5')
    #[opt(allow_hyphen_values = true)]
    latitude: String,
    /// Longitude: decimal degrees, DMS (79°8'7"W) or DM (79°8.1')
    #[opt(allow_hyphen_values = true)]
    longitude: String,
    /// Time, YYYY-MM-DDTHH:MM:SS.mmmZ. Default: now
    #[opt(long)]
    time: Option<String>,
    /// Waypoint symbol. Default: WayPoint
    #[opt(long)]
    symbol: Option<String>,
    /// GPX path file destination. Default: <name>.gpx
    #[opt(short, long)]
    output: Option<String>,
    /// Document profile configuration. Default: .gpxcreator.yaml, ~/.gpxcreator.yaml
    #[opt(long)]
    config: Option<String>,
) -> Result<(), String> {
    init_logger();

    let configs = load(config);

    let time = match time {
        Some(t) => t,
        None => now_utc_timestamp().map_err(|e| e.to_string())?,
    };

    let form = WaypointForm {
        time,
        latitude,
        longitude,
        symbol: symbol.unwrap_or_else(|| configs.default_symbol.clone()),
        name,
    };

    let (lat, lon) = form.coordinates().map_err(describe)?;
    if let Some(echo) = lat.echo() {
        println!("Latitude converted to {}", echo);
    }
    if let Some(echo) = lon.echo() {
        println!("Longitude converted to {}", echo);
    }

    let waypoint = form.validate(Uuid::new_v4()).map_err(describe)?;

    let year = OffsetDateTime::now_utc().year();
    let doc = GpxGenerator::new(configs.profile, year)
        .generate(&waypoint)
        .map_err(|e| format!("Failed on create the GPX document: {}", e))?;

    let destination = output.unwrap_or_else(|| suggest_file_name(waypoint.name()));

    write_text_file(&destination, &doc).map_err(|e| e.to_string())?;
    println!("{}", destination);

    Ok(())
}

/// Convert a coordinate into decimal degrees
#[subcmd]
fn convert(
    /// Coordinate: decimal degrees, DMS (33°14'11"N) or DM (33°14.5')
    #[opt(allow_hyphen_values = true)]
    value: String,
    /// Read the value as a longitude instead of a latitude
    #[opt(long)]
    longitude: bool,
) -> Result<(), String> {
    init_logger();

    let axis = if longitude {
        Axis::Longitude
    } else {
        Axis::Latitude
    };

    let parsed = parse_coordinate(&value, axis).map_err(|e| describe(e.into()))?;
    println!("{}", parsed.canonical());

    Ok(())
}

fn init_logger() {
    let _ = env_logger::try_init();
}

/// Load the current config
fn load(provided: Option<String>) -> Configs {
    let mut options = vec![];

    if let Some(sprovided) = provided {
        options.push(PathBuf::from(sprovided));
    }

    options.push(PathBuf::from(".gpxcreator.yaml"));

    if let Some(home) = dirs::home_dir() {
        options.push(home.join(".gpxcreator.yaml"));
    }

    load_configs(&options)
}

/// Separate messages for wrong notation and for values out of range
fn describe(e: Error) -> String {
    match e {
        Error::Coordinate(CoordinateError::UnrecognizedFormat { axis, value }) => format!(
            "Invalid {} format `{}`. Use decimal degrees (e.g. 33.14711), \
             degrees/minutes/seconds (33°14'11\") or degrees/minutes (33°14.5')",
            axis, value
        ),
        Error::Coordinate(CoordinateError::OutOfRange { axis, value }) => format!(
            "Invalid {} {}: valid range is {} to {} degrees",
            axis,
            value,
            axis.min(),
            axis.max()
        ),
        other => other.to_string(),
    }
}
