
use geo::Point;
use quick_xml::escape::unescape;
use quick_xml::events::Event;
use quick_xml::Reader;
use time::macros::datetime;
use uuid::Uuid;

use super::gpx::{build_document, GpxGenerator};
use super::waypoint::{current_utc_timestamp, derive_bounds, Waypoint, WaypointForm};
use crate::config::Profile;
use crate::error::{CoordinateError, Error, Field};

const ID: u128 = 0x936DA01F9ABD4d9d80C702AF85C822A8;

fn reef_marker() -> Waypoint {
    Waypoint::new(
        "2025-01-01T00:00:00.000Z".to_string(),
        Point::new(-79.13536, 33.14711),
        "Reef Marker".to_string(),
        Uuid::from_u128(ID),
    )
}

fn form(time: &str, latitude: &str, longitude: &str, name: &str) -> WaypointForm {
    WaypointForm {
        time: time.to_string(),
        latitude: latitude.to_string(),
        longitude: longitude.to_string(),
        name: name.to_string(),
        symbol: String::new(),
    }
}

#[test]
fn document_layout() -> Result<(), String> {
    let doc = build_document(&reef_marker(), 2025).map_err(|e| e.to_string())?;

    let expected = [
        r#"<?xml version="1.0" encoding="UTF-8"?>"#,
        r#"<gpx creator="Burnt Toast GPX Creator" version="1.1" xmlns="http://www.topografix.com/GPX/1/1" xmlns:uuidx="http://www.garmin.com/xmlschemas/IdentifierExtension/v1" xmlns:xsi="http://www.w3.org/2001/XMLSchema" xsi:schemaLocation="http://www.topografix.com/GPX/1/1 https://www.topografix.com/GPX/1/1/gpx.xsd http://www.garmin.com/xmlschemas/IdentifierExtension/v1 http://www.garmin.com/xmlschemas/IdentifierExtension.xsd">"#,
        r#"  <metadata>"#,
        r#"    <author>"#,
        r#"      <name>Burnt Toast</name>"#,
        r#"      <email id="doug" domain="svburnttoast.com"/>"#,
        r#"    </author>"#,
        r#"    <copyright author="Douglas Carroll">"#,
        r#"      <year>2025</year>"#,
        r#"    </copyright>"#,
        r#"    <link href="https://svburnttoast.com/">"#,
        r#"      <text>SV Burnt Toast</text>"#,
        r#"    </link>"#,
        r#"    <time>2025-01-01T00:00:00.000Z</time>"#,
        r#"    <bounds minlat="33.14711" minlon="-79.13536" maxlat="33.14711" maxlon="-79.13536"/>"#,
        r#"  </metadata>"#,
        r#"  <wpt lat="33.14711" lon="-79.13536">"#,
        r#"    <name>Reef Marker</name>"#,
        r#"    <desc/>"#,
        r#"    <sym>WayPoint</sym>"#,
        r#"    <extensions>"#,
        r#"      <uuidx:uuid>936da01f-9abd-4d9d-80c7-02af85c822a8</uuidx:uuid>"#,
        r#"    </extensions>"#,
        r#"  </wpt>"#,
        r#"</gpx>"#,
    ]
    .join("\n");

    assert_eq!(expected, doc);

    Ok(())
}

#[test]
fn form_to_document() -> Result<(), String> {
    let waypoint = form(
        "2025-01-01T00:00:00.000Z",
        "33.14711",
        "-79.13536",
        "Reef Marker",
    )
    .validate(Uuid::new_v4())
    .map_err(|e| e.to_string())?;

    let doc = build_document(&waypoint, 2025).map_err(|e| e.to_string())?;

    assert!(doc.contains(r#"<wpt lat="33.14711" lon="-79.13536">"#));
    assert!(doc.contains("<name>Reef Marker</name>"));
    assert!(doc.contains("<sym>WayPoint</sym>"));
    assert!(doc.contains(
        r#"<bounds minlat="33.14711" minlon="-79.13536" maxlat="33.14711" maxlon="-79.13536"/>"#
    ));
    assert!(doc.contains(&format!(
        "<uuidx:uuid>{}</uuidx:uuid>",
        waypoint.id().hyphenated()
    )));

    Ok(())
}

#[test]
fn frozen_inputs_are_reproducible() -> Result<(), String> {
    let first = build_document(&reef_marker(), 2025).map_err(|e| e.to_string())?;
    let second = build_document(&reef_marker(), 2025).map_err(|e| e.to_string())?;
    assert_eq!(first, second);

    let other_id = Waypoint::new(
        "2025-01-01T00:00:00.000Z".to_string(),
        Point::new(-79.13536, 33.14711),
        "Reef Marker".to_string(),
        Uuid::new_v4(),
    );
    let third = build_document(&other_id, 2025).map_err(|e| e.to_string())?;

    let differing: Vec<(&str, &str)> = first
        .lines()
        .zip(third.lines())
        .filter(|(a, b)| a != b)
        .collect();
    assert_eq!(1, differing.len());
    assert!(differing[0].0.contains("uuidx:uuid"));

    Ok(())
}

#[test]
fn values_survive_xml_reparse() -> Result<(), String> {
    let name = r#"Tom & "Jerry" <dock> 'B'"#;
    let symbol = "Pin & <Flag>";
    let waypoint = Waypoint::new(
        "2025-06-30T23:59:59.999Z".to_string(),
        Point::new(-79.135278, 33.236389),
        name.to_string(),
        Uuid::from_u128(ID),
    )
    .with_symbol(symbol);

    let mut profile = Profile::default();
    profile.link_href = "https://example.com/?a=1&b=2".to_string();
    let doc = GpxGenerator::new(profile, 2030)
        .generate(&waypoint)
        .map_err(|e| e.to_string())?;

    let mut texts: Vec<(String, String)> = vec![];
    let mut attrs: Vec<(String, String)> = vec![];
    let mut reader = Reader::from_str(&doc);
    loop {
        match reader.read_event().map_err(|e| e.to_string())? {
            Event::Start(e) | Event::Empty(e) => {
                let tag = String::from_utf8_lossy(e.name().as_ref()).to_string();
                for attr in e.attributes() {
                    let attr = attr.map_err(|e| e.to_string())?;
                    let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
                    let raw = std::str::from_utf8(&attr.value).map_err(|e| e.to_string())?;
                    let value = unescape(raw).map_err(|e| e.to_string())?;
                    attrs.push((format!("{}@{}", tag, key), value.to_string()));
                }
                if ["name", "sym", "time", "year", "uuidx:uuid"].contains(&tag.as_str()) {
                    let raw = reader.read_text(e.name()).map_err(|e| e.to_string())?;
                    let value = unescape(&raw).map_err(|e| e.to_string())?;
                    texts.push((tag, value.to_string()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    let text = |tag: &str| -> Vec<String> {
        texts
            .iter()
            .filter(|(t, _)| t == tag)
            .map(|(_, v)| v.clone())
            .collect()
    };
    let attr = |key: &str| -> Option<String> {
        attrs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
    };

    assert_eq!(vec!["Burnt Toast".to_string(), name.to_string()], text("name"));
    assert_eq!(vec![symbol.to_string()], text("sym"));
    assert_eq!(vec!["2025-06-30T23:59:59.999Z".to_string()], text("time"));
    assert_eq!(vec!["2030".to_string()], text("year"));
    assert_eq!(
        vec!["936da01f-9abd-4d9d-80c7-02af85c822a8".to_string()],
        text("uuidx:uuid")
    );

    assert_eq!(Some("33.236389".to_string()), attr("wpt@lat"));
    assert_eq!(Some("-79.135278".to_string()), attr("wpt@lon"));
    assert_eq!(Some("33.236389".to_string()), attr("bounds@maxlat"));
    assert_eq!(Some("-79.135278".to_string()), attr("bounds@minlon"));
    assert_eq!(
        Some("https://example.com/?a=1&b=2".to_string()),
        attr("link@href")
    );
    assert_eq!(Some("1.1".to_string()), attr("gpx@version"));

    Ok(())
}

#[test]
fn bounds_collapse_to_point() {
    for (lat, lon) in [(33.14711, -79.13536), (-90.0, 180.0), (0.0, 0.0), (12.5, -0.25)] {
        assert_eq!((lat, lon, lat, lon), derive_bounds(lat, lon).as_tuple());
    }

    assert_eq!(
        derive_bounds(33.14711, -79.13536),
        reef_marker().bounds()
    );
}

#[test]
fn timestamp_format() -> Result<(), String> {
    assert_eq!(
        "2025-01-01T00:00:00.000Z",
        current_utc_timestamp(datetime!(2025-01-01 0:00 UTC)).map_err(|e| e.to_string())?
    );
    assert_eq!(
        "2021-05-24T11:05:07.123Z",
        current_utc_timestamp(datetime!(2021-05-24 13:05:07.123456 +2))
            .map_err(|e| e.to_string())?
    );

    Ok(())
}

#[test]
fn form_requires_fields_in_order() {
    let missing = |f: WaypointForm| match f.validate(Uuid::new_v4()) {
        Err(Error::MissingRequiredField(field)) => Some(field),
        _ => None,
    };

    assert_eq!(Some(Field::Time), missing(form("", "", "", "")));
    assert_eq!(Some(Field::Time), missing(form("  \t", "1", "1", "n")));
    assert_eq!(Some(Field::Name), missing(form("t", "1", "1", "")));
    assert_eq!(Some(Field::Latitude), missing(form("t", " ", "1", "n")));
    assert_eq!(Some(Field::Longitude), missing(form("t", "1", "", "n")));
    assert_eq!(Some(Field::Name), missing(form("t", "1", "1", "  ")));
    assert_eq!(None, missing(form("t", "1", "1", "n")));
}

#[test]
fn form_reports_coordinate_errors() {
    let result = form("t", "91", "1", "n").validate(Uuid::new_v4());
    assert!(matches!(
        result,
        Err(Error::Coordinate(CoordinateError::OutOfRange { .. }))
    ));

    let result = form("t", "1", "west", "n").validate(Uuid::new_v4());
    assert!(matches!(
        result,
        Err(Error::Coordinate(CoordinateError::UnrecognizedFormat { .. }))
    ));
}

#[test]
fn form_normalizes_converted_coordinates() -> Result<(), String> {
    let mut input = form(
        "2025-01-01T00:00:00.000Z",
        "33°14'11\"N",
        "79°8'7\"W",
        "Reef Marker",
    );
    input.symbol = "Anchor".to_string();

    let (lat, lon) = input.coordinates().map_err(|e| e.to_string())?;
    assert_eq!(Some("33.236389".to_string()), lat.echo());
    assert_eq!(Some("-79.135278".to_string()), lon.echo());

    let waypoint = input
        .validate(Uuid::from_u128(ID))
        .map_err(|e| e.to_string())?;
    assert_eq!(33.236389, waypoint.latitude());
    assert_eq!(-79.135278, waypoint.longitude());
    assert_eq!("Anchor", waypoint.symbol());
    assert_eq!("Reef Marker", waypoint.name());
    assert_eq!("2025-01-01T00:00:00.000Z", waypoint.timestamp());

    let doc = build_document(&waypoint, 2025).map_err(|e| e.to_string())?;
    assert!(doc.contains(r#"<wpt lat="33.236389" lon="-79.135278">"#));
    assert!(doc.contains("<sym>Anchor</sym>"));

    Ok(())
}

#[test]
fn coordinates_written_as_typed() -> Result<(), String> {
    let waypoint = form("2025-01-01T00:00:00.000Z", "33 30", "79°0'36\"W", "Dock")
        .validate(Uuid::from_u128(ID))
        .map_err(|e| e.to_string())?;
    let doc = build_document(&waypoint, 2025).map_err(|e| e.to_string())?;

    assert!(doc.contains(r#"<wpt lat="33.500000" lon="-79.010000">"#));
    assert!(doc.contains(
        r#"<bounds minlat="33.500000" minlon="-79.010000" maxlat="33.500000" maxlon="-79.010000"/>"#
    ));

    let waypoint = form(
        "2025-01-01T00:00:00.000Z",
        " 33.140 ",
        "+79.10",
        "Dock",
    )
    .validate(Uuid::from_u128(ID))
    .map_err(|e| e.to_string())?;
    let doc = build_document(&waypoint, 2025).map_err(|e| e.to_string())?;

    assert!(doc.contains(r#"<wpt lat="33.140" lon="+79.10">"#));
    assert!(doc.contains(
        r#"<bounds minlat="33.140" minlon="+79.10" maxlat="33.140" maxlon="+79.10"/>"#
    ));
    assert_eq!(33.14, waypoint.latitude());

    let waypoint = form(
        "2025-01-01T00:00:00.000Z",
        "45.1234567890123456789",
        "-79",
        "Dock",
    )
    .validate(Uuid::from_u128(ID))
    .map_err(|e| e.to_string())?;
    let doc = build_document(&waypoint, 2025).map_err(|e| e.to_string())?;

    assert!(doc.contains(r#"<wpt lat="45.1234567890123456789" lon="-79">"#));

    Ok(())
}
