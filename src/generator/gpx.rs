//! GPX generator API

use std::io::Write;

use log::debug;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::waypoint::Waypoint;
use crate::config::Profile;
use crate::error::Result;

const GPX_NAMESPACE: &str = "http://www.topografix.com/GPX/1/1";
const UUID_NAMESPACE: &str = "http://www.garmin.com/xmlschemas/IdentifierExtension/v1";
const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";
const SCHEMA_LOCATION: &str = "http://www.topografix.com/GPX/1/1 \
    https://www.topografix.com/GPX/1/1/gpx.xsd \
    http://www.garmin.com/xmlschemas/IdentifierExtension/v1 \
    http://www.garmin.com/xmlschemas/IdentifierExtension.xsd";

pub struct GpxGenerator {
    pub profile: Profile,
    /// Year of the copyright notice
    pub year: i32,
}

impl GpxGenerator {
    pub fn new(profile: Profile, year: i32) -> Self {
        Self { profile, year }
    }

    /// Render the single waypoint document
    pub fn generate(&self, waypoint: &Waypoint) -> Result<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut gpx = BytesStart::new("gpx");
        gpx.push_attribute(("creator", self.profile.creator.as_str()));
        gpx.push_attribute(("version", "1.1"));
        gpx.push_attribute(("xmlns", GPX_NAMESPACE));
        gpx.push_attribute(("xmlns:uuidx", UUID_NAMESPACE));
        gpx.push_attribute(("xmlns:xsi", XSI_NAMESPACE));
        gpx.push_attribute(("xsi:schemaLocation", SCHEMA_LOCATION));
        writer.write_event(Event::Start(gpx))?;

        self.write_metadata(&mut writer, waypoint)?;
        write_waypoint(&mut writer, waypoint)?;

        writer.write_event(Event::End(BytesEnd::new("gpx")))?;

        let doc = String::from_utf8(writer.into_inner())?;
        debug!(
            "GPX document for `{}` built, {} bytes",
            waypoint.name(),
            doc.len()
        );

        Ok(doc)
    }

    fn write_metadata<W: Write>(&self, writer: &mut Writer<W>, waypoint: &Waypoint) -> Result<()> {
        let profile = &self.profile;

        writer.write_event(Event::Start(BytesStart::new("metadata")))?;

        writer.write_event(Event::Start(BytesStart::new("author")))?;
        text_element(writer, "name", &profile.author_name)?;
        let mut email = BytesStart::new("email");
        email.push_attribute(("id", profile.email_id.as_str()));
        email.push_attribute(("domain", profile.email_domain.as_str()));
        writer.write_event(Event::Empty(email))?;
        writer.write_event(Event::End(BytesEnd::new("author")))?;

        let mut copyright = BytesStart::new("copyright");
        copyright.push_attribute(("author", profile.copyright_holder.as_str()));
        writer.write_event(Event::Start(copyright))?;
        text_element(writer, "year", &self.year.to_string())?;
        writer.write_event(Event::End(BytesEnd::new("copyright")))?;

        let mut link = BytesStart::new("link");
        link.push_attribute(("href", profile.link_href.as_str()));
        writer.write_event(Event::Start(link))?;
        text_element(writer, "text", &profile.link_text)?;
        writer.write_event(Event::End(BytesEnd::new("link")))?;

        text_element(writer, "time", waypoint.timestamp())?;

        // single point: both corners carry the waypoint's own text
        let (lat, lon) = (waypoint.latitude_text(), waypoint.longitude_text());
        let mut bounds = BytesStart::new("bounds");
        bounds.push_attribute(("minlat", lat));
        bounds.push_attribute(("minlon", lon));
        bounds.push_attribute(("maxlat", lat));
        bounds.push_attribute(("maxlon", lon));
        writer.write_event(Event::Empty(bounds))?;

        writer.write_event(Event::End(BytesEnd::new("metadata")))?;

        Ok(())
    }
}

/// Render with the default profile
pub fn build_document(waypoint: &Waypoint, year: i32) -> Result<String> {
    GpxGenerator::new(Profile::default(), year).generate(waypoint)
}

fn write_waypoint<W: Write>(writer: &mut Writer<W>, waypoint: &Waypoint) -> Result<()> {
    let mut wpt = BytesStart::new("wpt");
    wpt.push_attribute(("lat", waypoint.latitude_text()));
    wpt.push_attribute(("lon", waypoint.longitude_text()));
    writer.write_event(Event::Start(wpt))?;

    text_element(writer, "name", waypoint.name())?;
    writer.write_event(Event::Empty(BytesStart::new("desc")))?;
    text_element(writer, "sym", waypoint.symbol())?;

    writer.write_event(Event::Start(BytesStart::new("extensions")))?;
    let id = waypoint.id().hyphenated().to_string();
    text_element(writer, "uuidx:uuid", &id)?;
    writer.write_event(Event::End(BytesEnd::new("extensions")))?;

    writer.write_event(Event::End(BytesEnd::new("wpt")))?;

    Ok(())
}

/// `<name>text</name>` on a single line
fn text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;

    Ok(())
}
