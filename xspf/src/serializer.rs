//! Canonical XSPF output.
//!
//! Every model type writes itself through [`WriteXml`]. Element order is
//! fixed, absent scalars produce nothing and empty sequences produce no
//! wrapper, so two structurally equal playlists always serialize to the same
//! bytes.

use std::fmt;
use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use tracing::debug;

use crate::error::SerializeError;
use crate::model::{
    Attribution, Extension, ExtensionElement, ExtensionNode, Link, Meta, Playlist, Track,
    XSPF_NAMESPACE,
};

type XmlResult = Result<(), quick_xml::Error>;

/// Something that can write itself as one or more XML elements.
pub(crate) trait WriteXml {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> XmlResult;
}

/// Write `playlist` as a complete document, declaration included.
pub(crate) fn write_document<W: Write>(playlist: &Playlist, inner: W) -> Result<W, SerializeError> {
    let mut writer = Writer::new_with_indent(inner, b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    playlist.write_xml(&mut writer)?;
    writer.write_indent()?;
    Ok(writer.into_inner())
}

impl WriteXml for Playlist {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> XmlResult {
        let version = self.version().to_string();
        let root = BytesStart::new("playlist")
            .with_attributes([("version", version.as_str()), ("xmlns", XSPF_NAMESPACE)]);
        writer.write_event(Event::Start(root))?;

        optional(writer, "annotation", self.annotation())?;
        if !self.attributions().is_empty() {
            wrapped(writer, "attribution", self.attributions())?;
        }
        optional(writer, "creator", self.creator())?;
        optional(writer, "date", self.date())?;
        all(writer, self.extensions())?;
        optional(writer, "identifier", self.identifier())?;
        optional(writer, "image", self.image())?;
        optional(writer, "info", self.info())?;
        optional(writer, "license", self.license())?;
        all(writer, self.links())?;
        all(writer, self.meta())?;
        optional(writer, "location", self.location())?;
        optional(writer, "title", self.title())?;
        if !self.tracks().is_empty() {
            wrapped(writer, "trackList", self.tracks())?;
        }

        writer.write_event(Event::End(BytesEnd::new("playlist")))?;
        debug!(tracks = self.tracks().len(), "serialized playlist");
        Ok(())
    }
}

impl WriteXml for Track {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> XmlResult {
        writer.write_event(Event::Start(BytesStart::new("track")))?;

        for location in self.locations() {
            text_element(writer, "location", location.as_str())?;
        }
        for identifier in self.identifiers() {
            text_element(writer, "identifier", identifier.as_str())?;
        }
        optional(writer, "title", self.title())?;
        optional(writer, "creator", self.creator())?;
        optional(writer, "annotation", self.annotation())?;
        optional(writer, "info", self.info())?;
        optional(writer, "image", self.image())?;
        optional(writer, "album", self.album())?;
        if let Some(num) = self.track_num() {
            text_element(writer, "trackNum", &num.to_string())?;
        }
        if let Some(millis) = self.duration() {
            text_element(writer, "duration", &millis.to_string())?;
        }
        all(writer, self.links())?;
        all(writer, self.meta())?;
        all(writer, self.extensions())?;

        writer.write_event(Event::End(BytesEnd::new("track")))?;
        Ok(())
    }
}

impl WriteXml for Attribution {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> XmlResult {
        text_element(writer, self.tag(), self.as_str())
    }
}

impl WriteXml for Link {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> XmlResult {
        let start = BytesStart::new("link").with_attributes([("rel", self.rel())]);
        body(writer, start, self.value())
    }
}

impl WriteXml for Meta {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> XmlResult {
        let start = BytesStart::new("meta").with_attributes([("rel", self.rel())]);
        body(writer, start, self.value())
    }
}

impl WriteXml for Extension {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> XmlResult {
        let start =
            BytesStart::new("extension").with_attributes([("application", self.application())]);
        if self.content().is_empty() {
            return writer.write_event(Event::Empty(start));
        }
        writer.write_event(Event::Start(start))?;
        all(writer, self.content())?;
        writer.write_event(Event::End(BytesEnd::new("extension")))
    }
}

impl WriteXml for ExtensionNode {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> XmlResult {
        match self {
            ExtensionNode::Element(element) => element.write_xml(writer),
            ExtensionNode::Text(text) => writer.write_event(Event::Text(BytesText::new(text))),
        }
    }
}

impl WriteXml for ExtensionElement {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> XmlResult {
        let start = BytesStart::new(self.name()).with_attributes(
            self.attributes()
                .iter()
                .map(|(key, value)| (key.as_str(), value.as_str())),
        );
        if self.children().is_empty() {
            return writer.write_event(Event::Empty(start));
        }
        writer.write_event(Event::Start(start))?;
        all(writer, self.children())?;
        writer.write_event(Event::End(BytesEnd::new(self.name())))
    }
}

fn all<W: Write, T: WriteXml>(writer: &mut Writer<W>, items: &[T]) -> XmlResult {
    items.iter().try_for_each(|item| item.write_xml(writer))
}

fn wrapped<W: Write, T: WriteXml>(writer: &mut Writer<W>, tag: &str, items: &[T]) -> XmlResult {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    all(writer, items)?;
    writer.write_event(Event::End(BytesEnd::new(tag)))
}

/// Empty scalars are written like absent ones.
fn optional<W: Write>(writer: &mut Writer<W>, tag: &str, value: Option<&str>) -> XmlResult {
    match value {
        Some(value) if !value.is_empty() => text_element(writer, tag, value),
        _ => Ok(()),
    }
}

fn text_element<W: Write>(writer: &mut Writer<W>, tag: &str, value: &str) -> XmlResult {
    body(writer, BytesStart::new(tag), value)
}

/// `<tag>value</tag>`, or `<tag/>` for an empty value.
fn body<W: Write>(writer: &mut Writer<W>, start: BytesStart<'_>, value: &str) -> XmlResult {
    if value.is_empty() {
        return writer.write_event(Event::Empty(start));
    }
    let end = start.to_end().into_owned();
    writer.write_event(Event::Start(start))?;
    writer.write_event(Event::Text(BytesText::new(value)))?;
    writer.write_event(Event::End(end))
}

impl Playlist {
    /// Render the canonical XSPF document.
    pub fn to_xml(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buf = write_document(self, Vec::new()).map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Identifier, Location};

    #[test]
    fn test_empty_playlist_has_no_wrappers() {
        let xml = Playlist::new().to_xml();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <playlist version=\"1\" xmlns=\"http://xspf.org/ns/0/\">\n\
             </playlist>\n"
        );
    }

    #[test]
    fn test_title_only() {
        let mut playlist = Playlist::new();
        playlist.set_title("Only a title");
        let xml = playlist.to_xml();

        assert!(xml.contains("  <title>Only a title</title>\n"));
        assert!(!xml.contains("<attribution"));
        assert!(!xml.contains("<trackList"));
        assert!(!xml.contains("<creator"));
    }

    #[test]
    fn test_empty_scalars_are_omitted() {
        let mut playlist = Playlist::new();
        playlist.set_title("");
        playlist.set_annotation("");
        let mut track = crate::model::Track::new();
        track.set_album("");
        playlist.add_track(track);
        let xml = playlist.to_xml();

        assert!(!xml.contains("<title"));
        assert!(!xml.contains("<annotation"));
        assert!(!xml.contains("<album"));
        assert!(xml.contains("    <track>\n    </track>\n"));
    }

    #[test]
    fn test_playlist_element_order() {
        let mut playlist = Playlist::new();
        playlist.set_title("T");
        playlist.set_annotation("A");
        playlist.set_creator("C");
        playlist
            .set_license("http://creativecommons.org/licenses/by/1.0/")
            .unwrap();
        playlist.add_attribution(Identifier::new("urn:x-test:1").unwrap(), true);
        playlist.add_track(Track::with_location(
            Location::new("http://example.com/a.ogg").unwrap(),
        ));
        let xml = playlist.to_xml();

        let order = [
            "<annotation>",
            "<attribution>",
            "<creator>",
            "<license>",
            "<title>",
            "<trackList>",
        ];
        let offsets: Vec<usize> = order.iter().map(|tag| xml.find(tag).unwrap()).collect();
        let mut sorted = offsets.clone();
        sorted.sort_unstable();
        assert_eq!(offsets, sorted);
    }

    #[test]
    fn test_track_order_and_numbers() {
        let mut track = Track::with_location(Location::new("http://example.com/a.ogg").unwrap());
        track.set_album("Album");
        track.set_title("Song");
        track.set_track_num(3);
        track.set_duration(215_000);
        let mut playlist = Playlist::new();
        playlist.add_track(track);
        let xml = playlist.to_xml();

        let location = xml.find("<location>").unwrap();
        let title = xml.find("<title>Song</title>").unwrap();
        let album = xml.find("<album>Album</album>").unwrap();
        let num = xml.find("<trackNum>3</trackNum>").unwrap();
        let duration = xml.find("<duration>215000</duration>").unwrap();
        assert!(location < title && title < album && album < num && num < duration);
    }

    #[test]
    fn test_reserved_characters_are_escaped() {
        let mut playlist = Playlist::new();
        playlist.set_title("Rock & Roll <Live>");
        let xml = playlist.to_xml();
        assert!(xml.contains("<title>Rock &amp; Roll &lt;Live&gt;</title>"));
    }

    #[test]
    fn test_link_and_meta_attributes() {
        let mut playlist = Playlist::new();
        playlist.add_link(Link::new("http://example.com/rel/home", "http://example.com/").unwrap());
        playlist.add_meta(Meta::new("http://example.com/rel/mood", "").unwrap());
        let xml = playlist.to_xml();

        assert!(xml.contains(
            "<link rel=\"http://example.com/rel/home\">http://example.com/</link>"
        ));
        assert!(xml.contains("<meta rel=\"http://example.com/rel/mood\"/>"));
    }

    #[test]
    fn test_extension_keeps_attribute_order() {
        let element = ExtensionElement::new("app:clip")
            .with_attribute("start", "10")
            .with_attribute("end", "20");
        let extension = Extension::new("http://example.com/app").unwrap().with(element);
        let mut playlist = Playlist::new();
        playlist.add_extension(extension);
        let xml = playlist.to_xml();

        assert!(xml.contains("<extension application=\"http://example.com/app\">"));
        assert!(xml.contains("<app:clip start=\"10\" end=\"20\"/>"));
    }
}
