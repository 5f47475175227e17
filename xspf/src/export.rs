//! Writing playlists to files and other sinks.
//!
//! Besides canonical XSPF, a playlist can be flattened to M3U (one location
//! per line) or to a minimal SMIL sequence. Both are one-way conversions.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use tracing::debug;

use crate::error::{ExportError, SerializeError};
use crate::model::Playlist;
use crate::serializer::write_document;

/// Media type for serving XSPF over HTTP.
pub const CONTENT_TYPE: &str = "application/xspf+xml";

impl Playlist {
    /// Stream the canonical document into `writer`.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<W, SerializeError> {
        write_document(self, writer)
    }

    /// Every track location, one per line, in playlist order.
    pub fn m3u_string(&self) -> String {
        let mut out = String::new();
        for location in self.tracks().iter().flat_map(|track| track.locations()) {
            out.push_str(location.as_str());
            out.push('\n');
        }
        out
    }

    /// A SMIL document with one `audio` element per track location.
    ///
    /// The `title` attribute carries the track annotation, or its title when
    /// there is no annotation.
    pub fn smil_string(&self) -> Result<String, SerializeError> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        writer.write_event(Event::Start(BytesStart::new("smil")))?;
        writer.write_event(Event::Start(BytesStart::new("body")))?;
        writer.write_event(Event::Start(BytesStart::new("seq")))?;

        for track in self.tracks() {
            let title = track.annotation().or_else(|| track.title());
            for location in track.locations() {
                let mut audio = BytesStart::new("audio");
                if let Some(title) = title {
                    audio.push_attribute(("title", title));
                }
                audio.push_attribute(("url", location.as_str()));
                writer.write_event(Event::Empty(audio))?;
            }
        }

        writer.write_event(Event::End(BytesEnd::new("seq")))?;
        writer.write_event(Event::End(BytesEnd::new("body")))?;
        writer.write_event(Event::End(BytesEnd::new("smil")))?;
        writer.write_indent()?;

        Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
    }

    /// Save the canonical document to `path`.
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let bytes = write_document(self, Vec::new())?;
        write_sink(path.as_ref(), &bytes)
    }

    /// Save the track locations to `path` as an M3U playlist.
    pub fn to_m3u(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        write_sink(path.as_ref(), self.m3u_string().as_bytes())
    }

    /// Save the playlist to `path` as SMIL.
    pub fn to_smil(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let smil = self.smil_string()?;
        write_sink(path.as_ref(), smil.as_bytes())
    }
}

/// Create `path`, write `bytes` and sync, reporting which phase failed.
fn write_sink(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    debug!(path = %path.display(), len = bytes.len(), "opening export target");
    let file = File::create(path).map_err(|source| ExportError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    writer.write_all(bytes).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    let file = writer.into_inner().map_err(|e| ExportError::Write {
        path: path.to_path_buf(),
        source: e.into_error(),
    })?;

    file.sync_all().map_err(|source| ExportError::Close {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "export complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Location, Track};

    fn two_track_playlist() -> Playlist {
        let mut first = Track::with_location(Location::new("http://example.com/1.ogg").unwrap());
        first.add_location(Location::new("http://mirror.example.com/1.ogg").unwrap());
        first.set_annotation("First & best");
        let mut second = Track::with_location(Location::new("http://example.com/2.ogg").unwrap());
        second.set_title("Second");

        let mut playlist = Playlist::new();
        playlist.add_track(first);
        playlist.add_track(Track::new());
        playlist.add_track(second);
        playlist
    }

    #[test]
    fn test_m3u_lists_every_location() {
        assert_eq!(
            two_track_playlist().m3u_string(),
            "http://example.com/1.ogg\nhttp://mirror.example.com/1.ogg\nhttp://example.com/2.ogg\n"
        );
        assert_eq!(Playlist::new().m3u_string(), "");
    }

    #[test]
    fn test_smil_audio_elements() {
        let smil = two_track_playlist().smil_string().unwrap();
        assert!(smil.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert_eq!(smil.matches("<audio ").count(), 3);
        assert!(smil.contains(
            "<audio title=\"First &amp; best\" url=\"http://mirror.example.com/1.ogg\"/>"
        ));
        assert!(smil.contains("<audio title=\"Second\" url=\"http://example.com/2.ogg\"/>"));
    }

    #[test]
    fn test_write_to_vec() {
        let buf = two_track_playlist().write_to(Vec::new()).unwrap();
        let xml = String::from_utf8(buf).unwrap();
        assert!(xml.contains("<trackList>"));
    }

    #[test]
    fn test_open_failure_is_reported() {
        let err = Playlist::new()
            .to_file("/nonexistent-dir/playlist.xspf")
            .unwrap_err();
        assert!(matches!(err, ExportError::Open { .. }));
    }
}
