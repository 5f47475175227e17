//! Reading XSPF documents
//!
//! Parsing runs in two layers. [`XmlTokenizer`] turns raw XML into a flat
//! stream of [`XmlEvent`](crate::XmlEvent)s, and [`PlaylistHandler`] folds
//! that stream into a [`Playlist`]. The handler can also be driven directly
//! by any other event source.

mod handler;

pub use handler::PlaylistHandler;

use std::fs;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, instrument};

use crate::common::XmlTokenizer;
use crate::error::{ParseError, ParseResult};
use crate::model::Playlist;

/// Parse an XSPF document held in memory.
///
/// ```rust
/// let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
/// <playlist version="1" xmlns="http://xspf.org/ns/0/">
///   <title>Mix</title>
///   <trackList>
///     <track><location>http://example.com/a.ogg</location></track>
///   </trackList>
/// </playlist>"#;
///
/// let playlist = xspf::parse_str(xml)?;
/// assert_eq!(playlist.title(), Some("Mix"));
/// assert_eq!(playlist.tracks().len(), 1);
/// # Ok::<(), xspf::ParseError>(())
/// ```
#[instrument(level = "debug", skip(input), fields(len = input.len()))]
pub fn parse_str(input: &str) -> ParseResult<Playlist> {
    let mut handler = PlaylistHandler::new();
    for item in XmlTokenizer::new(input) {
        let (event, position) = item?;
        handler.handle(event, position)?;
    }
    let playlist = handler.finish()?;
    debug!(tracks = playlist.tracks().len(), "parsed playlist");
    Ok(playlist)
}

impl Playlist {
    /// Parse a playlist from a string. See [`parse_str`].
    pub fn parse(input: &str) -> ParseResult<Self> {
        parse_str(input)
    }

    /// Read an entire document from `reader` and parse it.
    pub fn from_reader<R: Read>(mut reader: R) -> ParseResult<Self> {
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        parse_str(&buf)
    }

    /// Read and parse the document at `path`.
    pub fn from_file(path: impl AsRef<Path>) -> ParseResult<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        parse_str(&contents)
    }
}

impl FromStr for Playlist {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_str(s)
    }
}
