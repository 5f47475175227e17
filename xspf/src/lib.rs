//! # xspf
//!
//! Read, build and write XSPF ("spiff") playlists.
//!
//! A [`Playlist`] is a plain typed value. It can be assembled in code,
//! parsed from XML, and serialized back to a canonical document. URI-typed
//! fields are validated on the way in, so a playlist never holds a malformed
//! location or identifier.
//!
//! ## Usage
//!
//! ### Building and serializing
//! ```rust
//! use xspf::{Location, Playlist, Track};
//!
//! let mut playlist = Playlist::new();
//! playlist.set_title("Road Trip");
//!
//! let mut track = Track::with_location(Location::new("http://example.com/song.ogg")?);
//! track.set_duration(215_000);
//! playlist.add_track(track);
//!
//! let xml = playlist.to_xml();
//! assert!(xml.contains("<title>Road Trip</title>"));
//! # Ok::<(), xspf::ValidationError>(())
//! ```
//!
//! ### Parsing
//! ```rust
//! let playlist: xspf::Playlist = r#"<playlist version="1" xmlns="http://xspf.org/ns/0/">
//!   <trackList>
//!     <track><location>http://example.com/a.ogg</location><duration>61000</duration></track>
//!   </trackList>
//! </playlist>"#.parse()?;
//!
//! assert_eq!(playlist.duration(), 61);
//! # Ok::<(), xspf::ParseError>(())
//! ```

pub mod common;
pub mod error;
pub mod export;
pub mod model;
pub mod parser;
pub mod serializer;

// Re-export error types for convenient top-level access
pub use error::{
    ExportError, ParseError, ParseResult, Position, SerializeError, UriKind, ValidationError,
    XspfError,
};

// Re-export the object model
pub use model::{
    Attribution, AttributionFilter, Extension, ExtensionElement, ExtensionNode, Identifier, Link,
    Location, Meta, Playlist, Track, XSPF_NAMESPACE, XSPF_VERSION,
};

pub use common::{XmlEvent, XmlTokenizer};
pub use export::CONTENT_TYPE;
pub use parser::{parse_str, PlaylistHandler};
