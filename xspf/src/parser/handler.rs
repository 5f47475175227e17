//! Event-driven playlist construction.
//!
//! [`PlaylistHandler`] consumes [`XmlEvent`]s one at a time and builds a
//! [`Playlist`]. It keeps an explicit stack of frames, one per open element.
//! Each frame records what the element means at its position in the document
//! (`location` under `attribution` is an attribution entry, under `track` it
//! is a track location), accumulates its character data, and owns the entity
//! being built when the element opens one. When an element closes, its frame
//! is popped and the result is attached to the frame below it.

use tracing::{debug, trace, warn};

use crate::common::XmlEvent;
use crate::error::{ParseError, ParseResult, Position, ValidationError};
use crate::model::{
    Attribution, Extension, ExtensionElement, ExtensionNode, Identifier, Link, Location, Meta,
    Playlist, Track,
};

/// What an open element means in its context.
#[derive(Debug)]
enum FrameKind {
    Playlist(Playlist),
    Attribution,
    TrackList,
    Track(Box<Track>),
    Meta { rel: String },
    Link { rel: String },
    Extension(Extension),
    ExtensionElement(ExtensionElement),
    /// A scalar element whose text is the value
    Leaf,
}

impl FrameKind {
    fn collects_text(&self) -> bool {
        matches!(
            self,
            FrameKind::Leaf
                | FrameKind::Meta { .. }
                | FrameKind::Link { .. }
                | FrameKind::Extension(_)
                | FrameKind::ExtensionElement(_)
        )
    }

    fn is_extension_content(&self) -> bool {
        matches!(self, FrameKind::Extension(_) | FrameKind::ExtensionElement(_))
    }
}

#[derive(Debug)]
struct Frame {
    name: String,
    kind: FrameKind,
    text: String,
}

impl Frame {
    fn new(name: String, kind: FrameKind) -> Self {
        Self {
            name,
            kind,
            text: String::new(),
        }
    }

    /// Move pending character data into extension content as a text node.
    fn flush_extension_text(&mut self) {
        let pending = std::mem::take(&mut self.text);
        let trimmed = pending.trim();
        if trimmed.is_empty() {
            return;
        }
        let node = ExtensionNode::Text(trimmed.to_string());
        match &mut self.kind {
            FrameKind::Extension(ext) => ext.push(node),
            FrameKind::ExtensionElement(el) => el.push(node),
            _ => {}
        }
    }
}

/// Builds a [`Playlist`] from a stream of [`XmlEvent`]s.
///
/// ```rust
/// use xspf::{PlaylistHandler, Position, XmlEvent};
///
/// let mut handler = PlaylistHandler::new();
/// let at = Position::default();
/// handler.handle(XmlEvent::start("playlist", [("version", "1")]), at)?;
/// handler.handle(XmlEvent::start("title", Vec::<(String, String)>::new()), at)?;
/// handler.handle(XmlEvent::text("Road "), at)?;
/// handler.handle(XmlEvent::text("Trip"), at)?;
/// handler.handle(XmlEvent::end("title"), at)?;
/// handler.handle(XmlEvent::end("playlist"), at)?;
///
/// let playlist = handler.finish()?;
/// assert_eq!(playlist.title(), Some("Road Trip"));
/// # Ok::<(), xspf::ParseError>(())
/// ```
#[derive(Debug, Default)]
pub struct PlaylistHandler {
    stack: Vec<Frame>,
    finished: Option<Playlist>,
}

impl PlaylistHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one event to the state machine.
    pub fn handle(&mut self, event: XmlEvent, position: Position) -> ParseResult<()> {
        trace!(?event, %position, "xml event");
        match event {
            XmlEvent::Start { name, attributes } => self.start_element(name, attributes, position),
            XmlEvent::Text(text) => {
                self.characters(&text);
                Ok(())
            }
            XmlEvent::End { name } => self.end_element(&name, position),
        }
    }

    /// Finish the parse, returning the playlist.
    ///
    /// Fails if elements are still open or no playlist element was seen.
    pub fn finish(self) -> ParseResult<Playlist> {
        if !self.stack.is_empty() {
            return Err(ParseError::UnexpectedEof { path: self.path() });
        }
        self.finished.ok_or(ParseError::EmptyDocument)
    }

    /// The slash-separated names of the open elements.
    pub fn path(&self) -> String {
        self.stack
            .iter()
            .map(|frame| frame.name.as_str())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Number of open elements.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn start_element(
        &mut self,
        name: String,
        attributes: Vec<(String, String)>,
        position: Position,
    ) -> ParseResult<()> {
        let kind = match self.stack.last_mut() {
            None => self.classify_root(&name, &attributes, position)?,
            Some(parent) => {
                if parent.kind.is_extension_content() {
                    parent.flush_extension_text();
                }
                match classify_child(&parent.kind, &name, attributes, position)? {
                    Some(kind) => kind,
                    None => {
                        return Err(ParseError::UnexpectedElement {
                            path: format!("{}/{}", self.path(), name),
                            position,
                        })
                    }
                }
            }
        };

        self.stack.push(Frame::new(name, kind));
        debug!(path = %self.path(), "opened element");
        Ok(())
    }

    fn classify_root(
        &self,
        name: &str,
        attributes: &[(String, String)],
        position: Position,
    ) -> ParseResult<FrameKind> {
        if self.finished.is_some() {
            return Err(ParseError::UnexpectedElement {
                path: name.to_string(),
                position,
            });
        }
        if local_name(name) != "playlist" {
            return Err(ParseError::NotAPlaylist {
                found: name.to_string(),
            });
        }

        let version = match attribute(attributes, "version") {
            None => crate::model::XSPF_VERSION,
            Some(raw) => match raw.trim().parse::<u8>() {
                Ok(v @ 0..=1) => v,
                _ => {
                    return Err(ParseError::UnsupportedVersion {
                        value: raw.to_string(),
                        position,
                    })
                }
            },
        };

        Ok(FrameKind::Playlist(Playlist::with_version(version)))
    }

    fn characters(&mut self, text: &str) {
        if let Some(frame) = self.stack.last_mut() {
            if frame.kind.collects_text() {
                frame.text.push_str(text);
            }
        }
    }

    fn end_element(&mut self, name: &str, position: Position) -> ParseResult<()> {
        let mut frame = match self.stack.pop() {
            Some(frame) => frame,
            None => {
                return Err(ParseError::UnexpectedElement {
                    path: format!("/{}", name),
                    position,
                })
            }
        };

        if frame.name != name {
            return Err(ParseError::MismatchedEndTag {
                expected: frame.name,
                found: name.to_string(),
                position,
            });
        }

        debug!(path = %self.path(), element = %frame.name, "closing element");

        if frame.kind.is_extension_content() {
            frame.flush_extension_text();
        }

        let text = frame.text.trim().to_string();
        match frame.kind {
            FrameKind::Playlist(playlist) => {
                self.finished = Some(playlist);
            }
            FrameKind::Attribution | FrameKind::TrackList => {}
            FrameKind::Track(track) => {
                if let Some(playlist) = self.playlist_mut() {
                    playlist.add_track(*track);
                }
            }
            FrameKind::Meta { rel } => match Meta::new(rel, text) {
                Ok(meta) => self.attach_meta(meta),
                Err(e) => self.dropped("meta", &e),
            },
            FrameKind::Link { rel } => match Link::new(rel, text) {
                Ok(link) => self.attach_link(link),
                Err(e) => self.dropped("link", &e),
            },
            FrameKind::Extension(extension) => self.attach_extension(extension),
            FrameKind::ExtensionElement(element) => {
                if let Some(parent) = self.stack.last_mut() {
                    match &mut parent.kind {
                        FrameKind::Extension(ext) => ext.push(element),
                        FrameKind::ExtensionElement(el) => el.push(element),
                        _ => {}
                    }
                }
            }
            FrameKind::Leaf => self.set_leaf(&frame.name, text, position)?,
        }

        Ok(())
    }

    /// Route a scalar element's text to the field it names in its parent.
    fn set_leaf(&mut self, name: &str, text: String, position: Position) -> ParseResult<()> {
        let tag = local_name(name);
        let in_attribution = matches!(
            self.stack.last().map(|frame| &frame.kind),
            Some(FrameKind::Attribution)
        );

        let outcome = if in_attribution {
            let entry = match tag {
                "location" => Location::new(text).map(Attribution::from),
                _ => Identifier::new(text).map(Attribution::from),
            };
            entry.map(|entry| {
                if let Some(playlist) = self.playlist_mut() {
                    playlist.add_attribution(entry, true);
                }
            })
        } else {
            match self.stack.last_mut().map(|frame| &mut frame.kind) {
                Some(FrameKind::Playlist(playlist)) => set_playlist_field(playlist, tag, text),
                Some(FrameKind::Track(track)) => set_track_field(track, name, text, position)?,
                _ => Ok(()),
            }
        };

        if let Err(e) = outcome {
            self.dropped(name, &e);
        }
        Ok(())
    }

    fn attach_meta(&mut self, meta: Meta) {
        match self.stack.last_mut().map(|frame| &mut frame.kind) {
            Some(FrameKind::Playlist(playlist)) => playlist.add_meta(meta),
            Some(FrameKind::Track(track)) => track.add_meta(meta),
            _ => {}
        }
    }

    fn attach_link(&mut self, link: Link) {
        match self.stack.last_mut().map(|frame| &mut frame.kind) {
            Some(FrameKind::Playlist(playlist)) => playlist.add_link(link),
            Some(FrameKind::Track(track)) => track.add_link(link),
            _ => {}
        }
    }

    fn attach_extension(&mut self, extension: Extension) {
        match self.stack.last_mut().map(|frame| &mut frame.kind) {
            Some(FrameKind::Playlist(playlist)) => playlist.add_extension(extension),
            Some(FrameKind::Track(track)) => track.add_extension(extension),
            _ => {}
        }
    }

    /// The playlist under construction, wherever it sits in the stack.
    fn playlist_mut(&mut self) -> Option<&mut Playlist> {
        self.stack.iter_mut().rev().find_map(|frame| match &mut frame.kind {
            FrameKind::Playlist(playlist) => Some(playlist),
            _ => None,
        })
    }

    fn dropped(&self, element: &str, err: &ValidationError) {
        warn!(
            path = %self.path(),
            element,
            "Ignoring invalid value: {}",
            err
        );
    }
}

/// Decide what a child element means given its parent.
///
/// `Ok(None)` means the element is not allowed there.
fn classify_child(
    parent: &FrameKind,
    name: &str,
    attributes: Vec<(String, String)>,
    position: Position,
) -> ParseResult<Option<FrameKind>> {
    if parent.is_extension_content() {
        let mut element = ExtensionElement::new(name);
        for (key, value) in attributes {
            element.push_attribute(key, value);
        }
        return Ok(Some(FrameKind::ExtensionElement(element)));
    }

    let tag = local_name(name);
    let kind = match (parent, tag) {
        (FrameKind::Playlist(_), "attribution") => FrameKind::Attribution,
        (FrameKind::Playlist(_), "trackList") => FrameKind::TrackList,
        (
            FrameKind::Playlist(_),
            "title" | "creator" | "annotation" | "info" | "location" | "identifier" | "image"
            | "date" | "license",
        ) => FrameKind::Leaf,

        (FrameKind::Attribution, "location" | "identifier") => FrameKind::Leaf,

        (FrameKind::TrackList, "track") => FrameKind::Track(Box::default()),

        (
            FrameKind::Track(_),
            "location" | "identifier" | "title" | "creator" | "annotation" | "info" | "image"
            | "album" | "trackNum" | "duration",
        ) => FrameKind::Leaf,

        (FrameKind::Playlist(_) | FrameKind::Track(_), "meta") => {
            // Some writers use `name` for the key instead of `rel`.
            let rel = attribute(&attributes, "rel")
                .or_else(|| attribute(&attributes, "name"))
                .ok_or_else(|| missing(name, "rel", position))?;
            FrameKind::Meta {
                rel: rel.to_string(),
            }
        }
        (FrameKind::Playlist(_) | FrameKind::Track(_), "link") => {
            let rel = attribute(&attributes, "rel").ok_or_else(|| missing(name, "rel", position))?;
            FrameKind::Link {
                rel: rel.to_string(),
            }
        }
        (FrameKind::Playlist(_) | FrameKind::Track(_), "extension") => {
            let application = attribute(&attributes, "application")
                .ok_or_else(|| missing(name, "application", position))?;
            match Extension::new(application) {
                Ok(extension) => FrameKind::Extension(extension),
                Err(e) => {
                    return Err(ParseError::InvalidValue {
                        field: format!("{}@application", name),
                        value: e.value,
                        position,
                    })
                }
            }
        }

        _ => return Ok(None),
    };

    Ok(Some(kind))
}

/// Assign a playlist scalar. Only URI-typed fields can be rejected.
fn set_playlist_field(playlist: &mut Playlist, tag: &str, text: String) -> Result<(), ValidationError> {
    match tag {
        "title" => playlist.set_title(text),
        "creator" => playlist.set_creator(text),
        "annotation" => playlist.set_annotation(text),
        "date" => playlist.set_date(text),
        "info" => return playlist.set_info(text),
        "location" => return playlist.set_location(text),
        "identifier" => return playlist.set_identifier(text),
        "image" => return playlist.set_image(text),
        "license" => return playlist.set_license(text),
        _ => {}
    }
    Ok(())
}

/// Assign a track field.
///
/// The outer result carries fatal conversion errors for numeric fields; the
/// inner one a rejected URI that the caller logs and skips.
fn set_track_field(
    track: &mut Track,
    name: &str,
    text: String,
    position: Position,
) -> ParseResult<Result<(), ValidationError>> {
    match local_name(name) {
        "location" => return Ok(Location::new(text).map(|loc| track.add_location(loc))),
        "identifier" => return Ok(Identifier::new(text).map(|id| track.add_identifier(id))),
        "info" => return Ok(track.set_info(text)),
        "image" => return Ok(track.set_image(text)),
        "title" => track.set_title(text),
        "creator" => track.set_creator(text),
        "annotation" => track.set_annotation(text),
        "album" => track.set_album(text),
        "trackNum" => track.set_track_num(parse_number(name, &text, position)?),
        "duration" => track.set_duration(parse_number(name, &text, position)?),
        _ => {}
    }
    Ok(Ok(()))
}

fn attribute<'a>(attributes: &'a [(String, String)], key: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|(k, _)| local_name(k) == key)
        .map(|(_, v)| v.as_str())
}

fn local_name(name: &str) -> &str {
    name.rsplit_once(':').map(|(_, local)| local).unwrap_or(name)
}

fn missing(element: &str, attribute: &'static str, position: Position) -> ParseError {
    ParseError::MissingAttribute {
        element: element.to_string(),
        attribute,
        position,
    }
}

fn parse_number<T: std::str::FromStr>(field: &str, text: &str, position: Position) -> ParseResult<T> {
    text.parse::<T>().map_err(|_| ParseError::InvalidValue {
        field: field.to_string(),
        value: text.to_string(),
        position,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_attrs() -> Vec<(String, String)> {
        Vec::new()
    }

    fn feed(handler: &mut PlaylistHandler, events: Vec<XmlEvent>) -> ParseResult<()> {
        for event in events {
            handler.handle(event, Position::default())?;
        }
        Ok(())
    }

    fn leaf(name: &str, text: &str) -> Vec<XmlEvent> {
        vec![
            XmlEvent::start(name, no_attrs()),
            XmlEvent::text(text),
            XmlEvent::end(name),
        ]
    }

    #[test]
    fn test_split_character_data_is_concatenated() {
        let mut handler = PlaylistHandler::new();
        feed(
            &mut handler,
            vec![
                XmlEvent::start("playlist", no_attrs()),
                XmlEvent::start("annotation", no_attrs()),
                XmlEvent::text("Songs "),
                XmlEvent::text("for "),
                XmlEvent::text("driving"),
                XmlEvent::end("annotation"),
                XmlEvent::end("playlist"),
            ],
        )
        .unwrap();

        let playlist = handler.finish().unwrap();
        assert_eq!(playlist.annotation(), Some("Songs for driving"));
    }

    #[test]
    fn test_track_pushes_and_pops_frames() {
        let mut handler = PlaylistHandler::new();
        feed(
            &mut handler,
            vec![
                XmlEvent::start("playlist", no_attrs()),
                XmlEvent::start("trackList", no_attrs()),
                XmlEvent::start("track", no_attrs()),
            ],
        )
        .unwrap();
        assert_eq!(handler.path(), "playlist/trackList/track");
        assert_eq!(handler.depth(), 3);

        feed(&mut handler, leaf("duration", "2500")).unwrap();
        feed(
            &mut handler,
            vec![
                XmlEvent::end("track"),
                XmlEvent::end("trackList"),
                XmlEvent::end("playlist"),
            ],
        )
        .unwrap();

        let playlist = handler.finish().unwrap();
        assert_eq!(playlist.tracks().len(), 1);
        assert_eq!(playlist.tracks()[0].duration(), Some(2500));
    }

    #[test]
    fn test_location_routed_by_parent() {
        let mut handler = PlaylistHandler::new();
        let mut events = vec![
            XmlEvent::start("playlist", no_attrs()),
            XmlEvent::start("attribution", no_attrs()),
        ];
        events.extend(leaf("location", "http://example.com/source.xspf"));
        events.push(XmlEvent::end("attribution"));
        events.push(XmlEvent::start("trackList", no_attrs()));
        events.push(XmlEvent::start("track", no_attrs()));
        events.extend(leaf("location", "http://example.com/song.ogg"));
        events.extend(leaf("identifier", "urn:x-test:song"));
        events.push(XmlEvent::end("track"));
        events.push(XmlEvent::end("trackList"));
        events.push(XmlEvent::end("playlist"));
        feed(&mut handler, events).unwrap();

        let playlist = handler.finish().unwrap();
        assert_eq!(playlist.attributions().len(), 1);
        assert_eq!(
            playlist.attributions()[0].as_str(),
            "http://example.com/source.xspf"
        );
        assert_eq!(playlist.location(), None);

        let track = &playlist.tracks()[0];
        assert_eq!(track.locations()[0].as_str(), "http://example.com/song.ogg");
        assert_eq!(track.identifiers()[0].as_str(), "urn:x-test:song");
    }

    #[test]
    fn test_meta_attaches_to_innermost_owner() {
        let mut handler = PlaylistHandler::new();
        feed(
            &mut handler,
            vec![
                XmlEvent::start("playlist", no_attrs()),
                XmlEvent::start("meta", [("rel", "http://example.com/rel/mood")]),
                XmlEvent::text("calm"),
                XmlEvent::end("meta"),
                XmlEvent::start("trackList", no_attrs()),
                XmlEvent::start("track", no_attrs()),
                XmlEvent::start("meta", [("rel", "http://example.com/rel/bpm")]),
                XmlEvent::text("120"),
                XmlEvent::end("meta"),
                XmlEvent::end("track"),
                XmlEvent::end("trackList"),
                XmlEvent::end("playlist"),
            ],
        )
        .unwrap();

        let playlist = handler.finish().unwrap();
        assert_eq!(playlist.meta().len(), 1);
        assert_eq!(playlist.meta()[0].value(), "calm");
        assert_eq!(playlist.tracks()[0].meta()[0].rel(), "http://example.com/rel/bpm");
    }

    #[test]
    fn test_extension_content_is_captured() {
        let mut handler = PlaylistHandler::new();
        feed(
            &mut handler,
            vec![
                XmlEvent::start("playlist", no_attrs()),
                XmlEvent::start("extension", [("application", "http://example.com/app")]),
                XmlEvent::text("\n  lead "),
                XmlEvent::start("app:item", [("id", "7")]),
                XmlEvent::text("inner"),
                XmlEvent::end("app:item"),
                XmlEvent::text("\n"),
                XmlEvent::end("extension"),
                XmlEvent::end("playlist"),
            ],
        )
        .unwrap();

        let playlist = handler.finish().unwrap();
        let ext = &playlist.extensions()[0];
        assert_eq!(ext.application(), "http://example.com/app");
        assert_eq!(ext.content().len(), 2);
        assert_eq!(ext.content()[0], ExtensionNode::Text("lead".to_string()));
        match &ext.content()[1] {
            ExtensionNode::Element(el) => {
                assert_eq!(el.name(), "app:item");
                assert_eq!(el.attribute("id"), Some("7"));
                assert_eq!(el.children(), &[ExtensionNode::Text("inner".to_string())]);
            }
            other => panic!("Unexpected node: {:?}", other),
        }
    }

    #[test]
    fn test_unexpected_element_reports_path() {
        let mut handler = PlaylistHandler::new();
        let result = feed(
            &mut handler,
            vec![
                XmlEvent::start("playlist", no_attrs()),
                XmlEvent::start("attribution", no_attrs()),
                XmlEvent::start("title", no_attrs()),
            ],
        );

        match result.unwrap_err() {
            ParseError::UnexpectedElement { path, .. } => {
                assert_eq!(path, "playlist/attribution/title")
            }
            other => panic!("Unexpected error type: {:?}", other),
        }
    }

    #[test]
    fn test_mismatched_end_tag() {
        let mut handler = PlaylistHandler::new();
        let result = feed(
            &mut handler,
            vec![
                XmlEvent::start("playlist", no_attrs()),
                XmlEvent::start("title", no_attrs()),
                XmlEvent::end("creator"),
            ],
        );

        match result.unwrap_err() {
            ParseError::MismatchedEndTag { expected, found, .. } => {
                assert_eq!(expected, "title");
                assert_eq!(found, "creator");
            }
            other => panic!("Unexpected error type: {:?}", other),
        }
    }

    #[test]
    fn test_truncated_stream_fails() {
        let mut handler = PlaylistHandler::new();
        feed(
            &mut handler,
            vec![
                XmlEvent::start("playlist", no_attrs()),
                XmlEvent::start("trackList", no_attrs()),
            ],
        )
        .unwrap();

        match handler.finish().unwrap_err() {
            ParseError::UnexpectedEof { path } => assert_eq!(path, "playlist/trackList"),
            other => panic!("Unexpected error type: {:?}", other),
        }
    }

    #[test]
    fn test_empty_stream_fails() {
        let handler = PlaylistHandler::new();
        assert!(matches!(handler.finish(), Err(ParseError::EmptyDocument)));
    }

    #[test]
    fn test_wrong_root_fails() {
        let mut handler = PlaylistHandler::new();
        let result = handler.handle(XmlEvent::start("smil", no_attrs()), Position::default());
        assert!(matches!(result, Err(ParseError::NotAPlaylist { .. })));
    }

    #[test]
    fn test_invalid_duration_fails() {
        let mut handler = PlaylistHandler::new();
        let mut events = vec![
            XmlEvent::start("playlist", no_attrs()),
            XmlEvent::start("trackList", no_attrs()),
            XmlEvent::start("track", no_attrs()),
        ];
        events.extend(leaf("duration", "three minutes"));

        match feed(&mut handler, events).unwrap_err() {
            ParseError::InvalidValue { field, value, .. } => {
                assert_eq!(field, "duration");
                assert_eq!(value, "three minutes");
            }
            other => panic!("Unexpected error type: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_url_is_dropped() {
        let mut handler = PlaylistHandler::new();
        let mut events = vec![XmlEvent::start("playlist", no_attrs())];
        events.extend(leaf("license", "all rights reserved"));
        events.extend(leaf("title", "Kept"));
        events.push(XmlEvent::end("playlist"));
        feed(&mut handler, events).unwrap();

        let playlist = handler.finish().unwrap();
        assert_eq!(playlist.license(), None);
        assert_eq!(playlist.title(), Some("Kept"));
    }

    #[test]
    fn test_link_requires_rel() {
        let mut handler = PlaylistHandler::new();
        let result = feed(
            &mut handler,
            vec![
                XmlEvent::start("playlist", no_attrs()),
                XmlEvent::start("link", no_attrs()),
            ],
        );
        assert!(matches!(
            result,
            Err(ParseError::MissingAttribute { attribute: "rel", .. })
        ));
    }

    #[test]
    fn test_version_zero_is_kept() {
        let mut handler = PlaylistHandler::new();
        feed(
            &mut handler,
            vec![
                XmlEvent::start("playlist", [("version", "0")]),
                XmlEvent::end("playlist"),
            ],
        )
        .unwrap();
        assert_eq!(handler.finish().unwrap().version(), 0);
    }

    #[test]
    fn test_unknown_version_fails() {
        let mut handler = PlaylistHandler::new();
        let result = handler.handle(
            XmlEvent::start("playlist", [("version", "2")]),
            Position::default(),
        );
        assert!(matches!(result, Err(ParseError::UnsupportedVersion { .. })));
    }
}
