//! Tokenizer adapter that turns quick-xml's pull events into [`XmlEvent`]s.
//!
//! The playlist parser works on a schema-agnostic stream of start tags, text
//! fragments and end tags. This module produces that stream from raw XML,
//! attaching the line and column of each event so the parser can report
//! where a document went wrong.
//!
//! Empty elements (`<meta rel="..."/>`) are expanded into a start and an end
//! event. CDATA sections are delivered as ordinary text. Declarations,
//! comments, processing instructions and doctypes are skipped.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{ParseError, ParseResult, Position};

/// A single schema-agnostic parse event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlEvent {
    /// An opening tag with its attributes in document order
    Start {
        name: String,
        attributes: Vec<(String, String)>,
    },
    /// A fragment of character data, already unescaped
    Text(String),
    /// A closing tag
    End { name: String },
}

impl XmlEvent {
    /// Convenience constructor for a start tag.
    pub fn start<N, K, V, I>(name: N, attributes: I) -> Self
    where
        N: Into<String>,
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        XmlEvent::Start {
            name: name.into(),
            attributes: attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Convenience constructor for a text fragment.
    pub fn text(text: impl Into<String>) -> Self {
        XmlEvent::Text(text.into())
    }

    /// Convenience constructor for an end tag.
    pub fn end(name: impl Into<String>) -> Self {
        XmlEvent::End { name: name.into() }
    }
}

/// Iterator over the [`XmlEvent`]s of an in-memory document.
pub struct XmlTokenizer<'a> {
    reader: Reader<&'a [u8]>,
    tracker: LineTracker<'a>,
    finished: bool,
}

impl<'a> XmlTokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut reader = Reader::from_str(input);
        // Tag balance is checked by the playlist handler so it can report
        // the element path.
        reader.check_end_names(false);
        reader.expand_empty_elements(true);

        Self {
            reader,
            tracker: LineTracker::new(input),
            finished: false,
        }
    }

    fn next_event(&mut self) -> Option<ParseResult<(XmlEvent, Position)>> {
        loop {
            let offset = self.reader.buffer_position();
            let position = self.tracker.position_at(offset);

            let event = match self.reader.read_event() {
                Ok(event) => event,
                Err(e) => {
                    self.finished = true;
                    return Some(Err(xml_error(position, e)));
                }
            };

            let converted = match event {
                Event::Start(start) | Event::Empty(start) => start_event(&start, position),
                Event::End(end) => decode_name(end.name().as_ref(), position)
                    .map(|name| XmlEvent::End { name }),
                Event::Text(text) => match text.unescape() {
                    Ok(text) if text.is_empty() => continue,
                    Ok(text) => Ok(XmlEvent::Text(text.into_owned())),
                    Err(e) => Err(xml_error(position, e)),
                },
                Event::CData(cdata) => std::str::from_utf8(&cdata.into_inner())
                    .map(|text| XmlEvent::Text(text.to_string()))
                    .map_err(|e| xml_error(position, e)),
                Event::Eof => {
                    self.finished = true;
                    return None;
                }
                Event::Decl(_) | Event::PI(_) | Event::Comment(_) | Event::DocType(_) => continue,
            };

            if converted.is_err() {
                self.finished = true;
            }
            return Some(converted.map(|event| (event, position)));
        }
    }
}

impl Iterator for XmlTokenizer<'_> {
    type Item = ParseResult<(XmlEvent, Position)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        self.next_event()
    }
}

fn start_event(start: &BytesStart<'_>, position: Position) -> ParseResult<XmlEvent> {
    let name = decode_name(start.name().as_ref(), position)?;

    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| xml_error(position, e))?;
        let key = decode_name(attr.key.as_ref(), position)?;
        let value = attr
            .unescape_value()
            .map_err(|e| xml_error(position, e))?
            .into_owned();
        attributes.push((key, value));
    }

    Ok(XmlEvent::Start { name, attributes })
}

fn decode_name(raw: &[u8], position: Position) -> ParseResult<String> {
    std::str::from_utf8(raw)
        .map(str::to_string)
        .map_err(|e| xml_error(position, e))
}

fn xml_error(position: Position, err: impl std::fmt::Display) -> ParseError {
    ParseError::Xml {
        position,
        message: err.to_string(),
    }
}

/// Converts byte offsets into line/column positions.
///
/// Offsets handed out by the reader only grow, so the tracker scans each byte
/// of the input once.
struct LineTracker<'a> {
    input: &'a str,
    offset: usize,
    line: usize,
    column: usize,
}

impl<'a> LineTracker<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    fn position_at(&mut self, offset: usize) -> Position {
        if offset > self.offset {
            if let Some(chunk) = self.input.get(self.offset..offset) {
                for ch in chunk.chars() {
                    if ch == '\n' {
                        self.line += 1;
                        self.column = 1;
                    } else {
                        self.column += 1;
                    }
                }
                self.offset = offset;
            }
        }
        Position::new(self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events(xml: &str) -> Vec<XmlEvent> {
        XmlTokenizer::new(xml)
            .map(|item| item.map(|(event, _)| event))
            .collect::<ParseResult<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_tokenize_basic_document() {
        let xml = r#"<?xml version="1.0"?><playlist version="1"><title>Mix</title></playlist>"#;

        assert_eq!(
            events(xml),
            vec![
                XmlEvent::start("playlist", [("version", "1")]),
                XmlEvent::start("title", Vec::<(String, String)>::new()),
                XmlEvent::text("Mix"),
                XmlEvent::end("title"),
                XmlEvent::end("playlist"),
            ]
        );
    }

    #[test]
    fn test_empty_element_expands_to_start_and_end() {
        let xml = r#"<a><b x="1"/></a>"#;

        assert_eq!(
            events(xml),
            vec![
                XmlEvent::start("a", Vec::<(String, String)>::new()),
                XmlEvent::start("b", [("x", "1")]),
                XmlEvent::end("b"),
                XmlEvent::end("a"),
            ]
        );
    }

    #[test]
    fn test_self_closing_siblings_stay_on_their_line() {
        let xml = "<a>\n<b/><c/>\n</a>";
        let items: Vec<(XmlEvent, Position)> = XmlTokenizer::new(xml)
            .collect::<ParseResult<Vec<_>>>()
            .unwrap()
            .into_iter()
            .filter(|(event, _)| !matches!(event, XmlEvent::Text(_)))
            .collect();

        let names: Vec<&XmlEvent> = items.iter().map(|(event, _)| event).collect();
        assert_eq!(
            names,
            vec![
                &XmlEvent::start("a", Vec::<(String, String)>::new()),
                &XmlEvent::start("b", Vec::<(String, String)>::new()),
                &XmlEvent::end("b"),
                &XmlEvent::start("c", Vec::<(String, String)>::new()),
                &XmlEvent::end("c"),
                &XmlEvent::end("a"),
            ]
        );
        assert!(items[1..5].iter().all(|(_, position)| position.line == 2));
    }

    #[test]
    fn test_entities_and_cdata_become_text() {
        let xml = "<a>Rock &amp; Roll<![CDATA[ <raw> ]]></a>";

        assert_eq!(
            events(xml),
            vec![
                XmlEvent::start("a", Vec::<(String, String)>::new()),
                XmlEvent::text("Rock & Roll"),
                XmlEvent::text(" <raw> "),
                XmlEvent::end("a"),
            ]
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        let xml = "<a><!-- note --></a>";
        assert_eq!(events(xml).len(), 2);
    }

    #[test]
    fn test_positions_track_lines() {
        let xml = "<a>\n  <b>x</b>\n</a>";
        let positions: Vec<Position> = XmlTokenizer::new(xml)
            .map(|item| item.unwrap().1)
            .collect();

        assert_eq!(positions[0], Position::new(1, 1));
        // the whitespace between <a> and <b> is its own text event
        assert_eq!(positions[1], Position::new(1, 4));
        assert_eq!(positions[2], Position::new(2, 3));
    }

    #[test]
    fn test_malformed_attribute_is_an_error() {
        let xml = r#"<a b="1" b="2"></a>"#;
        let result: ParseResult<Vec<_>> = XmlTokenizer::new(xml).collect();

        match result.unwrap_err() {
            ParseError::Xml { position, .. } => assert_eq!(position, Position::new(1, 1)),
            other => panic!("Unexpected error type: {:?}", other),
        }
    }
}
