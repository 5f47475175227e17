//! Error types for XSPF parsing, validation and export

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Location of an event in the source document, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// The class of URI a field expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UriKind {
    /// Any absolute URI
    Uri,
    /// A URI restricted to the `file`, `ftp`, `http` and `https` schemes
    Url,
    /// A URN (validated as an unrestricted URI)
    Urn,
}

impl fmt::Display for UriKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UriKind::Uri => f.write_str("URI"),
            UriKind::Url => f.write_str("URL"),
            UriKind::Urn => f.write_str("URN"),
        }
    }
}

/// A value was rejected by the URI validator.
///
/// The target field keeps whatever value it held before the assignment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Rejected {kind} value '{value}'")]
pub struct ValidationError {
    pub kind: UriKind,
    pub value: String,
}

impl ValidationError {
    pub fn new(kind: UriKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Errors that can occur while reconstructing a playlist from XML.
///
/// Every variant is fatal: no partially built playlist is returned.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The tokenizer could not read the input
    #[error("Malformed XML at {position}: {message}")]
    Xml { position: Position, message: String },

    /// The root element is something other than `playlist`
    #[error("Not an XSPF document: root element is '{found}'")]
    NotAPlaylist { found: String },

    /// The input ended before any root element was seen
    #[error("Document contains no playlist element")]
    EmptyDocument,

    /// An element appeared where the schema does not allow it
    #[error("Unexpected element '{path}' at {position}")]
    UnexpectedElement { path: String, position: Position },

    /// A closing tag does not match the innermost open element
    #[error("Expected </{expected}> but found </{found}> at {position}")]
    MismatchedEndTag {
        expected: String,
        found: String,
        position: Position,
    },

    /// The input ended while elements were still open
    #[error("Unexpected end of input inside '{path}'")]
    UnexpectedEof { path: String },

    /// A required attribute is absent from an opening tag
    #[error("Element '{element}' at {position} is missing required attribute '{attribute}'")]
    MissingAttribute {
        element: String,
        attribute: &'static str,
        position: Position,
    },

    /// Element content could not be converted to the field's type
    #[error("Invalid value '{value}' for '{field}' at {position}")]
    InvalidValue {
        field: String,
        value: String,
        position: Position,
    },

    /// The `version` attribute names a schema version this crate does not know
    #[error("Unsupported XSPF version '{value}' at {position}")]
    UnsupportedVersion { value: String, position: Position },

    /// Reading the input failed
    #[error("I/O error while reading playlist: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

/// The XML writer failed while emitting a document.
#[derive(Debug, Error)]
#[error("XML serialization failed: {0}")]
pub struct SerializeError(#[from] pub quick_xml::Error);

/// Errors raised while writing a playlist to a sink.
///
/// The three I/O variants let callers tell "nothing was written" (`Open`)
/// from "partially written" (`Write`) from "written but not flushed"
/// (`Close`).
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Could not open '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Writing to '{}' failed: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to close '{}': {source}", .path.display())]
    Close {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Serialize(#[from] SerializeError),
}

/// Umbrella error for callers that handle every failure the same way.
#[derive(Debug, Error)]
pub enum XspfError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Serialize(#[from] SerializeError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
