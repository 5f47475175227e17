//! Leaf value elements: Location, Identifier, Meta, Link and Attribution.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::common::uri;
use crate::error::{UriKind, ValidationError};

/// A URL pointing at a resource, as used by `<location>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    /// Create a location, rejecting anything that is not a `file`, `ftp`,
    /// `http` or `https` URL.
    pub fn new(url: impl Into<String>) -> Result<Self, ValidationError> {
        let url = url.into();
        uri::validate(UriKind::Url, &url)?;
        Ok(Self(url))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A URN naming a resource, as used by `<identifier>`.
///
/// Semantically the same kind of reference as a [`Location`], but written
/// under a different tag and validated as an unrestricted URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(urn: impl Into<String>) -> Result<Self, ValidationError> {
        let urn = urn.into();
        uri::validate(UriKind::Urn, &urn)?;
        Ok(Self(urn))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! impl_str_newtype {
    ($ty:ident) => {
        impl FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

impl_str_newtype!(Location);
impl_str_newtype!(Identifier);

/// A `<meta rel="...">value</meta>` entry.
///
/// `rel` is a URI used as a key; it need not be unique within a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meta {
    rel: String,
    value: String,
}

impl Meta {
    pub fn new(rel: impl Into<String>, value: impl Into<String>) -> Result<Self, ValidationError> {
        let rel = rel.into();
        uri::validate(UriKind::Uri, &rel)?;
        Ok(Self {
            rel,
            value: value.into(),
        })
    }

    pub fn rel(&self) -> &str {
        &self.rel
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

/// A `<link rel="...">url</link>` entry pointing at a related resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    rel: String,
    value: String,
}

impl Link {
    /// Create a link. `rel` must be a URI and `href` a URL.
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Result<Self, ValidationError> {
        let rel = rel.into();
        let href = href.into();
        uri::validate(UriKind::Uri, &rel)?;
        uri::validate(UriKind::Url, &href)?;
        Ok(Self { rel, value: href })
    }

    pub fn rel(&self) -> &str {
        &self.rel
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// One entry of a playlist's attribution history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribution {
    Identifier(Identifier),
    Location(Location),
}

impl Attribution {
    /// The element name this entry is written under.
    pub fn tag(&self) -> &'static str {
        match self {
            Attribution::Identifier(_) => "identifier",
            Attribution::Location(_) => "location",
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Attribution::Identifier(id) => id.as_str(),
            Attribution::Location(loc) => loc.as_str(),
        }
    }

    pub fn is_identifier(&self) -> bool {
        matches!(self, Attribution::Identifier(_))
    }

    pub fn is_location(&self) -> bool {
        matches!(self, Attribution::Location(_))
    }
}

impl From<Identifier> for Attribution {
    fn from(id: Identifier) -> Self {
        Attribution::Identifier(id)
    }
}

impl From<Location> for Attribution {
    fn from(loc: Location) -> Self {
        Attribution::Location(loc)
    }
}

bitflags::bitflags! {
    /// Selects which kinds of [`Attribution`] to return from
    /// [`Playlist::attributions_filtered`](crate::Playlist::attributions_filtered).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AttributionFilter: u8 {
        const LOCATION = 1;
        const IDENTIFIER = 2;
        const ALL = Self::LOCATION.bits() | Self::IDENTIFIER.bits();
    }
}

impl AttributionFilter {
    pub fn matches(&self, attribution: &Attribution) -> bool {
        match attribution {
            Attribution::Identifier(_) => self.contains(AttributionFilter::IDENTIFIER),
            Attribution::Location(_) => self.contains(AttributionFilter::LOCATION),
        }
    }
}
