//! The `<playlist>` aggregate root.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::common::uri;
use crate::error::{UriKind, ValidationError};
use crate::model::{Attribution, AttributionFilter, Extension, Link, Meta, Track};

/// Schema version written when none was read from a document.
pub const XSPF_VERSION: u8 = 1;

/// The XSPF namespace URI.
pub const XSPF_NAMESPACE: &str = "http://xspf.org/ns/0/";

/// An XSPF playlist.
///
/// Scalar fields are optional. URL- and URN-typed setters validate their
/// input and leave the field untouched when it is rejected, so a set field
/// always holds a valid reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Playlist {
    version: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    creator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    annotation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    license: Option<String>,
    attributions: Vec<Attribution>,
    links: Vec<Link>,
    meta: Vec<Meta>,
    extensions: Vec<Extension>,
    tracks: Vec<Track>,
}

impl Default for Playlist {
    fn default() -> Self {
        Self {
            version: XSPF_VERSION,
            title: None,
            creator: None,
            annotation: None,
            info: None,
            location: None,
            identifier: None,
            image: None,
            date: None,
            license: None,
            attributions: Vec::new(),
            links: Vec::new(),
            meta: Vec::new(),
            extensions: Vec::new(),
            tracks: Vec::new(),
        }
    }
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_version(version: u8) -> Self {
        Self {
            version,
            ..Self::default()
        }
    }

    /// The schema version of this document.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Insert an attribution at the end (`append`) or the start of the
    /// attribution history.
    pub fn add_attribution(&mut self, attribution: impl Into<Attribution>, append: bool) {
        if append {
            self.attributions.push(attribution.into());
        } else {
            self.attributions.insert(0, attribution.into());
        }
    }

    pub fn attributions(&self) -> &[Attribution] {
        &self.attributions
    }

    /// The attributions matching `filter`, in their original relative order.
    pub fn attributions_filtered(&self, filter: AttributionFilter) -> Vec<&Attribution> {
        self.attributions
            .iter()
            .filter(|attribution| filter.matches(attribution))
            .collect()
    }

    /// The attribution at `offset`, if there is one.
    pub fn attribution(&self, offset: usize) -> Option<&Attribution> {
        self.attributions.get(offset)
    }

    pub fn add_extension(&mut self, extension: Extension) {
        self.extensions.push(extension);
    }

    pub fn extensions(&self) -> &[Extension] {
        &self.extensions
    }

    pub fn add_link(&mut self, link: Link) {
        self.links.push(link);
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn add_meta(&mut self, meta: Meta) {
        self.meta.push(meta);
    }

    pub fn meta(&self) -> &[Meta] {
        &self.meta
    }

    pub fn add_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn tracks_mut(&mut self) -> &mut [Track] {
        &mut self.tracks
    }

    /// Total running time in whole seconds, rounded down.
    ///
    /// Tracks without a duration count as zero. A total past `u64::MAX`
    /// milliseconds saturates.
    pub fn duration(&self) -> u64 {
        let millis = self
            .tracks
            .iter()
            .filter_map(Track::duration)
            .fold(0u64, u64::saturating_add);
        millis / 1000
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn creator(&self) -> Option<&str> {
        self.creator.as_deref()
    }

    pub fn set_creator(&mut self, creator: impl Into<String>) {
        self.creator = Some(creator.into());
    }

    pub fn annotation(&self) -> Option<&str> {
        self.annotation.as_deref()
    }

    pub fn set_annotation(&mut self, annotation: impl Into<String>) {
        self.annotation = Some(annotation.into());
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    /// Set the creation date.
    ///
    /// A value made only of ASCII digits is read as a Unix timestamp and
    /// stored in RFC 2822 form; anything else is stored as given.
    pub fn set_date(&mut self, date: impl Into<String>) {
        let date = date.into();
        let timestamp = if !date.is_empty() && date.bytes().all(|b| b.is_ascii_digit()) {
            date.parse::<i64>()
                .ok()
                .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        } else {
            None
        };

        self.date = Some(match timestamp {
            Some(dt) => dt.to_rfc2822(),
            None => date,
        });
    }

    /// Set the creation date from a timestamp, stored in RFC 3339 form.
    pub fn set_date_time(&mut self, date: DateTime<Utc>) {
        self.date = Some(date.to_rfc3339_opts(SecondsFormat::Secs, false));
    }

    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    pub fn set_identifier(&mut self, identifier: impl Into<String>) -> Result<(), ValidationError> {
        uri::assign(&mut self.identifier, UriKind::Urn, identifier.into())
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn set_image(&mut self, image: impl Into<String>) -> Result<(), ValidationError> {
        uri::assign(&mut self.image, UriKind::Url, image.into())
    }

    pub fn info(&self) -> Option<&str> {
        self.info.as_deref()
    }

    pub fn set_info(&mut self, info: impl Into<String>) -> Result<(), ValidationError> {
        uri::assign(&mut self.info, UriKind::Url, info.into())
    }

    pub fn license(&self) -> Option<&str> {
        self.license.as_deref()
    }

    pub fn set_license(&mut self, license: impl Into<String>) -> Result<(), ValidationError> {
        uri::assign(&mut self.license, UriKind::Url, license.into())
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn set_location(&mut self, location: impl Into<String>) -> Result<(), ValidationError> {
        uri::assign(&mut self.location, UriKind::Url, location.into())
    }

    pub fn clear_title(&mut self) {
        self.title = None;
    }

    pub fn clear_creator(&mut self) {
        self.creator = None;
    }

    pub fn clear_annotation(&mut self) {
        self.annotation = None;
    }

    pub fn clear_date(&mut self) {
        self.date = None;
    }

    pub fn clear_license(&mut self) {
        self.license = None;
    }
}
