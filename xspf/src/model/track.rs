//! The `<track>` entity.

use serde::Serialize;

use crate::common::uri;
use crate::error::{UriKind, ValidationError};
use crate::model::{Extension, Identifier, Link, Location, Meta};

/// One playable item of a playlist.
///
/// A track may list several locations (mirrors of the same resource) and
/// several identifiers; the first of each is the canonical one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    locations: Vec<Location>,
    identifiers: Vec<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    creator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    annotation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    album: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    track_num: Option<u32>,
    /// Milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<u64>,
    links: Vec<Link>,
    meta: Vec<Meta>,
    extensions: Vec<Extension>,
}

impl Track {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a track with a single location.
    pub fn with_location(location: Location) -> Self {
        let mut track = Self::new();
        track.add_location(location);
        track
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn add_location(&mut self, location: Location) {
        self.locations.push(location);
    }

    pub fn identifiers(&self) -> &[Identifier] {
        &self.identifiers
    }

    /// The canonical identifier, if any.
    pub fn identifier(&self) -> Option<&Identifier> {
        self.identifiers.first()
    }

    pub fn add_identifier(&mut self, identifier: Identifier) {
        self.identifiers.push(identifier);
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

    pub fn info(&self) -> Option<&str> {
        self.info.as_deref()
    }

    /// Set the URL of a page about this track. Non-URLs are rejected and the
    /// previous value is kept.
    pub fn set_info(&mut self, info: impl Into<String>) -> Result<(), ValidationError> {
        uri::assign(&mut self.info, UriKind::Url, info.into())
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Set the URL of an image for this track. Non-URLs are rejected and the
    /// previous value is kept.
    pub fn set_image(&mut self, image: impl Into<String>) -> Result<(), ValidationError> {
        uri::assign(&mut self.image, UriKind::Url, image.into())
    }

    pub fn album(&self) -> Option<&str> {
        self.album.as_deref()
    }

    pub fn set_album(&mut self, album: impl Into<String>) {
        self.album = Some(album.into());
    }

    pub fn track_num(&self) -> Option<u32> {
        self.track_num
    }

    pub fn set_track_num(&mut self, track_num: u32) {
        self.track_num = Some(track_num);
    }

    /// Duration in milliseconds.
    pub fn duration(&self) -> Option<u64> {
        self.duration
    }

    pub fn set_duration(&mut self, millis: u64) {
        self.duration = Some(millis);
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn add_link(&mut self, link: Link) {
        self.links.push(link);
    }

    pub fn meta(&self) -> &[Meta] {
        &self.meta
    }

    pub fn add_meta(&mut self, meta: Meta) {
        self.meta.push(meta);
    }

    pub fn extensions(&self) -> &[Extension] {
        &self.extensions
    }

    pub fn add_extension(&mut self, extension: Extension) {
        self.extensions.push(extension);
    }

    pub fn clear_title(&mut self) {
        self.title = None;
    }

    pub fn clear_duration(&mut self) {
        self.duration = None;
    }
}
