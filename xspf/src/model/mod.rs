//! Typed object model for XSPF documents
//!
//! - [`elements`]: Location, Identifier, Meta, Link and Attribution
//! - [`extension`]: opaque application-defined content
//! - [`track`]: the Track entity
//! - [`playlist`]: the Playlist aggregate root

pub mod elements;
pub mod extension;
pub mod playlist;
pub mod track;

pub use elements::{Attribution, AttributionFilter, Identifier, Link, Location, Meta};
pub use extension::{Extension, ExtensionElement, ExtensionNode};
pub use playlist::{Playlist, XSPF_NAMESPACE, XSPF_VERSION};
pub use track::Track;
