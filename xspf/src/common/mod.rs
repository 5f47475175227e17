//! Shared utilities for the parser and serializer
//!
//! - [`uri`]: URI/URL/URN validation
//! - [`xml_decode`]: quick-xml tokenizer adapter producing [`XmlEvent`]s

pub mod uri;
pub mod xml_decode;

pub use xml_decode::{XmlEvent, XmlTokenizer};
