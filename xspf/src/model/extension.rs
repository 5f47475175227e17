//! Application-defined `<extension>` content.
//!
//! XSPF lets any application hang its own structured data off a playlist or
//! track inside `<extension application="...">`. The content belongs to that
//! application's schema, so it is kept as an ordered tree of generic nodes
//! and written back out unchanged.

use serde::Serialize;

use crate::common::uri;
use crate::error::{UriKind, ValidationError};

/// An `<extension>` element and its opaque content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extension {
    application: String,
    content: Vec<ExtensionNode>,
}

impl Extension {
    /// Create an empty extension for the application namespace `application`.
    pub fn new(application: impl Into<String>) -> Result<Self, ValidationError> {
        let application = application.into();
        uri::validate(UriKind::Uri, &application)?;
        Ok(Self {
            application,
            content: Vec::new(),
        })
    }

    pub fn application(&self) -> &str {
        &self.application
    }

    pub fn content(&self) -> &[ExtensionNode] {
        &self.content
    }

    pub fn push(&mut self, node: impl Into<ExtensionNode>) {
        self.content.push(node.into());
    }

    /// Builder-style variant of [`push`](Self::push).
    pub fn with(mut self, node: impl Into<ExtensionNode>) -> Self {
        self.push(node);
        self
    }
}

/// A node of extension content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionNode {
    Element(ExtensionElement),
    Text(String),
}

impl From<ExtensionElement> for ExtensionNode {
    fn from(element: ExtensionElement) -> Self {
        ExtensionNode::Element(element)
    }
}

impl From<String> for ExtensionNode {
    fn from(text: String) -> Self {
        ExtensionNode::Text(text)
    }
}

impl From<&str> for ExtensionNode {
    fn from(text: &str) -> Self {
        ExtensionNode::Text(text.to_string())
    }
}

/// An element inside extension content.
///
/// The name is stored as written, including any namespace prefix, and
/// attributes keep their document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<ExtensionNode>,
}

impl ExtensionElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Look up an attribute by its qualified name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn children(&self) -> &[ExtensionNode] {
        &self.children
    }

    pub fn push_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.push((name.into(), value.into()));
    }

    pub fn push(&mut self, node: impl Into<ExtensionNode>) {
        self.children.push(node.into());
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_attribute(name, value);
        self
    }

    pub fn with(mut self, node: impl Into<ExtensionNode>) -> Self {
        self.push(node);
        self
    }

    /// Concatenated text of the direct text children.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                ExtensionNode::Text(text) => Some(text.as_str()),
                ExtensionNode::Element(_) => None,
            })
            .collect()
    }
}
