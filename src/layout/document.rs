//! Persisted layouts

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Node;
use crate::{
    containers::{TaggedValue, TaggedVec},
    error::Error,
};

/// A stored layout: a list of top-level nodes and an optional root node
///
/// ```rust
/// # use rs_metacodec::layout::{Base, Button, LayoutDocument, Node};
/// let document = LayoutDocument::from_nodes([Node::from(Base::default()), Node::from(Button::new("OK"))]);
///
/// assert_eq!(
///     document.to_json()?,
///     r#"{"nodes":[{"tag":"base","payload":{}},{"tag":"button","payload":{"label":"OK"}}]}"#
/// );
/// # Ok::<_, rs_metacodec::error::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDocument {
    /// Top-level nodes, in order
    #[serde(default)]
    pub nodes: TaggedVec<Node>,
    /// The node the layout is rooted at
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<TaggedValue<Node>>,
}

impl LayoutDocument {
    /// Creates a document from its top-level nodes
    pub fn from_nodes<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        Self {
            nodes: nodes.into_iter().collect(),
            root: None,
        }
    }

    /// Sets the root node
    pub fn with_root<N: Into<Node>>(mut self, root: N) -> Self {
        self.root = Some(TaggedValue(root.into()));
        self
    }

    /// The root node, if any
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref().map(|root| &root.0)
    }

    /// Serializes the document as compact JSON text
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the document as indented JSON text
    pub fn to_json_pretty(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serializes the document as a JSON value
    pub fn to_value(&self) -> Result<Value, Error> {
        Ok(serde_json::to_value(self)?)
    }

    /// Reads a document from JSON text
    pub fn from_json(text: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads a document from a JSON value
    pub fn from_value(value: Value) -> Result<Self, Error> {
        Ok(serde_json::from_value(value)?)
    }
}
