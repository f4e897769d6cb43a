//! Nodes that hold other nodes

use serde::{Deserialize, Serialize};

use super::{Node, NodeKind};
use crate::containers::TaggedVec;

/// The main axis along which a view lays out its children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FlexDirection {
    /// Left to right
    Row,
    /// Top to bottom
    Column,
    /// Right to left
    RowReverse,
    /// Bottom to top
    ColumnReverse,
}

/// A bare node with no content of its own
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Base {
    /// Node id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
}

crate::register_node!(BASE, Base, NodeKind::Base);

/// A container laying out its children along one axis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct View {
    /// Node id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Layout axis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<FlexDirection>,
    /// Child nodes, in layout order
    #[serde(default, skip_serializing_if = "TaggedVec::is_empty")]
    pub children: TaggedVec<Node>,
}

crate::register_node!(VIEW, View, NodeKind::View);

impl View {
    /// Creates a view holding the given children
    pub fn with_children<I>(children: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        Self {
            children: children.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Sets the layout axis
    pub fn direction(mut self, direction: FlexDirection) -> Self {
        self.direction = Some(direction);
        self
    }
}

/// A container showing one page at a time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Swiper {
    /// Node id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Pages, in paging order
    pub pages: TaggedVec<Node>,
    /// Auto-advance interval
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_ms: Option<u64>,
    /// Whether paging wraps around
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub looping: Option<bool>,
}

crate::register_node!(SWIPER, Swiper, NodeKind::Swiper);
