//! The layout node family
//!
//! Layout nodes are the building blocks of a screen description: a handful
//! of containers that nest other nodes, and leaf controls, media and text.
//! Every node type is registered with the family at link time through
//! [`register_node!`](crate::register_node), and the family registry is
//! assembled from those entries the first time it is used.

use core::fmt;
use std::{any::Any, ops::Deref, str::FromStr};

use downcast_rs::{impl_downcast, Downcast};
use dyn_clone::{clone_trait_object, DynClone};
use linkme::distributed_slice;
use serde::{de::DeserializeOwned, Deserialize, Serialize, Serializer};
use strum::IntoEnumIterator;
use strum_macros::{EnumCount, EnumIter};

use crate::{
    capsule::Capsule,
    error::Error,
    registry::{DecodeFn, Family, Narrow, Registry, Tagged, Variant},
};

mod container;
mod control;
mod document;
mod media;
mod text;

pub use container::{Base, FlexDirection, Swiper, View};
pub use control::{Button, KeyboardType, Radio, Switch, TextField};
pub use document::LayoutDocument;
pub use media::{ContentMode, ImageView, Map, Video};
pub use text::{Label, TextAlignment};

/// A node of any kind
#[derive(Clone)]
pub struct Node(Box<dyn LayoutNode>);

impl Node {
    /// Wraps a concrete node
    pub fn new<N: LayoutNode>(node: N) -> Self {
        Node(Box::new(node))
    }

    /// Unwraps the boxed node
    pub fn into_inner(self) -> Box<dyn LayoutNode> {
        self.0
    }
}

impl Deref for Node {
    type Target = dyn LayoutNode;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        NodeEq::node_eq(&*self.0, Downcast::as_any(&*other.0))
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Serialize::serialize(&*self.0, serializer)
    }
}

/// The kinds of layout node
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumCount,
)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    /// A bare node
    Base,
    /// A tappable button
    Button,
    /// An image
    ImageView,
    /// An editable text field
    TextField,
    /// A container laying out its children
    View,
    /// Static text
    Label,
    /// A video player
    Video,
    /// One option of a radio group
    Radio,
    /// A container paging through its children
    Swiper,
    /// A map centered on a coordinate
    Map,
    /// An on/off toggle
    Switch,
}

impl NodeKind {
    /// The tag written in envelopes for this kind
    pub const fn tag(self) -> &'static str {
        match self {
            NodeKind::Base => "base",
            NodeKind::Button => "button",
            NodeKind::ImageView => "imageView",
            NodeKind::TextField => "textField",
            NodeKind::View => "view",
            NodeKind::Label => "label",
            NodeKind::Video => "video",
            NodeKind::Radio => "radio",
            NodeKind::Swiper => "swiper",
            NodeKind::Map => "map",
            NodeKind::Switch => "switch",
        }
    }

    /// Whether nodes of this kind hold other nodes
    pub const fn is_container(self) -> bool {
        matches!(self, NodeKind::View | NodeKind::Swiper)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for NodeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| Error::UnknownTag {
                tag: s.to_string(),
                family: Node::NAME,
            })
    }
}

/// A node of a layout
pub trait LayoutNode:
    fmt::Debug + Send + Sync + DynClone + Downcast + NodeEq + erased_serde::Serialize + 'static
{
    /// The kind of this node
    fn kind(&self) -> NodeKind;
}

clone_trait_object!(LayoutNode);
impl_downcast!(LayoutNode);
erased_serde::serialize_trait_object!(LayoutNode);

/// Equality between nodes of possibly different types
pub trait NodeEq {
    /// Returns true if other is a node of the same type and equal to self
    fn node_eq(&self, other: &dyn Any) -> bool;
}

impl<T> NodeEq for T
where
    T: PartialEq + Any,
{
    fn node_eq(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<T>().is_some_and(|other| self == other)
    }
}

impl Tagged for Node {
    fn tag(&self) -> &'static str {
        self.kind().tag()
    }
}

impl Family for Node {
    const NAME: &'static str = "layout node";

    fn registry() -> &'static Registry<Self> {
        &LAYOUT_REGISTRY
    }
}

impl<V> Variant<Node> for V
where
    V: LayoutNode + Capsule + DeserializeOwned,
{
    fn upcast(self) -> Node {
        Node::new(self)
    }
}

impl<V> Narrow<V> for Node
where
    V: LayoutNode,
{
    fn narrow(self) -> Result<V, Self> {
        self.0.downcast::<V>().map(|node| *node).map_err(Node)
    }
}

/// A link-time registration of one node type
#[derive(Debug)]
pub struct NodeEntry {
    /// The tag of the node type
    pub tag: &'static str,
    /// Reads a payload as the node type
    pub decode: DecodeFn<Node>,
}

#[distributed_slice]
#[doc(hidden)]
pub static LAYOUT_NODES: [NodeEntry] = [..];

lazy_static::lazy_static! {
    static ref LAYOUT_REGISTRY: Registry<Node> = LAYOUT_NODES
        .iter()
        .fold(Registry::builder(Node::NAME), |builder, entry| {
            builder.register(entry.tag, entry.decode)
        })
        .build()
        .unwrap_or_else(|e| panic!("layout node registry is misconfigured: {e}"));
}

/// The registry of every layout node type
pub fn registry() -> &'static Registry<Node> {
    Node::registry()
}

/// Register a node type at compile time
#[macro_export]
macro_rules! register_node {
    ($name:ident, $node:ty, $kind:expr) => {
        impl $crate::capsule::Capsule for $node {
            const TAG: &'static str = $kind.tag();
        }

        impl $crate::layout::LayoutNode for $node {
            fn kind(&self) -> $crate::layout::NodeKind {
                $kind
            }
        }

        impl From<$node> for $crate::layout::Node {
            fn from(node: $node) -> Self {
                $crate::layout::Node::new(node)
            }
        }

        #[linkme::distributed_slice($crate::layout::LAYOUT_NODES)]
        static $name: $crate::layout::NodeEntry = $crate::layout::NodeEntry {
            tag: <$node as $crate::capsule::Capsule>::TAG,
            decode: $crate::registry::decode_variant::<$crate::layout::Node, $node>,
        };
    };
}
