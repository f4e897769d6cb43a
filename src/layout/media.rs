//! Media nodes

use serde::{Deserialize, Serialize};

use super::NodeKind;

/// How an image fills its frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentMode {
    /// Stretch to the frame
    Fill,
    /// Scale to fit, keeping the aspect ratio
    AspectFit,
    /// Scale to cover, keeping the aspect ratio
    AspectFill,
    /// Unscaled, centered
    Center,
}

/// An image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ImageView {
    /// Image location
    pub src: String,
    /// Scaling mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_mode: Option<ContentMode>,
}

crate::register_node!(IMAGE_VIEW, ImageView, NodeKind::ImageView);

/// A video player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Video {
    /// Stream location
    pub url: String,
    /// Still image shown before playback
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    /// Start playing once loaded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,
}

crate::register_node!(VIDEO, Video, NodeKind::Video);

/// A map centered on a coordinate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Map {
    /// Center latitude, in degrees
    pub latitude: f64,
    /// Center longitude, in degrees
    pub longitude: f64,
    /// Zoom level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<u8>,
}

crate::register_node!(MAP, Map, NodeKind::Map);
