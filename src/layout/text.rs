//! Text nodes

use serde::{Deserialize, Serialize};

use super::NodeKind;

/// Horizontal alignment of a line of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextAlignment {
    /// Start of the line
    Leading,
    /// Middle of the line
    Center,
    /// End of the line
    Trailing,
}

/// Static text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Label {
    /// The text shown
    pub text: String,
    /// Line alignment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<TextAlignment>,
    /// Font size, in points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
}

crate::register_node!(LABEL, Label, NodeKind::Label);

impl Label {
    /// Creates a label with default styling
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            alignment: None,
            font_size: None,
        }
    }
}
