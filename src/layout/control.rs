//! Interactive nodes

use serde::{Deserialize, Serialize};

use super::NodeKind;

/// The on-screen keyboard a text field asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyboardType {
    /// Free text
    Text,
    /// Digits only
    Number,
    /// Email address
    Email,
    /// Phone number
    Phone,
    /// Web address
    Url,
}

/// A tappable button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Button {
    /// Button title
    pub label: String,
    /// Action identifier fired on tap
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

crate::register_node!(BUTTON, Button, NodeKind::Button);

impl Button {
    /// Creates a button with no action
    pub fn new<S: Into<String>>(label: S) -> Self {
        Self {
            label: label.into(),
            action: None,
        }
    }

    /// Sets the action fired on tap
    pub fn action<S: Into<String>>(mut self, action: S) -> Self {
        self.action = Some(action.into());
        self
    }
}

/// An editable text field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TextField {
    /// Hint shown while empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Current contents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Keyboard to present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyboard: Option<KeyboardType>,
}

crate::register_node!(TEXT_FIELD, TextField, NodeKind::TextField);

/// One option of a radio group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Radio {
    /// The group this option belongs to
    pub group: String,
    /// The value reported when this option is chosen
    pub value: String,
    /// Whether this option is chosen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
}

crate::register_node!(RADIO, Radio, NodeKind::Radio);

/// An on/off toggle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Switch {
    /// Toggle state
    pub is_on: bool,
    /// Color used while on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tint: Option<String>,
}

crate::register_node!(SWITCH, Switch, NodeKind::Switch);
