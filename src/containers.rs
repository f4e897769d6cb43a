//! Serde containers for polymorphic values
//!
//! [`TaggedVec`] and [`TaggedValue`] read and write their elements through
//! the process-wide registry of the element's [`Family`], so a heterogeneous
//! list or a single polymorphic value can sit in an ordinary serde struct.
//!
//! Inside a payload handled by one of the crate's codecs they use that
//! codec's envelope keys and decode policy, and a failure reaches the caller
//! as [`FieldError::Nested`](crate::payload::FieldError::Nested). Anywhere
//! else they fall back to [`Family::config`]:
//!
//! ```rust
//! # use rs_metacodec::{containers::TaggedVec, layout::{Button, Node}};
//! # use serde::{Deserialize, Serialize};
//! #[derive(Serialize, Deserialize)]
//! struct Toolbar {
//!     items: TaggedVec<Node>,
//! }
//!
//! let toolbar: Toolbar = serde_json::from_str(
//!     r#"{"items": [{"tag": "button", "payload": {"label": "OK"}}]}"#,
//! )?;
//!
//! let button = toolbar.items.as_slice()[0].downcast_ref::<Button>();
//!
//! assert_eq!(toolbar.items.len(), 1);
//! assert_eq!(button.map(|b| b.label.as_str()), Some("OK"));
//! # Ok::<_, serde_json::Error>(())
//! ```

use core::slice;
use std::vec;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::{error::Error, registry::Family, scope, sequence::SequenceCodec, single::SingleCodec};

/// An ordered list of values of one family
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedVec<E>(Vec<E>);

impl<E> TaggedVec<E> {
    /// Creates an empty list
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a value
    pub fn push<V: Into<E>>(&mut self, value: V) {
        self.0.push(value.into());
    }

    /// Iterates over the values in order
    pub fn iter(&self) -> slice::Iter<'_, E> {
        self.0.iter()
    }

    /// The number of values
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The values as a slice
    pub fn as_slice(&self) -> &[E] {
        &self.0
    }

    /// Unwraps the values
    pub fn into_inner(self) -> Vec<E> {
        self.0
    }
}

impl<E> Default for TaggedVec<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> From<Vec<E>> for TaggedVec<E> {
    fn from(values: Vec<E>) -> Self {
        Self(values)
    }
}

impl<E> FromIterator<E> for TaggedVec<E> {
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<E> Extend<E> for TaggedVec<E> {
    fn extend<T: IntoIterator<Item = E>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl<E> IntoIterator for TaggedVec<E> {
    type Item = E;
    type IntoIter = vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a TaggedVec<E> {
    type Item = &'a E;
    type IntoIter = slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<E> Serialize for TaggedVec<E>
where
    E: Family,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        SequenceCodec::with_config(E::registry(), &scope::config::<E>())
            .serialize_values(&self.0, serializer)
    }
}

impl<'de, E> Deserialize<'de> for TaggedVec<E>
where
    E: Family,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;

        SequenceCodec::with_config(E::registry(), &scope::config::<E>())
            .decode(value)
            .map(TaggedVec)
            .map_err(nested::<D::Error>)
    }
}

/// A single value of a family
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedValue<E>(pub E);

impl<E> TaggedValue<E> {
    /// Unwraps the value
    pub fn into_inner(self) -> E {
        self.0
    }
}

impl<E> From<E> for TaggedValue<E> {
    fn from(value: E) -> Self {
        Self(value)
    }
}

impl<E> Serialize for TaggedValue<E>
where
    E: Family,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let codec = SingleCodec::with_config(E::registry(), &scope::config::<E>());
        codec.seal(&self.0).serialize(serializer)
    }
}

impl<'de, E> Deserialize<'de> for TaggedValue<E>
where
    E: Family,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;

        SingleCodec::with_config(E::registry(), &scope::config::<E>())
            .decode(value)
            .map(TaggedValue)
            .map_err(nested::<D::Error>)
    }
}

fn nested<T: de::Error>(error: Error) -> T {
    T::custom(scope::fail(error))
}
