//! Payload reading
//!
//! A [`Payload`] is the untyped body of an envelope. It is handed to the
//! decoder registered for the envelope's tag, which reads it through its
//! own [`Deserialize`][serde::Deserialize] impl.
//!
//! Reading goes through [`FieldError`] rather than an opaque message, so a
//! missing field and a field of the wrong type stay distinguishable all the
//! way up to the caller.

use std::fmt::Display;

use serde::{
    de::{
        self,
        value::{MapDeserializer, SeqDeserializer, StringDeserializer},
        DeserializeOwned, Expected, IntoDeserializer, Unexpected, Visitor,
    },
    forward_to_deserialize_any, Deserialize, Deserializer,
};
use serde_json::Value;
use thiserror::Error;

use crate::error::Error as CodecError;

/// A field-level failure raised while reading a payload
#[derive(Debug, Error)]
pub enum FieldError {
    /// A required field is absent
    #[error("missing required field `{field}`")]
    MissingRequiredField {
        /// The field name
        field: String,
    },

    /// A field holds a value of the wrong type
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        /// The expected type
        expected: String,
        /// What was found instead
        found: String,
    },

    /// The payload carries a field its variant does not have
    #[error("unknown field `{field}`, expected one of {expected:?}")]
    UnknownField {
        /// The field name
        field: String,
        /// The fields the variant does have
        expected: Vec<&'static str>,
    },

    /// A tagged value nested in the payload failed to decode
    #[error("{source}")]
    Nested {
        /// The failure of the nested value
        source: Box<CodecError>,
    },

    /// Any other failure reported by a variant's decoder
    #[error("{msg}")]
    Custom {
        /// Error message
        msg: String,
    },
}

impl de::Error for FieldError {
    fn custom<T: Display>(msg: T) -> Self {
        FieldError::Custom {
            msg: msg.to_string(),
        }
    }

    fn invalid_type(unexp: Unexpected<'_>, exp: &dyn Expected) -> Self {
        FieldError::TypeMismatch {
            expected: exp.to_string(),
            found: unexp.to_string(),
        }
    }

    fn invalid_value(unexp: Unexpected<'_>, exp: &dyn Expected) -> Self {
        FieldError::TypeMismatch {
            expected: exp.to_string(),
            found: unexp.to_string(),
        }
    }

    fn invalid_length(len: usize, exp: &dyn Expected) -> Self {
        FieldError::TypeMismatch {
            expected: exp.to_string(),
            found: format!("a sequence of length {len}"),
        }
    }

    fn unknown_variant(variant: &str, expected: &'static [&'static str]) -> Self {
        FieldError::TypeMismatch {
            expected: format!("one of {expected:?}"),
            found: format!("`{variant}`"),
        }
    }

    fn unknown_field(field: &str, expected: &'static [&'static str]) -> Self {
        FieldError::UnknownField {
            field: field.to_string(),
            expected: expected.to_vec(),
        }
    }

    fn missing_field(field: &'static str) -> Self {
        FieldError::MissingRequiredField {
            field: field.to_string(),
        }
    }
}

/// The body of an envelope, read by the decoder registered for its tag
#[derive(Debug, Clone, PartialEq)]
pub struct Payload(Value);

impl Payload {
    /// Wraps a raw payload
    pub fn new(value: Value) -> Self {
        Payload(value)
    }

    /// Returns the raw payload
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Unwraps the raw payload
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Reads the payload as `T`
    pub fn decode<T>(self) -> Result<T, FieldError>
    where
        T: DeserializeOwned,
    {
        T::deserialize(self)
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Payload(value)
    }
}

impl<'de> Deserializer<'de> for Payload {
    type Error = FieldError;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.0 {
            Value::Null => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    visitor.visit_u64(u)
                } else if let Some(i) = n.as_i64() {
                    visitor.visit_i64(i)
                } else if let Some(f) = n.as_f64() {
                    visitor.visit_f64(f)
                } else {
                    Err(de::Error::custom(format!("unrepresentable number {n}")))
                }
            }
            Value::String(s) => visitor.visit_string(s),
            Value::Array(items) => {
                let mut seq: SeqDeserializer<_, FieldError> =
                    SeqDeserializer::new(items.into_iter().map(Payload));
                let value = visitor.visit_seq(&mut seq)?;
                seq.end()?;
                Ok(value)
            }
            Value::Object(fields) => {
                let mut map: MapDeserializer<'_, _, FieldError> =
                    MapDeserializer::new(fields.into_iter().map(|(k, v)| (k, Payload(v))));
                let value = visitor.visit_map(&mut map)?;
                map.end()?;
                Ok(value)
            }
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        if self.0.is_null() {
            visitor.visit_none()
        } else {
            visitor.visit_some(self)
        }
    }

    fn deserialize_newtype_struct<V>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        if self.0.is_object() {
            self.deserialize_any(visitor)
        } else {
            Err(de::Error::invalid_type(unexpected(&self.0), &visitor))
        }
    }

    // Only unit variants, written as their name, are supported.
    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.0 {
            Value::String(variant) => {
                let variant: StringDeserializer<FieldError> = variant.into_deserializer();
                visitor.visit_enum(variant)
            }
            other => Err(de::Error::invalid_type(
                unexpected(&other),
                &"a variant name",
            )),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map identifier
        ignored_any
    }
}

impl<'de> IntoDeserializer<'de, FieldError> for Payload {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self::Deserializer {
        self
    }
}

impl<'de> Deserialize<'de> for Payload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Payload)
    }
}

/// Describes a raw value the way serde reports unexpected input
pub(crate) fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                Unexpected::Unsigned(u)
            } else if let Some(i) = n.as_i64() {
                Unexpected::Signed(i)
            } else {
                Unexpected::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}
