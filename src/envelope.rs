//! The tagged envelope codec
//!
//! An envelope is a two-entry object: the tag of a variant, and the payload
//! that variant serializes to.
//!
//! ```javascript
//! {"tag": "button", "payload": {"label": "OK"}}
//! ```
//!
//! Encoding asks the registry for the tag and lets the value serialize its
//! own payload. Decoding reads the tag first, looks up the decoder
//! registered for it, and only then reads the payload. Tagged values nested
//! inside a payload are read and written with the same keys and policy as
//! the envelope around them.

use serde::{ser::SerializeMap, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::{
    config::{CodecConfig, DecodePolicy, EnvelopeKeys},
    error::Error,
    payload::{FieldError, Payload},
    registry::{Registry, Tagged},
    scope,
};

/// A tag and its still-undecoded payload
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    /// The variant tag
    pub tag: String,
    /// The variant payload
    pub payload: Value,
}

impl Envelope {
    /// Creates an envelope
    pub fn new<S: Into<String>>(tag: S, payload: Value) -> Self {
        Self {
            tag: tag.into(),
            payload,
        }
    }

    /// Splits a raw envelope object into its tag and payload
    ///
    /// Entries other than the two envelope keys are ignored.
    pub fn from_value(value: Value, keys: &EnvelopeKeys) -> Result<Self, Error> {
        let mut fields = match value {
            Value::Object(fields) => fields,
            other => return Err(Error::type_mismatch("<envelope>", "an envelope object", &other)),
        };

        let tag = match fields.remove(&keys.tag) {
            Some(Value::String(tag)) => tag,
            Some(other) => return Err(Error::type_mismatch(&keys.tag, "a string tag", &other)),
            None => {
                return Err(Error::MissingRequiredField {
                    field: keys.tag.clone(),
                })
            }
        };

        let Some(payload) = fields.remove(&keys.payload) else {
            return Err(Error::MissingRequiredField {
                field: keys.payload.clone(),
            });
        };

        Ok(Self { tag, payload })
    }

    /// Joins the tag and payload into a raw envelope object
    pub fn into_value(self, keys: &EnvelopeKeys) -> Value {
        let mut fields = Map::with_capacity(2);
        fields.insert(keys.tag.clone(), Value::String(self.tag));
        fields.insert(keys.payload.clone(), self.payload);

        Value::Object(fields)
    }
}

/// A value serialized together with its tag
pub(crate) struct Sealed<'a, E> {
    pub(crate) config: &'a CodecConfig,
    pub(crate) tag: &'static str,
    pub(crate) value: &'a E,
}

impl<E> Serialize for Sealed<'_, E>
where
    E: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let keys = &self.config.keys;

        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(&keys.tag, self.tag)?;
        scope::enter(self.config, || map.serialize_entry(&keys.payload, self.value)).0?;
        map.end()
    }
}

/// Encodes and decodes single envelopes against a registry
#[derive(Debug, Clone)]
pub struct EnvelopeCodec<'r, E> {
    registry: &'r Registry<E>,
    config: CodecConfig,
}

impl<'r, E> EnvelopeCodec<'r, E>
where
    E: Tagged + Serialize,
{
    /// Creates a codec using the default envelope keys
    pub fn new(registry: &'r Registry<E>) -> Self {
        Self::with_keys(registry, EnvelopeKeys::default())
    }

    /// Creates a codec using the given envelope keys
    pub fn with_keys(registry: &'r Registry<E>, keys: EnvelopeKeys) -> Self {
        Self::with_config(
            registry,
            &CodecConfig {
                keys,
                ..Default::default()
            },
        )
    }

    /// Creates a codec from a configuration
    ///
    /// The policy is applied to sequences nested inside payloads.
    pub fn with_config(registry: &'r Registry<E>, config: &CodecConfig) -> Self {
        Self {
            registry,
            config: config.clone(),
        }
    }

    /// Replaces the policy applied to nested sequences
    pub fn with_policy(mut self, policy: DecodePolicy) -> Self {
        self.config.policy = policy;
        self
    }

    /// The registry this codec decodes against
    pub fn registry(&self) -> &'r Registry<E> {
        self.registry
    }

    /// The envelope keys this codec reads and writes
    pub fn keys(&self) -> &EnvelopeKeys {
        &self.config.keys
    }

    /// The configuration this codec runs with
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub(crate) fn seal<'a>(&'a self, value: &'a E) -> Sealed<'a, E> {
        Sealed {
            config: &self.config,
            tag: self.registry.tag_for(value),
            value,
        }
    }

    /// Encodes a value as an envelope object
    pub fn encode(&self, value: &E) -> Result<Value, Error> {
        let sealed = self.seal(value);
        serde_json::to_value(&sealed).map_err(|source| Error::Encode {
            tag: sealed.tag,
            source,
        })
    }

    /// Encodes a value as an [`Envelope`]
    pub fn encode_envelope(&self, value: &E) -> Result<Envelope, Error> {
        let tag = self.registry.tag_for(value);
        let (payload, _) = scope::enter(&self.config, || serde_json::to_value(value));
        let payload = payload.map_err(|source| Error::Encode { tag, source })?;

        Ok(Envelope::new(tag, payload))
    }

    /// Decodes an envelope object
    pub fn decode(&self, value: Value) -> Result<E, Error> {
        self.decode_envelope(Envelope::from_value(value, &self.config.keys)?)
    }

    /// Decodes an already split [`Envelope`]
    pub fn decode_envelope(&self, envelope: Envelope) -> Result<E, Error> {
        let Envelope { tag, payload } = envelope;

        let Some(decode) = self.registry.constructor_for(&tag) else {
            return Err(Error::UnknownTag {
                tag,
                family: self.registry.family(),
            });
        };

        let value = match scope::enter(&self.config, || decode(Payload::new(payload))) {
            (Ok(value), _) => value,
            (Err(_), Some(nested)) => {
                return Err(Error::MalformedPayload {
                    tag,
                    source: FieldError::Nested {
                        source: Box::new(nested),
                    },
                })
            }
            (Err(source), None) => return Err(Error::MalformedPayload { tag, source }),
        };

        if value.tag() != tag {
            return Err(Error::InvalidVariant {
                expected: format!("a `{tag}` variant"),
                tag,
            });
        }

        Ok(value)
    }
}
