//! The tagged single-value codec

use std::any::type_name;

use serde::Serialize;
use serde_json::Value;

use crate::{
    config::{CodecConfig, EnvelopeKeys},
    envelope::{EnvelopeCodec, Sealed},
    error::Error,
    registry::{Narrow, Registry, Tagged},
};

/// Encodes and decodes exactly one value as an envelope object
#[derive(Debug, Clone)]
pub struct SingleCodec<'r, E> {
    envelope: EnvelopeCodec<'r, E>,
}

impl<'r, E> SingleCodec<'r, E>
where
    E: Tagged + Serialize,
{
    /// Creates a codec using the default envelope keys
    pub fn new(registry: &'r Registry<E>) -> Self {
        Self {
            envelope: EnvelopeCodec::new(registry),
        }
    }

    /// Creates a codec from a configuration
    ///
    /// The policy applies to sequences nested inside the value.
    pub fn with_config(registry: &'r Registry<E>, config: &CodecConfig) -> Self {
        Self {
            envelope: EnvelopeCodec::with_config(registry, config),
        }
    }

    /// The envelope keys in use
    pub fn keys(&self) -> &EnvelopeKeys {
        self.envelope.keys()
    }

    pub(crate) fn seal<'a>(&'a self, value: &'a E) -> Sealed<'a, E> {
        self.envelope.seal(value)
    }

    /// Encodes the value as an envelope object
    pub fn encode(&self, value: &E) -> Result<Value, Error> {
        self.envelope.encode(value)
    }

    /// Encodes the value as JSON text
    pub fn encode_string(&self, value: &E) -> Result<String, Error> {
        let sealed = self.seal(value);
        serde_json::to_string(&sealed).map_err(|source| Error::Encode {
            tag: sealed.tag,
            source,
        })
    }

    /// Decodes an envelope object
    pub fn decode(&self, value: Value) -> Result<E, Error> {
        self.envelope.decode(value)
    }

    /// Decodes JSON text holding an envelope object
    pub fn decode_str(&self, text: &str) -> Result<E, Error> {
        self.decode(serde_json::from_str(text)?)
    }

    /// Decodes an envelope object and narrows it to variant `V`
    ///
    /// Fails with [`Error::InvalidVariant`] when the envelope holds a
    /// different variant of the family.
    pub fn decode_as<V>(&self, value: Value) -> Result<V, Error>
    where
        E: Narrow<V>,
    {
        let decoded = self.decode(value)?;
        let tag = decoded.tag();

        decoded.narrow().map_err(|_| Error::InvalidVariant {
            tag: tag.to_string(),
            expected: type_name::<V>().to_string(),
        })
    }
}
