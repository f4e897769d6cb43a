//! The tagged sequence codec

use serde::{ser::SerializeSeq, Serialize, Serializer};
use serde_json::Value;

use crate::{
    config::{CodecConfig, DecodePolicy, EnvelopeKeys},
    envelope::EnvelopeCodec,
    error::Error,
    registry::{Registry, Tagged},
};

/// An element dropped while decoding under [`DecodePolicy::SkipInvalid`]
#[derive(Debug)]
pub struct Rejected {
    /// The position of the element in the input
    pub index: usize,
    /// Why the element was dropped
    pub error: Error,
}

/// The outcome of a sequence decode
#[derive(Debug)]
pub struct SequenceReport<E> {
    /// The decoded elements, in input order
    pub values: Vec<E>,
    /// The dropped elements, in input order
    pub rejected: Vec<Rejected>,
}

impl<E> SequenceReport<E> {
    /// Whether every element decoded
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Encodes and decodes ordered sequences of envelopes
#[derive(Debug, Clone)]
pub struct SequenceCodec<'r, E> {
    envelope: EnvelopeCodec<'r, E>,
}

impl<'r, E> SequenceCodec<'r, E>
where
    E: Tagged + Serialize,
{
    /// Creates a fail-fast codec using the default envelope keys
    pub fn new(registry: &'r Registry<E>) -> Self {
        Self {
            envelope: EnvelopeCodec::new(registry),
        }
    }

    /// Creates a codec from a configuration
    ///
    /// The keys and policy also apply to every sequence nested inside an
    /// element.
    pub fn with_config(registry: &'r Registry<E>, config: &CodecConfig) -> Self {
        Self {
            envelope: EnvelopeCodec::with_config(registry, config),
        }
    }

    /// Replaces the decode policy
    pub fn with_policy(self, policy: DecodePolicy) -> Self {
        Self {
            envelope: self.envelope.with_policy(policy),
        }
    }

    /// The decode policy in use
    pub fn policy(&self) -> DecodePolicy {
        self.envelope.config().policy
    }

    /// The envelope keys in use
    pub fn keys(&self) -> &EnvelopeKeys {
        self.envelope.keys()
    }

    /// Encodes the values as an array of envelopes, in order
    pub fn encode(&self, values: &[E]) -> Result<Value, Error> {
        values
            .iter()
            .enumerate()
            .map(|(index, value)| self.envelope.encode(value).map_err(|e| e.at(index)))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }

    /// Encodes the values as JSON text
    pub fn encode_string(&self, values: &[E]) -> Result<String, Error> {
        Ok(serde_json::to_string(&Sealing {
            codec: self,
            values,
        })?)
    }

    /// Decodes an array of envelopes, in order
    ///
    /// Under [`DecodePolicy::FailFast`] the first bad element aborts the
    /// decode. Under [`DecodePolicy::SkipInvalid`] bad elements are dropped
    /// and listed in the report.
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(family = self.envelope.registry().family(), policy = ?self.policy())
    )]
    pub fn decode_report(&self, value: Value) -> Result<SequenceReport<E>, Error> {
        let items = match value {
            Value::Array(items) => items,
            other => return Err(Error::type_mismatch("<sequence>", "an array of envelopes", &other)),
        };

        let mut report = SequenceReport {
            values: Vec::with_capacity(items.len()),
            rejected: Vec::new(),
        };

        for (index, item) in items.into_iter().enumerate() {
            match self.envelope.decode(item) {
                Ok(value) => {
                    tracing::trace!(index, tag = value.tag(), "decoded element");
                    report.values.push(value);
                }
                Err(error) => match self.policy() {
                    DecodePolicy::FailFast => return Err(error.at(index)),
                    DecodePolicy::SkipInvalid => {
                        tracing::warn!(index, %error, "skipping undecodable element");
                        report.rejected.push(Rejected { index, error });
                    }
                },
            }
        }

        Ok(report)
    }

    /// Decodes an array of envelopes, in order
    pub fn decode(&self, value: Value) -> Result<Vec<E>, Error> {
        self.decode_report(value).map(|report| report.values)
    }

    /// Decodes JSON text holding an array of envelopes
    pub fn decode_str(&self, text: &str) -> Result<Vec<E>, Error> {
        self.decode(serde_json::from_str(text)?)
    }

    /// Decodes JSON bytes holding an array of envelopes
    pub fn decode_slice(&self, bytes: &[u8]) -> Result<Vec<E>, Error> {
        self.decode(serde_json::from_slice(bytes)?)
    }

    pub(crate) fn serialize_values<S>(&self, values: &[E], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(values.len()))?;
        for value in values {
            seq.serialize_element(&self.envelope.seal(value))?;
        }

        seq.end()
    }
}

struct Sealing<'a, 'r, E> {
    codec: &'a SequenceCodec<'r, E>,
    values: &'a [E],
}

impl<E> Serialize for Sealing<'_, '_, E>
where
    E: Tagged + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.codec.serialize_values(self.values, serializer)
    }
}
