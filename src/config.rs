//! Codec configuration

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The key under which the envelope stores the tag
pub const DEFAULT_TAG_KEY: &str = "tag";

/// The key under which the envelope stores the payload
pub const DEFAULT_PAYLOAD_KEY: &str = "payload";

/// The names of the two envelope keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeKeys {
    /// Key holding the variant tag
    pub tag: String,
    /// Key holding the variant payload
    pub payload: String,
}

impl Default for EnvelopeKeys {
    fn default() -> Self {
        Self {
            tag: DEFAULT_TAG_KEY.to_string(),
            payload: DEFAULT_PAYLOAD_KEY.to_string(),
        }
    }
}

impl EnvelopeKeys {
    /// Creates a pair of envelope keys
    pub fn new<T: AsRef<str>, P: AsRef<str>>(tag: T, payload: P) -> Self {
        Self {
            tag: tag.as_ref().to_string(),
            payload: payload.as_ref().to_string(),
        }
    }

    /// The `metatype`/`object` keys used by older layout documents
    pub fn metatype() -> Self {
        Self::new("metatype", "object")
    }

    /// Checks that the keys can address two distinct entries
    pub fn validate(&self) -> Result<(), Error> {
        if self.tag.is_empty() || self.payload.is_empty() {
            return Err(Error::InvalidConfig {
                msg: "envelope keys must not be empty".to_string(),
            });
        }

        if self.tag == self.payload {
            return Err(Error::InvalidConfig {
                msg: format!("tag and payload share the key `{}`", self.tag),
            });
        }

        Ok(())
    }
}

/// What a sequence decode does with an element that fails to decode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodePolicy {
    /// Abort on the first bad element
    #[default]
    FailFast,
    /// Drop bad elements, keeping a record of each one
    SkipInvalid,
}

/// Settings shared by the envelope, sequence and single codecs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodecConfig {
    /// Envelope key names
    pub keys: EnvelopeKeys,
    /// Sequence decode policy
    pub policy: DecodePolicy,
}

impl CodecConfig {
    /// Checks the configuration for unusable settings
    pub fn validate(&self) -> Result<(), Error> {
        self.keys.validate()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = CodecConfig::default();

        assert_eq!(config.keys.tag, "tag");
        assert_eq!(config.keys.payload, "payload");
        assert_eq!(config.policy, DecodePolicy::FailFast);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_fills_in_defaults() -> anyhow::Result<()> {
        let config: CodecConfig = serde_json::from_value(json!({ "policy": "skip_invalid" }))?;

        assert_eq!(config.keys, EnvelopeKeys::default());
        assert_eq!(config.policy, DecodePolicy::SkipInvalid);

        Ok(())
    }

    #[test]
    fn test_rejects_clashing_keys() {
        assert!(matches!(
            EnvelopeKeys::new("kind", "kind").validate(),
            Err(Error::InvalidConfig { .. })
        ));
        assert!(matches!(
            EnvelopeKeys::new("", "payload").validate(),
            Err(Error::InvalidConfig { .. })
        ));
        assert!(EnvelopeKeys::metatype().validate().is_ok());
    }
}
