//! A builder for creating codec configurations

use crate::{
    config::{CodecConfig, DecodePolicy, EnvelopeKeys},
    error::Error,
};

/// A builder for creating a [`CodecConfig`]
#[derive(Debug, Clone, Default)]
pub struct CodecBuilder {
    tag_key: Option<String>,
    payload_key: Option<String>,
    policy: Option<DecodePolicy>,
}

impl CodecBuilder {
    /// Set the key holding the variant tag
    pub fn tag_key<S: AsRef<str>>(mut self, key: S) -> Self {
        self.tag_key = Some(key.as_ref().to_string());
        self
    }

    /// Set the key holding the variant payload
    pub fn payload_key<S: AsRef<str>>(mut self, key: S) -> Self {
        self.payload_key = Some(key.as_ref().to_string());
        self
    }

    /// Set both envelope keys at once
    pub fn keys(mut self, keys: EnvelopeKeys) -> Self {
        self.tag_key = Some(keys.tag);
        self.payload_key = Some(keys.payload);
        self
    }

    /// Set the sequence decode policy
    pub fn policy(mut self, policy: DecodePolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Drop undecodable sequence elements instead of failing
    pub fn skip_invalid(self) -> Self {
        self.policy(DecodePolicy::SkipInvalid)
    }

    /// Build the configuration
    pub fn build(self) -> Result<CodecConfig, Error> {
        let defaults = EnvelopeKeys::default();

        let config = CodecConfig {
            keys: EnvelopeKeys {
                tag: self.tag_key.unwrap_or(defaults.tag),
                payload: self.payload_key.unwrap_or(defaults.payload),
            },
            policy: self.policy.unwrap_or_default(),
        };

        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_defaults() -> anyhow::Result<()> {
        assert_eq!(CodecBuilder::default().build()?, CodecConfig::default());

        Ok(())
    }

    #[test]
    fn test_build_custom() -> anyhow::Result<()> {
        let config = CodecBuilder::default()
            .keys(EnvelopeKeys::metatype())
            .skip_invalid()
            .build()?;

        assert_eq!(config.keys.tag, "metatype");
        assert_eq!(config.keys.payload, "object");
        assert_eq!(config.policy, DecodePolicy::SkipInvalid);

        Ok(())
    }

    #[test]
    fn test_build_overrides_one_key() -> anyhow::Result<()> {
        let config = CodecBuilder::default().tag_key("kind").build()?;

        assert_eq!(config.keys, EnvelopeKeys::new("kind", "payload"));

        Ok(())
    }

    #[test]
    fn test_build_rejects_shared_key() {
        let result = CodecBuilder::default()
            .tag_key("body")
            .payload_key("body")
            .build();

        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }
}
