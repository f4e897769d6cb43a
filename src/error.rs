//! Error types for the codec

use serde_json::Value;
use thiserror::Error;

use crate::payload::{unexpected, FieldError};

/// Error types for the codec
#[derive(Error, Debug)]
pub enum Error {
    /// The envelope names a tag that is not in the registry
    #[error("unknown tag `{tag}` for the {family} family")]
    UnknownTag {
        /// The tag read from the envelope
        tag: String,
        /// The family whose registry was consulted
        family: &'static str,
    },

    /// The payload does not have the shape of the variant named by its tag
    #[error("malformed payload for tag `{tag}`: {source}")]
    MalformedPayload {
        /// The tag read from the envelope
        tag: String,
        /// The field-level failure raised while reading the payload
        #[source]
        source: FieldError,
    },

    /// A decoded value could not be narrowed to the requested variant
    #[error("value decoded under tag `{tag}` is not {expected}")]
    InvalidVariant {
        /// The tag read from the envelope
        tag: String,
        /// What the caller asked for
        expected: String,
    },

    /// A field of the envelope itself is missing
    #[error("missing required field `{field}`")]
    MissingRequiredField {
        /// The missing key
        field: String,
    },

    /// A field of the envelope itself has the wrong type
    #[error("field `{field}` has the wrong type: expected {expected}, found {found}")]
    TypeMismatch {
        /// The offending key, or `<envelope>`/`<sequence>` for the container
        field: String,
        /// The expected type
        expected: String,
        /// What was found instead
        found: String,
    },

    /// An element of a sequence failed to encode or decode
    #[error("element {index}: {source}")]
    Element {
        /// The position of the element in the sequence
        index: usize,
        /// The failure for that element
        #[source]
        source: Box<Error>,
    },

    /// Two variants of one family were registered under the same tag
    #[error("tag `{tag}` is registered more than once for the {family} family")]
    DuplicateTag {
        /// The duplicated tag
        tag: String,
        /// The family being built
        family: &'static str,
    },

    /// The codec configuration is unusable
    #[error("invalid codec configuration: {msg}")]
    InvalidConfig {
        /// Error message
        msg: String,
    },

    /// A variant could not be serialized into a payload
    #[error("failed to encode a `{tag}` value: {source}")]
    Encode {
        /// The tag of the value being encoded
        tag: &'static str,
        /// The serializer failure
        #[source]
        source: serde_json::Error,
    },

    /// The input text is not JSON
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Wraps the error with the index of the sequence element it belongs to
    pub(crate) fn at(self, index: usize) -> Self {
        Error::Element {
            index,
            source: Box::new(self),
        }
    }

    pub(crate) fn type_mismatch(field: &str, expected: &str, found: &Value) -> Self {
        Error::TypeMismatch {
            field: field.to_string(),
            expected: expected.to_string(),
            found: unexpected(found).to_string(),
        }
    }

    /// Returns the innermost error, looking through sequence positions and
    /// nested values
    pub fn root(&self) -> &Error {
        let mut error = self;
        loop {
            error = match error {
                Error::Element { source, .. } => &**source,
                Error::MalformedPayload {
                    source: FieldError::Nested { source },
                    ..
                } => &**source,
                _ => return error,
            };
        }
    }

    /// Returns the index of the sequence element that failed, if any
    pub fn index(&self) -> Option<usize> {
        match self {
            Error::Element { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// Returns the position of the failure from the outermost sequence
    /// inwards, one index per nesting level
    pub fn path(&self) -> Vec<usize> {
        let mut path = Vec::new();
        let mut error = self;
        loop {
            error = match error {
                Error::Element { index, source } => {
                    path.push(*index);
                    &**source
                }
                Error::MalformedPayload {
                    source: FieldError::Nested { source },
                    ..
                } => &**source,
                _ => return path,
            };
        }
    }

    /// Returns the tag of the innermost value involved in the failure, if any
    pub fn tag(&self) -> Option<&str> {
        let mut innermost = None;
        let mut error = self;
        loop {
            error = match error {
                Error::Element { source, .. } => &**source,
                Error::MalformedPayload { tag, source } => {
                    innermost = Some(tag.as_str());
                    match source {
                        FieldError::Nested { source } => &**source,
                        _ => return innermost,
                    }
                }
                Error::UnknownTag { tag, .. }
                | Error::InvalidVariant { tag, .. }
                | Error::DuplicateTag { tag, .. } => return Some(tag.as_str()),
                Error::Encode { tag, .. } => return Some(*tag),
                _ => return innermost,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_root_and_index_look_through_elements() {
        let error = Error::UnknownTag {
            tag: "slider".to_string(),
            family: "layout node",
        }
        .at(3);

        assert_eq!(error.index(), Some(3));
        assert_eq!(error.tag(), Some("slider"));
        assert!(matches!(error.root(), Error::UnknownTag { .. }));
        assert_eq!(error.path(), vec![3]);
        assert_eq!(
            error.to_string(),
            "element 3: unknown tag `slider` for the layout node family"
        );
    }

    #[test]
    fn test_root_looks_through_nested_values() {
        let child = Error::MalformedPayload {
            tag: "button".to_string(),
            source: FieldError::MissingRequiredField {
                field: "label".to_string(),
            },
        };
        let error = Error::MalformedPayload {
            tag: "view".to_string(),
            source: FieldError::Nested {
                source: Box::new(child.at(2)),
            },
        }
        .at(0);

        assert_eq!(error.index(), Some(0));
        assert_eq!(error.path(), vec![0, 2]);
        assert_eq!(error.tag(), Some("button"));
        assert!(matches!(
            error.root(),
            Error::MalformedPayload {
                source: FieldError::MissingRequiredField { .. },
                ..
            }
        ));
        assert_eq!(
            error.to_string(),
            "element 0: malformed payload for tag `view`: element 2: malformed payload for tag `button`: missing required field `label`"
        );
    }

    #[test]
    fn test_type_mismatch_describes_the_found_value() {
        let error = Error::type_mismatch("tag", "a string tag", &json!(7));

        assert_eq!(
            error.to_string(),
            "field `tag` has the wrong type: expected a string tag, found integer `7`"
        );
        assert_eq!(error.index(), None);
        assert_eq!(error.tag(), None);
    }
}
