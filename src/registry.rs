//! The tag registry
//!
//! Every polymorphic family owns one [`Registry`]: a read-only map from the
//! string tag written in an envelope to the function that turns a payload
//! into a value of that family. Registries are assembled once through a
//! [`RegistryBuilder`] and never change afterwards, so a `&'static Registry`
//! can be shared across threads freely.

use core::fmt;
use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    capsule::Capsule,
    config::CodecConfig,
    error::Error,
    payload::{FieldError, Payload},
};

/// Builds a value of family `E` from the payload of an envelope
pub type DecodeFn<E> = fn(Payload) -> Result<E, FieldError>;

/// A value that knows the tag of its own concrete variant
pub trait Tagged {
    /// The tag of the concrete variant
    fn tag(&self) -> &'static str;
}

/// A polymorphic family with a process-wide registry
///
/// The family's [`Serialize`] impl writes the payload only; the envelope
/// codec writes the tag next to it.
pub trait Family: Tagged + Serialize + Sized + 'static {
    /// Human-readable family name, used in errors and logs
    const NAME: &'static str;

    /// The registry of every variant of the family
    fn registry() -> &'static Registry<Self>;

    /// The codec settings used for nested values read or written outside
    /// any codec, such as through `serde_json` directly
    fn config() -> CodecConfig {
        CodecConfig::default()
    }
}

/// A concrete variant of family `E`
pub trait Variant<E>: Capsule + DeserializeOwned {
    /// Converts the variant into a value of its family
    fn upcast(self) -> E;
}

/// Recovers a concrete variant from a value of its family
pub trait Narrow<V>: Sized {
    /// Returns the variant, or gives the value back if it is another variant
    fn narrow(self) -> Result<V, Self>;
}

/// Reads a payload as variant `V` of family `E`
///
/// This is the decode function registered for most variants.
pub fn decode_variant<E, V>(payload: Payload) -> Result<E, FieldError>
where
    V: Variant<E>,
{
    payload.decode::<V>().map(V::upcast)
}

/// A read-only map from tag to decode function
pub struct Registry<E> {
    family: &'static str,
    constructors: HashMap<&'static str, DecodeFn<E>>,
}

impl<E> Registry<E> {
    /// Starts building a registry for the named family
    pub fn builder(family: &'static str) -> RegistryBuilder<E> {
        RegistryBuilder {
            family,
            constructors: HashMap::new(),
            duplicates: Vec::new(),
        }
    }

    /// The name of the family this registry serves
    pub fn family(&self) -> &'static str {
        self.family
    }

    /// Returns the decode function registered for `tag`
    pub fn constructor_for(&self, tag: &str) -> Option<DecodeFn<E>> {
        self.constructors.get(tag).copied()
    }

    /// Whether `tag` is registered
    pub fn contains(&self, tag: &str) -> bool {
        self.constructors.contains_key(tag)
    }

    /// Returns the registered tags in sorted order
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags: Vec<_> = self.constructors.keys().copied().collect();
        tags.sort_unstable();
        tags
    }

    /// The number of registered variants
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// Whether the registry has no variants at all
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }

    /// Returns a builder seeded with every entry of this registry
    pub fn to_builder(&self) -> RegistryBuilder<E> {
        RegistryBuilder {
            family: self.family,
            constructors: self.constructors.clone(),
            duplicates: Vec::new(),
        }
    }
}

impl<E> Registry<E>
where
    E: Tagged,
{
    /// Returns the tag to write for `value`
    ///
    /// # Panics
    ///
    /// Panics if the variant of `value` was never registered. Every variant
    /// that can be constructed must be registered with its family, so this is
    /// a programming error rather than bad input.
    pub fn tag_for(&self, value: &E) -> &'static str {
        let tag = value.tag();
        assert!(
            self.contains(tag),
            "tag `{tag}` is not registered for the {} family",
            self.family
        );

        tag
    }
}

impl<E> Clone for Registry<E> {
    fn clone(&self) -> Self {
        Self {
            family: self.family,
            constructors: self.constructors.clone(),
        }
    }
}

impl<E> fmt::Debug for Registry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("family", &self.family)
            .field("tags", &self.tags())
            .finish()
    }
}

/// Collects variants for a [`Registry`]
pub struct RegistryBuilder<E> {
    family: &'static str,
    constructors: HashMap<&'static str, DecodeFn<E>>,
    duplicates: Vec<&'static str>,
}

impl<E> RegistryBuilder<E> {
    /// Registers a decode function under `tag`
    pub fn register(mut self, tag: &'static str, decode: DecodeFn<E>) -> Self {
        if self.constructors.insert(tag, decode).is_some() {
            self.duplicates.push(tag);
        }

        self
    }

    /// Registers variant `V` under its capsule tag
    pub fn register_variant<V>(self) -> Self
    where
        V: Variant<E>,
    {
        self.register(V::TAG, decode_variant::<E, V>)
    }

    /// Finishes the registry, rejecting any tag registered twice
    pub fn build(self) -> Result<Registry<E>, Error> {
        if let Some(tag) = self.duplicates.first() {
            return Err(Error::DuplicateTag {
                tag: tag.to_string(),
                family: self.family,
            });
        }

        tracing::debug!(
            family = self.family,
            variants = self.constructors.len(),
            "built registry"
        );

        Ok(Registry {
            family: self.family,
            constructors: self.constructors,
        })
    }
}

impl<E> fmt::Debug for RegistryBuilder<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<_> = self.constructors.keys().collect();
        tags.sort_unstable();

        f.debug_struct("RegistryBuilder")
            .field("family", &self.family)
            .field("tags", &tags)
            .field("duplicates", &self.duplicates)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    #[serde(untagged)]
    enum Shape {
        Circle(Circle),
        Square(Square),
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Circle {
        radius: f64,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Square {
        side: f64,
    }

    impl Tagged for Shape {
        fn tag(&self) -> &'static str {
            match self {
                Shape::Circle(_) => Circle::TAG,
                Shape::Square(_) => Square::TAG,
            }
        }
    }

    impl Capsule for Circle {
        const TAG: &'static str = "circle";
    }

    impl Capsule for Square {
        const TAG: &'static str = "square";
    }

    impl Variant<Shape> for Circle {
        fn upcast(self) -> Shape {
            Shape::Circle(self)
        }
    }

    impl Variant<Shape> for Square {
        fn upcast(self) -> Shape {
            Shape::Square(self)
        }
    }

    fn circles_only() -> Registry<Shape> {
        Registry::builder("shape")
            .register_variant::<Circle>()
            .build()
            .unwrap()
    }

    #[test]
    fn test_lookup_by_tag() -> anyhow::Result<()> {
        let registry = Registry::builder("shape")
            .register_variant::<Circle>()
            .register_variant::<Square>()
            .build()?;

        assert_eq!(registry.family(), "shape");
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.tags(), vec!["circle", "square"]);

        let decode = registry.constructor_for("square").unwrap();
        let shape = decode(Payload::new(json!({ "side": 2.0 })))?;

        assert_eq!(shape, Shape::Square(Square { side: 2.0 }));
        assert_eq!(registry.tag_for(&shape), "square");

        Ok(())
    }

    #[test]
    fn test_unknown_tag_has_no_constructor() {
        let registry = circles_only();

        assert!(registry.constructor_for("triangle").is_none());
        assert!(registry.constructor_for("").is_none());
        assert!(registry.constructor_for("Circle").is_none());
        assert!(!registry.contains("square"));
    }

    #[test]
    fn test_duplicate_tag_is_rejected() {
        let result = Registry::<Shape>::builder("shape")
            .register_variant::<Circle>()
            .register("circle", decode_variant::<Shape, Square>)
            .build();

        assert!(matches!(
            result,
            Err(Error::DuplicateTag { ref tag, family: "shape" }) if tag == "circle"
        ));
    }

    #[test]
    fn test_to_builder_extends_a_registry() -> anyhow::Result<()> {
        let registry = circles_only().to_builder().register_variant::<Square>().build()?;

        assert!(registry.contains("circle"));
        assert!(registry.contains("square"));

        let again = registry.to_builder().register_variant::<Square>().build();
        assert!(matches!(again, Err(Error::DuplicateTag { .. })));

        Ok(())
    }

    #[test]
    fn test_constructor_reports_field_errors() {
        let decode = circles_only().constructor_for("circle").unwrap();

        assert!(matches!(
            decode(Payload::new(json!({}))),
            Err(FieldError::MissingRequiredField { ref field }) if field == "radius"
        ));
    }

    #[test]
    #[should_panic(expected = "tag `square` is not registered for the shape family")]
    fn test_tag_for_unregistered_variant_panics() {
        circles_only().tag_for(&Shape::Square(Square { side: 1.0 }));
    }

    #[test]
    fn test_debug_lists_tags() {
        assert_eq!(
            format!("{:?}", circles_only()),
            r#"Registry { family: "shape", tags: ["circle"] }"#
        );
    }
}
