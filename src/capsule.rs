//! Capsule type utilities.
//!
//! Capsule types are a pattern where you associate a string tag to a type
//! and write the tag on the outside of the payload. The codec wraps every
//! variant of a family in such a capsule, so the reader learns which variant
//! it is looking at before it touches the payload:
//!
//! ```javascript
//! {"tag": "button", "payload": {"label": "OK"}}
//! {"tag": "base", "payload": {}}
//! {
//!   "tag": "view",
//!   "payload": {
//!     "children": [
//!       {"tag": "label", "payload": {"text": "Hi"}}, // ─┐
//!       {"tag": "base", "payload": {}}               // ─┴─ nested capsules
//!     ]
//!   }
//! }
//! ```
//!
//! Keeping the tag out of the payload means no variant needs a `type` field
//! of its own, and the payload of one variant never has to be distinguishable
//! from the payload of another by shape alone.

/// The primary capsule trait
///
/// # Examples
///
/// ```rust
/// # use rs_metacodec::{
/// #     capsule::Capsule,
/// #     envelope::EnvelopeCodec,
/// #     registry::{Registry, Tagged, Variant},
/// # };
/// # use serde::{Deserialize, Serialize};
/// # use serde_json::json;
/// #
/// #[derive(Debug, PartialEq, Serialize)]
/// #[serde(untagged)]
/// enum Shape {
///     Circle(Circle),
/// }
///
/// #[derive(Debug, PartialEq, Serialize, Deserialize)]
/// struct Circle {
///     radius: f64,
/// }
///
/// impl Capsule for Circle {
///     const TAG: &'static str = "circle";
/// }
///
/// impl Variant<Shape> for Circle {
///     fn upcast(self) -> Shape {
///         Shape::Circle(self)
///     }
/// }
///
/// impl Tagged for Shape {
///     fn tag(&self) -> &'static str {
///         match self {
///             Shape::Circle(_) => Circle::TAG,
///         }
///     }
/// }
///
/// let registry = Registry::<Shape>::builder("shape")
///     .register_variant::<Circle>()
///     .build()?;
/// assert!(registry.contains(Circle::TAG));
///
/// let codec = EnvelopeCodec::new(&registry);
/// let circle = Shape::Circle(Circle { radius: 1.5 });
///
/// assert_eq!(
///     codec.encode(&circle)?,
///     json!({ "tag": "circle", "payload": { "radius": 1.5 } })
/// );
/// assert_eq!(codec.decode(codec.encode(&circle)?)?, circle);
/// # Ok::<_, rs_metacodec::Error>(())
/// ```
pub trait Capsule {
    /// The tag to use when constructing or matching on the capsule
    const TAG: &'static str;
}
