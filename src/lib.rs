#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![deny(unreachable_pub)]

//! rs-metacodec
//!
//! Tag-directed serialization for families of polymorphic values. Each
//! value is written as an envelope carrying the tag of its concrete variant
//! next to its payload, and read back by looking the tag up in the family's
//! registry before the payload is touched.
//!
//! ```rust
//! # use rs_metacodec::{layout::{self, Base, Button, Node}, sequence::SequenceCodec};
//! # use serde_json::json;
//! let codec = SequenceCodec::new(layout::registry());
//! let nodes: Vec<Node> = vec![Base::default().into(), Button::new("OK").into()];
//!
//! let encoded = codec.encode(&nodes)?;
//! assert_eq!(
//!     encoded,
//!     json!([
//!         { "tag": "base", "payload": {} },
//!         { "tag": "button", "payload": { "label": "OK" } }
//!     ])
//! );
//!
//! assert_eq!(codec.decode(encoded)?, nodes);
//! # Ok::<_, rs_metacodec::error::Error>(())
//! ```

pub mod builder;
pub mod capsule;
pub mod config;
pub mod containers;
pub mod envelope;
pub mod error;
pub mod layout;
pub mod payload;
pub mod registry;
mod scope;
pub mod sequence;
pub mod single;

pub use config::{CodecConfig, DecodePolicy, EnvelopeKeys};
pub use error::Error;
pub use registry::{Family, Registry, Tagged};

/// Test utilities.
#[cfg(any(test, feature = "test_utils"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test_utils")))]
pub mod test_utils;

#[cfg(test)]
mod tests;
