//! # jsval-core
//!
//! A dynamically-typed [`Variant`] value that holds one of six shapes
//! (absence, flag, number, text, sequence, mapping) and can be indexed,
//! compared and rendered uniformly, plus fixed-length containers whose
//! indexing never traps.
//!
//! ## Quick start
//!
//! ```rust
//! use jsval_core::{Mapping, Number, Sequence, Text, Variant};
//!
//! let mut m = Mapping::from([
//!     ("a", Variant::from(Number::from(1))),
//!     ("b", Variant::from(Text::from("x"))),
//! ]);
//! assert_eq!(m["a"].to_string(), "1");
//! assert_eq!(m["b"].to_string(), "x");
//!
//! // Reads never insert; writes auto-vivify.
//! assert_eq!(m["c"].to_string(), "undefined");
//! m["list"] = Variant::from(Sequence::from([1, 2, 3]));
//!
//! let v = Variant::from(m);
//! assert_eq!(v.at("list").unwrap().at(2).unwrap().to_string(), "3");
//! assert!(Variant::from(5).at(0).is_err());
//! ```
//!
//! ## Two indexing contracts
//!
//! - [`Sequence`] / [`Mapping`] / [`Variant`] indexing traps on misuse:
//!   an out-of-range sequence position panics, indexing a scalar variant
//!   returns [`JsError::TypeMismatch`].
//! - [`ReadOnlyFixedArray`] / [`FixedArray`] indexing is total: an index out
//!   of range yields an absent [`Element`] / [`ElementReference`].
//!
//! ## Modules
//!
//! - [`variant`] — `Variant` and its `Tag`
//! - [`sequence`], [`mapping`] — the two heap-backed containers
//! - [`primitive`], [`number`], [`text`] — scalar wrappers
//! - [`key`] — index keys and position coercion
//! - [`fixed`], [`element`] — fixed containers and optional element wrappers
//! - [`console`] — line printing to an explicit sink
//! - [`json`] — serde bridge
//! - [`error`] — error types

pub mod console;
pub mod element;
pub mod error;
pub mod fixed;
pub mod json;
pub mod key;
pub mod mapping;
pub mod number;
pub mod primitive;
pub mod sequence;
pub mod text;
pub mod variant;

pub use console::Console;
pub use element::{Element, ElementReference};
pub use error::{JsError, Result};
pub use fixed::{FixedArray, Lookup, LookupMut, ReadOnlyFixedArray};
pub use key::{Key, Position};
pub use mapping::Mapping;
pub use number::Number;
pub use primitive::{Absence, Flag, Null};
pub use sequence::Sequence;
pub use text::Text;
pub use variant::{Tag, Variant};
