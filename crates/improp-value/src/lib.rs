//! Persistent collection values for improp.
//!
//! Wraps `im` with the closed set of collection kinds the checkers reason
//! about, plus the plain values (arrays, objects, primitives) that can show up
//! where a collection was expected.

/// The `Value` type and its string conversion.
pub mod value;

/// Persistent collections and their traversal.
pub mod collection;

/// Insertion-ordered map and set.
pub mod ordered;

/// Records with declared fields and defaults.
pub mod record;

pub mod seq;

/// Kind predicates and keyed/indexed capabilities.
pub mod introspect;

pub mod convert;

mod error;

pub use collection::{Collection, CollectionKind};
pub use convert::from_plain;
pub use error::ValueError;
pub use introspect::{Introspect, Kind};
pub use ordered::{OrderedMap, OrderedSet};
pub use record::{Record, RecordType};
pub use seq::{Range, Repeat, Seq};
pub use value::{Array, Function, Instance, Object, Value};
