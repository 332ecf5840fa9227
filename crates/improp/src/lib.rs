//! Runtime prop type checking for persistent collections.
//!
//! A [`Checker`] validates one named prop of a [`Props`] container and reports
//! at most one [`PropTypeError`]. Checkers for collection kinds come from a
//! [`PropTypes`] registry; host value checkers live in [`scalar`].
//!
//! ```ignore
//! use improp::{Fields, PropTypes, Props, scalar::number};
//! use improp_value::Value;
//!
//! let types = PropTypes::default();
//! let checker = types.map_contains(
//!     Fields::new().field("data", types.list_of(number()).required()),
//! );
//! let props = Props::single("user", Value::map([("data", Value::list([1, 2]))]));
//! assert!(checker.check(&props, "user", "Profile", "prop").is_ok());
//! ```

mod checker;
mod compound;
mod config;
mod context;
mod error;
pub mod kind;
mod primitive;
mod record;
mod registry;
pub mod scalar;

pub use checker::{Checker, CheckerArg};
pub use compound::{elements_of, keyed_of};
pub use config::{Config, ConfigError, DEFAULT_LIBRARY, Mode};
pub use context::{ANONYMOUS, PropContext, Props};
pub use error::{CheckerArgument, Expected, PropTypeError};
pub use primitive::kind_checker;
pub use record::{Fields, fields_of};
pub use registry::PropTypes;

pub use improp_value as value;
