//! Prop type errors
//!
//! Every failure a checker reports is a `PropTypeError`. The variant tags the
//! failure kind:
//! - `Required`: a required prop is absent or null
//! - `InvalidType`: the prop is present but of the wrong kind
//! - `InvalidValue`: the prop is not one of an enumerated set of values
//! - `InvalidChecker`: a composite was given something that is not a checker
//! - `Custom`: raised by a user supplied checker
//! - `Stripped`: the registry was built in production mode
//!
//! `Display` renders the message callers see. Errors coming from a nested
//! checker are passed up unchanged, so the message always carries the path of
//! the deepest failing location.

use std::fmt;

use improp_value::Kind;
use thiserror::Error;

use crate::context::PropContext;

/// What a failing checker expected, rendered at the end of the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    /// `` `List` ``
    Exact(String),
    /// `an Immutable.js List`
    Collection { library: String, kind: String },
    /// ``instance of `Thing` ``
    InstanceOf(String),
}

impl Expected {
    pub fn exact(name: impl Into<String>) -> Self {
        Expected::Exact(name.into())
    }

    pub fn collection(library: &str, kind: Kind) -> Self {
        Expected::Collection {
            library: library.to_string(),
            kind: kind.name().to_string(),
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Exact(name) => write!(f, "`{name}`"),
            Expected::Collection { library, kind } => write!(f, "an {library}.js {kind}"),
            Expected::InstanceOf(class) => write!(f, "instance of `{class}`"),
        }
    }
}

/// The checker argument that was not callable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckerArgument {
    TypeChecker,
    KeysTypeChecker,
}

impl fmt::Display for CheckerArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckerArgument::TypeChecker => f.write_str("typeChecker"),
            CheckerArgument::KeysTypeChecker => {
                f.write_str("keysTypeChecker (optional second argument)")
            }
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PropTypeError {
    #[error("Required {location} `{full_name}` was not specified in `{component}`.")]
    Required {
        location: String,
        full_name: String,
        component: String,
    },

    #[error(
        "Invalid {location} `{full_name}` of type `{actual}` supplied to `{component}`, expected {expected}."
    )]
    InvalidType {
        location: String,
        full_name: String,
        actual: String,
        component: String,
        expected: Expected,
    },

    #[error(
        "Invalid {location} `{full_name}` of value `{value}` supplied to `{component}`, expected one of {expected}."
    )]
    InvalidValue {
        location: String,
        full_name: String,
        value: String,
        component: String,
        /// JSON rendering of the accepted values
        expected: String,
    },

    #[error(
        "Invalid {argument} supplied to `{component}` for propType `{full_name}`, expected a function."
    )]
    InvalidChecker {
        argument: CheckerArgument,
        component: String,
        full_name: String,
    },

    #[error("{0}")]
    Custom(String),

    #[error("{library}PropTypes type checking code is stripped in production.")]
    Stripped { library: String },
}

impl PropTypeError {
    pub fn required(ctx: &PropContext<'_>) -> Self {
        PropTypeError::Required {
            location: ctx.location().to_string(),
            full_name: ctx.full_name().to_string(),
            component: ctx.component_name().to_string(),
        }
    }

    pub fn invalid_type(
        ctx: &PropContext<'_>,
        actual: impl Into<String>,
        expected: Expected,
    ) -> Self {
        PropTypeError::InvalidType {
            location: ctx.location().to_string(),
            full_name: ctx.full_name().to_string(),
            actual: actual.into(),
            component: ctx.component_name().to_string(),
            expected,
        }
    }

    pub fn invalid_checker(ctx: &PropContext<'_>, argument: CheckerArgument) -> Self {
        PropTypeError::InvalidChecker {
            argument,
            component: ctx.component_name().to_string(),
            full_name: ctx.full_name().to_string(),
        }
    }

    pub fn custom(message: impl Into<String>) -> Self {
        PropTypeError::Custom(message.into())
    }

    /// The rendered message.
    pub fn message(&self) -> String {
        self.to_string()
    }
}
