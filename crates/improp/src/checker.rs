//! Checkers and the presence wrapper.
//!
//! A raw validator only ever sees a prop that is present and non-null.
//! `Checker` wraps it with the absence handling every checker shares: an
//! absent prop passes an optional checker and fails a required one.

use std::fmt;
use std::sync::Arc;

use crate::context::{PropContext, Props};
use crate::error::PropTypeError;
use crate::record::Fields;

type Validate = dyn Fn(&Props, &PropContext<'_>) -> Result<(), PropTypeError> + Send + Sync;

#[derive(Clone)]
enum Body {
    Validate(Arc<Validate>),
    /// Fails every call, present or not.
    Stripped(Arc<str>),
}

/// A validation function over a named prop.
///
/// Cloning is cheap and clones share the validator. `required()` derives the
/// required variant without touching the optional one.
#[derive(Clone)]
pub struct Checker {
    body: Body,
    required: bool,
}

impl Checker {
    pub fn new<F>(validate: F) -> Self
    where
        F: Fn(&Props, &PropContext<'_>) -> Result<(), PropTypeError> + Send + Sync + 'static,
    {
        Self {
            body: Body::Validate(Arc::new(validate)),
            required: false,
        }
    }

    /// Wrap a user validator reporting failures as plain messages.
    pub fn custom<F>(validate: F) -> Self
    where
        F: Fn(&Props, &PropContext<'_>) -> Result<(), String> + Send + Sync + 'static,
    {
        Self::new(move |props, ctx| validate(props, ctx).map_err(PropTypeError::Custom))
    }

    pub(crate) fn stripped(library: Arc<str>) -> Self {
        Self {
            body: Body::Stripped(library),
            required: false,
        }
    }

    /// The required variant of this checker.
    pub fn required(&self) -> Self {
        Self {
            body: self.body.clone(),
            required: true,
        }
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn check(
        &self,
        props: &Props,
        prop_name: &str,
        component_name: &str,
        location: &str,
    ) -> Result<(), PropTypeError> {
        self.check_with(props, &PropContext::new(prop_name, component_name, location))
    }

    pub fn check_with(&self, props: &Props, ctx: &PropContext<'_>) -> Result<(), PropTypeError> {
        let validate = match &self.body {
            Body::Validate(validate) => validate,
            Body::Stripped(library) => {
                return Err(PropTypeError::Stripped {
                    library: library.to_string(),
                });
            }
        };
        if props.is_absent(ctx.prop_name()) {
            if self.required {
                return Err(PropTypeError::required(ctx));
            }
            return Ok(());
        }
        validate(props, ctx)
    }
}

impl fmt::Debug for Checker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checker")
            .field("required", &self.required)
            .field("stripped", &matches!(self.body, Body::Stripped(_)))
            .finish_non_exhaustive()
    }
}

/// Argument slot of a composite constructor.
///
/// Composites accept anything that converts here, and only find out whether
/// it is callable when they run. A field mapping in an element slot ends up
/// as `NotCallable` and is reported as an invalid checker.
#[derive(Debug, Clone)]
pub enum CheckerArg {
    Checker(Checker),
    NotCallable,
}

impl CheckerArg {
    pub fn as_checker(&self) -> Option<&Checker> {
        match self {
            CheckerArg::Checker(checker) => Some(checker),
            CheckerArg::NotCallable => None,
        }
    }
}

impl From<Checker> for CheckerArg {
    fn from(checker: Checker) -> Self {
        CheckerArg::Checker(checker)
    }
}

impl From<&Checker> for CheckerArg {
    fn from(checker: &Checker) -> Self {
        CheckerArg::Checker(checker.clone())
    }
}

impl From<Fields> for CheckerArg {
    fn from(_: Fields) -> Self {
        CheckerArg::NotCallable
    }
}
