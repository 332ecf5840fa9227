//! Element and key checkers over collections.
//!
//! Each element is checked as a one-prop `Props` named by its enumeration
//! index, under a child context `parent[i]`. Keys are checked the same way
//! under `parent -> key(k)`. The first failure stops traversal.

use std::sync::Arc;

use improp_value::Kind;
use tracing::trace;

use crate::checker::{Checker, CheckerArg};
use crate::context::{PropContext, Props};
use crate::error::{CheckerArgument, Expected, PropTypeError};
use crate::kind::classify;

/// Requires a collection of `kind` whose every value passes `element`.
pub fn elements_of(element: impl Into<CheckerArg>, kind: Kind, library: Arc<str>) -> Checker {
    let element = element.into();
    Checker::new(move |props, ctx| validate_elements(&element, kind, &library, props, ctx))
}

/// Like [`elements_of`], then checks every key against `keys` when given.
pub fn keyed_of(
    values: impl Into<CheckerArg>,
    keys: Option<CheckerArg>,
    kind: Kind,
    library: Arc<str>,
) -> Checker {
    let values = values.into();
    Checker::new(move |props, ctx| {
        validate_elements(&values, kind, &library, props, ctx)?;
        match &keys {
            Some(keys) => validate_keys(keys, props, ctx),
            None => Ok(()),
        }
    })
}

fn validate_elements(
    element: &CheckerArg,
    kind: Kind,
    library: &str,
    props: &Props,
    ctx: &PropContext<'_>,
) -> Result<(), PropTypeError> {
    let value = props.value(ctx.prop_name());
    let Some(collection) = value.as_collection().filter(|c| kind.matches(c)) else {
        return Err(PropTypeError::invalid_type(
            ctx,
            classify(value),
            Expected::collection(library, kind),
        ));
    };
    let Some(checker) = element.as_checker() else {
        return Err(PropTypeError::invalid_checker(ctx, CheckerArgument::TypeChecker));
    };

    for (index, element) in collection.values().enumerate() {
        let name = index.to_string();
        let child = ctx.index(&name);
        checker
            .check_with(&Props::single(name.as_str(), element), &child)
            .inspect_err(|err| trace_failure(&child, err))?;
    }
    Ok(())
}

fn validate_keys(
    keys: &CheckerArg,
    props: &Props,
    ctx: &PropContext<'_>,
) -> Result<(), PropTypeError> {
    let Some(checker) = keys.as_checker() else {
        return Err(PropTypeError::invalid_checker(ctx, CheckerArgument::KeysTypeChecker));
    };
    let Some(collection) = props.value(ctx.prop_name()).as_collection() else {
        return Ok(());
    };

    for key in collection.keys() {
        let name = key.to_string();
        let child = ctx.key(&name);
        checker
            .check_with(&Props::single(name.as_str(), key), &child)
            .inspect_err(|err| trace_failure(&child, err))?;
    }
    Ok(())
}

fn trace_failure(ctx: &PropContext<'_>, err: &PropTypeError) {
    trace!(path = ctx.full_name(), %err, "nested prop check failed");
}
