//! Leaf kind checkers.

use improp_value::{Introspect, Kind};

use crate::checker::Checker;
use crate::error::{Expected, PropTypeError};
use crate::kind::classify;

/// Accepts any value of the given structural kind.
pub fn kind_checker(kind: Kind) -> Checker {
    Checker::new(move |props, ctx| {
        let value = props.value(ctx.prop_name());
        if value.is_of_kind(kind) {
            Ok(())
        } else {
            Err(PropTypeError::invalid_type(
                ctx,
                classify(value),
                Expected::exact(kind.name()),
            ))
        }
    })
}
