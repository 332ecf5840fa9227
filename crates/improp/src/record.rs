//! Named-field checks over keyed collections.
//!
//! The collection is converted to its plain keyed view first, then every
//! declared field is checked against that view in declaration order. Fields
//! the mapping does not mention are never looked at.

use std::sync::Arc;

use improp_value::Kind;
use indexmap::IndexMap;

use crate::checker::Checker;
use crate::context::Props;
use crate::error::{Expected, PropTypeError};
use crate::kind::classify;

/// Field name to checker mapping. A `None` entry declares the field without
/// constraining it.
#[derive(Debug, Clone, Default)]
pub struct Fields(IndexMap<String, Option<Checker>>);

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: impl Into<String>, checker: Checker) -> Self {
        self.0.insert(name.into(), Some(checker));
        self
    }

    /// Declares `name` without a checker.
    pub fn unconstrained(mut self, name: impl Into<String>) -> Self {
        self.0.insert(name.into(), None);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Checker>)> + '_ {
        self.0
            .iter()
            .map(|(name, checker)| (name.as_str(), checker.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Option<Checker>)> for Fields {
    fn from_iter<T: IntoIterator<Item = (K, Option<Checker>)>>(iter: T) -> Self {
        Fields(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Requires a collection of `kind` whose plain view satisfies `fields`.
///
/// `Kind::Collection` also admits indexed collections, whose fields are their
/// stringified positions.
pub fn fields_of(fields: Fields, kind: Kind, library: Arc<str>) -> Checker {
    Checker::new(move |props, ctx| {
        let value = props.value(ctx.prop_name());
        let Some(collection) = value.as_collection().filter(|c| kind.matches(c)) else {
            return Err(PropTypeError::invalid_type(
                ctx,
                classify(value),
                Expected::collection(&library, kind),
            ));
        };

        let view = Props::from(collection.to_object());
        for (name, checker) in fields.iter() {
            let Some(checker) = checker else { continue };
            checker.check_with(&view, &ctx.field(name))?;
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use improp_value::{RecordType, Value};

    use super::*;
    use crate::scalar::{number, string};

    fn check(checker: &Checker, value: Value) -> Result<(), String> {
        checker
            .check(&Props::single("testProp", value), "testProp", "testComponent", "prop")
            .map_err(|e| e.message())
    }

    fn library() -> Arc<str> {
        "Immutable".into()
    }

    #[test]
    fn record_fields_use_defaults() {
        let checker = fields_of(Fields::new().field("a", number().required()), Kind::Record, library());
        let record = RecordType::new().field("a", 1).instance();
        assert_eq!(check(&checker, record.into()), Ok(()));
    }

    #[test]
    fn failing_field_extends_the_path() {
        let checker = fields_of(Fields::new().field("key", number()), Kind::Map, library());
        assert_eq!(
            check(&checker, Value::map([("key", "x")])),
            Err("Invalid prop `testProp.key` of type `string` supplied to `testComponent`, expected `number`.".to_string())
        );
    }

    #[test]
    fn missing_required_field() {
        let checker = fields_of(
            Fields::new().field("key", number()).field("other", string().required()),
            Kind::Map,
            library(),
        );
        assert_eq!(
            check(&checker, Value::map([("key", 1)])),
            Err("Required prop `testProp.other` was not specified in `testComponent`.".to_string())
        );
    }

    #[test]
    fn unmentioned_and_unconstrained_fields_are_ignored() {
        let checker = fields_of(Fields::new().unconstrained("key"), Kind::Map, library());
        assert_eq!(check(&checker, Value::map([("key", "x"), ("extra", "y")])), Ok(()));
    }

    #[test]
    fn declaration_order_picks_the_first_failure() {
        let checker = fields_of(
            Fields::new().field("b", number()).field("a", number()),
            Kind::Map,
            library(),
        );
        assert_eq!(
            check(&checker, Value::map([("a", "x"), ("b", "y")])),
            Err("Invalid prop `testProp.b` of type `string` supplied to `testComponent`, expected `number`.".to_string())
        );
    }

    #[test]
    fn generic_target_accepts_lists_by_position() {
        let checker = fields_of(Fields::new().field("0", number()), Kind::Collection, library());
        assert_eq!(check(&checker, Value::list([1])), Ok(()));
        assert_eq!(
            check(&checker, Value::list(["x"])),
            Err("Invalid prop `testProp.0` of type `string` supplied to `testComponent`, expected `number`.".to_string())
        );
    }

    #[test]
    fn wrong_kind_is_rejected() {
        let checker = fields_of(Fields::new(), Kind::Record, library());
        assert_eq!(
            check(&checker, Value::map([("a", 1)])),
            Err("Invalid prop `testProp` of type `Collection.Map` supplied to `testComponent`, expected an Immutable.js Record.".to_string())
        );
    }
}
