//! Conversion from plain data into persistent collections.

use crate::collection::Collection;
use crate::value::Value;

/// Deeply convert plain arrays into lists and plain objects into maps.
/// Everything else, including values already inside collections, is kept as
/// is.
pub fn from_plain(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Collection(Collection::List(
            items.0.into_iter().map(from_plain).collect(),
        )),
        Value::Object(entries) => Value::Collection(Collection::Map(
            entries
                .into_iter()
                .map(|(key, value)| (Value::String(key), from_plain(value)))
                .collect(),
        )),
        other => other,
    }
}
