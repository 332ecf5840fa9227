//! Type names used in messages.

use improp_value::Value;


/// The `of type` name reported by collection checkers.
///
/// Collections report `Collection.<name>`, arrays `array` and regular
/// expressions `object`. Everything else reports its host type.
pub fn classify(value: &Value) -> String {
    match value {
        Value::Array(_) => "array".to_string(),
        Value::Regex(_) => "object".to_string(),
        Value::Collection(c) => format!("Collection.{}", c.short_name()),
        other => type_of(other).to_string(),
    }
}

/// Host type as the plain checkers compare it.
pub fn host_type(value: &Value) -> &'static str {
    match value {
        Value::Array(_) => "array",
        other => type_of(other),
    }
}

/// Host type as the plain checkers report it; distinguishes `regexp`.
pub fn precise_host_type(value: &Value) -> &'static str {
    match value {
        Value::Regex(_) => "regexp",
        other => host_type(other),
    }
}

/// Name of the class a value was created from.
pub fn constructor_name(value: &Value) -> &str {
    match value {
        Value::Null => "Null",
        Value::Bool(_) => "Boolean",
        Value::Number(_) => "Number",
        Value::String(_) => "String",
        Value::Array(_) => "Array",
        Value::Object(_) => "Object",
        Value::Regex(_) => "RegExp",
        Value::Function(_) => "Function",
        Value::Instance(instance) => instance.class(),
        Value::Collection(c) => c.short_name(),
    }
}

fn type_of(value: &Value) -> &'static str {
    match value {
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Function(_) => "function",
        Value::Null
        | Value::Array(_)
        | Value::Object(_)
        | Value::Regex(_)
        | Value::Instance(_)
        | Value::Collection(_) => "object",
    }
}
