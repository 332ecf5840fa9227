//! Host value checkers.
//!
//! These accept plain values and compose with the collection checkers, e.g.
//! `list_of(number())` or `shape` fields over strings.

use improp_value::{Collection, Value};
use serde_json::{Map, Value as Json};

use crate::checker::Checker;
use crate::context::Props;
use crate::error::{Expected, PropTypeError};
use crate::kind::{constructor_name, host_type, precise_host_type};
use crate::record::Fields;

/// Accepts anything present.
pub fn any() -> Checker {
    Checker::new(|_, _| Ok(()))
}

pub fn number() -> Checker {
    host("number")
}

pub fn string() -> Checker {
    host("string")
}

pub fn bool() -> Checker {
    host("boolean")
}

pub fn func() -> Checker {
    host("function")
}

/// Plain arrays only; persistent lists are objects here.
pub fn array() -> Checker {
    host("array")
}

pub fn object() -> Checker {
    host("object")
}

fn host(expected: &'static str) -> Checker {
    Checker::new(move |props, ctx| {
        let value = props.value(ctx.prop_name());
        if host_type(value) == expected {
            Ok(())
        } else {
            Err(PropTypeError::invalid_type(
                ctx,
                precise_host_type(value),
                Expected::exact(expected),
            ))
        }
    })
}

/// Accepts values equal to one of `values`.
pub fn one_of(values: Vec<Value>) -> Checker {
    Checker::new(move |props, ctx| {
        let value = props.value(ctx.prop_name());
        if values.contains(value) {
            return Ok(());
        }
        Err(PropTypeError::InvalidValue {
            location: ctx.location().to_string(),
            full_name: ctx.full_name().to_string(),
            value: value.to_string(),
            component: ctx.component_name().to_string(),
            expected: Json::Array(values.iter().map(to_json).collect()).to_string(),
        })
    })
}

/// Accepts instances of the named class.
pub fn instance_of(class: impl Into<String>) -> Checker {
    let class = class.into();
    Checker::new(move |props, ctx| {
        let value = props.value(ctx.prop_name());
        match value {
            Value::Instance(instance) if instance.class() == class => Ok(()),
            other => Err(PropTypeError::invalid_type(
                ctx,
                constructor_name(other),
                Expected::InstanceOf(class.clone()),
            )),
        }
    })
}

/// Field checks over a plain object. Values without own fields (such as
/// collections) are checked as if every field were absent.
pub fn shape(fields: Fields) -> Checker {
    Checker::new(move |props, ctx| {
        let value = props.value(ctx.prop_name());
        let actual = host_type(value);
        if actual != "object" {
            return Err(PropTypeError::invalid_type(ctx, actual, Expected::exact("object")));
        }

        let view = match value {
            Value::Object(object) => Props::from(object.clone()),
            _ => Props::new(),
        };
        for (name, checker) in fields.iter() {
            let Some(checker) = checker else { continue };
            checker.check_with(&view, &ctx.field(name))?;
        }
        Ok(())
    })
}

fn to_json(value: &Value) -> Json {
    match value {
        Value::Null | Value::Function(_) => Json::Null,
        Value::Bool(b) => Json::Bool(*b),
        Value::Number(n) if n.fract() == 0.0 && n.abs() < 9e15 => Json::from(*n as i64),
        Value::Number(n) => serde_json::Number::from_f64(*n).map_or(Json::Null, Json::Number),
        Value::String(s) => Json::String(s.clone()),
        Value::Array(items) => items.iter().map(to_json).collect(),
        Value::Object(object) => Json::Object(
            object
                .iter()
                .map(|(k, v)| (k.clone(), to_json(v)))
                .collect(),
        ),
        Value::Regex(_) | Value::Instance(_) => Json::Object(Map::new()),
        Value::Collection(collection) => collection_to_json(collection),
    }
}

fn collection_to_json(collection: &Collection) -> Json {
    if collection.is_keyed() {
        Json::Object(
            collection
                .to_object()
                .iter()
                .map(|(k, v)| (k.clone(), to_json(v)))
                .collect(),
        )
    } else {
        collection.values().map(|v| to_json(&v)).collect()
    }
}
