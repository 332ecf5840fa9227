//! Props and path context
//!
//! `Props` is the candidate source a checker reads from; `PropContext` names
//! the prop being checked and where it sits:
//! - prop name (key into `Props`)
//! - component name and location label (for messages)
//! - full name: the human readable path from the root prop
//!
//! Composites never rewrite a context. They derive a child context whose full
//! name extends the parent's with `[i]`, ` -> key(k)` or `.field`.

use std::borrow::Cow;

use improp_value::{Object, Value};
use indexmap::IndexMap;

/// Component name used when the caller did not supply one.
pub const ANONYMOUS: &str = "<<anonymous>>";

static ABSENT: Value = Value::Null;

/// Plain keyed container holding the values under check.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props(IndexMap<String, Value>);

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Props holding exactly one entry.
    pub fn single(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new().with(name, value)
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// The prop's value; `Null` when absent.
    pub fn value(&self, name: &str) -> &Value {
        self.0.get(name).unwrap_or(&ABSENT)
    }

    /// Absent and null props are treated alike.
    pub fn is_absent(&self, name: &str) -> bool {
        self.value(name).is_null()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Object> for Props {
    fn from(object: Object) -> Self {
        Props(object)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Props {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Props(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Where the prop under check lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropContext<'a> {
    prop_name: &'a str,
    component_name: &'a str,
    location: &'a str,
    full_name: Option<Cow<'a, str>>,
}

impl<'a> PropContext<'a> {
    pub fn new(prop_name: &'a str, component_name: &'a str, location: &'a str) -> Self {
        Self {
            prop_name,
            component_name,
            location,
            full_name: None,
        }
    }

    pub fn with_full_name(mut self, full_name: impl Into<Cow<'a, str>>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn prop_name(&self) -> &str {
        self.prop_name
    }

    pub fn component_name(&self) -> &str {
        if self.component_name.is_empty() {
            ANONYMOUS
        } else {
            self.component_name
        }
    }

    pub fn location(&self) -> &str {
        self.location
    }

    /// Accumulated path; the prop name itself at the root.
    pub fn full_name(&self) -> &str {
        match self.full_name.as_deref() {
            Some(full_name) if !full_name.is_empty() => full_name,
            _ => self.prop_name,
        }
    }

    /// Context for the element at position `index`.
    pub fn index<'b>(&'b self, index: &'b str) -> PropContext<'b> {
        let full_name = format!("{}[{}]", self.full_name(), index);
        self.child(index, full_name)
    }

    /// Context for a map key rendered as `key`.
    pub fn key<'b>(&'b self, key: &'b str) -> PropContext<'b> {
        let full_name = format!("{} -> key({})", self.full_name(), key);
        self.child(key, full_name)
    }

    /// Context for the named field.
    pub fn field<'b>(&'b self, field: &'b str) -> PropContext<'b> {
        let full_name = format!("{}.{}", self.full_name(), field);
        self.child(field, full_name)
    }

    fn child<'b>(&'b self, prop_name: &'b str, full_name: String) -> PropContext<'b> {
        PropContext {
            prop_name,
            component_name: self.component_name,
            location: self.location,
            full_name: Some(Cow::Owned(full_name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_defaults_to_prop_name() {
        let ctx = PropContext::new("testProp", "testComponent", "prop");
        assert_eq!(ctx.full_name(), "testProp");
        let ctx = ctx.with_full_name("");
        assert_eq!(ctx.full_name(), "testProp");
    }

    #[test]
    fn empty_component_is_anonymous() {
        let ctx = PropContext::new("testProp", "", "prop");
        assert_eq!(ctx.component_name(), "<<anonymous>>");
    }

    #[test]
    fn child_paths_extend_the_parent() {
        let root = PropContext::new("testProp", "testComponent", "prop");
        let field = root.field("data");
        let element = field.index("1");
        let nested = element.field("id");
        assert_eq!(nested.full_name(), "testProp.data[1].id");
        assert_eq!(nested.prop_name(), "id");
        assert_eq!(root.key("a").full_name(), "testProp -> key(a)");
    }

    #[test]
    fn null_props_count_as_absent() {
        let props = Props::new().with("a", Value::Null).with("b", 1);
        assert!(props.is_absent("a"));
        assert!(props.is_absent("missing"));
        assert!(!props.is_absent("b"));
    }
}
