//! Persistent collections.
//!
//! `Collection` closes over every structural kind the checkers know about.
//! Storage is delegated to `im`: `Vector` for indexed data, `OrdMap` and
//! `OrdSet` for maps and sets. Insertion-ordered variants live in
//! [`crate::ordered`], records in [`crate::record`], lazy sequences in
//! [`crate::seq`].

use std::fmt;

use im::{OrdMap, OrdSet, Vector};

use crate::ordered::{OrderedMap, OrderedSet};
use crate::record::Record;
use crate::seq::Seq;
use crate::value::{Object, Value, write_quoted};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Collection {
    List(Vector<Value>),
    /// Iterates in key order.
    Map(OrdMap<Value, Value>),
    OrderedMap(OrderedMap),
    /// Iterates in value order.
    Set(OrdSet<Value>),
    OrderedSet(OrderedSet),
    /// Iterates from the top of the stack.
    Stack(Vector<Value>),
    Seq(Seq),
    Record(Record),
}

/// Concrete kind of a collection, as it names itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    List,
    Map,
    OrderedMap,
    Set,
    OrderedSet,
    Stack,
    Seq,
    Range,
    Repeat,
    Record,
}

impl CollectionKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::List => "List",
            Self::Map => "Map",
            Self::OrderedMap => "OrderedMap",
            Self::Set => "Set",
            Self::OrderedSet => "OrderedSet",
            Self::Stack => "Stack",
            Self::Seq => "Seq",
            Self::Range => "Range",
            Self::Repeat => "Repeat",
            Self::Record => "Record",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Collection {
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Collection::List(items.into_iter().map(Into::into).collect())
    }

    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        Collection::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn ordered_map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        Collection::OrderedMap(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn set<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Collection::Set(items.into_iter().map(Into::into).collect())
    }

    pub fn ordered_set<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Collection::OrderedSet(items.into_iter().map(Into::into).collect())
    }

    /// The first item becomes the top of the stack.
    pub fn stack<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Collection::Stack(items.into_iter().map(Into::into).collect())
    }

    pub fn kind(&self) -> CollectionKind {
        match self {
            Collection::List(_) => CollectionKind::List,
            Collection::Map(_) => CollectionKind::Map,
            Collection::OrderedMap(_) => CollectionKind::OrderedMap,
            Collection::Set(_) => CollectionKind::Set,
            Collection::OrderedSet(_) => CollectionKind::OrderedSet,
            Collection::Stack(_) => CollectionKind::Stack,
            Collection::Seq(seq) => seq.kind(),
            Collection::Record(_) => CollectionKind::Record,
        }
    }

    /// The name the collection declares for itself. Named records use
    /// their own name.
    pub fn short_name(&self) -> &str {
        match self {
            Collection::Record(record) => record.record_type().name().unwrap_or("Record"),
            other => other.kind().name(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Collection::List(v) | Collection::Stack(v) => v.len(),
            Collection::Map(m) => m.len(),
            Collection::OrderedMap(m) => m.len(),
            Collection::Set(s) => s.len(),
            Collection::OrderedSet(s) => s.len(),
            Collection::Seq(seq) => seq.len(),
            Collection::Record(r) => r.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Key/value associations (records included).
    pub fn is_keyed(&self) -> bool {
        match self {
            Collection::Map(_) | Collection::OrderedMap(_) | Collection::Record(_) => true,
            Collection::Seq(seq) => seq.is_keyed(),
            _ => false,
        }
    }

    /// Positionally indexed data.
    pub fn is_indexed(&self) -> bool {
        match self {
            Collection::List(_) | Collection::Stack(_) => true,
            Collection::Seq(seq) => !seq.is_keyed(),
            _ => false,
        }
    }

    /// Key/value pairs in traversal order. Indexed collections use their
    /// positions as keys; sets use each member as its own key.
    pub fn entries(&self) -> Box<dyn Iterator<Item = (Value, Value)> + '_> {
        match self {
            Collection::List(v) | Collection::Stack(v) => Box::new(
                v.iter()
                    .enumerate()
                    .map(|(i, value)| (Value::from(i), value.clone())),
            ),
            Collection::Map(m) => Box::new(m.iter().map(|(k, v)| (k.clone(), v.clone()))),
            Collection::OrderedMap(m) => {
                Box::new(m.iter().map(|(k, v)| (k.clone(), v.clone())))
            }
            Collection::Set(s) => Box::new(s.iter().map(|v| (v.clone(), v.clone()))),
            Collection::OrderedSet(s) => Box::new(s.iter().map(|v| (v.clone(), v.clone()))),
            Collection::Seq(seq) => seq.entries(),
            Collection::Record(r) => Box::new(
                r.entries()
                    .map(|(field, value)| (Value::from(field), value.clone())),
            ),
        }
    }

    pub fn values(&self) -> impl Iterator<Item = Value> + '_ {
        self.entries().map(|(_, value)| value)
    }

    pub fn keys(&self) -> impl Iterator<Item = Value> + '_ {
        self.entries().map(|(key, _)| key)
    }

    /// Plain keyed view. Keys go through their string conversion; a later
    /// entry whose key renders the same overwrites the earlier value.
    pub fn to_object(&self) -> Object {
        self.entries()
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    }
}

// Shorthands producing `Value::Collection`.
impl Value {
    pub fn list<I>(items: I) -> Value
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Collection::list(items).into()
    }

    pub fn map<I, K, V>(entries: I) -> Value
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        Collection::map(entries).into()
    }

    pub fn ordered_map<I, K, V>(entries: I) -> Value
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        Collection::ordered_map(entries).into()
    }

    pub fn set<I>(items: I) -> Value
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Collection::set(items).into()
    }

    pub fn ordered_set<I>(items: I) -> Value
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Collection::ordered_set(items).into()
    }

    pub fn stack<I>(items: I) -> Value
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Collection::stack(items).into()
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Seq(seq) => return write!(f, "{seq}"),
            Collection::Record(r) => return write!(f, "{r}"),
            _ => {}
        }

        let (open, close) = if self.is_indexed() { ("[", "]") } else { ("{", "}") };
        write!(f, "{} {open}", self.short_name())?;
        if self.is_empty() {
            return f.write_str(close);
        }
        let keyed = self.is_keyed();
        for (i, (key, value)) in self.entries().enumerate() {
            f.write_str(if i == 0 { " " } else { ", " })?;
            if keyed {
                write_quoted(f, &key)?;
                f.write_str(": ")?;
            }
            write_quoted(f, &value)?;
        }
        write!(f, " {close}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_displays_with_quoted_strings() {
        let list = Collection::list([Value::from(1), Value::from("2")]);
        assert_eq!(list.to_string(), "List [ 1, \"2\" ]");
        assert_eq!(Collection::list(Vec::<Value>::new()).to_string(), "List []");
    }

    #[test]
    fn map_displays_entries() {
        let map = Collection::map([("b", "2")]);
        assert_eq!(map.to_string(), "Map { \"b\": \"2\" }");
        assert_eq!(Collection::map(Vec::<(Value, Value)>::new()).to_string(), "Map {}");
    }

    #[test]
    fn set_displays_members() {
        let set = Collection::ordered_set([3, 1]);
        assert_eq!(set.to_string(), "OrderedSet { 3, 1 }");
    }

    #[test]
    fn map_iterates_in_key_order() {
        let map = Collection::map([(3, "c"), (1, "a"), (2, "b")]);
        let values: Vec<_> = map.values().collect();
        assert_eq!(values, vec![Value::from("a"), Value::from("b"), Value::from("c")]);
    }

    #[test]
    fn list_keys_are_positions() {
        let list = Collection::list(["x", "y"]);
        let keys: Vec<_> = list.keys().collect();
        assert_eq!(keys, vec![Value::from(0), Value::from(1)]);
    }

    #[test]
    fn to_object_stringifies_keys() {
        let list = Collection::list([1, 2]);
        let object = list.to_object();
        assert_eq!(object.get("0"), Some(&Value::from(1)));
        assert_eq!(object.get("1"), Some(&Value::from(2)));

        let nested_key = Collection::map([(Value::from(Collection::map([("b", "2")])), 1)]);
        assert!(nested_key.to_object().contains_key("Map { \"b\": \"2\" }"));
    }

    #[test]
    fn capabilities() {
        assert!(Collection::list([1]).is_indexed());
        assert!(Collection::stack([1]).is_indexed());
        assert!(Collection::map([(1, 1)]).is_keyed());
        let set = Collection::set([1]);
        assert!(!set.is_keyed());
        assert!(!set.is_indexed());
    }
}
