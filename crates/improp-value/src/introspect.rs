//! Capability predicates consumed by checkers.

use std::fmt;

use crate::collection::Collection;
use crate::value::Value;

/// Structural categories a checker can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    List,
    /// Any map, ordered or not.
    Map,
    OrderedMap,
    /// Any set, ordered or not.
    Set,
    OrderedSet,
    Stack,
    /// Any sequence, including ranges and repeats.
    Seq,
    Record,
    /// Any persistent collection.
    Collection,
    /// Any collection with key/value associations.
    Keyed,
    /// Any positionally indexed collection.
    Indexed,
}

impl Kind {
    pub fn name(&self) -> &'static str {
        match self {
            Kind::List => "List",
            Kind::Map => "Map",
            Kind::OrderedMap => "OrderedMap",
            Kind::Set => "Set",
            Kind::OrderedSet => "OrderedSet",
            Kind::Stack => "Stack",
            Kind::Seq => "Seq",
            Kind::Record => "Record",
            Kind::Collection => "Collection",
            Kind::Keyed => "Collection.Keyed",
            Kind::Indexed => "Collection.Indexed",
        }
    }

    pub fn matches(&self, collection: &Collection) -> bool {
        match self {
            Kind::List => matches!(collection, Collection::List(_)),
            Kind::Map => matches!(collection, Collection::Map(_) | Collection::OrderedMap(_)),
            Kind::OrderedMap => matches!(collection, Collection::OrderedMap(_)),
            Kind::Set => matches!(collection, Collection::Set(_) | Collection::OrderedSet(_)),
            Kind::OrderedSet => matches!(collection, Collection::OrderedSet(_)),
            Kind::Stack => matches!(collection, Collection::Stack(_)),
            Kind::Seq => matches!(collection, Collection::Seq(_)),
            Kind::Record => matches!(collection, Collection::Record(_)),
            Kind::Collection => true,
            Kind::Keyed => collection.is_keyed(),
            Kind::Indexed => collection.is_indexed(),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Introspection surface over candidate values.
pub trait Introspect {
    fn as_collection(&self) -> Option<&Collection>;

    fn is_collection(&self) -> bool {
        self.as_collection().is_some()
    }

    fn is_of_kind(&self, kind: Kind) -> bool {
        self.as_collection().is_some_and(|c| kind.matches(c))
    }

    fn is_keyed(&self) -> bool {
        self.as_collection().is_some_and(Collection::is_keyed)
    }

    fn is_indexed(&self) -> bool {
        self.as_collection().is_some_and(Collection::is_indexed)
    }
}

impl Introspect for Value {
    fn as_collection(&self) -> Option<&Collection> {
        Value::as_collection(self)
    }
}
