//! Insertion-ordered map and set.

use im::{OrdMap, OrdSet, Vector};

use crate::value::Value;

/// Map that iterates in insertion order. Re-inserting an existing key keeps
/// its first position.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct OrderedMap {
    order: Vector<Value>,
    entries: OrdMap<Value, Value>,
}

impl OrderedMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
        if !self.entries.contains_key(&key) {
            self.order.push_back(key.clone());
        }
        self.entries.insert(key, value)
    }

    /// Persistent insert: returns a new map sharing structure with `self`.
    pub fn update(&self, key: Value, value: Value) -> Self {
        let mut next = self.clone();
        next.insert(key, value);
        next
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> + '_ {
        self.order
            .iter()
            .filter_map(move |key| self.entries.get(key).map(|value| (key, value)))
    }
}

impl FromIterator<(Value, Value)> for OrderedMap {
    fn from_iter<T: IntoIterator<Item = (Value, Value)>>(iter: T) -> Self {
        let mut map = OrderedMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// Set that iterates in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct OrderedSet {
    order: Vector<Value>,
    members: OrdSet<Value>,
}

impl OrderedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns `false` when the value was already present.
    pub fn insert(&mut self, value: Value) -> bool {
        if self.members.contains(&value) {
            return false;
        }
        self.order.push_back(value.clone());
        self.members.insert(value);
        true
    }

    pub fn update(&self, value: Value) -> Self {
        let mut next = self.clone();
        next.insert(value);
        next
    }

    pub fn iter(&self) -> impl Iterator<Item = &Value> + '_ {
        self.order.iter()
    }
}

impl FromIterator<Value> for OrderedSet {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        let mut set = OrderedSet::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_map_keeps_first_insertion_position() {
        let mut map = OrderedMap::new();
        map.insert(Value::from("b"), Value::from(1));
        map.insert(Value::from("a"), Value::from(2));
        map.insert(Value::from("b"), Value::from(3));

        let entries: Vec<_> = map.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        assert_eq!(
            entries,
            vec![
                (Value::from("b"), Value::from(3)),
                (Value::from("a"), Value::from(2)),
            ]
        );
    }

    #[test]
    fn ordered_map_update_leaves_source_untouched() {
        let map: OrderedMap = [(Value::from(1), Value::from("x"))].into_iter().collect();
        let next = map.update(Value::from(2), Value::from("y"));
        assert_eq!(map.len(), 1);
        assert_eq!(next.len(), 2);
    }

    #[test]
    fn ordered_set_ignores_duplicates() {
        let set: OrderedSet = [Value::from(2), Value::from(1), Value::from(2)]
            .into_iter()
            .collect();
        let members: Vec<_> = set.iter().cloned().collect();
        assert_eq!(members, vec![Value::from(2), Value::from(1)]);
    }
}
