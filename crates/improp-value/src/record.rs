//! Records: fixed field sets with defaults.

use std::fmt;
use std::sync::Arc;

use im::{OrdMap, Vector};

use crate::error::ValueError;
use crate::value::{Value, write_quoted};

/// Shape shared by every instance of a record: an optional name and the
/// declared fields with their default values, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct RecordType {
    name: Option<Arc<str>>,
    defaults: Vector<(Arc<str>, Value)>,
}

impl RecordType {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: Some(name.into()),
            defaults: Vector::new(),
        }
    }

    /// Declare a field. Redeclaring a field replaces its default in place.
    pub fn field(mut self, name: impl Into<Arc<str>>, default: impl Into<Value>) -> Self {
        let name = name.into();
        let default = default.into();
        match self.defaults.iter().position(|(n, _)| *n == name) {
            Some(index) => {
                self.defaults.set(index, (name, default));
            }
            None => self.defaults.push_back((name, default)),
        }
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// A fresh instance holding only defaults.
    pub fn instance(self) -> Record {
        Record::new(Arc::new(self))
    }
}

/// Instance of a [`RecordType`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Record {
    ty: Arc<RecordType>,
    values: OrdMap<Arc<str>, Value>,
}

impl Record {
    pub fn new(ty: Arc<RecordType>) -> Self {
        Self {
            ty,
            values: OrdMap::new(),
        }
    }

    pub fn record_type(&self) -> &RecordType {
        &self.ty
    }

    pub fn len(&self) -> usize {
        self.ty.defaults.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ty.defaults.is_empty()
    }

    /// Current value of a declared field, falling back to its default.
    pub fn get(&self, field: &str) -> Option<&Value> {
        if let Some(value) = self.values.get(field) {
            return Some(value);
        }
        self.ty
            .defaults
            .iter()
            .find(|(name, _)| &**name == field)
            .map(|(_, default)| default)
    }

    /// Persistent set of a declared field.
    pub fn set(&self, field: &str, value: impl Into<Value>) -> Result<Record, ValueError> {
        let Some((name, _)) = self.ty.defaults.iter().find(|(name, _)| &**name == field) else {
            return Err(ValueError::UnknownRecordField {
                record: self.ty.name().unwrap_or("Record").to_string(),
                field: field.to_string(),
            });
        };
        Ok(Record {
            ty: self.ty.clone(),
            values: self.values.update(name.clone(), value.into()),
        })
    }

    /// Every declared field with its current value, in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.ty.defaults.iter().map(move |(name, default)| {
            (&**name, self.values.get(&**name).unwrap_or(default))
        })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.ty.name().unwrap_or("Record"))?;
        if self.is_empty() {
            return f.write_str("}");
        }
        for (i, (name, value)) in self.entries().enumerate() {
            f.write_str(if i == 0 { " " } else { ", " })?;
            write_quoted(f, &Value::from(name))?;
            f.write_str(": ")?;
            write_quoted(f, value)?;
        }
        f.write_str(" }")
    }
}
