//! The checker registry.
//!
//! `PropTypes` hands out leaf checkers and checker constructors bound to one
//! [`Config`]. In production mode every entry is the stripped checker.

use std::sync::Arc;

use improp_value::Kind;
use tracing::{debug, warn};

use crate::checker::{Checker, CheckerArg};
use crate::compound::{elements_of, keyed_of};
use crate::config::Config;
use crate::primitive::kind_checker;
use crate::record::{Fields, fields_of};

#[derive(Debug, Clone)]
pub struct PropTypes {
    config: Config,
    library: Arc<str>,
}

impl Default for PropTypes {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl PropTypes {
    pub fn new(config: Config) -> Self {
        debug!(mode = %config.mode, library = %config.library, "building prop type registry");
        if config.is_production() {
            warn!(library = %config.library, "prop type checking is stripped in production");
        }
        let library = Arc::from(config.library.as_str());
        Self { config, library }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn build(&self, make: impl FnOnce(Arc<str>) -> Checker) -> Checker {
        if self.config.is_production() {
            Checker::stripped(self.library.clone())
        } else {
            make(self.library.clone())
        }
    }

    fn leaf(&self, kind: Kind) -> Checker {
        self.build(|_| kind_checker(kind))
    }

    fn elements(&self, element: impl Into<CheckerArg>, kind: Kind) -> Checker {
        self.build(|library| elements_of(element, kind, library))
    }

    fn keyed(&self, values: impl Into<CheckerArg>, keys: Option<CheckerArg>, kind: Kind) -> Checker {
        self.build(|library| keyed_of(values, keys, kind, library))
    }

    fn fields(&self, fields: Fields, kind: Kind) -> Checker {
        self.build(|library| fields_of(fields, kind, library))
    }

    // ========================================================================
    // Leaf kinds
    // ========================================================================

    pub fn list(&self) -> Checker {
        self.leaf(Kind::List)
    }

    /// Maps, ordered or not.
    pub fn map(&self) -> Checker {
        self.leaf(Kind::Map)
    }

    pub fn ordered_map(&self) -> Checker {
        self.leaf(Kind::OrderedMap)
    }

    /// Sets, ordered or not.
    pub fn set(&self) -> Checker {
        self.leaf(Kind::Set)
    }

    pub fn ordered_set(&self) -> Checker {
        self.leaf(Kind::OrderedSet)
    }

    pub fn stack(&self) -> Checker {
        self.leaf(Kind::Stack)
    }

    pub fn seq(&self) -> Checker {
        self.leaf(Kind::Seq)
    }

    pub fn record(&self) -> Checker {
        self.leaf(Kind::Record)
    }

    /// Any persistent collection.
    pub fn iterable(&self) -> Checker {
        self.leaf(Kind::Collection)
    }

    pub fn iterable_indexed(&self) -> Checker {
        self.leaf(Kind::Indexed)
    }

    pub fn iterable_keyed(&self) -> Checker {
        self.leaf(Kind::Keyed)
    }

    // ========================================================================
    // Homogeneous composites
    // ========================================================================

    pub fn list_of(&self, element: impl Into<CheckerArg>) -> Checker {
        self.elements(element, Kind::List)
    }

    pub fn stack_of(&self, element: impl Into<CheckerArg>) -> Checker {
        self.elements(element, Kind::Stack)
    }

    pub fn set_of(&self, element: impl Into<CheckerArg>) -> Checker {
        self.elements(element, Kind::Set)
    }

    pub fn ordered_set_of(&self, element: impl Into<CheckerArg>) -> Checker {
        self.elements(element, Kind::OrderedSet)
    }

    pub fn iterable_of(&self, element: impl Into<CheckerArg>) -> Checker {
        self.elements(element, Kind::Collection)
    }

    pub fn map_of(&self, values: impl Into<CheckerArg>) -> Checker {
        self.keyed(values, None, Kind::Map)
    }

    /// Values are checked before keys.
    pub fn map_of_with_keys(
        &self,
        values: impl Into<CheckerArg>,
        keys: impl Into<CheckerArg>,
    ) -> Checker {
        self.keyed(values, Some(keys.into()), Kind::Map)
    }

    pub fn ordered_map_of(&self, values: impl Into<CheckerArg>) -> Checker {
        self.keyed(values, None, Kind::OrderedMap)
    }

    pub fn ordered_map_of_with_keys(
        &self,
        values: impl Into<CheckerArg>,
        keys: impl Into<CheckerArg>,
    ) -> Checker {
        self.keyed(values, Some(keys.into()), Kind::OrderedMap)
    }

    // ========================================================================
    // Structured composites
    // ========================================================================

    pub fn record_of(&self, fields: Fields) -> Checker {
        self.fields(fields, Kind::Record)
    }

    /// Field checks over any collection. Extra fields are allowed.
    pub fn shape(&self, fields: Fields) -> Checker {
        self.fields(fields, Kind::Collection)
    }

    /// Same as [`PropTypes::shape`].
    pub fn contains(&self, fields: Fields) -> Checker {
        self.shape(fields)
    }

    pub fn map_contains(&self, fields: Fields) -> Checker {
        self.fields(fields, Kind::Map)
    }
}
