//! Sequences: indexed, keyed, and the finite generators `Range` and `Repeat`.

use std::fmt;

use im::Vector;

use crate::collection::CollectionKind;
use crate::error::ValueError;
use crate::value::{Value, write_quoted};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Seq {
    Indexed(Vector<Value>),
    Keyed(Vector<(Value, Value)>),
    Range(Range),
    Repeat(Repeat),
}

impl Seq {
    pub fn indexed<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Seq::Indexed(items.into_iter().map(Into::into).collect())
    }

    pub fn keyed<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        Seq::Keyed(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn kind(&self) -> CollectionKind {
        match self {
            Seq::Indexed(_) | Seq::Keyed(_) => CollectionKind::Seq,
            Seq::Range(_) => CollectionKind::Range,
            Seq::Repeat(_) => CollectionKind::Repeat,
        }
    }

    pub fn is_keyed(&self) -> bool {
        matches!(self, Seq::Keyed(_))
    }

    pub fn len(&self) -> usize {
        match self {
            Seq::Indexed(v) => v.len(),
            Seq::Keyed(v) => v.len(),
            Seq::Range(r) => r.len(),
            Seq::Repeat(r) => r.times,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn entries(&self) -> Box<dyn Iterator<Item = (Value, Value)> + '_> {
        match self {
            Seq::Indexed(v) => Box::new(
                v.iter()
                    .enumerate()
                    .map(|(i, value)| (Value::from(i), value.clone())),
            ),
            Seq::Keyed(v) => Box::new(v.iter().cloned()),
            Seq::Range(r) => Box::new(
                r.iter()
                    .enumerate()
                    .map(|(i, n)| (Value::from(i), Value::from(n))),
            ),
            Seq::Repeat(r) => Box::new(
                (0..r.times).map(move |i| (Value::from(i), r.value.as_ref().clone())),
            ),
        }
    }
}

impl fmt::Display for Seq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seq::Range(r) if !r.is_empty() => {
                write!(f, "Range [ {}...{}", r.start, r.end)?;
                if r.step != 1 {
                    write!(f, " by {}", r.step)?;
                }
                f.write_str(" ]")
            }
            Seq::Repeat(r) if r.times > 0 => {
                write!(f, "Repeat [ {} {} times ]", r.value, r.times)
            }
            Seq::Range(_) => f.write_str("Range []"),
            Seq::Repeat(_) => f.write_str("Repeat []"),
            Seq::Indexed(_) | Seq::Keyed(_) => {
                let (open, close) = if self.is_keyed() { ("{", "}") } else { ("[", "]") };
                write!(f, "Seq {open}")?;
                if self.is_empty() {
                    return f.write_str(close);
                }
                for (i, (key, value)) in self.entries().enumerate() {
                    f.write_str(if i == 0 { " " } else { ", " })?;
                    if self.is_keyed() {
                        write_quoted(f, &key)?;
                        f.write_str(": ")?;
                    }
                    write_quoted(f, &value)?;
                }
                write!(f, " {close}")
            }
        }
    }
}

/// Arithmetic progression from `start` (inclusive) to `end` (exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Range {
    start: i64,
    end: i64,
    step: i64,
}

impl Range {
    pub fn new(start: i64, end: i64, step: i64) -> Result<Self, ValueError> {
        if step == 0 {
            return Err(ValueError::ZeroRangeStep);
        }
        Ok(Self { start, end, step })
    }

    pub fn len(&self) -> usize {
        let span = if self.step > 0 {
            i128::from(self.end) - i128::from(self.start)
        } else {
            i128::from(self.start) - i128::from(self.end)
        };
        if span <= 0 {
            return 0;
        }
        let count = span.unsigned_abs().div_ceil(u128::from(self.step.unsigned_abs()));
        usize::try_from(count).unwrap_or(usize::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Members in order; every member lies between `start` and `end`.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        (0..self.len()).map_while(move |i| {
            let offset = i128::try_from(i).ok()? * i128::from(self.step);
            i64::try_from(i128::from(self.start) + offset).ok()
        })
    }
}

/// The same value repeated a fixed number of times.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Repeat {
    value: Box<Value>,
    times: usize,
}

impl Repeat {
    pub fn new(value: impl Into<Value>, times: usize) -> Self {
        Self {
            value: Box::new(value.into()),
            times,
        }
    }
}
