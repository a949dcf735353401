//! Ordered, growable container of variants.
//!
//! Positional indexing through `[]` does not bounds-check on behalf of the
//! caller: an out-of-range position panics, exactly like `Vec` indexing.
//! [`Sequence::get`] is the non-trapping form.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::fixed::{Lookup, LookupMut};
use crate::key::{Key, Position};
use crate::variant::Variant;

/// An ordered list of [`Variant`] values indexed by position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sequence {
    values: Vec<Variant>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn push(&mut self, value: impl Into<Variant>) {
        self.values.push(value.into());
    }

    pub fn pop(&mut self) -> Option<Variant> {
        self.values.pop()
    }

    /// Checked read: `None` when `index` is outside `[0, len)`.
    pub fn get<I: Position>(&self, index: I) -> Option<&Variant> {
        self.values.get(index.to_position()?)
    }

    /// Checked write access: `None` when `index` is outside `[0, len)`.
    /// The sequence never grows on indexed access.
    pub fn get_mut<I: Position>(&mut self, index: I) -> Option<&mut Variant> {
        self.values.get_mut(index.to_position()?)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Variant> {
        self.values.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Variant> {
        self.values.iter_mut()
    }

    pub fn as_slice(&self) -> &[Variant] {
        &self.values
    }

    /// Resolve a numeric key to a slot, panicking when it is out of range.
    pub(crate) fn slot(&self, key: &Key) -> &Variant {
        match key.position().and_then(|p| self.values.get(p)) {
            Some(value) => value,
            None => out_of_range(key, self.len()),
        }
    }

    pub(crate) fn slot_mut(&mut self, key: &Key) -> &mut Variant {
        let len = self.len();
        match key.position() {
            Some(p) if p < len => &mut self.values[p],
            _ => out_of_range(key, len),
        }
    }
}

#[track_caller]
fn out_of_range(key: &dyn fmt::Display, len: usize) -> ! {
    panic!("sequence index out of range: the len is {len} but the index is {key}")
}

impl<I: Position> Index<I> for Sequence {
    type Output = Variant;

    #[track_caller]
    fn index(&self, index: I) -> &Variant {
        let position = index.to_position();
        match position.and_then(|p| self.values.get(p)) {
            Some(value) => value,
            None => out_of_range(&DisplayPosition(position), self.len()),
        }
    }
}

impl<I: Position> IndexMut<I> for Sequence {
    #[track_caller]
    fn index_mut(&mut self, index: I) -> &mut Variant {
        let len = self.len();
        match index.to_position() {
            Some(p) if p < len => &mut self.values[p],
            p => out_of_range(&DisplayPosition(p), len),
        }
    }
}

struct DisplayPosition(Option<usize>);

impl fmt::Display for DisplayPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(p) => write!(f, "{p}"),
            None => f.write_str("<none>"),
        }
    }
}

impl<I: Position> Lookup<I> for Sequence {
    type Item = Variant;

    fn lookup(&self, index: I) -> Option<&Variant> {
        self.get(index)
    }
}

impl<I: Position> LookupMut<I> for Sequence {
    fn lookup_mut(&mut self, index: I) -> Option<&mut Variant> {
        self.get_mut(index)
    }
}

impl From<Vec<Variant>> for Sequence {
    fn from(values: Vec<Variant>) -> Self {
        Sequence { values }
    }
}

impl<V: Into<Variant>, const N: usize> From<[V; N]> for Sequence {
    fn from(values: [V; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<V: Into<Variant>> FromIterator<V> for Sequence {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Sequence {
            values: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for Sequence {
    type Item = Variant;
    type IntoIter = std::vec::IntoIter<Variant>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Variant;
    type IntoIter = std::slice::Iter<'a, Variant>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl fmt::Display for Sequence {
    /// Sequences render as an opaque placeholder, never as an element dump.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[array]")
    }
}
