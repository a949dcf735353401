//! Fixed-length containers with non-trapping indexed access.
//!
//! [`ReadOnlyFixedArray::at`] never panics: an index outside `[0, len)`
//! resolves to an absent [`Element`]. [`FixedArray::at_mut`] does the same
//! for writes, handing back an [`ElementReference`] that borrows the live
//! slot, so mutation through it lands in the backing storage and the borrow
//! checker keeps it from outliving the array.

use std::fmt;
use std::ops::Deref;

use crate::element::{Element, ElementReference};
use crate::key::Position;
use crate::number::Number;

/// Checked read access by index. `None` means "no such element".
pub trait Lookup<I> {
    type Item;

    fn lookup(&self, index: I) -> Option<&Self::Item>;
}

/// Checked write access by index. Never inserts or grows.
pub trait LookupMut<I>: Lookup<I> {
    fn lookup_mut(&mut self, index: I) -> Option<&mut Self::Item>;
}

/// A fixed-length array of `T` that can only be read.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadOnlyFixedArray<T> {
    values: Box<[T]>,
}

impl<T> ReadOnlyFixedArray<T> {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The length as a [`Number`].
    pub fn length(&self) -> Number {
        Number::from(self.values.len())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Copy out the element at `index`, or an absent element when `index`
    /// is out of range.
    ///
    /// ```
    /// use jsval_core::ReadOnlyFixedArray;
    ///
    /// let a = ReadOnlyFixedArray::from([10, 20, 30]);
    /// assert_eq!(a.at(1).value(), Some(&20));
    /// assert!(a.at(3).is_absent());
    /// assert!(a.at(-1).is_absent());
    /// ```
    pub fn at<I: Position>(&self, index: I) -> Element<T>
    where
        T: Clone,
    {
        self.lookup(index).cloned().into()
    }

    fn slot(&self, index: Option<usize>) -> Option<&T> {
        let found = index.and_then(|i| self.values.get(i));
        if found.is_none() {
            tracing::trace!(?index, len = self.values.len(), "index resolved to absent");
        }
        found
    }

    fn slot_mut(&mut self, index: Option<usize>) -> Option<&mut T> {
        let len = self.values.len();
        let found = index.and_then(|i| self.values.get_mut(i));
        if found.is_none() {
            tracing::trace!(?index, len, "index resolved to absent");
        }
        found
    }
}

impl<T, I: Position> Lookup<I> for ReadOnlyFixedArray<T> {
    type Item = T;

    fn lookup(&self, index: I) -> Option<&T> {
        self.slot(index.to_position())
    }
}

impl<T> From<Vec<T>> for ReadOnlyFixedArray<T> {
    fn from(values: Vec<T>) -> Self {
        ReadOnlyFixedArray {
            values: values.into_boxed_slice(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for ReadOnlyFixedArray<T> {
    fn from(values: [T; N]) -> Self {
        ReadOnlyFixedArray {
            values: Box::new(values),
        }
    }
}

impl<T> FromIterator<T> for ReadOnlyFixedArray<T> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        ReadOnlyFixedArray {
            values: iter.into_iter().collect(),
        }
    }
}

impl<T> fmt::Display for ReadOnlyFixedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[array]")
    }
}

/// A fixed-length array of `T` whose elements can be overwritten.
///
/// Derefs to [`ReadOnlyFixedArray`] for every read-only operation.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedArray<T> {
    inner: ReadOnlyFixedArray<T>,
}

impl<T> FixedArray<T> {
    /// Borrow the slot at `index` for writing, or an absent reference when
    /// `index` is out of range.
    ///
    /// ```
    /// use jsval_core::FixedArray;
    ///
    /// let mut a = FixedArray::from([1, 2, 3]);
    /// a.at_mut(0).set(7).unwrap();
    /// assert_eq!(a.at(0).value(), Some(&7));
    /// assert!(a.at_mut(3).set(9).is_err());
    /// ```
    pub fn at_mut<I: Position>(&mut self, index: I) -> ElementReference<'_, T> {
        self.lookup_mut(index).into()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.inner.values.iter_mut()
    }

    pub fn into_read_only(self) -> ReadOnlyFixedArray<T> {
        self.inner
    }
}

impl<T> Deref for FixedArray<T> {
    type Target = ReadOnlyFixedArray<T>;

    fn deref(&self) -> &ReadOnlyFixedArray<T> {
        &self.inner
    }
}

impl<T, I: Position> Lookup<I> for FixedArray<T> {
    type Item = T;

    fn lookup(&self, index: I) -> Option<&T> {
        self.inner.lookup(index)
    }
}

impl<T, I: Position> LookupMut<I> for FixedArray<T> {
    fn lookup_mut(&mut self, index: I) -> Option<&mut T> {
        self.inner.slot_mut(index.to_position())
    }
}

impl<T> From<Vec<T>> for FixedArray<T> {
    fn from(values: Vec<T>) -> Self {
        FixedArray {
            inner: values.into(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for FixedArray<T> {
    fn from(values: [T; N]) -> Self {
        FixedArray {
            inner: values.into(),
        }
    }
}

impl<T> FromIterator<T> for FixedArray<T> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        FixedArray {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T> From<ReadOnlyFixedArray<T>> for FixedArray<T> {
    fn from(inner: ReadOnlyFixedArray<T>) -> Self {
        FixedArray { inner }
    }
}

impl<T> fmt::Display for FixedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}
