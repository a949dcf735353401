//! Optional results of bounds-checked indexing.
//!
//! Both wrappers are further indexable when their payload implements
//! [`Lookup`]: an absent level stays absent no matter what is indexed next,
//! so `outer.at(i).at(j)` never panics.

use std::fmt;

use crate::error::{JsError, Result};
use crate::fixed::{Lookup, LookupMut};

/// An owned copy of a container element, or the absence of one.
#[derive(Debug, Clone, PartialEq)]
pub enum Element<T> {
    Present(T),
    Absent,
}

impl<T> Element<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Element::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Element::Present(value) => Some(value),
            Element::Absent => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Element::Present(value) => Some(value),
            Element::Absent => None,
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        self.into_option().unwrap_or(default)
    }

    /// Index into the held value. Absent stays absent.
    pub fn at<I>(&self, index: I) -> Element<T::Item>
    where
        T: Lookup<I>,
        T::Item: Clone,
    {
        match self {
            Element::Present(inner) => inner.lookup(index).cloned().into(),
            Element::Absent => Element::Absent,
        }
    }
}

impl<T> Default for Element<T> {
    fn default() -> Self {
        Element::Absent
    }
}

impl<T> From<Option<T>> for Element<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Element::Present(value),
            None => Element::Absent,
        }
    }
}

impl<T> From<Element<T>> for Option<T> {
    fn from(element: Element<T>) -> Self {
        element.into_option()
    }
}

impl<T> From<&Element<T>> for bool {
    fn from(element: &Element<T>) -> bool {
        element.is_present()
    }
}

impl<T: fmt::Display> fmt::Display for Element<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Present(value) => fmt::Display::fmt(value, f),
            Element::Absent => f.write_str("undefined"),
        }
    }
}

/// A mutable borrow of a live container slot, or the absence of one.
///
/// The borrow ties the reference to its container, so it cannot outlive
/// the storage it points into.
#[derive(Debug)]
pub enum ElementReference<'a, T> {
    Present(&'a mut T),
    Absent,
}

impl<'a, T> ElementReference<'a, T> {
    pub fn is_present(&self) -> bool {
        matches!(self, ElementReference::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            ElementReference::Present(slot) => Some(&**slot),
            ElementReference::Absent => None,
        }
    }

    pub fn value_mut(&mut self) -> Option<&mut T> {
        match self {
            ElementReference::Present(slot) => Some(&mut **slot),
            ElementReference::Absent => None,
        }
    }

    pub fn into_mut(self) -> Option<&'a mut T> {
        match self {
            ElementReference::Present(slot) => Some(slot),
            ElementReference::Absent => None,
        }
    }

    /// Overwrite the referenced slot, returning the value it held.
    ///
    /// # Errors
    ///
    /// [`JsError::AbsentElement`] when there is no slot to write to.
    pub fn replace(&mut self, value: T) -> Result<T> {
        match self {
            ElementReference::Present(slot) => Ok(std::mem::replace(&mut **slot, value)),
            ElementReference::Absent => Err(JsError::AbsentElement),
        }
    }

    /// Overwrite the referenced slot.
    ///
    /// # Errors
    ///
    /// [`JsError::AbsentElement`] when there is no slot to write to.
    pub fn set(&mut self, value: T) -> Result<()> {
        self.replace(value).map(drop)
    }

    /// Copy the referenced value into an owned [`Element`].
    pub fn to_element(&self) -> Element<T>
    where
        T: Clone,
    {
        self.value().cloned().into()
    }

    /// Read through to the held container. Absent stays absent.
    pub fn at<I>(&self, index: I) -> Element<T::Item>
    where
        T: Lookup<I>,
        T::Item: Clone,
    {
        match self {
            ElementReference::Present(inner) => inner.lookup(index).cloned().into(),
            ElementReference::Absent => Element::Absent,
        }
    }

    /// Borrow a slot of the held container for writing. Absent stays absent.
    pub fn at_mut<I>(&mut self, index: I) -> ElementReference<'_, T::Item>
    where
        T: LookupMut<I>,
    {
        match self {
            ElementReference::Present(inner) => inner.lookup_mut(index).into(),
            ElementReference::Absent => ElementReference::Absent,
        }
    }
}

impl<T> Default for ElementReference<'_, T> {
    fn default() -> Self {
        ElementReference::Absent
    }
}

impl<'a, T> From<Option<&'a mut T>> for ElementReference<'a, T> {
    fn from(slot: Option<&'a mut T>) -> Self {
        match slot {
            Some(slot) => ElementReference::Present(slot),
            None => ElementReference::Absent,
        }
    }
}

impl<T> From<&ElementReference<'_, T>> for bool {
    fn from(reference: &ElementReference<'_, T>) -> bool {
        reference.is_present()
    }
}

impl<T: fmt::Display> fmt::Display for ElementReference<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementReference::Present(value) => fmt::Display::fmt(&**value, f),
            ElementReference::Absent => f.write_str("undefined"),
        }
    }
}
