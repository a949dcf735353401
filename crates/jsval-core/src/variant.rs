//! The tagged variant value.
//!
//! A [`Variant`] holds exactly one of six shapes. Scalars (`Absence`,
//! `Flag`, `Number`) are stored inline; `Text`, `Sequence` and `Mapping`
//! live behind a uniquely owning `Box`. Cloning a variant deep-copies its
//! payload, and constructing one from a container copies the container
//! rather than aliasing it.

use std::fmt;

use crate::error::{JsError, Result};
use crate::fixed::{Lookup, LookupMut};
use crate::key::Key;
use crate::mapping::Mapping;
use crate::number::Number;
use crate::primitive::{Absence, Flag};
use crate::sequence::Sequence;
use crate::text::Text;

/// Which shape a [`Variant`] currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Absence,
    Flag,
    Number,
    Text,
    Sequence,
    Mapping,
}

impl Tag {
    pub fn name(self) -> &'static str {
        match self {
            Tag::Absence => "absence",
            Tag::Flag => "flag",
            Tag::Number => "number",
            Tag::Text => "text",
            Tag::Sequence => "sequence",
            Tag::Mapping => "mapping",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dynamically-typed value.
///
/// Equality is structural: two variants are equal when they hold the same
/// tag and equal payloads, recursively for sequences and mappings.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Variant {
    #[default]
    Absence,
    Flag(bool),
    Number(Number),
    Text(Box<Text>),
    Sequence(Box<Sequence>),
    Mapping(Box<Mapping>),
}

impl Variant {
    pub fn tag(&self) -> Tag {
        match self {
            Variant::Absence => Tag::Absence,
            Variant::Flag(_) => Tag::Flag,
            Variant::Number(_) => Tag::Number,
            Variant::Text(_) => Tag::Text,
            Variant::Sequence(_) => Tag::Sequence,
            Variant::Mapping(_) => Tag::Mapping,
        }
    }

    /// Truthiness: everything except `Absence` is truthy. `0`, `""` and
    /// empty containers are still truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Variant::Absence)
    }

    /// Read the element at `key`.
    ///
    /// On a sequence the key is coerced to a position; a text key is a
    /// [`JsError::TypeMismatch`].
    /// On a mapping numeric keys are stringified and a missing key reads as
    /// `undefined` without inserting anything.
    ///
    /// # Panics
    ///
    /// Panics if this is a sequence and the position is outside `[0, len)`.
    ///
    /// # Errors
    ///
    /// [`JsError::TypeMismatch`] when this variant is not a container.
    #[track_caller]
    pub fn at(&self, key: impl Into<Key>) -> Result<&Variant> {
        match self {
            Variant::Sequence(seq) => {
                let key = key.into();
                if key.is_name() {
                    return Err(JsError::type_mismatch("numeric key", Tag::Text));
                }
                Ok(seq.slot(&key))
            }
            Variant::Mapping(map) => Ok(&map[key]),
            other => Err(JsError::type_mismatch("sequence or mapping", other.tag())),
        }
    }

    /// Mutable access to the element at `key`.
    ///
    /// Same coercions as [`Variant::at`], except that a missing mapping key
    /// is inserted as `undefined` and its new slot returned.
    ///
    /// # Panics
    ///
    /// Panics if this is a sequence and the position is outside `[0, len)`.
    /// Sequences never grow through indexing.
    ///
    /// # Errors
    ///
    /// [`JsError::TypeMismatch`] when this variant is not a container.
    #[track_caller]
    pub fn at_mut(&mut self, key: impl Into<Key>) -> Result<&mut Variant> {
        match self {
            Variant::Sequence(seq) => {
                let key = key.into();
                if key.is_name() {
                    return Err(JsError::type_mismatch("numeric key", Tag::Text));
                }
                Ok(seq.slot_mut(&key))
            }
            Variant::Mapping(map) => Ok(map.get_or_insert(key)),
            other => Err(JsError::type_mismatch("sequence or mapping", other.tag())),
        }
    }

    /// Copy out the held text.
    ///
    /// # Errors
    ///
    /// [`JsError::TypeMismatch`] unless the tag is `Text`.
    pub fn to_text(&self) -> Result<Text> {
        self.as_text()
            .cloned()
            .ok_or_else(|| JsError::type_mismatch("text", self.tag()))
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Variant::Text(text) => Some(&**text),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Variant::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            Variant::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Variant::Sequence(seq) => Some(&**seq),
            _ => None,
        }
    }

    pub fn as_sequence_mut(&mut self) -> Option<&mut Sequence> {
        match self {
            Variant::Sequence(seq) => Some(&mut **seq),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Variant::Mapping(map) => Some(&**map),
            _ => None,
        }
    }

    pub fn as_mapping_mut(&mut self) -> Option<&mut Mapping> {
        match self {
            Variant::Mapping(map) => Some(&mut **map),
            _ => None,
        }
    }

    /// `self` if truthy, otherwise `other`.
    pub fn or(self, other: Variant) -> Variant {
        if self.is_truthy() {
            self
        } else {
            other
        }
    }

    /// `other` if `self` is truthy, otherwise `self`.
    pub fn and(self, other: Variant) -> Variant {
        if self.is_truthy() {
            other
        } else {
            self
        }
    }
}

/// Non-trapping lookup into a held container. Scalars, text keys on a
/// sequence, out-of-range positions and missing mapping keys all give `None`,
/// and nothing is ever inserted.
impl<K: Into<Key>> Lookup<K> for Variant {
    type Item = Variant;

    fn lookup(&self, key: K) -> Option<&Variant> {
        match self {
            Variant::Sequence(seq) => {
                let key: Key = key.into();
                seq.get(key.position()?)
            }
            Variant::Mapping(map) => map.get(key),
            _ => None,
        }
    }
}

impl<K: Into<Key>> LookupMut<K> for Variant {
    fn lookup_mut(&mut self, key: K) -> Option<&mut Variant> {
        match self {
            Variant::Sequence(seq) => {
                let key: Key = key.into();
                seq.get_mut(key.position()?)
            }
            Variant::Mapping(map) => map.get_mut(key),
            _ => None,
        }
    }
}

impl From<&Variant> for bool {
    fn from(value: &Variant) -> bool {
        value.is_truthy()
    }
}

impl From<Variant> for bool {
    fn from(value: Variant) -> bool {
        value.is_truthy()
    }
}

impl TryFrom<&Variant> for Text {
    type Error = JsError;

    fn try_from(value: &Variant) -> Result<Text> {
        value.to_text()
    }
}

impl TryFrom<Variant> for Text {
    type Error = JsError;

    fn try_from(value: Variant) -> Result<Text> {
        match value {
            Variant::Text(text) => Ok(*text),
            other => Err(JsError::type_mismatch("text", other.tag())),
        }
    }
}

// ---------------------------------------------------------------------------
// Promotion into a variant
// ---------------------------------------------------------------------------

impl From<()> for Variant {
    fn from(_: ()) -> Self {
        Variant::Absence
    }
}

impl From<Absence> for Variant {
    fn from(_: Absence) -> Self {
        Variant::Absence
    }
}

impl From<bool> for Variant {
    fn from(value: bool) -> Self {
        Variant::Flag(value)
    }
}

impl From<Flag> for Variant {
    fn from(value: Flag) -> Self {
        Variant::Flag(value.get())
    }
}

impl From<Number> for Variant {
    fn from(value: Number) -> Self {
        Variant::Number(value)
    }
}

macro_rules! impl_from_number {
    ($($t:ty),* $(,)?) => {$(
        impl From<$t> for Variant {
            fn from(value: $t) -> Self {
                Variant::Number(Number::from(value))
            }
        }
    )*};
}

impl_from_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl From<Text> for Variant {
    fn from(value: Text) -> Self {
        Variant::Text(Box::new(value))
    }
}

impl From<&Text> for Variant {
    fn from(value: &Text) -> Self {
        Variant::Text(Box::new(value.clone()))
    }
}

impl From<&str> for Variant {
    fn from(value: &str) -> Self {
        Variant::Text(Box::new(Text::from(value)))
    }
}

impl From<String> for Variant {
    fn from(value: String) -> Self {
        Variant::Text(Box::new(Text::from(value)))
    }
}

impl From<Sequence> for Variant {
    fn from(value: Sequence) -> Self {
        Variant::Sequence(Box::new(value))
    }
}

impl From<&Sequence> for Variant {
    fn from(value: &Sequence) -> Self {
        Variant::Sequence(Box::new(value.clone()))
    }
}

impl From<Mapping> for Variant {
    fn from(value: Mapping) -> Self {
        Variant::Mapping(Box::new(value))
    }
}

impl From<&Mapping> for Variant {
    fn from(value: &Mapping) -> Self {
        Variant::Mapping(Box::new(value.clone()))
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Absence => fmt::Display::fmt(&Absence, f),
            Variant::Flag(b) => fmt::Display::fmt(&Flag(*b), f),
            Variant::Number(n) => fmt::Display::fmt(n, f),
            Variant::Text(text) => fmt::Display::fmt(text, f),
            Variant::Sequence(seq) => fmt::Display::fmt(seq, f),
            Variant::Mapping(map) => fmt::Display::fmt(map, f),
        }
    }
}
