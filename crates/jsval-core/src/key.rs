//! Index keys and position coercion.
//!
//! A [`Key`] is what a [`Variant`](crate::Variant), [`Sequence`](crate::Sequence)
//! or [`Mapping`](crate::Mapping) is indexed with. Integral keys are kept
//! exact; a mapping canonicalizes every non-text key to its decimal text so
//! that `m[0]` and `m["0"]` address the same slot.

use std::fmt;

use crate::number::Number;
use crate::text::Text;

/// A key for indexing a sequence (by position) or a mapping (by name).
#[derive(Debug, Clone, PartialEq)]
pub enum Key {
    /// An exact integer.
    Integer(i128),
    /// An exact unsigned integer, for values past `i128::MAX`.
    Unsigned(u128),
    /// A number, possibly fractional. Positions truncate toward zero.
    Number(Number),
    /// A text key. Only valid for mappings.
    Name(String),
}

impl Key {
    /// The sequence position this key refers to, if any.
    pub fn position(&self) -> Option<usize> {
        match self {
            Key::Integer(i) => usize::try_from(*i).ok(),
            Key::Unsigned(u) => usize::try_from(*u).ok(),
            Key::Number(n) => n.to_position(),
            Key::Name(_) => None,
        }
    }

    /// The canonical mapping key: decimal text for numeric keys.
    pub fn into_name(self) -> String {
        match self {
            Key::Name(name) => name,
            other => other.to_string(),
        }
    }

    pub fn is_name(&self) -> bool {
        matches!(self, Key::Name(_))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Integer(i) => write!(f, "{i}"),
            Key::Unsigned(u) => write!(f, "{u}"),
            Key::Number(n) => write!(f, "{n}"),
            Key::Name(name) => f.write_str(name),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

impl From<&String> for Key {
    fn from(name: &String) -> Self {
        Key::Name(name.clone())
    }
}

impl From<Text> for Key {
    fn from(name: Text) -> Self {
        Key::Name(name.into_string())
    }
}

impl From<&Text> for Key {
    fn from(name: &Text) -> Self {
        Key::Name(name.as_str().to_string())
    }
}

impl From<Number> for Key {
    fn from(n: Number) -> Self {
        Key::Number(n)
    }
}

/// Coercion of an index argument to an unsigned position.
///
/// Returns `None` when the value has no position at all (negative,
/// non-finite, or too large), which callers treat as out of range.
pub trait Position: Copy {
    fn to_position(self) -> Option<usize>;
}

impl Position for Number {
    fn to_position(self) -> Option<usize> {
        Number::to_position(self)
    }
}

macro_rules! impl_integral_position {
    ($($t:ty),* $(,)?) => {$(
        impl Position for $t {
            fn to_position(self) -> Option<usize> {
                usize::try_from(self).ok()
            }
        }
    )*};
}

impl_integral_position!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_integral_key {
    ($($t:ty),* $(,)?) => {$(
        impl From<$t> for Key {
            fn from(i: $t) -> Self {
                Key::Integer(i as i128)
            }
        }
    )*};
}

impl_integral_key!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<u128> for Key {
    fn from(u: u128) -> Self {
        match i128::try_from(u) {
            Ok(i) => Key::Integer(i),
            Err(_) => Key::Unsigned(u),
        }
    }
}
