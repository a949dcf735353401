//! Owned text wrapper with in-place append.
//!
//! Concatenation mutates the receiver and hands it back: `a + b` consumes
//! `a`, appends `b` to its buffer and returns that same buffer. Nothing is
//! shared, so the only observable effect is on the receiver itself.

use std::fmt;
use std::ops::{Add, AddAssign};

use crate::number::Number;

/// A text value that owns its buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Text(String);

impl Text {
    pub fn new(value: impl Into<String>) -> Self {
        Text(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Append the rendering of `value` to this text and return it.
    ///
    /// ```
    /// use jsval_core::{Number, Text};
    ///
    /// let mut t = Text::from("n=");
    /// t.append(Number::from(3)).append("!");
    /// assert_eq!(t.as_str(), "n=3!");
    /// ```
    pub fn append(&mut self, value: impl fmt::Display) -> &mut Self {
        use fmt::Write;
        // Writing into a String cannot fail.
        let _ = write!(self.0, "{value}");
        self
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Text(value.to_string())
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Text(value)
    }
}

impl From<Text> for String {
    fn from(text: Text) -> String {
        text.0
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Add<Text> for Text {
    type Output = Text;

    fn add(mut self, rhs: Text) -> Text {
        self.0.push_str(&rhs.0);
        self
    }
}

impl Add<&Text> for Text {
    type Output = Text;

    fn add(mut self, rhs: &Text) -> Text {
        self.0.push_str(&rhs.0);
        self
    }
}

impl Add<&str> for Text {
    type Output = Text;

    fn add(mut self, rhs: &str) -> Text {
        self.0.push_str(rhs);
        self
    }
}

impl Add<Number> for Text {
    type Output = Text;

    fn add(mut self, rhs: Number) -> Text {
        self.append(rhs);
        self
    }
}

impl<T> AddAssign<T> for Text
where
    Text: Add<T, Output = Text>,
{
    fn add_assign(&mut self, rhs: T) {
        let this = std::mem::take(self);
        *self = this + rhs;
    }
}

macro_rules! impl_add_integral {
    ($($t:ty),* $(,)?) => {$(
        impl Add<$t> for Text {
            type Output = Text;

            fn add(mut self, rhs: $t) -> Text {
                self.append(rhs);
                self
            }
        }
    )*};
}

impl_add_integral!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
