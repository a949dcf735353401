//! The two trivial scalar wrappers: [`Absence`] and [`Flag`].

use std::fmt;

/// The absence of a value. Always falsy, renders as `undefined`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Absence;

impl From<Absence> for bool {
    fn from(_: Absence) -> bool {
        false
    }
}

impl fmt::Display for Absence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("undefined")
    }
}

/// A boolean wrapper. Renders as `true` / `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Flag(pub bool);

impl Flag {
    pub fn get(self) -> bool {
        self.0
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        Flag(value)
    }
}

impl From<Flag> for bool {
    fn from(flag: Flag) -> bool {
        flag.0
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.0 { "true" } else { "false" })
    }
}

/// Marker for an explicit null. Only meaningful as a rendering argument;
/// it renders as `null` and is not one of the variant shapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Null;

impl fmt::Display for Null {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("null")
    }
}
