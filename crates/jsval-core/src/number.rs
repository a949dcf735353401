//! Double-precision number wrapper.
//!
//! Every integral input is normalized to an `f64`. Narrowing back to an
//! integral type truncates toward zero with native `as` semantics
//! (saturating at the target's bounds, `NaN` becomes 0).

use std::fmt;

/// A number, stored as IEEE 754 double precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Number(pub f64);

impl Number {
    pub fn new(value: f64) -> Self {
        Number(value)
    }

    pub fn to_f64(self) -> f64 {
        self.0
    }

    /// Coerce to an unsigned position. Fractions truncate toward zero;
    /// negative, `NaN` and infinite values have no position.
    pub fn to_position(self) -> Option<usize> {
        let f = self.0.trunc();
        if !f.is_finite() || f < 0.0 || f >= usize::MAX as f64 {
            return None;
        }
        Some(f as usize)
    }
}

macro_rules! impl_integral {
    ($($t:ty),* $(,)?) => {$(
        impl From<$t> for Number {
            fn from(value: $t) -> Self {
                Number(value as f64)
            }
        }

        impl From<Number> for $t {
            fn from(n: Number) -> $t {
                n.0 as $t
            }
        }
    )*};
}

impl_integral!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number(f64::from(value))
    }
}

impl From<Number> for f64 {
    fn from(n: Number) -> f64 {
        n.0
    }
}

impl fmt::Display for Number {
    /// Shortest decimal form: no exponent for whole numbers within `i64`,
    /// no trailing zeros, `-0` shown as `0`, and `NaN` / `Infinity` for
    /// the non-finite values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            return f.write_str("NaN");
        }
        if v.is_infinite() {
            return f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" });
        }
        // -0 and 0 both render as 0
        let v = if v == 0.0 { 0.0 } else { v };
        if v.fract() == 0.0 && v.abs() < (i64::MAX as f64) {
            return write!(f, "{}", v as i64);
        }
        write!(f, "{}", v)
    }
}
