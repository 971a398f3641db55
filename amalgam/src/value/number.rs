//! Numbers read from parsed documents.

use std::fmt;

/// A number read from a JSON or TOML document.
///
/// Documents do not declare whether a slot holds an integer or a float, so
/// every parsed number has the single type [`super::ValueType::Number`] and
/// any two of them merge. Integers stay exact and keep their integer form
/// when serialised back.
///
/// # Examples
///
/// ```
/// use amalgam::Number;
///
/// assert_eq!(Number::from(7_i64).as_i64(), Some(7));
/// assert_eq!(Number::from(u64::MAX).as_u64(), Some(u64::MAX));
/// assert_eq!(Number::from(0.5).as_i64(), None);
/// assert_eq!(Number::from(u64::MAX).to_string(), "18446744073709551615");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Number(Repr);

#[derive(Clone, Copy, Debug, PartialEq)]
enum Repr {
    Int(i64),
    /// Only used above `i64::MAX`.
    Uint(u64),
    Float(f64),
}

impl Number {
    /// Whether the number was read as an integer.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        !matches!(self.0, Repr::Float(_))
    }

    /// The number as an `i64`, when it is an integer in range.
    #[must_use]
    pub fn as_i64(self) -> Option<i64> {
        match self.0 {
            Repr::Int(number) => Some(number),
            Repr::Uint(number) => i64::try_from(number).ok(),
            Repr::Float(_) => None,
        }
    }

    /// The number as a `u64`, when it is a non-negative integer.
    #[must_use]
    pub fn as_u64(self) -> Option<u64> {
        match self.0 {
            Repr::Int(number) => u64::try_from(number).ok(),
            Repr::Uint(number) => Some(number),
            Repr::Float(_) => None,
        }
    }

    /// The number as an `f64`. Integers beyond 2^53 lose precision.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "floating point callers accept rounding of very large integers"
    )]
    pub const fn as_f64(self) -> f64 {
        match self.0 {
            Repr::Int(number) => number as f64,
            Repr::Uint(number) => number as f64,
            Repr::Float(number) => number,
        }
    }
}

impl From<i64> for Number {
    fn from(number: i64) -> Self {
        Self(Repr::Int(number))
    }
}

impl From<u64> for Number {
    fn from(number: u64) -> Self {
        Self(i64::try_from(number).map_or(Repr::Uint(number), Repr::Int))
    }
}

impl From<f64> for Number {
    fn from(number: f64) -> Self {
        Self(Repr::Float(number))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Repr::Int(number) => fmt::Display::fmt(&number, f),
            Repr::Uint(number) => fmt::Display::fmt(&number, f),
            Repr::Float(number) => fmt::Display::fmt(&number, f),
        }
    }
}
