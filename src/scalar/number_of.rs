//! Text parsed once into a number.
//!
//! [`NumberOf`] parses its input as an `f64` exactly once, at construction,
//! and serves every typed view from that single value.
//!
//! ```rust
//! use libscalar::prelude::*;
//!
//! assert_eq!(NumberOf::new("186789235425346").as_i64(), 186789235425346);
//! assert_eq!(NumberOf::new("1867892354").as_i32(), 1867892354);
//! assert_eq!(NumberOf::new("185.65156465123").as_f64(), 185.65156465123);
//! ```

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::{Scalar, Sticky, Unchecked};
use crate::error::{Error, Fault, Result};
use crate::text::Text;

/// A number parsed from text.
///
/// Construction is eager: the text is parsed immediately and construction
/// fails if it is not a valid numeral. The plain constructors raise a
/// [`Fault`] (see [`Unchecked::value`]); the `try_*` constructors return it.
///
/// Integer views truncate toward zero and saturate at the bounds of the
/// target type; NaN maps to zero.
///
/// Only decimal numerals are understood; hexadecimal float literals such as
/// `0x1p3` are rejected.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct NumberOf {
    value: f64,
}

impl NumberOf {
    /// Parses `text`.
    ///
    /// # Panics
    ///
    /// Unwinds with a [`Fault`] caused by [`Error::Parse`] if `text` is not a
    /// valid numeral.
    pub fn new(text: &str) -> Self {
        Self::from_text(text)
    }

    /// Parses the string produced by `text`.
    ///
    /// # Panics
    ///
    /// Unwinds with a [`Fault`] if `text` fails or its string is not a valid
    /// numeral.
    pub fn from_text<X: Text>(text: X) -> Self {
        Self::from_scalar(parser(text))
    }

    /// Takes the value produced by `scalar`.
    ///
    /// # Panics
    ///
    /// Unwinds with a [`Fault`] if `scalar` fails.
    pub fn from_scalar<S: Scalar<f64>>(scalar: S) -> Self {
        Self {
            value: Unchecked::new(scalar).value(),
        }
    }

    /// Fallible form of [`NumberOf::new`].
    pub fn try_new(text: &str) -> std::result::Result<Self, Fault> {
        Self::try_from_text(text)
    }

    /// Fallible form of [`NumberOf::from_text`].
    pub fn try_from_text<X: Text>(text: X) -> std::result::Result<Self, Fault> {
        Self::try_from_scalar(parser(text))
    }

    /// Fallible form of [`NumberOf::from_scalar`].
    pub fn try_from_scalar<S: Scalar<f64>>(scalar: S) -> std::result::Result<Self, Fault> {
        let value = Unchecked::new(scalar).try_value()?;
        Ok(Self { value })
    }

    /// The value truncated toward zero into an `i32`.
    #[inline]
    pub fn as_i32(&self) -> i32 {
        self.value as i32
    }

    /// The value truncated toward zero into an `i64`.
    #[inline]
    pub fn as_i64(&self) -> i64 {
        self.value as i64
    }

    /// The value rounded to the nearest `f32`.
    #[inline]
    pub fn as_f32(&self) -> f32 {
        self.value as f32
    }

    /// The parsed value.
    #[inline]
    pub fn as_f64(&self) -> f64 {
        self.value
    }
}

/// Builds the memoized parse of `text`.
fn parser<X: Text>(text: X) -> Sticky<impl Fn() -> Result<f64>, f64> {
    Sticky::new(move || parse_f64(&text.as_string()?))
}

/// Parses a decimal floating-point numeral.
///
/// Surrounding whitespace and control characters are ignored, as is a single
/// `f`/`d` type suffix following a digit or a dot. The only spelled-out
/// values are `NaN` and `Infinity`, optionally signed, in exactly that case.
pub(crate) fn parse_f64(input: &str) -> Result<f64> {
    debug!(input, "parsing number");
    let trimmed = input.trim_matches(|c: char| c <= ' ');
    let body = strip_type_suffix(trimmed);

    let unsigned = body.strip_prefix(['+', '-']).unwrap_or(body);
    let spelled_out = unsigned.starts_with(|c: char| c.is_ascii_alphabetic());
    if spelled_out && unsigned != "NaN" && unsigned != "Infinity" {
        return Err(Error::Parse {
            input: input.to_owned(),
            source: None,
        });
    }

    body.parse::<f64>().map_err(|source| Error::Parse {
        input: input.to_owned(),
        source: Some(source),
    })
}

fn strip_type_suffix(text: &str) -> &str {
    let bytes = text.as_bytes();
    match bytes {
        [.., prev, b'f' | b'F' | b'd' | b'D'] if prev.is_ascii_digit() || *prev == b'.' => {
            &text[..text.len() - 1]
        }
        _ => text,
    }
}

impl Scalar<f64> for NumberOf {
    #[inline]
    fn value(&self) -> Result<f64> {
        Ok(self.value)
    }
}

impl fmt::Display for NumberOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl From<NumberOf> for f64 {
    #[inline]
    fn from(number: NumberOf) -> Self {
        number.value
    }
}

impl From<f64> for NumberOf {
    #[inline]
    fn from(value: f64) -> Self {
        Self { value }
    }
}

impl FromStr for NumberOf {
    type Err = Fault;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::try_new(s)
    }
}

impl TryFrom<&str> for NumberOf {
    type Error = Fault;

    fn try_from(text: &str) -> std::result::Result<Self, Self::Error> {
        Self::try_new(text)
    }
}

#[cfg(feature = "serialization")]
mod serde_impl {
    use super::NumberOf;
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    impl Serialize for NumberOf {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_f64(self.value)
        }
    }

    struct NumberVisitor;

    impl<'de> Visitor<'de> for NumberVisitor {
        type Value = NumberOf;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number or a numeral string")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<NumberOf, E> {
            Ok(NumberOf::from(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<NumberOf, E> {
            Ok(NumberOf::from(v as f64))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<NumberOf, E> {
            Ok(NumberOf::from(v as f64))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<NumberOf, E> {
            NumberOf::try_new(v).map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for NumberOf {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(NumberVisitor)
        }
    }
}
