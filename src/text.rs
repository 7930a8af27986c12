//! Text views consumed by [`NumberOf`](crate::scalar::NumberOf).

use std::fmt;

use crate::error::Result;
use crate::scalar::{Constant, Scalar};

/// Anything that can produce a string, possibly failing.
pub trait Text {
    /// Produces the string.
    fn as_string(&self) -> Result<String>;
}

impl Text for str {
    #[inline]
    fn as_string(&self) -> Result<String> {
        Ok(self.to_owned())
    }
}

impl Text for String {
    #[inline]
    fn as_string(&self) -> Result<String> {
        Ok(self.clone())
    }
}

impl<X: Text + ?Sized> Text for &X {
    #[inline]
    fn as_string(&self) -> Result<String> {
        (**self).as_string()
    }
}

impl<X: Text + ?Sized> Text for Box<X> {
    #[inline]
    fn as_string(&self) -> Result<String> {
        (**self).as_string()
    }
}

/// Text backed by a string scalar.
///
/// # Examples
///
/// ```rust
/// use libscalar::prelude::*;
///
/// assert_eq!(TextOf::new("42").as_string().unwrap(), "42");
///
/// let deferred = TextOf::from_scalar(|| Ok(format!("{}{}", 4, 2)));
/// assert_eq!(deferred.as_string().unwrap(), "42");
/// ```
pub struct TextOf {
    source: Box<dyn Scalar<String>>,
}

impl TextOf {
    /// Text with fixed contents.
    pub fn new(text: impl Into<String>) -> Self {
        Self::from_scalar(Constant::new(text.into()))
    }

    /// Text produced by `scalar` on every read.
    pub fn from_scalar<S>(scalar: S) -> Self
    where
        S: Scalar<String> + 'static,
    {
        Self {
            source: Box::new(scalar),
        }
    }
}

impl Text for TextOf {
    #[inline]
    fn as_string(&self) -> Result<String> {
        self.source.value()
    }
}

impl fmt::Debug for TextOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextOf").finish_non_exhaustive()
    }
}

impl From<&str> for TextOf {
    fn from(text: &str) -> Self {
        TextOf::new(text)
    }
}

impl From<String> for TextOf {
    fn from(text: String) -> Self {
        TextOf::new(text)
    }
}
