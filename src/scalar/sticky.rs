//! Memoizing wrapper that evaluates its scalar at most once.
//!
//! The first call to [`Scalar::value`] runs the wrapped computation and
//! latches its result, successful or not. Every later call returns a clone of
//! the latched result without touching the wrapped computation again.
//!
//! # Examples
//!
//! ```rust
//! use libscalar::prelude::*;
//! use std::cell::Cell;
//!
//! let calls = Cell::new(0);
//! let sticky = Sticky::new(|| {
//!     calls.set(calls.get() + 1);
//!     Ok(String::from("expensive"))
//! });
//!
//! assert!(!sticky.is_evaluated());
//! assert_eq!(sticky.value().unwrap(), "expensive");
//! assert_eq!(sticky.value().unwrap(), "expensive");
//! assert_eq!(calls.get(), 1);
//! ```

use std::cell::OnceCell;
use std::fmt;

use tracing::trace;

use super::Scalar;
use crate::error::Result;

/// Scalar that caches the first result of the wrapped scalar.
///
/// Failures are cached too: once the wrapped scalar has failed, the same
/// error is returned forever.
///
/// The cache lives in a `OnceCell`, which makes `Sticky` `!Sync`. Use one
/// instance per thread of control.
///
/// # Type Parameters
///
/// - `S`: Wrapped scalar type
/// - `T`: Value type produced by `S`
pub struct Sticky<S, T> {
    inner: S,
    cached: OnceCell<Result<T>>,
}

impl<S, T> Sticky<S, T>
where
    S: Scalar<T>,
{
    /// Creates a memoizing wrapper around `scalar`.
    ///
    /// Nothing is evaluated until the first call to [`Scalar::value`].
    #[inline]
    pub fn new(scalar: S) -> Self {
        Self {
            inner: scalar,
            cached: OnceCell::new(),
        }
    }
}

impl<S, T> Sticky<S, T> {
    /// Returns `true` once the wrapped scalar has been evaluated.
    #[inline]
    pub fn is_evaluated(&self) -> bool {
        self.cached.get().is_some()
    }

    /// Unwraps the inner scalar, discarding any cached result.
    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }

    /// Gets a reference to the inner scalar.
    #[inline]
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S, T> Scalar<T> for Sticky<S, T>
where
    S: Scalar<T>,
    T: Clone,
{
    fn value(&self) -> Result<T> {
        if let Some(cached) = self.cached.get() {
            trace!(ok = cached.is_ok(), "returning memoized result");
            return cached.clone();
        }

        trace!("evaluating wrapped scalar");
        let result = self.inner.value();

        // A re-entrant evaluation may have filled the cell already; the first
        // stored result wins.
        self.cached.get_or_init(|| result).clone()
    }
}

impl<S, T> fmt::Debug for Sticky<S, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sticky")
            .field("cached", &self.cached.get())
            .finish_non_exhaustive()
    }
}
