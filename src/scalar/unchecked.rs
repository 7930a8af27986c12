//! Wrapper that turns recoverable failures into faults.
//!
//! `Unchecked` is the single place where the recoverable [`Error`] model is
//! traded for the unrecoverable [`Fault`] model. The original error is kept
//! as the fault's source; nothing is retried or dropped.
//!
//! # Examples
//!
//! ```rust
//! use libscalar::prelude::*;
//!
//! let checked = Unchecked::new(|| Ok(1.5));
//! assert_eq!(checked.value(), 1.5);
//!
//! let broken = Unchecked::new(|| -> libscalar::error::Result<f64> {
//!     Err(Error::Source("no data".into()))
//! });
//! let fault = broken.try_value().unwrap_err();
//! assert!(matches!(fault.cause(), Error::Source(_)));
//! ```

use std::panic;

use tracing::warn;

use super::Scalar;
use crate::error::{Error, Fault, Result};

/// Scalar wrapper whose failures are unrecoverable.
///
/// [`Unchecked::value`] returns the plain value and unwinds with a [`Fault`]
/// payload on failure. [`Unchecked::try_value`] hands the fault back instead,
/// for callers sitting at a boundary that wants to report it.
///
/// `Unchecked` is itself a [`Scalar`]; through that trait a fault is surfaced
/// as [`Error::Fault`], so the cause chain survives further composition.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unchecked<S> {
    inner: S,
}

impl<S> Unchecked<S> {
    /// Creates a fault-normalizing wrapper around `scalar`.
    #[inline]
    pub fn new(scalar: S) -> Self {
        Self { inner: scalar }
    }

    /// Unwraps the inner scalar.
    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }

    /// Gets a reference to the inner scalar.
    #[inline]
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Evaluates the inner scalar, converting a failure into a [`Fault`].
    pub fn try_value<T>(&self) -> std::result::Result<T, Fault>
    where
        S: Scalar<T>,
    {
        self.inner.value().map_err(|cause| {
            warn!(error = %cause, "scalar failed, raising fault");
            Fault::new(cause)
        })
    }

    /// Evaluates the inner scalar.
    ///
    /// # Panics
    ///
    /// Unwinds with a [`Fault`] payload when the inner scalar fails. The
    /// payload can be recovered with `downcast_ref::<Fault>()` after
    /// [`std::panic::catch_unwind`].
    pub fn value<T>(&self) -> T
    where
        S: Scalar<T>,
    {
        match self.try_value() {
            Ok(value) => value,
            Err(fault) => panic::panic_any(fault),
        }
    }
}

impl<S, T> Scalar<T> for Unchecked<S>
where
    S: Scalar<T>,
{
    #[inline]
    fn value(&self) -> Result<T> {
        self.try_value().map_err(Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::Sticky;
    use std::cell::Cell;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    fn failing() -> impl Fn() -> Result<u8> {
        || Err(Error::Incomparable("apples and pears".into()))
    }

    #[test]
    fn test_unchecked_returns_value() {
        let unchecked = Unchecked::new(|| Ok("ok"));
        assert_eq!(unchecked.value(), "ok");
        assert_eq!(unchecked.try_value().unwrap(), "ok");
    }

    #[test]
    fn test_unchecked_try_value_keeps_cause() {
        let fault = Unchecked::new(failing()).try_value().unwrap_err();
        assert!(matches!(fault.cause(), Error::Incomparable(msg) if msg == "apples and pears"));
    }

    #[test]
    fn test_unchecked_value_unwinds_with_fault() {
        let unchecked = Unchecked::new(failing());
        let payload = catch_unwind(AssertUnwindSafe(|| unchecked.value())).unwrap_err();

        let fault = payload
            .downcast_ref::<Fault>()
            .expect("panic payload must be a Fault");
        assert!(matches!(fault.cause(), Error::Incomparable(_)));
    }

    #[test]
    fn test_unchecked_does_not_retry() {
        let calls = Cell::new(0);
        let unchecked = Unchecked::new(|| -> Result<()> {
            calls.set(calls.get() + 1);
            Err(Error::Source("once".into()))
        });

        assert!(unchecked.try_value().is_err());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_unchecked_as_scalar_wraps_fault() {
        let unchecked = Unchecked::new(failing());
        let err = Scalar::value(&unchecked).unwrap_err();

        assert!(matches!(err, Error::Fault(_)));
        assert!(matches!(err.root(), Error::Incomparable(_)));
    }

    #[test]
    fn test_unchecked_over_sticky() {
        let calls = Cell::new(0);
        let unchecked = Unchecked::new(Sticky::new(|| {
            calls.set(calls.get() + 1);
            Ok(3)
        }));

        assert_eq!(unchecked.value(), 3);
        assert_eq!(unchecked.value(), 3);
        assert_eq!(calls.get(), 1);
    }
}
