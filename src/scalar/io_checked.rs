//! Wrapper that reports scalar failures as [`std::io::Error`]s.

use std::io;

use super::Scalar;
use crate::error::Error;

/// Scalar wrapper for callers that already deal in `io::Result`.
///
/// The original [`Error`] becomes the inner error of the returned
/// `io::Error`. Its kind is `Other`, unless the failure was itself an I/O
/// error wrapped with [`Error::custom`], in which case that kind is kept.
///
/// # Examples
///
/// ```rust
/// use libscalar::prelude::*;
/// use std::io;
///
/// let size = IoChecked::new(|| -> libscalar::error::Result<u64> {
///     Err(Error::custom(io::Error::new(io::ErrorKind::NotFound, "missing")))
/// });
/// assert_eq!(size.value().unwrap_err().kind(), io::ErrorKind::NotFound);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct IoChecked<S> {
    inner: S,
}

impl<S> IoChecked<S> {
    /// Creates an I/O-flavoured wrapper around `scalar`.
    #[inline]
    pub fn new(scalar: S) -> Self {
        Self { inner: scalar }
    }

    /// Returns a reference to the inner scalar.
    #[inline]
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Unwraps the inner scalar.
    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }

    /// Evaluates the inner scalar.
    pub fn value<T>(&self) -> io::Result<T>
    where
        S: Scalar<T>,
    {
        self.inner.value().map_err(|cause| {
            let kind = io_kind(&cause);
            io::Error::new(kind, cause)
        })
    }
}

fn io_kind(err: &Error) -> io::ErrorKind {
    match err.root() {
        Error::Custom(inner) => inner
            .downcast_ref::<io::Error>()
            .map_or(io::ErrorKind::Other, io::Error::kind),
        _ => io::ErrorKind::Other,
    }
}
