//! Error types for scalar evaluation.
//!
//! Two tiers are used throughout the crate:
//!
//! - [`Error`] is the recoverable failure every [`Scalar`](crate::scalar::Scalar)
//!   may return. Scalars and the [`Sticky`](crate::scalar::Sticky) cache pass it
//!   through untouched.
//! - [`Fault`] is the unrecoverable failure produced only by
//!   [`Unchecked`](crate::scalar::Unchecked). It always keeps the original
//!   [`Error`] as its source.

use std::num::ParseFloatError;
use std::sync::Arc;

use thiserror::Error;

/// Recoverable failures raised while evaluating a scalar.
///
/// The type is `Clone` so that a memoized failure can be re-raised on every
/// later evaluation.
#[derive(Debug, Error, Clone)]
pub enum Error {
    /// The text is not a valid decimal floating-point numeral.
    #[error("cannot parse {input:?} as a number")]
    Parse {
        /// The text as it was handed to the parser.
        input: String,
        /// Underlying parse failure, absent when the text was rejected
        /// before reaching the float parser.
        #[source]
        source: Option<ParseFloatError>,
    },

    /// The comparison rule could not order two values.
    #[error("values are not comparable: {0}")]
    Incomparable(String),

    /// A source sequence failed while being consumed.
    #[error("source sequence failed: {0}")]
    Source(String),

    /// A text view could not produce its string.
    #[error("text is not available: {0}")]
    Text(String),

    /// A fault that was turned back into a recoverable failure.
    #[error(transparent)]
    Fault(#[from] Fault),

    /// Any other failure raised by user code.
    #[error(transparent)]
    Custom(Arc<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wraps an arbitrary error raised by user code.
    pub fn custom<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Custom(Arc::new(err))
    }

    /// Returns the innermost recoverable error, looking through
    /// [`Error::Fault`] layers.
    pub fn root(&self) -> &Error {
        match self {
            Error::Fault(fault) => fault.cause().root(),
            other => other,
        }
    }
}

/// Unrecoverable failure carrying the recoverable [`Error`] that caused it.
///
/// Produced by [`Unchecked`](crate::scalar::Unchecked). When raised by
/// [`Unchecked::value`](crate::scalar::Unchecked::value) it is the panic
/// payload, so it can be recovered with `downcast_ref::<Fault>()` after
/// `std::panic::catch_unwind`.
#[derive(Debug, Error, Clone)]
#[error("unchecked failure: {cause}")]
pub struct Fault {
    #[source]
    cause: Box<Error>,
}

impl Fault {
    /// Creates a fault caused by `cause`.
    pub fn new(cause: Error) -> Self {
        Self {
            cause: Box::new(cause),
        }
    }

    /// The recoverable error this fault was raised for.
    pub fn cause(&self) -> &Error {
        &self.cause
    }

    /// Unwraps the original error.
    pub fn into_cause(self) -> Error {
        *self.cause
    }
}

/// A specialized `Result` type for scalar evaluation.
pub type Result<T> = std::result::Result<T, Error>;
