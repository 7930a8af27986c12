//! Deferred computations and the wrappers that compose over them.
//!
//! A [`Scalar`] is a computation that produces a value on demand and may
//! fail with a recoverable [`Error`](crate::error::Error). Wrappers add one
//! behaviour each and are stacked by composition:
//!
//! ```text
//! Unchecked<Sticky<F, T>>
//!  ^         ^      ^
//!  |         |      └─ Deferred computation (any closure)
//!  |         └─ Runs it at most once, keeps the result
//!  └─ Turns a recoverable failure into a fault
//! ```
//!
//! # Available Wrappers
//!
//! - **`Sticky`**: Memoizes the first result (value or error)
//! - **`Unchecked`**: Converts failures into [`Fault`](crate::error::Fault)s
//! - **`IoChecked`**: Converts failures into [`std::io::Error`]s
//! - **`NumberOf`**: Parses text once into an `f64` with typed views
//!
//! # Examples
//!
//! ```rust
//! use libscalar::prelude::*;
//! use std::cell::Cell;
//!
//! let calls = Cell::new(0);
//! let answer = Unchecked::new(Sticky::new(|| {
//!     calls.set(calls.get() + 1);
//!     Ok(21 * 2)
//! }));
//!
//! assert_eq!(answer.value(), 42);
//! assert_eq!(answer.value(), 42);
//! assert_eq!(calls.get(), 1);
//! ```
//!
//! # Thread Safety
//!
//! None of the wrappers is meant to be shared between threads. [`Sticky`]
//! keeps its result in a `OnceCell` and is therefore `!Sync`.

use crate::error::Result;

mod io_checked;
mod number_of;
mod sticky;
mod unchecked;

pub use io_checked::IoChecked;
pub use number_of::NumberOf;
pub use sticky::Sticky;
pub use unchecked::Unchecked;

/// A computation that produces a `T` on demand and may fail.
///
/// Every call to [`value`](Scalar::value) may run arbitrary user logic again
/// unless the scalar is wrapped in a [`Sticky`].
///
/// Any closure `Fn() -> Result<T>` is a scalar.
pub trait Scalar<T> {
    /// Evaluates the computation.
    fn value(&self) -> Result<T>;
}

impl<T, F> Scalar<T> for F
where
    F: Fn() -> Result<T>,
{
    #[inline]
    fn value(&self) -> Result<T> {
        self()
    }
}

/// Scalar that always yields a clone of the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Constant<T> {
    value: T,
}

impl<T> Constant<T> {
    /// Creates a scalar that always yields `value`.
    #[inline]
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Unwraps the stored value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Clone> Scalar<T> for Constant<T> {
    #[inline]
    fn value(&self) -> Result<T> {
        Ok(self.value.clone())
    }
}
