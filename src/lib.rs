//! # libscalar
//!
//! Composable, side-effect-free value wrappers.
//!
//! The core is a deferred computation, the [`Scalar`](scalar::Scalar) trait,
//! and the wrappers layered over it: [`Sticky`](scalar::Sticky) memoizes the
//! first result, [`Unchecked`](scalar::Unchecked) turns recoverable failures
//! into faults. Two adapters build on them:
//!
//! - [`NumberOf`](scalar::NumberOf) parses text once into an `f64`
//! - [`Sorted`](set::Sorted) materializes a source into an ordered set
//!
//! ## Example
//!
//! ```rust
//! use libscalar::prelude::*;
//!
//! let number = NumberOf::new("186789235425346");
//! assert_eq!(number.as_i64(), 186789235425346);
//!
//! let set = Sorted::new(Natural, [3, 1, 2, 1]);
//! assert_eq!(set.as_slice(), &[1, 2, 3]);
//! ```
//!
//! ## Features
//!
//! - `serialization`: serde support for `NumberOf` and `Sorted`
//!
//! None of the types is meant to be shared across threads.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod scalar;
pub mod set;
pub mod text;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::error::{Error, Fault};
    pub use crate::scalar::{Constant, IoChecked, NumberOf, Scalar, Sticky, Unchecked};
    pub use crate::set::{by_key, Comparator, Natural, Partial, Reversed, Sorted};
    pub use crate::text::{Text, TextOf};
}
