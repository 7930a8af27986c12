//! Sorted sets built from arbitrary sources.
//!
//! [`Sorted`] drains a source sequence into an ascending, deduplicated set
//! under a [`Comparator`]. A comparator or source failure is raised through
//! [`Unchecked`](crate::scalar::Unchecked) at construction.
//!
//! # Available Comparators
//!
//! - **`Natural`**: `Ord` order, never fails
//! - **`Partial`**: `PartialOrd` order, fails on incomparable pairs
//! - **`Reversed`**: Reverses another comparator
//! - **`by_key`**: Natural order of a derived key
//! - Any closure `Fn(&T, &T) -> Result<Ordering>`

mod comparator;
mod sorted;

pub use comparator::{by_key, Comparator, Natural, Partial, Reversed};
pub use sorted::Sorted;
