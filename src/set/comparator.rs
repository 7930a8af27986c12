//! Comparison rules used to order a [`Sorted`](super::Sorted) set.

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::error::{Error, Result};

/// A total order over `T` that may fail for some pairs.
///
/// Two values are the same set element when `compare` returns
/// [`Ordering::Equal`].
///
/// Any closure `Fn(&T, &T) -> Result<Ordering>` is a comparator.
pub trait Comparator<T: ?Sized> {
    /// Orders `a` relative to `b`.
    fn compare(&self, a: &T, b: &T) -> Result<Ordering>;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Result<Ordering>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Result<Ordering> {
        self(a, b)
    }
}

/// The natural order of `T: Ord`. Never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Result<Ordering> {
        Ok(a.cmp(b))
    }
}

/// The partial order of `T: PartialOrd`.
///
/// Fails with [`Error::Incomparable`] for pairs that have no order, such as
/// a float compared with NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Partial;

impl<T: PartialOrd + Debug + ?Sized> Comparator<T> for Partial {
    fn compare(&self, a: &T, b: &T) -> Result<Ordering> {
        a.partial_cmp(b)
            .ok_or_else(|| Error::Incomparable(format!("{:?} and {:?}", a, b)))
    }
}

/// The reverse of another comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Result<Ordering> {
        self.0.compare(a, b).map(Ordering::reverse)
    }
}

/// Orders values by the natural order of a derived key.
///
/// ```rust
/// use libscalar::prelude::*;
///
/// let words = Sorted::new(by_key(|w: &&str| w.len()), ["ccc", "a", "bb", "dd"]);
/// assert_eq!(words.as_slice(), &["a", "bb", "ccc"]);
/// ```
pub fn by_key<T, K, F>(key: F) -> impl Fn(&T, &T) -> Result<Ordering>
where
    T: ?Sized,
    K: Ord,
    F: Fn(&T) -> K,
{
    move |a, b| Ok(key(a).cmp(&key(b)))
}
