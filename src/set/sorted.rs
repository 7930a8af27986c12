//! Set materialized from a source sequence under a comparison rule.

use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use super::Comparator;
use crate::error::{Error, Fault, Result};
use crate::scalar::Unchecked;

/// An immutable set of `T` ordered by a [`Comparator`].
///
/// The source is drained once, at construction, and the resulting elements
/// are kept in ascending order. Later queries run against that snapshot.
///
/// Elements that compare [`Equal`](Ordering::Equal) are deduplicated and the
/// **first** one seen in the source is kept, as with a tree set whose `add`
/// ignores elements already present.
///
/// # Examples
///
/// ```rust
/// use libscalar::prelude::*;
///
/// let set = Sorted::new(Natural, [3, 1, 2, 1]);
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert!(set.contains(&2));
/// ```
#[derive(Clone)]
pub struct Sorted<T, C> {
    items: Vec<T>,
    cmp: C,
}

impl<T, C> Sorted<T, C>
where
    C: Comparator<T>,
{
    /// Builds the set from the elements of `src`.
    ///
    /// # Panics
    ///
    /// Unwinds with a [`Fault`] if `cmp` fails for any pair of elements.
    pub fn new<I>(cmp: C, src: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_source(cmp, src.into_iter().map(Ok))
    }

    /// Builds the set from a source whose traversal may fail.
    ///
    /// # Panics
    ///
    /// Unwinds with a [`Fault`] if the source or `cmp` fails.
    pub fn from_source<I>(cmp: C, src: I) -> Self
    where
        I: IntoIterator<Item = Result<T>>,
    {
        let items = materialize(&cmp, src).value();
        Self { items, cmp }
    }

    /// Fallible form of [`Sorted::new`].
    pub fn try_new<I>(cmp: C, src: I) -> std::result::Result<Self, Fault>
    where
        I: IntoIterator<Item = T>,
    {
        Self::try_from_source(cmp, src.into_iter().map(Ok))
    }

    /// Fallible form of [`Sorted::from_source`].
    pub fn try_from_source<I>(cmp: C, src: I) -> std::result::Result<Self, Fault>
    where
        I: IntoIterator<Item = Result<T>>,
    {
        let items = materialize(&cmp, src).try_value()?;
        Ok(Self { items, cmp })
    }

    /// Returns `true` if an element equal to `item` under the comparator is
    /// present.
    ///
    /// # Panics
    ///
    /// Unwinds with a [`Fault`] if the comparator fails.
    pub fn contains(&self, item: &T) -> bool {
        Unchecked::new(|| self.try_contains(item)).value()
    }

    /// Fallible form of [`Sorted::contains`].
    pub fn try_contains(&self, item: &T) -> Result<bool> {
        Ok(search(&self.cmp, &self.items, item)?.is_ok())
    }
}

impl<T, C> Sorted<T, C> {
    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the set has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates in ascending order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// The smallest element.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// The largest element.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// The element at ascending position `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// All elements in ascending order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// The comparison rule of this set.
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Unwraps the elements in ascending order.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

/// Drains `src` into an ascending, deduplicated vector.
///
/// The source can only be consumed once; a second evaluation of the returned
/// scalar fails with [`Error::Source`].
fn materialize<'a, T, C, I>(cmp: &'a C, src: I) -> Unchecked<impl Fn() -> Result<Vec<T>> + 'a>
where
    C: Comparator<T>,
    I: IntoIterator<Item = Result<T>> + 'a,
    T: 'a,
{
    let source = Cell::new(Some(src));
    Unchecked::new(move || {
        let src = source
            .take()
            .ok_or_else(|| Error::Source("source already consumed".into()))?;
        collect(cmp, src)
    })
}

fn collect<T, C, I>(cmp: &C, src: I) -> Result<Vec<T>>
where
    C: Comparator<T>,
    I: IntoIterator<Item = Result<T>>,
{
    let drained = src.into_iter().collect::<Result<Vec<T>>>()?;
    let seen = drained.len();

    // The sort is stable, so the first of each run of equal elements is the
    // one that came first in the source.
    let sorted = merge_sort(cmp, drained)?;
    let mut items: Vec<T> = Vec::with_capacity(sorted.len());
    for item in sorted {
        let duplicate = match items.last() {
            Some(last) => cmp.compare(last, &item)? == Ordering::Equal,
            None => false,
        };
        if !duplicate {
            items.push(item);
        }
    }

    debug!(seen, unique = items.len(), "materialized sorted set");
    Ok(items)
}

/// Stable merge sort under a fallible comparator.
fn merge_sort<T, C>(cmp: &C, mut items: Vec<T>) -> Result<Vec<T>>
where
    C: Comparator<T>,
{
    if items.len() <= 1 {
        return Ok(items);
    }
    let right = items.split_off(items.len() / 2);
    let left = merge_sort(cmp, items)?;
    let right = merge_sort(cmp, right)?;
    merge(cmp, left, right)
}

fn merge<T, C>(cmp: &C, left: Vec<T>, right: Vec<T>) -> Result<Vec<T>>
where
    C: Comparator<T>,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        // Ties go to the left run.
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => cmp.compare(l, r)? != Ordering::Greater,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }
    Ok(merged)
}

/// Binary search under a fallible comparator.
///
/// `Ok(Ok(index))` when an equal element exists, `Ok(Err(index))` with the
/// insertion point otherwise.
fn search<T, C>(
    cmp: &C,
    items: &[T],
    target: &T,
) -> Result<std::result::Result<usize, usize>>
where
    C: Comparator<T>,
{
    let (mut lo, mut hi) = (0, items.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match cmp.compare(&items[mid], target)? {
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
            Ordering::Equal => return Ok(Ok(mid)),
        }
    }
    Ok(Err(lo))
}

impl<T: fmt::Debug, C> fmt::Debug for Sorted<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(&self.items).finish()
    }
}

impl<T: PartialEq, C> PartialEq for Sorted<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T, C> IntoIterator for Sorted<T, C> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T, C> IntoIterator for &'a Sorted<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(feature = "serialization")]
impl<T: serde::Serialize, C> serde::Serialize for Sorted<T, C> {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.items)
    }
}
