//! Core traits and order primitives.
//!
//! This module defines:
//! - [`Sequence`]: the trait users implement so their containers can be sorted and searched.
//! - [`PivotSource`]: the uniform index generator consumed by every randomized partition.
//! - Small primitives shared by all algorithms (three-way comparison, checked access, permutation).

use crate::error::OrderError;
use rand::Rng;
use std::cmp::Ordering;
use std::collections::VecDeque;

/// An index-addressable, fixed-length, mutable sequence of elements.
///
/// This is the only capability the algorithms need from a container: O(1) random access, a known
/// length, and in-place element exchange. No iteration, insertion or removal is required.
///
/// `get`, `set` and `swap` follow slice indexing semantics and panic on an out-of-bounds index. Use
/// [`try_get`] and [`try_swap`] for checked access.
///
/// # Examples
///
/// Implementing for a custom container:
///
/// ```
/// use ordkit::core::Sequence;
///
/// struct Scores {
///     values: Vec<u32>,
/// }
///
/// impl Sequence for Scores {
///     type Item = u32;
///
///     fn len(&self) -> usize {
///         self.values.len()
///     }
///
///     fn get(&self, index: usize) -> &u32 {
///         &self.values[index]
///     }
///
///     fn set(&mut self, index: usize, value: u32) {
///         self.values[index] = value;
///     }
///
///     fn swap(&mut self, i: usize, j: usize) {
///         self.values.swap(i, j);
///     }
/// }
/// ```
pub trait Sequence {
    /// Element type, totally ordered for comparison sorts.
    type Item;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the element at `index`.
    fn get(&self, index: usize) -> &Self::Item;

    /// Overwrites the element at `index`.
    fn set(&mut self, index: usize, value: Self::Item);

    /// Exchanges the elements at `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);
}

impl<T> Sequence for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    fn swap(&mut self, i: usize, j: usize) {
        <[T]>::swap(self, i, j);
    }
}

// Explicit Vec impl to improve ergonomics (avoiding .as_mut_slice()).
impl<T> Sequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    fn swap(&mut self, i: usize, j: usize) {
        <[T]>::swap(self, i, j);
    }
}

// VecDeque provides O(1) random access, so every algorithm runs on it unchanged.
impl<T> Sequence for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    fn swap(&mut self, i: usize, j: usize) {
        VecDeque::swap(self, i, j);
    }
}

/// A source of uniformly distributed pivot indices.
///
/// Every [`rand::Rng`] is a `PivotSource`, so callers can pass `rand::rng()` or a seeded
/// `StdRng` to get reproducible partitions.
pub trait PivotSource {
    /// Returns an index drawn uniformly from the closed range `[low, high]`.
    ///
    /// Callers guarantee `low <= high`.
    fn pick(&mut self, low: usize, high: usize) -> usize;
}

impl<R: Rng + ?Sized> PivotSource for R {
    #[inline]
    fn pick(&mut self, low: usize, high: usize) -> usize {
        self.random_range(low..=high)
    }
}

/// Three-way comparison of two elements.
#[inline(always)]
pub fn compare<T: Ord + ?Sized>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

/// Returns the element at `index`, or `OutOfRange` if `index >= len`.
pub fn try_get<S: Sequence + ?Sized>(seq: &S, index: usize) -> Result<&S::Item, OrderError> {
    check_index(seq, index)?;
    Ok(seq.get(index))
}

/// Exchanges the elements at `i` and `j`, or fails with `OutOfRange` if either index is outside
/// the sequence. Nothing is moved on failure.
pub fn try_swap<S: Sequence + ?Sized>(seq: &mut S, i: usize, j: usize) -> Result<(), OrderError> {
    check_index(seq, i)?;
    check_index(seq, j)?;
    seq.swap(i, j);
    Ok(())
}

pub(crate) fn check_index<S: Sequence + ?Sized>(seq: &S, index: usize) -> Result<(), OrderError> {
    let len = seq.len();
    if index >= len {
        return Err(OrderError::OutOfRange { index, len });
    }
    Ok(())
}

/// Validates an inclusive `[low, high]` sub-range.
pub(crate) fn check_range<S: Sequence + ?Sized>(
    seq: &S,
    low: usize,
    high: usize,
) -> Result<(), OrderError> {
    let len = seq.len();
    if low > high || high >= len {
        return Err(OrderError::InvalidRange { low, high, len });
    }
    Ok(())
}

/// Reorders `seq` so that position `i` receives the element previously at `order[i]`.
///
/// `order` must be a permutation of `0..seq.len()`. The permutation is applied cycle by cycle using
/// swaps only, so elements never need to be cloned.
pub fn apply_permutation<S: Sequence + ?Sized>(seq: &mut S, mut order: Vec<usize>) {
    debug_assert_eq!(order.len(), seq.len());

    for start in 0..order.len() {
        let mut current = start;
        loop {
            let source = order[current];
            order[current] = current; // Mark as placed
            if source == start {
                break;
            }
            seq.swap(current, source);
            current = source;
        }
    }
}
