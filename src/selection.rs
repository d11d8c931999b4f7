//! Order statistics: extrema, approximate medians and k-th smallest selection.
//!
//! - [`select_min_max`] finds both extrema with about `1.5 n` comparisons by scanning in pairs.
//!   [`select_min_max_naive`] is the `2 n` reference version.
//! - [`median_of_medians`] returns a pivot guaranteed to sit roughly between the 30th and 70th
//!   percentile.
//! - [`quick_select`] returns the k-th order statistic in expected linear time using random pivots.

use crate::comparison::insertion_sort;
use crate::core::{PivotSource, Sequence, check_index, check_range};
use crate::error::OrderError;
use crate::quick::select_partition;

const GROUP_SIZE: usize = 5;

/// Returns references to the minimum and maximum elements.
///
/// Elements are processed in pairs: one comparison orders the pair, then the smaller candidate is
/// compared against the running minimum and the larger against the running maximum. For an odd
/// length the first element seeds both extrema; for an even length the first pair does.
///
/// When several elements tie for an extremum, any one of them may be returned.
///
/// # Errors
///
/// Returns [`OrderError::EmptyInput`] if the sequence is empty.
///
/// # Examples
///
/// ```
/// use ordkit::selection::select_min_max;
///
/// let data = vec![3, 9, -4, 7];
/// assert_eq!(select_min_max(&data).unwrap(), (&-4, &9));
/// ```
pub fn select_min_max<S>(seq: &S) -> Result<(&S::Item, &S::Item), OrderError>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    let n = seq.len();
    if n == 0 {
        return Err(OrderError::EmptyInput);
    }

    let (mut min, mut max, start) = if n % 2 == 1 {
        (seq.get(0), seq.get(0), 1)
    } else {
        let (a, b) = (seq.get(0), seq.get(1));
        if b < a { (b, a, 2) } else { (a, b, 2) }
    };

    let mut i = start;
    while i < n {
        let (a, b) = (seq.get(i), seq.get(i + 1));
        let (small, large) = if b < a { (b, a) } else { (a, b) };
        if small < min {
            min = small;
        }
        if large > max {
            max = large;
        }
        i += 2;
    }

    Ok((min, max))
}

/// Returns references to the minimum and maximum elements, comparing every element against both
/// running extrema.
///
/// Produces the same result as [`select_min_max`], using `2 (n - 1)` comparisons.
///
/// # Errors
///
/// Returns [`OrderError::EmptyInput`] if the sequence is empty.
pub fn select_min_max_naive<S>(seq: &S) -> Result<(&S::Item, &S::Item), OrderError>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    if seq.is_empty() {
        return Err(OrderError::EmptyInput);
    }

    let mut min = seq.get(0);
    let mut max = seq.get(0);
    for i in 1..seq.len() {
        let item = seq.get(i);
        if item < min {
            min = item;
        }
        if item > max {
            max = item;
        }
    }

    Ok((min, max))
}

/// Approximates the median by repeatedly taking the medians of groups of five.
///
/// The input is split into groups of at most five elements. Each group is sorted and its middle
/// element (the upper middle for even-sized groups) is collected. This repeats on the collected
/// medians until fewer than five remain, whose direct median is returned.
///
/// The input sequence is not modified.
///
/// # Errors
///
/// Returns [`OrderError::EmptyInput`] if the sequence is empty.
///
/// # Examples
///
/// ```
/// use ordkit::selection::median_of_medians;
///
/// let data: Vec<u32> = (1..=25).collect();
/// assert_eq!(median_of_medians(&data).unwrap(), 13);
/// ```
pub fn median_of_medians<S>(seq: &S) -> Result<S::Item, OrderError>
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
{
    if seq.is_empty() {
        return Err(OrderError::EmptyInput);
    }

    let mut level: Vec<S::Item> = (0..seq.len()).map(|i| seq.get(i).clone()).collect();

    while level.len() >= GROUP_SIZE {
        level = level.chunks(GROUP_SIZE).map(group_median).collect();
    }

    Ok(group_median(&level))
}

/// Exact median of a group of at most five elements.
fn group_median<T: Ord + Clone>(group: &[T]) -> T {
    let mut group = group.to_vec();
    insertion_sort(&mut group);
    group[group.len() / 2].clone()
}

/// Returns the element that would occupy index `k` if the whole sequence were sorted.
///
/// Pivots are drawn from the thread-local random generator. The sequence is partially reordered.
///
/// Every copy of the pivot lands on its left, so input dominated by a single repeated value takes
/// quadratic time.
///
/// # Errors
///
/// Returns [`OrderError::OutOfRange`] if `k >= seq.len()` (including an empty sequence).
///
/// # Examples
///
/// ```
/// use ordkit::selection::quick_select;
///
/// let mut data = vec![9, 1, 5, 3, 7];
/// assert_eq!(quick_select(&mut data, 2).unwrap(), 5);
/// ```
pub fn quick_select<S>(seq: &mut S, k: usize) -> Result<S::Item, OrderError>
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
{
    quick_select_with(seq, k, &mut rand::rng())
}

/// [`quick_select`] with an injected pivot source.
pub fn quick_select_with<S, P>(
    seq: &mut S,
    k: usize,
    pivots: &mut P,
) -> Result<S::Item, OrderError>
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
    P: PivotSource + ?Sized,
{
    check_index(&*seq, k)?;
    let high = seq.len() - 1;
    quick_select_range(seq, k, 0, high, pivots)
}

/// Selects the k-th order statistic restricted to the inclusive sub-range `[low, high]`.
///
/// Only elements inside the range are examined or moved, and `k` is an absolute index that must
/// lie within the range.
///
/// Each round partitions `[low, high]` around a random pivot that ends at its final position `mid`;
/// the search then narrows to the side holding `k` until `mid == k` or the range shrinks to one
/// element.
///
/// # Errors
///
/// Returns [`OrderError::InvalidRange`] if the range is inverted or exceeds the sequence, and
/// [`OrderError::OutOfRange`] if `k` lies outside `[low, high]`.
pub fn quick_select_range<S, P>(
    seq: &mut S,
    k: usize,
    mut low: usize,
    mut high: usize,
    pivots: &mut P,
) -> Result<S::Item, OrderError>
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
    P: PivotSource + ?Sized,
{
    check_range(&*seq, low, high)?;
    if k < low || k > high {
        return Err(OrderError::OutOfRange {
            index: k,
            len: seq.len(),
        });
    }

    while low < high {
        let mid = select_partition(seq, low, high, pivots);
        if k < mid {
            high = mid - 1;
        } else if k > mid {
            low = mid + 1;
        } else {
            break;
        }
    }

    Ok(seq.get(k).clone())
}
