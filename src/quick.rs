//! Quicksort variants and the partition routines they share with selection.
//!
//! | Variant | Partition | Stable | In-place |
//! |---|---|---|---|
//! | [`quick_sort`] | collect into `<`, `=`, `>` buckets | yes | no, returns a new `Vec` |
//! | [`quick_sort_dnf`] | three-way Dutch National Flag | no | yes |
//! | [`quick_sort_hoare`] | two converging cursors | no | yes |
//! | [`quick_sort_lomuto`] | single forward cursor | no | yes |
//!
//! All pivots are chosen uniformly at random. The in-place variants keep pending sub-ranges on an
//! explicit stack and always handle the smaller side first, so the stack never holds more than
//! `O(log n)` ranges even when pivots are unlucky.

use crate::core::{PivotSource, Sequence, check_range, compare};
use crate::error::OrderError;
use std::cmp::Ordering;

/// Sorts by splitting into less / equal / greater buckets around a random pivot value and
/// concatenating the recursively sorted outer buckets.
///
/// The input is not modified; a new sorted `Vec` is returned. Because each bucket is filled in input
/// order, the sort is stable.
///
/// # Examples
///
/// ```
/// use ordkit::quick::quick_sort;
///
/// let data = vec![4, 1, 4, 2];
/// assert_eq!(quick_sort(&data), vec![1, 2, 4, 4]);
/// ```
pub fn quick_sort<S>(seq: &S) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
{
    quick_sort_with(seq, &mut rand::rng())
}

/// [`quick_sort`] with an injected pivot source.
pub fn quick_sort_with<S, P>(seq: &S, pivots: &mut P) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
    P: PivotSource + ?Sized,
{
    let items: Vec<S::Item> = (0..seq.len()).map(|i| seq.get(i).clone()).collect();
    bucket_sort(items, pivots)
}

fn bucket_sort<T, P>(items: Vec<T>, pivots: &mut P) -> Vec<T>
where
    T: Ord + Clone,
    P: PivotSource + ?Sized,
{
    if items.len() <= 1 {
        return items;
    }

    let pivot = items[pivots.pick(0, items.len() - 1)].clone();
    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();
    for item in items {
        match compare(&item, &pivot) {
            Ordering::Less => less.push(item),
            Ordering::Equal => equal.push(item),
            Ordering::Greater => greater.push(item),
        }
    }

    let mut sorted = bucket_sort(less, pivots);
    sorted.append(&mut equal);
    sorted.append(&mut bucket_sort(greater, pivots));
    sorted
}

/// Sorts in place with three-way (Dutch National Flag) partitioning.
///
/// All copies of the pivot value are gathered into the middle region in one pass and never visited
/// again, so duplicate-heavy input does not degrade.
pub fn quick_sort_dnf<S>(seq: &mut S) -> &mut S
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
{
    sort_full(seq, &mut rand::rng(), dnf_step)
}

/// Sorts in place with Hoare partitioning.
///
/// # Examples
///
/// ```
/// use ordkit::quick::quick_sort_hoare;
///
/// let mut data = vec![3, 3, 1, 2, 2];
/// quick_sort_hoare(&mut data);
/// assert_eq!(data, vec![1, 2, 2, 3, 3]);
/// ```
pub fn quick_sort_hoare<S>(seq: &mut S) -> &mut S
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
{
    sort_full(seq, &mut rand::rng(), hoare_step)
}

/// Sorts in place with Lomuto partitioning.
pub fn quick_sort_lomuto<S>(seq: &mut S) -> &mut S
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    sort_full(seq, &mut rand::rng(), lomuto_step)
}

/// Sorts the inclusive sub-range `[low, high]` with DNF partitioning, leaving the rest untouched.
///
/// # Errors
///
/// Returns [`OrderError::InvalidRange`] if `low > high` or `high >= seq.len()`.
pub fn quick_sort_dnf_range<'a, S, P>(
    seq: &'a mut S,
    low: usize,
    high: usize,
    pivots: &mut P,
) -> Result<&'a mut S, OrderError>
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
    P: PivotSource + ?Sized,
{
    check_range(&*seq, low, high)?;
    Ok(sort_range(seq, low, high, pivots, dnf_step))
}

/// Sorts the inclusive sub-range `[low, high]` with Hoare partitioning, leaving the rest untouched.
///
/// # Errors
///
/// Returns [`OrderError::InvalidRange`] if `low > high` or `high >= seq.len()`.
pub fn quick_sort_hoare_range<'a, S, P>(
    seq: &'a mut S,
    low: usize,
    high: usize,
    pivots: &mut P,
) -> Result<&'a mut S, OrderError>
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
    P: PivotSource + ?Sized,
{
    check_range(&*seq, low, high)?;
    Ok(sort_range(seq, low, high, pivots, hoare_step))
}

/// Sorts the inclusive sub-range `[low, high]` with Lomuto partitioning, leaving the rest untouched.
///
/// # Errors
///
/// Returns [`OrderError::InvalidRange`] if `low > high` or `high >= seq.len()`.
pub fn quick_sort_lomuto_range<'a, S, P>(
    seq: &'a mut S,
    low: usize,
    high: usize,
    pivots: &mut P,
) -> Result<&'a mut S, OrderError>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
    P: PivotSource + ?Sized,
{
    check_range(&*seq, low, high)?;
    Ok(sort_range(seq, low, high, pivots, lomuto_step))
}

/// Unsorted sub-ranges produced by one partition step, as inclusive `(low, high)` pairs.
/// `None` marks a side with fewer than two elements.
struct Split {
    left: Option<(usize, usize)>,
    right: Option<(usize, usize)>,
}

impl Split {
    fn new(left: (usize, usize), right: (usize, usize)) -> Self {
        let keep = |(low, high): (usize, usize)| (low < high).then_some((low, high));
        Self {
            left: keep(left),
            right: keep(right),
        }
    }
}

fn sort_full<'a, S, P, F>(seq: &'a mut S, pivots: &mut P, step: F) -> &'a mut S
where
    S: Sequence + ?Sized,
    P: PivotSource + ?Sized,
    F: Fn(&mut S, usize, usize, &mut P) -> Split,
{
    let len = seq.len();
    if len < 2 {
        return seq;
    }
    sort_range(seq, 0, len - 1, pivots, step)
}

/// Drives `step` over `[low, high]` with an explicit work stack.
///
/// `step` partitions a range holding at least two elements and reports what is left to sort. The
/// larger side of every split is deferred and the smaller side handled next, bounding the stack at
/// `log2(n)` entries.
fn sort_range<'a, S, P, F>(
    seq: &'a mut S,
    low: usize,
    high: usize,
    pivots: &mut P,
    step: F,
) -> &'a mut S
where
    S: Sequence + ?Sized,
    P: PivotSource + ?Sized,
    F: Fn(&mut S, usize, usize, &mut P) -> Split,
{
    let mut pending = Vec::new();
    let mut current = (low < high).then_some((low, high));

    while let Some((low, high)) = current.or_else(|| pending.pop()) {
        let split = step(&mut *seq, low, high, pivots);
        current = match (split.left, split.right) {
            (Some(left), Some(right)) => {
                let (small, large) = if left.1 - left.0 <= right.1 - right.0 {
                    (left, right)
                } else {
                    (right, left)
                };
                pending.push(large);
                Some(small)
            }
            (side, None) | (None, side) => side,
        };
    }
    seq
}

fn dnf_step<S, P>(seq: &mut S, low: usize, high: usize, pivots: &mut P) -> Split
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
    P: PivotSource + ?Sized,
{
    let (lt, gt) = partition_three_way(seq, low, high, pivots);
    // [lt, gt) holds the pivot value, so lt <= high and gt > low.
    Split::new((low, lt.saturating_sub(1).max(low)), (gt, high))
}

fn hoare_step<S, P>(seq: &mut S, low: usize, high: usize, pivots: &mut P) -> Split
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
    P: PivotSource + ?Sized,
{
    let mid = partition_hoare(seq, low, high, pivots);
    Split::new((low, mid), (mid + 1, high))
}

fn lomuto_step<S, P>(seq: &mut S, low: usize, high: usize, pivots: &mut P) -> Split
where
    S: Sequence + ?Sized,
    S::Item: Ord,
    P: PivotSource + ?Sized,
{
    let mid = partition_lomuto(seq, low, high, pivots);
    Split::new((low, mid.saturating_sub(1).max(low)), (mid + 1, high))
}

/// Three-way partition of `[low, high]` around the value at a random index.
///
/// Returns `(lt, gt)` such that `[low, lt)` is `< pivot`, `[lt, gt)` is `== pivot` and
/// `[gt, high]` is `> pivot`. The middle region is never empty.
///
/// # Errors
///
/// Returns [`OrderError::InvalidRange`] if `low > high` or `high >= seq.len()`.
pub fn dnf_partition<S, P>(
    seq: &mut S,
    low: usize,
    high: usize,
    pivots: &mut P,
) -> Result<(usize, usize), OrderError>
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
    P: PivotSource + ?Sized,
{
    check_range(&*seq, low, high)?;
    Ok(partition_three_way(seq, low, high, pivots))
}

fn partition_three_way<S, P>(seq: &mut S, low: usize, high: usize, pivots: &mut P) -> (usize, usize)
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
    P: PivotSource + ?Sized,
{
    let pivot = seq.get(pivots.pick(low, high)).clone();

    // Regions: [low, lt) < | [lt, mid) == | [mid, gt) unprocessed | [gt, high] >
    let mut lt = low;
    let mut mid = low;
    let mut gt = high + 1;
    while mid < gt {
        match compare(seq.get(mid), &pivot) {
            Ordering::Less => {
                seq.swap(lt, mid);
                lt += 1;
                mid += 1;
            }
            Ordering::Equal => mid += 1,
            Ordering::Greater => {
                gt -= 1;
                seq.swap(mid, gt);
            }
        }
    }
    (lt, gt)
}

/// Hoare partition of `[low, high]`.
///
/// The randomly chosen pivot is first swapped to `low`. Returns `j` such that every element in
/// `[low, j]` is `<=` the pivot and every element in `[j + 1, high]` is `>=` it. Copies of the pivot
/// may land on either side. When `low < high`, `j` lies in `[low, high)`; a single-element range
/// returns `low`.
///
/// # Errors
///
/// Returns [`OrderError::InvalidRange`] if `low > high` or `high >= seq.len()`.
pub fn hoare_partition<S, P>(
    seq: &mut S,
    low: usize,
    high: usize,
    pivots: &mut P,
) -> Result<usize, OrderError>
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
    P: PivotSource + ?Sized,
{
    check_range(&*seq, low, high)?;
    if low == high {
        return Ok(low);
    }
    Ok(partition_hoare(seq, low, high, pivots))
}

fn partition_hoare<S, P>(seq: &mut S, low: usize, high: usize, pivots: &mut P) -> usize
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
    P: PivotSource + ?Sized,
{
    debug_assert!(low < high);
    seq.swap(low, pivots.pick(low, high));
    let pivot = seq.get(low).clone();

    let mut i = low;
    let mut j = high;
    loop {
        while *seq.get(i) < pivot {
            i += 1;
        }
        while *seq.get(j) > pivot {
            j -= 1;
        }
        if i >= j {
            return j;
        }
        seq.swap(i, j);
        i += 1;
        j -= 1;
    }
}

/// Lomuto partition of `[low, high]`.
///
/// The randomly chosen pivot is moved to `high`, every smaller element is swapped behind a single
/// forward cursor, and the pivot is finally swapped into place. Returns the pivot's final index.
///
/// # Errors
///
/// Returns [`OrderError::InvalidRange`] if `low > high` or `high >= seq.len()`.
pub fn lomuto_partition<S, P>(
    seq: &mut S,
    low: usize,
    high: usize,
    pivots: &mut P,
) -> Result<usize, OrderError>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
    P: PivotSource + ?Sized,
{
    check_range(&*seq, low, high)?;
    Ok(partition_lomuto(seq, low, high, pivots))
}

fn partition_lomuto<S, P>(seq: &mut S, low: usize, high: usize, pivots: &mut P) -> usize
where
    S: Sequence + ?Sized,
    S::Item: Ord,
    P: PivotSource + ?Sized,
{
    seq.swap(high, pivots.pick(low, high));

    let mut store = low;
    for j in low..high {
        if seq.get(j) < seq.get(high) {
            seq.swap(store, j);
            store += 1;
        }
    }
    seq.swap(store, high);
    store
}

/// Partition used by quick-select: places a random pivot at its final sorted index and returns it.
///
/// After the call, everything in `[low, mid)` is `<=` the pivot and everything in `(mid, high]` is
/// `>` it.
pub(crate) fn select_partition<S, P>(seq: &mut S, low: usize, high: usize, pivots: &mut P) -> usize
where
    S: Sequence + ?Sized,
    S::Item: Ord,
    P: PivotSource + ?Sized,
{
    seq.swap(low, pivots.pick(low, high));

    // `j` never drops below `low`: seq[low] holds the pivot and is never `>` it.
    let mut i = low + 1;
    let mut j = high;
    while i <= j {
        while i <= j && seq.get(i) <= seq.get(low) {
            i += 1;
        }
        while i <= j && seq.get(j) > seq.get(low) {
            j -= 1;
        }
        if i < j {
            seq.swap(i, j);
        }
    }
    seq.swap(low, j);
    j
}
