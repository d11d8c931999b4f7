//! Comparison sorts.
//!
//! | Algorithm | Stable | In-place | Best / Avg / Worst |
//! |---|---|---|---|
//! | [`bubble_sort`] | yes | yes | n / n² / n² |
//! | [`insertion_sort`] | yes | yes | n / n² / n² |
//! | [`selection_sort`] | no | yes | n² / n² / n² |
//! | [`heap_sort`] | no | yes | n / n log n / n log n |
//! | [`merge_sort_iterative`] | yes | O(n) aux | n log n |
//! | [`merge_sort_recursive`] | yes | returns a new `Vec` | n log n |
//!
//! The quicksort family lives in [`crate::quick`].

use crate::core::Sequence;

/// Sorts in place by repeatedly swapping adjacent out-of-order pairs.
///
/// Stops as soon as a full pass makes no swap, so sorted input costs a single pass.
///
/// # Examples
///
/// ```
/// use ordkit::comparison::bubble_sort;
///
/// let mut data = vec![5, 3, 3, 1];
/// bubble_sort(&mut data);
/// assert_eq!(data, vec![1, 3, 3, 5]);
/// ```
pub fn bubble_sort<S>(seq: &mut S) -> &mut S
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    let n = seq.len();
    for pass in 0..n {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            if seq.get(j) > seq.get(j + 1) {
                seq.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    seq
}

/// Sorts in place by sinking each element into the sorted prefix before it.
///
/// An element only moves past strictly greater neighbours, which keeps the sort stable.
pub fn insertion_sort<S>(seq: &mut S) -> &mut S
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    for i in 1..seq.len() {
        let mut j = i;
        while j > 0 && seq.get(j) < seq.get(j - 1) {
            seq.swap(j - 1, j);
            j -= 1;
        }
    }
    seq
}

/// Sorts in place by moving the minimum of the unsorted suffix to its front, one position at a time.
///
/// Always performs `n (n - 1) / 2` comparisons and at most `n - 1` swaps. Not stable.
pub fn selection_sort<S>(seq: &mut S) -> &mut S
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    let n = seq.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_index = i;
        for j in i + 1..n {
            if seq.get(j) < seq.get(min_index) {
                min_index = j;
            }
        }
        if min_index != i {
            seq.swap(i, min_index);
        }
    }
    seq
}

/// Sorts in place with a binary max-heap.
///
/// The heap is built bottom-up by sifting down every internal node from `n / 2 - 1` to the root.
/// The root is then repeatedly swapped to the end of the shrinking heap and the new root sifted down.
/// Not stable.
pub fn heap_sort<S>(seq: &mut S) -> &mut S
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    let n = seq.len();
    for index in (0..n / 2).rev() {
        fall(seq, index, n);
    }

    for end in (1..n).rev() {
        seq.swap(0, end);
        fall(seq, 0, end);
    }
    seq
}

/// Sifts `index` down the max-heap occupying `[0, heap_len)`.
///
/// While either child is greater than the node, the node is swapped with its larger child and the
/// descent continues from that child's old position.
fn fall<S>(seq: &mut S, mut index: usize, heap_len: usize)
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    loop {
        let left = 2 * index + 1;
        if left >= heap_len {
            return;
        }
        let right = left + 1;

        let mut largest = index;
        if seq.get(left) > seq.get(largest) {
            largest = left;
        }
        if right < heap_len && seq.get(right) > seq.get(largest) {
            largest = right;
        }

        if largest == index {
            return;
        }
        seq.swap(index, largest);
        index = largest;
    }
}

/// Merges two ascending runs into a new ascending `Vec`.
///
/// On equal keys the element from `left` is taken first, which is what makes both merge sorts
/// stable.
///
/// # Examples
///
/// ```
/// use ordkit::comparison::merge;
///
/// assert_eq!(merge(&[1, 4, 6], &[2, 4, 5]), vec![1, 2, 4, 4, 5, 6]);
/// ```
pub fn merge<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            merged.push(left[i].clone());
            i += 1;
        } else {
            merged.push(right[j].clone());
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);

    merged
}

/// Bottom-up merge sort: merges adjacent runs of width 1, 2, 4, … until one run remains.
///
/// Each merge copies its two runs out, merges them and writes the result back, so auxiliary space
/// is O(n). Stable.
pub fn merge_sort_iterative<S>(seq: &mut S) -> &mut S
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
{
    let n = seq.len();
    let mut width = 1;

    while width < n {
        let mut start = 0;
        while start + width < n {
            let mid = start + width;
            let end = (start + 2 * width).min(n);

            let left: Vec<S::Item> = (start..mid).map(|i| seq.get(i).clone()).collect();
            let right: Vec<S::Item> = (mid..end).map(|i| seq.get(i).clone()).collect();

            for (offset, item) in merge(&left, &right).into_iter().enumerate() {
                seq.set(start + offset, item);
            }
            start = end;
        }
        width *= 2;
    }
    seq
}

/// Top-down merge sort: splits at the midpoint, sorts both halves recursively and merges them.
///
/// The input is left untouched and a freshly allocated sorted `Vec` is returned. Stable.
///
/// # Examples
///
/// ```
/// use ordkit::comparison::merge_sort_recursive;
///
/// let data = vec!["pear", "apple", "fig"];
/// assert_eq!(merge_sort_recursive(&data), vec!["apple", "fig", "pear"]);
/// ```
pub fn merge_sort_recursive<S>(seq: &S) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
{
    let items: Vec<S::Item> = (0..seq.len()).map(|i| seq.get(i).clone()).collect();
    sort_run(&items)
}

fn sort_run<T: Ord + Clone>(run: &[T]) -> Vec<T> {
    if run.len() <= 1 {
        return run.to_vec();
    }
    let (left, right) = run.split_at(run.len() / 2);
    merge(&sort_run(left), &sort_run(right))
}
