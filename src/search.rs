//! Linear and binary search.

use crate::core::Sequence;
use std::cmp::Ordering;

/// Returns the index of the first element equal to `item`, scanning from the front.
pub fn linear_search<S>(seq: &S, item: &S::Item) -> Option<usize>
where
    S: Sequence + ?Sized,
    S::Item: PartialEq,
{
    (0..seq.len()).find(|&i| seq.get(i) == item)
}

/// Returns the index of an element equal to `item` in an ascending sequence.
///
/// If several elements match, any one of their indices may be returned. The result is meaningless
/// if the sequence is not sorted.
///
/// # Examples
///
/// ```
/// use ordkit::search::binary_search;
///
/// let data = vec![1, 3, 5, 7, 9];
/// assert_eq!(binary_search(&data, &7), Some(3));
/// assert_eq!(binary_search(&data, &4), None);
/// ```
pub fn binary_search<S>(seq: &S, item: &S::Item) -> Option<usize>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    // Half-open window [low, high).
    let mut low = 0;
    let mut high = seq.len();
    while low < high {
        let mid = low + (high - low) / 2;
        match seq.get(mid).cmp(item) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    None
}
