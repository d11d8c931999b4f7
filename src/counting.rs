//! Counting sorts for bounded integer keys and printable ASCII bytes.
//!
//! The stable variants distribute element *positions* into one append-only bucket per key, then
//! move every element to its final slot with [`apply_permutation`]. The unstable variants only
//! count key frequencies and rewrite the sequence from the counts.
//!
//! Byte variants cover the 95 printable ASCII characters `0x20..=0x7E`. Passing any other byte is a
//! caller error and panics with an out-of-bounds bucket index.

use crate::core::{Sequence, apply_permutation};
use crate::error::OrderError;
use crate::selection::select_min_max;
use cuneiform::cuneiform;

/// First printable ASCII character (space).
pub const FIRST_PRINTABLE: u8 = b' ';

/// Number of printable ASCII characters, and so the number of byte buckets.
pub const ALPHABET_SIZE: usize = 95;

// Cache-aligned frequency table for the byte alphabet.
#[cuneiform]
struct CharCounts {
    data: [usize; ALPHABET_SIZE],
}

/// Bucket index of a printable ASCII byte.
#[inline(always)]
pub(crate) fn char_bucket(byte: u8) -> usize {
    usize::from(byte.wrapping_sub(FIRST_PRINTABLE))
}

/// One stable distribution pass over element positions.
///
/// Appends every position of `order` to the bucket of `table` named by `digit`, then concatenates the
/// buckets in index order. Positions sharing a digit keep their relative order from `order`.
pub(crate) fn bucket_pass<F>(order: &[usize], mut table: Vec<Vec<usize>>, digit: F) -> Vec<usize>
where
    F: Fn(usize) -> usize,
{
    for &position in order {
        table[digit(position)].push(position);
    }
    table.into_iter().flatten().collect()
}

/// Allocates one `fill` slot per key in `[min, max]`.
pub(crate) fn key_table<T: Clone>(min: i64, max: i64, fill: T) -> Result<Vec<T>, OrderError> {
    let too_large = || OrderError::KeyRangeTooLarge { min, max };
    let span = usize::try_from(i128::from(max) - i128::from(min) + 1).map_err(|_| too_large())?;

    let mut table = Vec::new();
    table.try_reserve_exact(span).map_err(|_| too_large())?;
    table.resize(span, fill);

    Ok(table)
}

/// Stable counting sort of integers.
///
/// Finds the key range with [`select_min_max`], allocates `max - min + 1` buckets and appends each
/// element to `bucket[value - min]`. Concatenating the buckets yields the sorted order.
///
/// # Errors
///
/// Returns [`OrderError::KeyRangeTooLarge`] if the key range cannot be allocated.
///
/// # Examples
///
/// ```
/// use ordkit::counting::counting_sort;
///
/// let mut data = vec![5, -2, 3, -2, 0];
/// counting_sort(&mut data).unwrap();
/// assert_eq!(data, vec![-2, -2, 0, 3, 5]);
/// ```
pub fn counting_sort<S>(seq: &mut S) -> Result<&mut S, OrderError>
where
    S: Sequence<Item = i64> + ?Sized,
{
    counting_sort_by_key(seq, |&value| value)
}

/// Stable counting sort of arbitrary elements by an integer key.
///
/// Elements with equal keys keep their input order.
///
/// # Errors
///
/// Returns [`OrderError::KeyRangeTooLarge`] if the key range cannot be allocated.
pub fn counting_sort_by_key<S, F>(seq: &mut S, key: F) -> Result<&mut S, OrderError>
where
    S: Sequence + ?Sized,
    F: Fn(&S::Item) -> i64,
{
    if seq.is_empty() {
        return Ok(seq);
    }

    let keys: Vec<i64> = (0..seq.len()).map(|i| key(seq.get(i))).collect();
    let (&min, &max) = select_min_max(&keys)?;
    let table = key_table(min, max, Vec::new())?;

    let identity: Vec<usize> = (0..keys.len()).collect();
    // `keys[p] - min` indexes an allocated table, so it fits usize.
    let order = bucket_pass(&identity, table, |p| (keys[p] - min) as usize);
    apply_permutation(seq, order);

    Ok(seq)
}

/// Counting sort of integers that rebuilds the sequence from key frequencies.
///
/// Uses one counter per key instead of one list per key. Since the output is regenerated from the
/// counts, equal integers are indistinguishable and the result is identical to [`counting_sort`];
/// the variant simply cannot carry satellite data, which is why it is classed as unstable.
///
/// # Errors
///
/// Returns [`OrderError::KeyRangeTooLarge`] if the key range cannot be allocated.
pub fn counting_sort_unstable<S>(seq: &mut S) -> Result<&mut S, OrderError>
where
    S: Sequence<Item = i64> + ?Sized,
{
    if seq.is_empty() {
        return Ok(seq);
    }

    let (min, max) = {
        let (&min, &max) = select_min_max(&*seq)?;
        (min, max)
    };
    let mut frequency = key_table(min, max, 0usize)?;
    for i in 0..seq.len() {
        frequency[(*seq.get(i) - min) as usize] += 1;
    }

    let mut index = 0;
    for (offset, &count) in frequency.iter().enumerate() {
        let value = min + offset as i64;
        for _ in 0..count {
            seq.set(index, value);
            index += 1;
        }
    }

    Ok(seq)
}

/// Stable counting sort of printable ASCII bytes into 95 fixed buckets.
///
/// # Panics
///
/// Panics if any byte lies outside `0x20..=0x7E`.
///
/// # Examples
///
/// ```
/// use ordkit::counting::counting_sort_chr;
///
/// let mut data = b"counting".to_vec();
/// counting_sort_chr(&mut data);
/// assert_eq!(data, b"cginnotu".to_vec());
/// ```
pub fn counting_sort_chr<S>(seq: &mut S) -> &mut S
where
    S: Sequence<Item = u8> + ?Sized,
{
    counting_sort_chr_by_key(seq, |&byte| byte)
}

/// Stable counting sort of arbitrary elements keyed by a printable ASCII byte.
///
/// # Panics
///
/// Panics if any key lies outside `0x20..=0x7E`.
pub fn counting_sort_chr_by_key<S, F>(seq: &mut S, key: F) -> &mut S
where
    S: Sequence + ?Sized,
    F: Fn(&S::Item) -> u8,
{
    if seq.is_empty() {
        return seq;
    }

    let keys: Vec<u8> = (0..seq.len()).map(|i| key(seq.get(i))).collect();
    let identity: Vec<usize> = (0..keys.len()).collect();
    let order = bucket_pass(&identity, vec![Vec::new(); ALPHABET_SIZE], |p| {
        char_bucket(keys[p])
    });
    apply_permutation(seq, order);

    seq
}

/// Counting sort of printable ASCII bytes that rebuilds the sequence from a frequency table.
///
/// # Panics
///
/// Panics if any byte lies outside `0x20..=0x7E`.
pub fn counting_sort_chr_unstable<S>(seq: &mut S) -> &mut S
where
    S: Sequence<Item = u8> + ?Sized,
{
    let mut counts = CharCounts {
        data: [0; ALPHABET_SIZE],
    };
    let counts = &mut counts.data;

    for i in 0..seq.len() {
        counts[char_bucket(*seq.get(i))] += 1;
    }

    let mut index = 0;
    // ALPHABET_SIZE fits in u8, so the bucket index converts back losslessly.
    for (bucket, &count) in counts.iter().enumerate() {
        let byte = FIRST_PRINTABLE + bucket as u8;
        for _ in 0..count {
            seq.set(index, byte);
            index += 1;
        }
    }

    seq
}
