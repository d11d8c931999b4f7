//! Least-significant-digit radix sorts.
//!
//! Both sorts keep a vector of element positions and run one stable distribution pass per digit,
//! starting from the least significant one. Elements are moved only once, after the last pass.
//! Every pass must be stable for the result to be sorted, so buckets are append-only position lists.

use crate::core::{Sequence, apply_permutation};
use crate::counting::{ALPHABET_SIZE, bucket_pass, char_bucket, key_table};
use crate::error::OrderError;

/// Default radix base.
pub const DEFAULT_BASE: u64 = 10;

/// Radix sort of non-negative integers in base 10.
///
/// # Errors
///
/// Returns [`OrderError::NegativeValue`] if any element is negative.
///
/// # Examples
///
/// ```
/// use ordkit::radix::radix_sort;
///
/// let mut data = vec![170, 45, 75, 90, 802, 24, 2, 66];
/// radix_sort(&mut data).unwrap();
/// assert_eq!(data, vec![2, 24, 45, 66, 75, 90, 170, 802]);
/// ```
pub fn radix_sort<S>(seq: &mut S) -> Result<&mut S, OrderError>
where
    S: Sequence<Item = i64> + ?Sized,
{
    radix_sort_with_base(seq, DEFAULT_BASE)
}

/// Radix sort of non-negative integers in an arbitrary base `>= 2`.
///
/// Pass `e` buckets every element by the digit `(value / base^e) % base`, for `e = 0, 1, 2, …` while
/// `max / base^e > 0`.
///
/// # Errors
///
/// Returns [`OrderError::InvalidBase`] if `base < 2`, [`OrderError::NegativeValue`] if any element
/// is negative, and [`OrderError::KeyRangeTooLarge`] if a huge base needs more buckets than can be
/// allocated.
pub fn radix_sort_with_base<S>(seq: &mut S, base: u64) -> Result<&mut S, OrderError>
where
    S: Sequence<Item = i64> + ?Sized,
{
    radix_sort_by_key(seq, base, |&value| value)
}

/// Stable radix sort of arbitrary elements by a non-negative integer key.
///
/// Elements with equal keys keep their input order.
///
/// # Errors
///
/// Same as [`radix_sort_with_base`], checked against the extracted keys.
pub fn radix_sort_by_key<S, F>(seq: &mut S, base: u64, key: F) -> Result<&mut S, OrderError>
where
    S: Sequence + ?Sized,
    F: Fn(&S::Item) -> i64,
{
    if base < 2 {
        return Err(OrderError::InvalidBase(base));
    }

    let mut keys = Vec::with_capacity(seq.len());
    for index in 0..seq.len() {
        let value = key(seq.get(index));
        let digit_key =
            u64::try_from(value).map_err(|_| OrderError::NegativeValue { index, value })?;
        keys.push(digit_key);
    }

    let Some(&max) = keys.iter().max() else {
        return Ok(seq);
    };

    // Digits never exceed `base - 1` nor `max`, so a huge base only needs `max + 1` buckets.
    // Keys came from i64, so the top digit does too.
    let top_digit = (base - 1).min(max) as i64;

    let mut order: Vec<usize> = (0..keys.len()).collect();
    let mut exponent: u64 = 1;
    while max / exponent > 0 {
        let table = key_table(0, top_digit, Vec::new())?;
        order = bucket_pass(&order, table, |p| ((keys[p] / exponent) % base) as usize);
        exponent = match exponent.checked_mul(base) {
            Some(next) => next,
            None => break,
        };
    }

    apply_permutation(seq, order);
    Ok(seq)
}

/// Radix sort of printable ASCII strings.
///
/// Positions are processed from the last character of the longest string down to the first. A
/// string shorter than the current position sorts into bucket 0, the same bucket as the space
/// character, so `"ab"` and `"ab "` compare equal and keep their input order.
///
/// # Panics
///
/// Panics if any string contains a byte outside `0x20..=0x7E`.
///
/// # Examples
///
/// ```
/// use ordkit::radix::radix_sort_str;
///
/// let mut data = vec!["bca", "ab", "b", "abc"];
/// radix_sort_str(&mut data);
/// assert_eq!(data, vec!["ab", "abc", "b", "bca"]);
/// ```
pub fn radix_sort_str<S>(seq: &mut S) -> &mut S
where
    S: Sequence + ?Sized,
    S::Item: AsRef<[u8]>,
{
    let n = seq.len();
    let max_length = (0..n).map(|i| seq.get(i).as_ref().len()).max().unwrap_or(0);

    let mut order: Vec<usize> = (0..n).collect();
    for position in (0..max_length).rev() {
        order = bucket_pass(&order, vec![Vec::new(); ALPHABET_SIZE], |p| {
            match seq.get(p).as_ref().get(position) {
                Some(&byte) => char_bucket(byte),
                None => 0,
            }
        });
    }

    apply_permutation(seq, order);
    seq
}
