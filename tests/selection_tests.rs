use ordkit::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::cell::Cell;
use std::cmp::Ordering;

thread_local! {
    static COMPARISONS: Cell<usize> = const { Cell::new(0) };
}

/// An integer that counts every comparison made on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Counted(i32);

impl PartialOrd for Counted {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Counted {
    fn cmp(&self, other: &Self) -> Ordering {
        COMPARISONS.with(|c| c.set(c.get() + 1));
        self.0.cmp(&other.0)
    }
}

fn count_comparisons<R>(f: impl FnOnce() -> R) -> (R, usize) {
    COMPARISONS.with(|c| c.set(0));
    let result = f();
    (result, COMPARISONS.with(|c| c.get()))
}

#[test]
fn test_min_max_agrees_with_naive_and_std() {
    let mut rng = StdRng::seed_from_u64(11);

    for _iter in 0..500 {
        let len = rng.random_range(1..100);
        let range = rng.random_range(1..20);
        let input: Vec<i32> = (0..len).map(|_| rng.random_range(-range..range)).collect();

        let expected = (
            input.iter().min().unwrap(),
            input.iter().max().unwrap(),
        );
        assert_eq!(select_min_max(&input).unwrap(), expected);
        assert_eq!(select_min_max_naive(&input).unwrap(), expected);
    }
}

#[test]
fn test_min_max_all_equal_and_pairs() {
    let same = vec![4; 9];
    assert_eq!(select_min_max(&same).unwrap(), (&4, &4));

    assert_eq!(select_min_max(&vec![2, 1]).unwrap(), (&1, &2));
    assert_eq!(select_min_max(&vec![1, 2]).unwrap(), (&1, &2));
    assert_eq!(select_min_max(&vec![3, 1, 2]).unwrap(), (&1, &3));
}

#[test]
fn test_min_max_comparison_counts() {
    for n in 1..64usize {
        let input: Vec<Counted> = (0..n as i32).map(|i| Counted((i * 37) % 23)).collect();

        let (_, paired) = count_comparisons(|| select_min_max(&input).unwrap());
        let (_, naive) = count_comparisons(|| select_min_max_naive(&input).unwrap());

        let expected = if n % 2 == 1 {
            3 * (n - 1) / 2
        } else {
            1 + 3 * (n - 2) / 2
        };
        assert_eq!(paired, expected, "paired scan on n = {n}");
        assert!(paired <= 3 * n / 2);
        assert_eq!(naive, 2 * (n - 1), "naive scan on n = {n}");
    }
}

#[test]
fn test_min_max_empty_is_invalid_input() {
    let empty: Vec<i32> = vec![];

    let err = select_min_max(&empty).unwrap_err();
    assert_eq!(err, OrderError::EmptyInput);
    assert_eq!(err.kind(), ErrorKind::InvalidInput);

    assert_eq!(select_min_max_naive(&empty).unwrap_err(), OrderError::EmptyInput);
}

#[test]
fn test_quick_select_every_rank() {
    let mut rng = StdRng::seed_from_u64(5);

    for _iter in 0..100 {
        let len = rng.random_range(1..80);
        let input: Vec<i32> = (0..len).map(|_| rng.random_range(-10..10)).collect();
        let mut sorted = input.clone();
        sorted.sort();

        for (k, expected) in sorted.iter().enumerate() {
            let mut data = input.clone();
            let selected = quick_select_with(&mut data, k, &mut rng).unwrap();
            assert_eq!(selected, *expected, "k = {k} of {input:?}");

            // Selection only permutes.
            data.sort();
            assert_eq!(data, sorted);
        }
    }
}

#[test]
fn test_quick_select_partitions_around_k() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut data: Vec<i32> = (0..200).collect();
    data.shuffle(&mut rng);

    let k = 73;
    assert_eq!(quick_select_with(&mut data, k, &mut rng).unwrap(), 73);
    assert_eq!(data[k], 73);
}

#[test]
fn test_quick_select_range() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut data = vec![100, 9, 1, 5, 3, 7, -100];

    // Within [1, 5] the values are 9, 1, 5, 3, 7; absolute index 3 holds the third smallest.
    assert_eq!(quick_select_range(&mut data, 3, 1, 5, &mut rng).unwrap(), 5);
    assert_eq!(data[0], 100);
    assert_eq!(data[6], -100);
}

#[test]
fn test_quick_select_out_of_range() {
    let mut data = vec![3, 1, 2];

    let err = quick_select(&mut data, 3).unwrap_err();
    assert_eq!(err, OrderError::OutOfRange { index: 3, len: 3 });
    assert_eq!(err.kind(), ErrorKind::OutOfRange);

    let mut empty: Vec<i32> = vec![];
    assert!(quick_select(&mut empty, 0).is_err());

    let mut rng = rand::rng();
    assert_eq!(
        quick_select_range(&mut data, 0, 2, 1, &mut rng).unwrap_err(),
        OrderError::InvalidRange {
            low: 2,
            high: 1,
            len: 3
        }
    );
    assert_eq!(
        quick_select_range(&mut data, 0, 1, 2, &mut rng).unwrap_err(),
        OrderError::OutOfRange { index: 0, len: 3 }
    );
}

#[test]
fn test_median_of_medians_small_inputs() {
    assert_eq!(median_of_medians(&vec![7]).unwrap(), 7);
    assert_eq!(median_of_medians(&vec![3, 1]).unwrap(), 3);
    assert_eq!(median_of_medians(&vec![9, 4, 6]).unwrap(), 6);
    assert_eq!(median_of_medians(&vec![8, 2, 6, 4]).unwrap(), 6);

    let data: Vec<u32> = (1..=25).collect();
    assert_eq!(median_of_medians(&data).unwrap(), 13);

    let empty: Vec<u32> = vec![];
    assert_eq!(median_of_medians(&empty).unwrap_err(), OrderError::EmptyInput);
}

#[test]
fn test_median_of_medians_leaves_input_untouched() {
    let data = vec![5, 1, 4, 2, 3, 9, 8, 7, 6, 0];
    let before = data.clone();
    median_of_medians(&data).unwrap();
    assert_eq!(data, before);
}

#[test]
fn test_median_of_medians_rank_bounds() {
    // Three levels of groups of five: the result is >= at least 3 * 3 * 3 = 27 of the 125 values
    // and <= at least 27 of them.
    let mut rng = StdRng::seed_from_u64(21);

    for _iter in 0..50 {
        let mut data: Vec<u32> = (0..125).collect();
        data.shuffle(&mut rng);

        let pivot = median_of_medians(&data).unwrap();
        assert!((26..=98).contains(&pivot), "pivot {pivot} too extreme");
    }
}

#[test]
fn test_checked_helpers() {
    let mut data = vec![1, 2, 3];

    assert_eq!(ordkit::core::try_get(&data, 2), Ok(&3));
    assert_eq!(
        ordkit::core::try_get(&data, 3),
        Err(OrderError::OutOfRange { index: 3, len: 3 })
    );

    ordkit::core::try_swap(&mut data, 0, 2).unwrap();
    assert_eq!(data, vec![3, 2, 1]);
    assert_eq!(
        ordkit::core::try_swap(&mut data, 0, 5),
        Err(OrderError::OutOfRange { index: 5, len: 3 })
    );
    assert_eq!(data, vec![3, 2, 1]);
}

#[test]
fn test_error_display() {
    assert_eq!(
        OrderError::EmptyInput.to_string(),
        "Sequence must contain at least one element"
    );
    assert_eq!(
        OrderError::OutOfRange { index: 4, len: 2 }.to_string(),
        "Index 4 out of range for sequence of length 2"
    );
}

#[test]
fn test_quick_select_all_equal() {
    // Repeated values shrink the window by one element per round, so keep the input modest.
    let mut data = vec![7u8; 2_000];
    for k in [0, 999, 1_999] {
        assert_eq!(quick_select(&mut data, k).unwrap(), 7);
    }
    assert!(data.iter().all(|&v| v == 7));
}
