//! # Ordkit
//!
//! `ordkit` is a library of interchangeable ordering algorithms: comparison sorts, digit
//! (counting and radix) sorts, and order-statistics selection, all written against one small
//! sequence abstraction.
//!
//! ## Key Features
//!
//! - **One boundary trait**: every algorithm runs on anything implementing [`Sequence`] (O(1)
//!   indexed get/set/swap plus a length). Slices, `Vec` and `VecDeque` work out of the box.
//! - **Comparison sorts**: bubble, insertion, selection, heap, iterative and recursive merge sort,
//!   and four quicksort partitioning schemes (bucket, Dutch National Flag, Hoare, Lomuto).
//! - **Digit sorts**: stable and frequency-based counting sort for integers and printable ASCII,
//!   LSD radix sort for non-negative integers (any base) and for strings.
//! - **Selection**: paired min/max scan, median of medians and randomized quick-select.
//! - **Injectable randomness**: every randomized routine has a form taking a [`PivotSource`];
//!   any `rand::Rng` qualifies, so seeded generators give reproducible runs.
//!
//! ## Usage
//!
//! ```rust
//! use ordkit::prelude::*;
//!
//! let mut data = vec![9, 1, 5, 3, 7];
//! assert_eq!(quick_select(&mut data, 2).unwrap(), 5);
//!
//! quick_sort_hoare(&mut data);
//! assert_eq!(data, vec![1, 3, 5, 7, 9]);
//!
//! let mut ids = vec![170, 45, 75, 90, 802, 24, 2, 66];
//! radix_sort(&mut ids).unwrap();
//! assert_eq!(ids, vec![2, 24, 45, 66, 75, 90, 170, 802]);
//! ```
//!
//! ### Custom Containers
//!
//! Implement [`Sequence`] to sort a container without copying it out first. See the trait
//! documentation for an example.
//!
//! ## Guarantees
//!
//! - In-place routines never change the length and only permute elements.
//! - Stable: bubble, insertion, both merge sorts, bucket quicksort, stable counting sort, radix sorts.
//! - In-place quicksorts keep at most `O(log n)` pending ranges regardless of pivot quality.
//! - Nothing is retained between calls; concurrent calls on disjoint sequences are independent.

pub mod comparison;
pub mod core;
pub mod counting;
pub mod error;
pub mod quick;
pub mod radix;
pub mod search;
pub mod selection;

pub use crate::core::{PivotSource, Sequence};
pub use crate::error::{ErrorKind, OrderError};

pub mod prelude {
    pub use crate::comparison::{
        bubble_sort, heap_sort, insertion_sort, merge, merge_sort_iterative, merge_sort_recursive,
        selection_sort,
    };
    pub use crate::core::{PivotSource, Sequence};
    pub use crate::counting::{
        counting_sort, counting_sort_by_key, counting_sort_chr, counting_sort_chr_by_key,
        counting_sort_chr_unstable, counting_sort_unstable,
    };
    pub use crate::error::{ErrorKind, OrderError};
    pub use crate::quick::{
        quick_sort, quick_sort_dnf, quick_sort_dnf_range, quick_sort_hoare, quick_sort_hoare_range,
        quick_sort_lomuto, quick_sort_lomuto_range, quick_sort_with,
    };
    pub use crate::radix::{radix_sort, radix_sort_by_key, radix_sort_str, radix_sort_with_base};
    pub use crate::search::{binary_search, linear_search};
    pub use crate::selection::{
        median_of_medians, quick_select, quick_select_range, quick_select_with, select_min_max,
        select_min_max_naive,
    };
}
