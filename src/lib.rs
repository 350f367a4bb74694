#![warn(
    clippy::shadow_reuse,
    clippy::shadow_same,
    clippy::shadow_unrelated,
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::panic,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

//! Binary search over sorted slices.
//!
//! Every search here is a pure function of `(sequence, target)`: the slice is
//! borrowed immutably, nothing is allocated and nothing persists between calls.
//! The sequence must be sorted non-decreasingly under the ordering used by the
//! search. The free functions trust that precondition; [`SortedSlice`] checks
//! it once at construction and fails fast with [`SearchError::Unsorted`].
//!
//! # Variants
//!
//! - [`binary_search`]: iterative two-pointer halving
//! - [`binary_search_recursive`]: the same probes, expressed recursively
//! - [`binary_search_by`], [`binary_search_by_key`], [`binary_search_generic`]:
//!   driven by a caller-supplied three-way comparison
//! - [`first_occurrence`], [`last_occurrence`], [`occurrence_range`]:
//!   boundaries of a run of duplicates
//! - [`nearest`], [`nearest_with`], [`nearest_by`]: closest element when the
//!   target may be absent
//!
//! ```
//! use sorted_search::{binary_search, first_occurrence, last_occurrence, nearest, to_sentinel};
//!
//! let odds = [1, 3, 5, 7, 9, 11, 13, 15];
//! assert_eq!(binary_search(&odds, &7), Some(3));
//! assert_eq!(to_sentinel(binary_search(&odds, &6)), -1);
//! assert_eq!(nearest(&odds, &6), Some(3));
//!
//! let runs = [1, 2, 2, 2, 3, 4, 5, 5, 5, 6];
//! assert_eq!(first_occurrence(&runs, &2), Some(1));
//! assert_eq!(last_occurrence(&runs, &5), Some(8));
//! ```

mod distance;
mod error;
pub mod search;
mod sorted;

#[cfg(test)]
mod test_utils;

pub use distance::Distance;
pub use error::SearchError;
pub use search::comparator::{binary_search_by, binary_search_by_key, binary_search_generic};
pub use search::iterative::binary_search;
pub use search::nearest::{TieBreak, nearest, nearest_by, nearest_with};
pub use search::occurrence::{
    count_occurrences, first_occurrence, first_occurrence_by, last_occurrence,
    last_occurrence_by, lower_bound, occurrence_range, upper_bound,
};
pub use search::recursive::binary_search_recursive;
pub use sorted::SortedSlice;

/// Sentinel used by callers that expect a signed index with `-1` for "not found".
pub const NOT_FOUND: isize = -1;

/// Converts a search result into the signed sentinel convention.
///
/// Slice lengths never exceed `isize::MAX`, so every found index fits.
pub fn to_sentinel(result: Option<usize>) -> isize {
    result
        .and_then(|index| isize::try_from(index).ok())
        .unwrap_or(NOT_FOUND)
}

/// Converts a signed sentinel back into a search result.
pub fn from_sentinel(value: isize) -> Option<usize> {
    usize::try_from(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_for_missing_is_minus_one() {
        assert_eq!(to_sentinel(None), NOT_FOUND);
        assert_eq!(to_sentinel(None), -1);
    }

    #[test]
    fn sentinel_preserves_found_index() {
        assert_eq!(to_sentinel(Some(0)), 0);
        assert_eq!(to_sentinel(Some(42)), 42);
    }

    #[test]
    fn from_sentinel_rejects_negative_values() {
        assert_eq!(from_sentinel(-1), None);
        assert_eq!(from_sentinel(-7), None);
        assert_eq!(from_sentinel(5), Some(5));
    }

    #[test]
    fn sentinel_form_matches_search_results() {
        let odds = [1, 3, 5, 7, 9, 11, 13, 15];
        assert_eq!(to_sentinel(binary_search(&odds, &7)), 3);
        assert_eq!(to_sentinel(binary_search(&odds, &6)), NOT_FOUND);
        assert_eq!(from_sentinel(to_sentinel(binary_search(&odds, &15))), Some(7));
    }
}
