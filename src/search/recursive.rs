//! Recursive binary search.
//!
//! Same contract as [`binary_search`](crate::binary_search). Each call either
//! answers or recurses into one half, so the depth is bounded by
//! `log2(n) + 1` frames.

use std::cmp::Ordering;

use super::midpoint;

/// Returns the index of an element equal to `target`, or `None` if there is none.
///
/// Probes exactly the same midpoints as the iterative search, so both return
/// the same index for every input.
///
/// ```
/// use sorted_search::binary_search_recursive;
///
/// let odds = [1, 3, 5, 7, 9, 11, 13, 15];
/// assert_eq!(binary_search_recursive(&odds, &13), Some(6));
/// assert_eq!(binary_search_recursive(&odds, &2), None);
/// ```
pub fn binary_search_recursive<T: Ord>(sequence: &[T], target: &T) -> Option<usize> {
    search_interval(sequence, target, 0, sequence.len())
}

fn search_interval<T: Ord>(sequence: &[T], target: &T, low: usize, high: usize) -> Option<usize> {
    if low >= high {
        return None;
    }

    let mid = midpoint(low, high);
    match sequence[mid].cmp(target) {
        Ordering::Equal => Some(mid),
        Ordering::Less => search_interval(sequence, target, mid + 1, high),
        Ordering::Greater => search_interval(sequence, target, low, mid),
    }
}
