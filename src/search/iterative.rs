//! Iterative binary search.

use std::cmp::Ordering;

use super::midpoint;

/// Returns the index of an element equal to `target`, or `None` if there is none.
///
/// `sequence` must be sorted non-decreasingly. If it is not, the result is
/// unspecified but the call still terminates without panicking.
///
/// When `target` occurs more than once, the index of whichever copy the
/// search probes first is returned; use
/// [`first_occurrence`](crate::first_occurrence) or
/// [`last_occurrence`](crate::last_occurrence) for a specific boundary.
///
/// # Time Complexity
///
/// *O*(*log n*) comparisons.
///
/// # Examples
///
/// ```
/// use sorted_search::binary_search;
///
/// let odds = [1, 3, 5, 7, 9, 11, 13, 15];
/// assert_eq!(binary_search(&odds, &7), Some(3));
/// assert_eq!(binary_search(&odds, &6), None);
/// assert_eq!(binary_search::<i32>(&[], &6), None);
/// ```
pub fn binary_search<T: Ord>(sequence: &[T], target: &T) -> Option<usize> {
    let mut low = 0;
    let mut high = sequence.len();

    while low < high {
        let mid = midpoint(low, high);
        match sequence[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    None
}
