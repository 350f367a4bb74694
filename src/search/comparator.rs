//! Binary search driven by a caller-supplied three-way comparison.
//!
//! The comparison reports how a probed element orders relative to the
//! target, returning `Ordering::Less` if the element sorts before it
//! (search the upper half), `Ordering::Greater` if it sorts after it (search
//! the lower half), or `Ordering::Equal` on a match. The sequence must be
//! sorted consistently with that comparison.

use std::cmp::Ordering;

use super::midpoint;

/// Searches `sequence` using `compare` to judge each probed element.
///
/// # Arguments
///
/// * `sequence` - Elements sorted consistently with `compare`
/// * `compare` - Three-way comparison of a probed element against the target
///
/// # Examples
///
/// ```
/// use sorted_search::binary_search_by;
///
/// // Descending data searched with a reversed comparison.
/// let descending = [40, 30, 20, 10];
/// assert_eq!(binary_search_by(&descending, |probe| 20.cmp(probe)), Some(2));
/// ```
pub fn binary_search_by<T, F>(sequence: &[T], mut compare: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    let mut low = 0;
    let mut high = sequence.len();

    while low < high {
        let mid = midpoint(low, high);
        match compare(&sequence[mid]) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    None
}

/// Searches for an element whose extracted key equals `key`.
///
/// `sequence` must be sorted by the same key.
///
/// ```
/// use sorted_search::binary_search_by_key;
///
/// let entries = [(1, "ada"), (4, "brian"), (9, "carla")];
/// assert_eq!(binary_search_by_key(&entries, &4, |&(id, _)| id), Some(1));
/// assert_eq!(binary_search_by_key(&entries, &5, |&(id, _)| id), None);
/// ```
pub fn binary_search_by_key<T, B, F>(sequence: &[T], key: &B, mut extract: F) -> Option<usize>
where
    B: Ord,
    F: FnMut(&T) -> B,
{
    binary_search_by(sequence, |probe| extract(probe).cmp(key))
}

/// Searches any totally ordered element type through its own comparison.
pub fn binary_search_generic<T: Ord>(sequence: &[T], target: &T) -> Option<usize> {
    binary_search_by(sequence, |probe| probe.cmp(target))
}
