//! Boundary searches over runs of equal elements.
//!
//! [`first_occurrence`] and [`last_occurrence`] keep halving after a match,
//! remembering the best index seen so far, until the interval is empty.
//! [`lower_bound`] and [`upper_bound`] answer the related insertion-point
//! question and never fail.

use std::cmp::Ordering;
use std::ops::Range;

use super::midpoint;

/// Which end of a run of matches a boundary search keeps narrowing toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Boundary {
    First,
    Last,
}

fn boundary_search<T, F>(sequence: &[T], mut compare: F, boundary: Boundary) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    let mut low = 0;
    let mut high = sequence.len();
    let mut best = None;

    while low < high {
        let mid = midpoint(low, high);
        match compare(&sequence[mid]) {
            Ordering::Equal => {
                best = Some(mid);
                match boundary {
                    Boundary::First => high = mid,
                    Boundary::Last => low = mid + 1,
                }
            }
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    best
}

/// Returns the lowest index holding `target`, or `None` if it does not occur.
///
/// ```
/// use sorted_search::first_occurrence;
///
/// let runs = [1, 2, 2, 2, 3, 4, 5, 5, 5, 6];
/// assert_eq!(first_occurrence(&runs, &2), Some(1));
/// assert_eq!(first_occurrence(&runs, &7), None);
/// ```
pub fn first_occurrence<T: Ord>(sequence: &[T], target: &T) -> Option<usize> {
    first_occurrence_by(sequence, |probe| probe.cmp(target))
}

/// Returns the highest index holding `target`, or `None` if it does not occur.
///
/// ```
/// use sorted_search::last_occurrence;
///
/// let runs = [1, 2, 2, 2, 3, 4, 5, 5, 5, 6];
/// assert_eq!(last_occurrence(&runs, &5), Some(8));
/// ```
pub fn last_occurrence<T: Ord>(sequence: &[T], target: &T) -> Option<usize> {
    last_occurrence_by(sequence, |probe| probe.cmp(target))
}

/// [`first_occurrence`] with a caller-supplied three-way comparison.
pub fn first_occurrence_by<T, F>(sequence: &[T], compare: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    boundary_search(sequence, compare, Boundary::First)
}

/// [`last_occurrence`] with a caller-supplied three-way comparison.
pub fn last_occurrence_by<T, F>(sequence: &[T], compare: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    boundary_search(sequence, compare, Boundary::Last)
}

/// First index whose element is not less than `target`.
///
/// Returns `sequence.len()` when every element is less than `target`.
pub fn lower_bound<T: Ord>(sequence: &[T], target: &T) -> usize {
    partition_point(sequence, |probe| probe < target)
}

/// First index whose element is greater than `target`.
///
/// Returns `sequence.len()` when no element is greater than `target`.
pub fn upper_bound<T: Ord>(sequence: &[T], target: &T) -> usize {
    partition_point(sequence, |probe| probe <= target)
}

fn partition_point<T, P>(sequence: &[T], mut before: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let mut low = 0;
    let mut high = sequence.len();

    while low < high {
        let mid = midpoint(low, high);
        if before(&sequence[mid]) {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    low
}

/// Range of indices holding `target`.
///
/// Empty when `target` does not occur; the empty range then sits at the
/// insertion point.
///
/// ```
/// use sorted_search::occurrence_range;
///
/// let runs = [1, 2, 2, 2, 3];
/// assert_eq!(occurrence_range(&runs, &2), 1..4);
/// assert_eq!(occurrence_range(&runs, &0), 0..0);
/// ```
pub fn occurrence_range<T: Ord>(sequence: &[T], target: &T) -> Range<usize> {
    lower_bound(sequence, target)..upper_bound(sequence, target)
}

/// Number of elements equal to `target`.
pub fn count_occurrences<T: Ord>(sequence: &[T], target: &T) -> usize {
    occurrence_range(sequence, target).len()
}
