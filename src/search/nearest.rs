//! Nearest-element search.
//!
//! Runs the ordinary binary search first; an exact hit is trivially nearest.
//! Otherwise the exhausted interval leaves `low` at the insertion point `p`,
//! so the only candidates are `p - 1` and `p`. Targets below the first
//! element or above the last clamp to that end.

use std::cmp::Ordering;

use tracing::trace;

use super::midpoint;
use crate::distance::Distance;

/// How [`nearest_by`] resolves two candidates at the same distance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TieBreak {
    /// Pick the candidate with the higher index (the element above the target).
    #[default]
    PreferHigher,
    /// Pick the candidate with the lower index (the element below the target).
    PreferLower,
}

/// Index of the element closest to `target`, or `None` for an empty sequence.
///
/// Equidistant neighbours resolve with [`TieBreak::PreferHigher`].
///
/// ```
/// use sorted_search::nearest;
///
/// let odds = [1, 3, 5, 7, 9, 11, 13, 15];
/// assert_eq!(nearest(&odds, &6), Some(3)); // 5 and 7 tie; 7 wins
/// assert_eq!(nearest(&odds, &-40), Some(0));
/// assert_eq!(nearest(&odds, &40), Some(7));
/// ```
pub fn nearest<T>(sequence: &[T], target: &T) -> Option<usize>
where
    T: Ord + Distance,
{
    nearest_with(sequence, target, TieBreak::default())
}

/// [`nearest`] with an explicit tie-break policy.
///
/// ```
/// use sorted_search::{TieBreak, nearest_with};
///
/// let odds = [1, 3, 5, 7, 9, 11, 13, 15];
/// assert_eq!(nearest_with(&odds, &6, TieBreak::PreferLower), Some(2));
/// ```
pub fn nearest_with<T>(sequence: &[T], target: &T, tie_break: TieBreak) -> Option<usize>
where
    T: Ord + Distance,
{
    nearest_by(
        sequence,
        |probe| probe.cmp(target),
        |probe| probe.distance(target),
        tie_break,
    )
}

/// Nearest-element search with caller-supplied ordering and distance.
///
/// # Arguments
///
/// * `sequence` - Elements sorted consistently with `compare`
/// * `compare` - Three-way comparison of a probed element against the target
/// * `distance` - Distance from a probed element to the target
/// * `tie_break` - Which neighbour wins when both are equally far away
///
/// The distance only needs `PartialOrd`, so floating-point data works. If
/// the two distances are incomparable (NaN), the higher candidate is
/// returned under `PreferHigher` and the lower under `PreferLower`.
///
/// ```
/// use sorted_search::{TieBreak, nearest_by};
///
/// let samples = [0.5_f64, 1.25, 2.0, 8.0];
/// let target = 4.0;
/// let index = nearest_by(
///     &samples,
///     |probe| probe.total_cmp(&target),
///     |probe| (probe - target).abs(),
///     TieBreak::PreferHigher,
/// );
/// assert_eq!(index, Some(2));
/// ```
pub fn nearest_by<T, C, D, M>(
    sequence: &[T],
    mut compare: C,
    mut distance: D,
    tie_break: TieBreak,
) -> Option<usize>
where
    C: FnMut(&T) -> Ordering,
    D: FnMut(&T) -> M,
    M: PartialOrd,
{
    let len = sequence.len();
    let mut low = 0;
    let mut high = len;

    while low < high {
        let mid = midpoint(low, high);
        match compare(&sequence[mid]) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    if len == 0 {
        return None;
    }

    let insertion_point = low;
    if insertion_point == 0 {
        trace!(len, "target below every element, clamping to first");
        return Some(0);
    }
    if insertion_point == len {
        trace!(len, "target above every element, clamping to last");
        return Some(len - 1);
    }

    let below = insertion_point - 1;
    let above = insertion_point;
    let below_distance = distance(&sequence[below]);
    let above_distance = distance(&sequence[above]);

    let chosen = match tie_break {
        TieBreak::PreferHigher => {
            if below_distance < above_distance {
                below
            } else {
                above
            }
        }
        TieBreak::PreferLower => {
            if above_distance < below_distance {
                above
            } else {
                below
            }
        }
    };
    trace!(insertion_point, chosen, ?tie_break, "resolved nearest neighbour");

    Some(chosen)
}
