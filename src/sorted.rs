use std::cmp::Ordering;
use std::ops::{Deref, Range};

use tracing::{debug, trace};

use crate::distance::Distance;
use crate::error::SearchError;
use crate::search::comparator::binary_search_by;
use crate::search::iterative::binary_search;
use crate::search::nearest::{TieBreak, nearest_with};
use crate::search::occurrence::{
    count_occurrences, first_occurrence, last_occurrence, lower_bound, occurrence_range,
    upper_bound,
};
use crate::search::recursive::binary_search_recursive;

/// Borrowed view of a slice known to be sorted non-decreasingly.
///
/// [`SortedSlice::new`] checks the ordering once, so every search through the
/// view is guaranteed a valid precondition. The check is O(n); callers that
/// already know their data is sorted can use [`SortedSlice::assume_sorted`].
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct SortedSlice<'a, T> {
    elements: &'a [T],
}

// Manual impls: a derive would require `T: Clone`.
impl<T> Clone for SortedSlice<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SortedSlice<'_, T> {}

impl<'a, T: Ord> SortedSlice<'a, T> {
    /// Creates a checked view, failing on the first element that orders
    /// before its predecessor.
    ///
    /// ```
    /// use sorted_search::{SearchError, SortedSlice};
    ///
    /// assert!(SortedSlice::new(&[1, 2, 2, 5]).is_ok());
    /// assert_eq!(
    ///     SortedSlice::new(&[1, 4, 3]).unwrap_err(),
    ///     SearchError::Unsorted { index: 2 }
    /// );
    /// ```
    pub fn new(elements: &'a [T]) -> Result<Self, SearchError> {
        if let Some(index) = first_out_of_order(elements) {
            debug!(index, len = elements.len(), "rejecting unsorted sequence");
            return Err(SearchError::Unsorted { index });
        }
        trace!(len = elements.len(), "verified sorted sequence");
        Ok(Self { elements })
    }
}

impl<'a, T> SortedSlice<'a, T> {
    /// Creates a view without checking the ordering.
    ///
    /// The view never causes undefined behavior, but searches over unsorted
    /// data return unspecified results.
    pub fn assume_sorted(elements: &'a [T]) -> Self {
        Self { elements }
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Searches with a caller-supplied three-way comparison.
    pub fn find_by<F>(&self, compare: F) -> Option<usize>
    where
        F: FnMut(&T) -> Ordering,
    {
        binary_search_by(self.elements, compare)
    }
}

impl<T: Ord> SortedSlice<'_, T> {
    pub fn find(&self, target: &T) -> Option<usize> {
        binary_search(self.elements, target)
    }

    pub fn find_recursive(&self, target: &T) -> Option<usize> {
        binary_search_recursive(self.elements, target)
    }

    pub fn contains(&self, target: &T) -> bool {
        self.find(target).is_some()
    }

    pub fn first_occurrence(&self, target: &T) -> Option<usize> {
        first_occurrence(self.elements, target)
    }

    pub fn last_occurrence(&self, target: &T) -> Option<usize> {
        last_occurrence(self.elements, target)
    }

    pub fn occurrence_range(&self, target: &T) -> Range<usize> {
        occurrence_range(self.elements, target)
    }

    pub fn count(&self, target: &T) -> usize {
        count_occurrences(self.elements, target)
    }

    pub fn lower_bound(&self, target: &T) -> usize {
        lower_bound(self.elements, target)
    }

    pub fn upper_bound(&self, target: &T) -> usize {
        upper_bound(self.elements, target)
    }
}

impl<T: Ord + Distance> SortedSlice<'_, T> {
    pub fn nearest(&self, target: &T) -> Option<usize> {
        self.nearest_with(target, TieBreak::default())
    }

    pub fn nearest_with(&self, target: &T, tie_break: TieBreak) -> Option<usize> {
        nearest_with(self.elements, target, tie_break)
    }
}

impl<T> Deref for SortedSlice<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.elements
    }
}

impl<'a, T: Ord> TryFrom<&'a [T]> for SortedSlice<'a, T> {
    type Error = SearchError;

    fn try_from(elements: &'a [T]) -> Result<Self, SearchError> {
        Self::new(elements)
    }
}

impl<'a, T: Ord> TryFrom<&'a Vec<T>> for SortedSlice<'a, T> {
    type Error = SearchError;

    fn try_from(elements: &'a Vec<T>) -> Result<Self, SearchError> {
        Self::new(elements.as_slice())
    }
}

/// Index of the first element smaller than its predecessor.
fn first_out_of_order<T: Ord>(elements: &[T]) -> Option<usize> {
    elements
        .windows(2)
        .position(|pair| pair[0] > pair[1])
        .map(|position| position + 1)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::panic)]

    use super::*;
    use crate::test_utils::{CASES, random_sorted, random_target, seeded_rng};

    #[test]
    fn accepts_sorted_input_with_duplicates() {
        let values = [1, 2, 2, 2, 3, 4, 5, 5, 5, 6];
        let view = SortedSlice::new(&values).expect("sorted");
        assert_eq!(view.len(), 10);
        assert_eq!(view.first_occurrence(&2), Some(1));
        assert_eq!(view.last_occurrence(&5), Some(8));
        assert_eq!(view.count(&5), 3);
        assert_eq!(view.occurrence_range(&2), 1..4);
    }

    #[test]
    fn rejects_unsorted_input_with_the_first_bad_index() {
        assert_eq!(
            SortedSlice::new(&[1, 3, 2, 0]),
            Err(SearchError::Unsorted { index: 2 })
        );
        assert_eq!(
            SortedSlice::new(&[5, 1]),
            Err(SearchError::Unsorted { index: 1 })
        );
    }

    #[test]
    fn empty_and_single_element_are_sorted() {
        let empty: [i32; 0] = [];
        let view = SortedSlice::new(&empty).expect("empty is sorted");
        assert!(view.is_empty());
        assert_eq!(view.find(&1), None);
        assert_eq!(view.find_recursive(&1), None);
        assert_eq!(view.first_occurrence(&1), None);
        assert_eq!(view.last_occurrence(&1), None);
        assert_eq!(view.nearest(&1), None);

        let single = SortedSlice::new(&[9]).expect("single is sorted");
        assert_eq!(single.find(&9), Some(0));
        assert_eq!(single.find(&8), None);
    }

    #[test]
    fn view_searches_match_the_free_functions() {
        let odds = [1, 3, 5, 7, 9, 11, 13, 15];
        let view = SortedSlice::new(&odds).expect("sorted");
        assert_eq!(view.find(&7), Some(3));
        assert_eq!(view.find_recursive(&7), Some(3));
        assert_eq!(view.find_by(|probe| probe.cmp(&7)), Some(3));
        assert_eq!(view.find(&6), None);
        assert!(view.contains(&15));
        assert!(!view.contains(&16));
        assert_eq!(view.nearest(&6), Some(3));
        assert_eq!(view.nearest_with(&6, TieBreak::PreferLower), Some(2));
        assert_eq!(view.lower_bound(&6), 3);
        assert_eq!(view.upper_bound(&7), 4);
    }

    #[test]
    fn try_from_slice_and_vec() {
        let values = vec![2, 4, 8];
        let from_vec = SortedSlice::try_from(&values).expect("sorted");
        let from_slice = SortedSlice::try_from(values.as_slice()).expect("sorted");
        assert_eq!(from_vec, from_slice);

        let unsorted = vec![3, 1];
        assert!(SortedSlice::try_from(&unsorted).is_err());
    }

    #[test]
    fn view_is_copy_and_derefs_to_the_slice() {
        let values = [1, 2, 3];
        let view = SortedSlice::new(&values).expect("sorted");
        let copy = view;
        assert_eq!(view.as_slice(), copy.as_slice());
        assert_eq!(view.first(), Some(&1));
        assert_eq!(view.iter().sum::<i32>(), 6);
    }

    #[test]
    fn assume_sorted_skips_the_check() {
        let values = [3, 1, 2];
        let view = SortedSlice::assume_sorted(&values);
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn shuffled_random_inputs_are_rejected() {
        let mut rng = seeded_rng();
        for _ in 0..CASES {
            let mut values = random_sorted(&mut rng, 32, 50);
            let target = random_target(&mut rng, &values, 50);
            assert!(SortedSlice::new(&values).is_ok());
            values.reverse();
            let first = values.first().copied();
            let last = values.last().copied();
            let reversed_is_sorted = first == last;
            match SortedSlice::new(&values) {
                Ok(view) => {
                    assert!(reversed_is_sorted);
                    if let Some(index) = view.find(&target) {
                        assert_eq!(values[index], target);
                    }
                }
                Err(SearchError::Unsorted { index }) => {
                    assert!(values[index - 1] > values[index]);
                }
            }
        }
    }
}
