//! Error types for search operations.
//!
//! A missing target is not an error: searches report it as `None`. Errors are
//! reserved for violated preconditions, which [`SortedSlice`](crate::SortedSlice)
//! detects up front instead of letting a search return a wrong answer.

use std::fmt;

/// Errors that can occur when building a checked sorted view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// The element at `index` orders before the element at `index - 1`.
    Unsorted { index: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsorted { index } => {
                write!(f, "sequence is not sorted: element {index} orders before its predecessor")
            }
        }
    }
}

impl std::error::Error for SearchError {}
