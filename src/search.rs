//! The binary search family.
//!
//! All variants share the same probe discipline: a half-open interval
//! `[low, high)` over the slice, split at the overflow-safe midpoint
//! [`midpoint`]. Because the probes are identical, the iterative, recursive
//! and comparator-driven searches return the same index for every input,
//! including inputs with duplicates.
//!
//! # Modules
//!
//! - [`iterative`]: loop-based search
//! - [`recursive`]: tail-recursive halving
//! - [`comparator`]: three-way comparison and key extraction
//! - [`occurrence`]: first/last occurrence and insertion points
//! - [`nearest`]: closest element to an absent target

pub mod comparator;
pub mod iterative;
pub mod nearest;
pub mod occurrence;
pub mod recursive;

/// Midpoint of the half-open interval `[low, high)`.
///
/// Computed as `low + (high - low) / 2`, which cannot overflow for any
/// `low <= high`.
#[inline]
pub(crate) fn midpoint(low: usize, high: usize) -> usize {
    debug_assert!(low <= high, "interval bounds out of order: {low} > {high}");
    low + (high - low) / 2
}
