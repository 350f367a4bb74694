//! Shared test utilities for search operations.
//!
//! Linear-scan reference implementations plus seeded random inputs, so the
//! property tests in each module compare against something obviously correct.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed shared by every randomized test so failures reproduce.
pub const SEED: u64 = 7;

/// Number of random cases each property test runs.
pub const CASES: usize = 500;

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

/// Generates a sorted vector of up to `max_len` values drawn from `-spread..=spread`.
///
/// A small spread relative to the length produces plenty of duplicates.
pub fn random_sorted(rng: &mut StdRng, max_len: usize, spread: i64) -> Vec<i64> {
    let len = rng.gen_range(0..=max_len);
    let mut values: Vec<i64> = (0..len).map(|_| rng.gen_range(-spread..=spread)).collect();
    values.sort_unstable();
    values
}

/// Picks a target that is sometimes present and sometimes just outside the data.
pub fn random_target(rng: &mut StdRng, values: &[i64], spread: i64) -> i64 {
    if !values.is_empty() && rng.gen_bool(0.5) {
        values[rng.gen_range(0..values.len())]
    } else {
        rng.gen_range(-spread - 2..=spread + 2)
    }
}

pub fn linear_first(values: &[i64], target: i64) -> Option<usize> {
    values.iter().position(|&v| v == target)
}

pub fn linear_last(values: &[i64], target: i64) -> Option<usize> {
    values.iter().rposition(|&v| v == target)
}

/// Smallest distance from `target` to any element, or `None` for an empty slice.
pub fn linear_min_distance(values: &[i64], target: i64) -> Option<u64> {
    values.iter().map(|v| v.abs_diff(target)).min()
}

/// Index of the nearest element, preferring the highest index on ties.
pub fn linear_nearest_prefer_higher(values: &[i64], target: i64) -> Option<usize> {
    let best = linear_min_distance(values, target)?;
    values.iter().rposition(|v| v.abs_diff(target) == best)
}

/// Index of the nearest element, preferring the lowest index on ties.
pub fn linear_nearest_prefer_lower(values: &[i64], target: i64) -> Option<usize> {
    let best = linear_min_distance(values, target)?;
    values.iter().position(|v| v.abs_diff(target) == best)
}
