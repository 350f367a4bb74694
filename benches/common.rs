#![allow(dead_code)]

use std::env;

use rand::Rng;
use rand::rngs::StdRng;

/// Returns true when `BENCH_VERBOSE` is set to anything but `0`.
pub fn verbose() -> bool {
    env::var("BENCH_VERBOSE").is_ok_and(|value| value != "0")
}

/// Sorted input of `len` values with roughly `len / duplicate_factor` distinct keys.
pub fn sorted_input(rng: &mut StdRng, len: usize, duplicate_factor: u64) -> Vec<u64> {
    let spread = (len as u64 / duplicate_factor.max(1)).max(1);
    let mut values: Vec<u64> = (0..len).map(|_| rng.gen_range(0..spread)).collect();
    values.sort_unstable();
    values
}

/// Targets drawn from slightly beyond the data range, so some miss.
pub fn targets(rng: &mut StdRng, values: &[u64], count: usize) -> Vec<u64> {
    let upper = values.last().copied().unwrap_or(0) + 2;
    (0..count).map(|_| rng.gen_range(0..=upper)).collect()
}
