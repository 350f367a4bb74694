use rand::rngs::StdRng;
use sorted_search::{TieBreak, nearest_with};

use crate::common::{print_result, random_targets, sorted_input, time_searches};

pub const NEAREST_LEN: usize = 1_000_000;
pub const NEAREST_TARGETS: usize = 500_000;

/// Benchmark: nearest-element search against a partition-point baseline.
pub fn run_nearest_benchmark(rng: &mut StdRng) {
    let spread = NEAREST_LEN as u64 * 8;
    let values = sorted_input(rng, NEAREST_LEN, spread);
    let targets = random_targets(rng, NEAREST_TARGETS, spread);

    let baseline = time_searches(&targets, |t| {
        let point = values.partition_point(|v| v < t);
        match (point.checked_sub(1), values.get(point)) {
            (Some(below), Some(above)) => {
                if values[below].abs_diff(*t) < above.abs_diff(*t) {
                    Some(below)
                } else {
                    Some(point)
                }
            }
            (Some(below), None) => Some(below),
            (None, Some(_)) => Some(point),
            (None, None) => None,
        }
    });
    let higher = time_searches(&targets, |t| nearest_with(&values, t, TieBreak::PreferHigher));
    let lower = time_searches(&targets, |t| nearest_with(&values, t, TieBreak::PreferLower));

    let total_distance: u64 = targets
        .iter()
        .filter_map(|t| nearest_with(&values, t, TieBreak::PreferHigher).map(|i| values[i].abs_diff(*t)))
        .sum();

    println!("== Nearest element benchmark ==");
    println!("elements: {NEAREST_LEN}");
    println!("targets:  {NEAREST_TARGETS}");
    println!("mean distance: {:.3}", total_distance as f64 / NEAREST_TARGETS as f64);
    print_result("std partition", &baseline, &baseline);
    print_result("prefer higher", &higher, &baseline);
    print_result("prefer lower", &lower, &baseline);
}
