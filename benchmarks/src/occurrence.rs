use rand::rngs::StdRng;
use sorted_search::{count_occurrences, first_occurrence, last_occurrence};

use crate::common::{print_result, random_targets, sorted_input, time_searches};

pub const OCCURRENCE_LEN: usize = 2_000_000;
pub const OCCURRENCE_TARGETS: usize = 500_000;
/// Few distinct keys, so every hit lands inside a long run of duplicates.
pub const OCCURRENCE_SPREAD: u64 = 1_000;

/// Benchmark: first/last occurrence in heavily duplicated data.
pub fn run_occurrence_benchmark(rng: &mut StdRng) {
    let values = sorted_input(rng, OCCURRENCE_LEN, OCCURRENCE_SPREAD);
    let targets = random_targets(rng, OCCURRENCE_TARGETS, OCCURRENCE_SPREAD);

    let baseline = time_searches(&targets, |t| {
        let start = values.partition_point(|v| v < t);
        (values.get(start) == Some(t)).then_some(start)
    });
    let first = time_searches(&targets, |t| first_occurrence(&values, t));
    let last = time_searches(&targets, |t| last_occurrence(&values, t));

    let mean_run = targets
        .iter()
        .map(|t| count_occurrences(&values, t))
        .sum::<usize>() as f64
        / OCCURRENCE_TARGETS as f64;

    println!("== Occurrence benchmark ==");
    println!("elements: {OCCURRENCE_LEN}");
    println!("distinct keys: {OCCURRENCE_SPREAD}");
    println!("mean run length: {mean_run:.1}");
    print_result("std partition", &baseline, &baseline);
    print_result("first", &first, &baseline);
    print_result("last", &last, &baseline);
}
