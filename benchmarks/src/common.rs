use std::time::{Duration, Instant};

use rand::Rng;
use rand::rngs::StdRng;

/// Timing of one search strategy over a batch of targets.
#[derive(Debug)]
pub struct BenchmarkResult {
    pub duration: Duration,
    pub hits: usize,
}

/// Sorted input of `len` values drawn from `0..spread`.
pub fn sorted_input(rng: &mut StdRng, len: usize, spread: u64) -> Vec<u64> {
    let mut values: Vec<u64> = (0..len).map(|_| rng.gen_range(0..spread.max(1))).collect();
    values.sort_unstable();
    values
}

/// Targets spanning slightly past both ends of `0..spread`.
pub fn random_targets(rng: &mut StdRng, count: usize, spread: u64) -> Vec<u64> {
    (0..count).map(|_| rng.gen_range(0..spread + 2)).collect()
}

/// Runs `search` once per target and counts how many returned an index.
pub fn time_searches<F>(targets: &[u64], mut search: F) -> BenchmarkResult
where
    F: FnMut(&u64) -> Option<usize>,
{
    let start = Instant::now();
    let hits = targets.iter().filter(|target| search(*target).is_some()).count();
    BenchmarkResult {
        duration: start.elapsed(),
        hits,
    }
}

pub fn print_result(label: &str, result: &BenchmarkResult, baseline: &BenchmarkResult) {
    let ratio = result.duration.as_secs_f64() / baseline.duration.as_secs_f64().max(f64::EPSILON);
    println!(
        "{label:<16} time: {:>12?}  hits: {:>7}  vs std: {ratio:.2}x",
        result.duration, result.hits
    );
}
