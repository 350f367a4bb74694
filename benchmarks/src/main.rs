use std::collections::HashSet;
use std::env;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod common;
mod lookup;
mod nearest;
mod occurrence;

use lookup::run_lookup_benchmark;
use nearest::run_nearest_benchmark;
use occurrence::run_occurrence_benchmark;

/// Available benchmark names
const BENCHMARK_NAMES: &[&str] = &["lookup", "occurrence", "nearest"];

fn print_usage() {
    println!("Usage: benchmarks [OPTIONS] [BENCHMARK...]");
    println!();
    println!("Time the sorted-search variants against the standard library.");
    println!();
    println!("Options:");
    println!("  --help, -h       Show this help message");
    println!("  --list, -l       List available benchmarks");
    println!();
    println!("Arguments:");
    println!("  BENCHMARK        Benchmark(s) to run, by name or index (0-based)");
    println!("                   If no benchmarks specified, runs all benchmarks.");
    println!();
    println!("Examples:");
    println!("  benchmarks                      # Run all benchmarks");
    println!("  benchmarks nearest              # Run only 'nearest' benchmark");
    println!("  benchmarks 0 2                  # Run benchmarks 0 and 2");
    println!();
    println!("Set RUST_LOG=debug for diagnostic output.");
}

fn print_benchmark_list() {
    println!("Available benchmarks:");
    for (i, name) in BENCHMARK_NAMES.iter().enumerate() {
        println!("  {}: {}", i, name);
    }
}

fn parse_benchmark_selection(args: &[String]) -> HashSet<usize> {
    let mut selected = HashSet::new();

    for arg in args {
        // Try parsing as index first
        if let Ok(index) = arg.parse::<usize>() {
            if index < BENCHMARK_NAMES.len() {
                selected.insert(index);
            } else {
                warn!(
                    index,
                    max = BENCHMARK_NAMES.len() - 1,
                    "benchmark index out of range"
                );
            }
        } else if let Some(index) = BENCHMARK_NAMES.iter().position(|&name| name == arg) {
            selected.insert(index);
        } else {
            warn!(name = %arg, "unknown benchmark");
        }
    }

    selected
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    for arg in &args {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return;
            }
            "--list" | "-l" => {
                print_benchmark_list();
                return;
            }
            _ => {}
        }
    }

    let benchmark_args: Vec<String> = args
        .into_iter()
        .filter(|arg| !arg.starts_with('-'))
        .collect();

    let selected = if benchmark_args.is_empty() {
        (0..BENCHMARK_NAMES.len()).collect()
    } else {
        parse_benchmark_selection(&benchmark_args)
    };

    if selected.is_empty() {
        warn!("no valid benchmarks selected; use --list to see available benchmarks");
        return;
    }

    let mut rng = StdRng::seed_from_u64(7);
    let mut first = true;

    for (i, name) in BENCHMARK_NAMES.iter().enumerate() {
        if !selected.contains(&i) {
            continue;
        }
        if !first {
            println!();
        }
        first = false;

        info!(benchmark = name, "starting");
        match i {
            0 => run_lookup_benchmark(&mut rng),
            1 => run_occurrence_benchmark(&mut rng),
            2 => run_nearest_benchmark(&mut rng),
            _ => unreachable!(),
        }
    }
}
