use rand::rngs::StdRng;
use sorted_search::{
    binary_search, binary_search_generic, binary_search_recursive, SortedSlice,
};
use tracing::warn;

use crate::common::{print_result, random_targets, sorted_input, time_searches};

pub const LOOKUP_LEN: usize = 2_000_000;
pub const LOOKUP_TARGETS: usize = 500_000;

/// Benchmark: exact-match lookup, every variant against `slice::binary_search`.
pub fn run_lookup_benchmark(rng: &mut StdRng) {
    let spread = LOOKUP_LEN as u64 * 2;
    let values = sorted_input(rng, LOOKUP_LEN, spread);
    let targets = random_targets(rng, LOOKUP_TARGETS, spread);

    let view = match SortedSlice::new(&values) {
        Ok(view) => view,
        Err(err) => {
            warn!(%err, "generated input was not sorted");
            return;
        }
    };

    let baseline = time_searches(&targets, |t| values.binary_search(t).ok());
    let iterative = time_searches(&targets, |t| binary_search(&values, t));
    let recursive = time_searches(&targets, |t| binary_search_recursive(&values, t));
    let generic = time_searches(&targets, |t| binary_search_generic(&values, t));
    let checked = time_searches(&targets, |t| view.find(t));

    println!("== Exact lookup benchmark ==");
    println!("elements: {LOOKUP_LEN}");
    println!("targets:  {LOOKUP_TARGETS}");
    print_result("std", &baseline, &baseline);
    print_result("iterative", &iterative, &baseline);
    print_result("recursive", &recursive, &baseline);
    print_result("generic", &generic, &baseline);
    print_result("sorted view", &checked, &baseline);

    if iterative.hits != baseline.hits || recursive.hits != baseline.hits {
        warn!(
            std = baseline.hits,
            iterative = iterative.hits,
            recursive = recursive.hits,
            "variants disagree on hit count"
        );
    }
}
