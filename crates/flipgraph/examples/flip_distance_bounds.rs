//! Flip-distance bounds from single and paired centers.
//!
//! Purpose
//! - For a fixed `n`, enumerate the flip graph and report, for every class used
//!   as a center, the bound `2 * ecc` (or `2 * ecc - 1` when the farthest class
//!   is unique), together with the diameter those bounds are compared to.
//! - With `--pairs`, also report the two-center bounds (O(V^4), keep n <= 9).
//!
//! Usage: `cargo run --release --example flip_distance_bounds -- 9 --pairs`

use std::time::Instant;

use flipgraph::api::build_flip_graph;
use flipgraph::metrics::{
    center_bound, center_bound_counts, diameter, distance_histogram, two_center_bound_counts,
};

fn main() {
    let mut args = std::env::args().skip(1);
    let n: usize = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8);
    let pairs = args.any(|a| a == "--pairs");

    let start = Instant::now();
    let graph = build_flip_graph(n).expect("vertex count in range");
    let elapsed = start.elapsed().as_secs_f64() * 1e3;
    let adj = graph.adjacency();

    println!(
        "n={n} classes={} edges={} enumerate_ms={elapsed:.3}",
        graph.len(),
        graph.edge_count()
    );
    println!("diameter={}", diameter(adj));
    println!(
        "root_center_bound={}",
        center_bound(&distance_histogram(adj, &[0]))
    );

    let counts = center_bound_counts(adj);
    println!("best_center_bound={}", counts.iter().position(|&c| c > 0).unwrap_or(0));
    println!("center_bound_counts={counts:?}");

    if pairs {
        let counts = two_center_bound_counts(adj);
        println!(
            "best_two_center_bound={}",
            counts.iter().position(|&c| c > 0).unwrap_or(0)
        );
        println!("two_center_bound_counts={counts:?}");
    }
}
