//! Criterion benches for the enumeration hot path.
//!
//! - Flip-graph construction for n = 7..9 (the full BFS).
//! - Canonical certificates of single meshes, with and without min-degree pruning.
//! - Rooted (four-combination) certificates, as used for edge-orbit skipping.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use flipgraph::certificate::{CertCfg, Certificate};
use flipgraph::enumerate::{EnumCfg, FlipGraph};
use flipgraph::mesh::{BuildStrategy, Mesh};
use rand::{rngs::StdRng, SeedableRng};

fn bench_flip_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("flip_graph");
    group.sample_size(10);
    for n in 7..=9 {
        group.bench_function(BenchmarkId::new("compute", n), |b| {
            b.iter(|| FlipGraph::compute(n).unwrap())
        });
        group.bench_function(BenchmarkId::new("compute_skip_orbits", n), |b| {
            let cfg = EnumCfg {
                skip_equivalent_edges: true,
                ..EnumCfg::default()
            };
            b.iter(|| FlipGraph::compute_with(n, cfg).unwrap())
        });
    }
    group.finish();
}

fn bench_certificate(c: &mut Criterion) {
    let mut group = c.benchmark_group("certificate");
    for n in [12, 24, 48] {
        let fan = Mesh::build(n, BuildStrategy::Fan).unwrap();
        let mut walked = fan.clone();
        walked.random_flip_walk(&mut StdRng::seed_from_u64(42), 4 * n);
        for (label, mesh) in [("fan", &fan), ("walked", &walked)] {
            group.bench_function(BenchmarkId::new(format!("pruned/{label}"), n), |b| {
                b.iter(|| Certificate::of(mesh))
            });
            group.bench_function(BenchmarkId::new(format!("full/{label}"), n), |b| {
                let cfg = CertCfg {
                    min_degree_pruning: false,
                };
                b.iter(|| Certificate::with_cfg(mesh, cfg))
            });
        }
        group.bench_function(BenchmarkId::new("rooted_all_edges", n), |b| {
            b.iter(|| {
                walked
                    .flippable_edges()
                    .map(|h| Certificate::rooted(&walked, h))
                    .count()
            })
        });
        group.bench_function(BenchmarkId::new("reconstruct", n), |b| {
            b.iter_batched(
                || Certificate::of(&walked),
                |cert| Mesh::from_certificate(&cert).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_flip_graph, bench_certificate);
criterion_main!(benches);
