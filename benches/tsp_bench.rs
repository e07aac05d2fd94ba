//! Criterion benchmarks for u-tsp.
//!
//! Uses points scattered on a jittered grid so that instances are
//! reproducible without a random number generator.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_tsp::construct::{CheapestInsertion, InitialTour, NearestNeighbor, SpanningTreeTour};
use u_tsp::graph::Graph;
use u_tsp::tabu::{MemoryPolicy, StopPolicy, TabuConfig, TabuRunner};

fn instance(n: usize) -> Graph {
    let side = (n as f64).sqrt().ceil() as usize;
    let points: Vec<(f64, f64)> = (0..n)
        .map(|k| {
            let jitter = ((k * 7919) % 97) as f64 / 97.0;
            ((k % side) as f64 * 10.0 + jitter, (k / side) as f64 * 10.0 - jitter)
        })
        .collect();
    Graph::from_points(&points).expect("finite coordinates")
}

// ===========================================================================
// Constructive heuristics
// ===========================================================================

fn bench_construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct");

    for &n in &[50, 200] {
        let g = instance(n);
        group.bench_with_input(BenchmarkId::new("nearest_neighbor", n), &g, |b, g| {
            b.iter(|| black_box(NearestNeighbor::new(0).initial_tour(black_box(g))))
        });
        group.bench_with_input(BenchmarkId::new("spanning_tree", n), &g, |b, g| {
            b.iter(|| black_box(SpanningTreeTour.initial_tour(black_box(g))))
        });
        group.bench_with_input(BenchmarkId::new("cheapest_insertion", n), &g, |b, g| {
            b.iter(|| black_box(CheapestInsertion.initial_tour(black_box(g))))
        });
    }
    group.finish();
}

// ===========================================================================
// Tabu Search
// ===========================================================================

fn bench_tabu(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabu");
    group.sample_size(10);

    for &n in &[20, 50] {
        let g = instance(n);
        for (name, memory) in [
            ("solutions", MemoryPolicy::Solutions),
            ("moves", MemoryPolicy::Moves { aspiration: true }),
        ] {
            let config = TabuConfig::default()
                .with_stop_policy(StopPolicy::Iterations)
                .with_threshold(50)
                .with_memory_capacity(10)
                .with_discard_probability(0.3)
                .with_memory(memory);
            group.bench_with_input(BenchmarkId::new(name, n), &(&g, config), |b, (g, c)| {
                b.iter(|| {
                    let result = TabuRunner::run(black_box(g), &NearestNeighbor::new(0), black_box(c));
                    black_box(result)
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_construct, bench_tabu);
criterion_main!(benches);
