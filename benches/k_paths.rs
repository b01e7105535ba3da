use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use k_paths::graph::MutableGraph;
use k_paths::{Network, Yen};
use ordered_float::OrderedFloat;

// Bidirected unit-weight grid, which has many loopless alternatives
fn build_grid(side: usize) -> Network<usize, OrderedFloat<f64>> {
    let mut network = Network::with_capacity(side * side);
    for y in 0..side {
        for x in 0..side {
            let vertex = y * side + x;
            if x + 1 < side {
                network.add_edge(vertex, vertex + 1, OrderedFloat(1.0));
                network.add_edge(vertex + 1, vertex, OrderedFloat(1.0));
            }
            if y + 1 < side {
                network.add_edge(vertex, vertex + side, OrderedFloat(1.0));
                network.add_edge(vertex + side, vertex, OrderedFloat(1.0));
            }
        }
    }
    network
}

fn bench_k_shortest_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("k_shortest_paths");
    for side in [5usize, 8, 12] {
        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, &side| {
            b.iter_batched(
                || build_grid(side),
                |mut network| {
                    Yen::new().k_shortest_distances(&mut network, &0, &(side * side - 1), 5)
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_k_shortest_paths);
criterion_main!(benches);
