//! Benchmarks for random coloring and conflict counting.

use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use dyecast_core::generate::random_graph;
use dyecast_core::{ColorGraph, Palette};

fn build_graph(nodes: usize) -> ColorGraph {
    let mut rng = StdRng::seed_from_u64(0xD1CE);
    random_graph(nodes, 0.2, &mut rng).expect("valid size")
}

fn bench_color_randomly(c: &mut Criterion) {
    let palette = Palette::new(["red", "green", "blue", "yellow"]);
    let mut group = c.benchmark_group("color_randomly");
    for nodes in [50_usize, 200, 800] {
        let graph = build_graph(nodes);
        group.bench_function(format!("{nodes}_nodes"), |b| {
            let mut rng = StdRng::seed_from_u64(7);
            b.iter(|| {
                let mut scratch = graph.clone();
                scratch
                    .color_randomly(&palette, &mut rng)
                    .expect("non-empty palette");
                std::hint::black_box(scratch.total_conflicts())
            });
        });
    }
    group.finish();
}

fn bench_conflict_count(c: &mut Criterion) {
    let palette = Palette::new(["red", "green", "blue"]);
    let mut rng = StdRng::seed_from_u64(7);
    let mut graph = build_graph(800);
    graph
        .color_randomly(&palette, &mut rng)
        .expect("non-empty palette");

    c.bench_function("total_conflicts_800_nodes", |b| {
        b.iter(|| std::hint::black_box(graph.total_conflicts()));
    });
}

criterion_group!(benches, bench_color_randomly, bench_conflict_count);
criterion_main!(benches);
