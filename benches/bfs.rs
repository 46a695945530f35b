use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use parbfs::generate::{RandomGraphGenerator, DEFAULT_SEED};
use parbfs::graph::AdjacencyGraph;
use parbfs::traversal::{level_pool, pool_bfs};

// (name, vertices, connections)
const CONFIGS: [(&str, usize, usize); 3] = [
    ("small", 10_000, 50_000),
    ("medium", 100_000, 1_000_000),
    ("large", 1_000_000, 10_000_000),
];

const THREAD_COUNTS: [usize; 4] = [2, 4, 8, 16];

fn create_graph(vertices: usize, connections: usize) -> AdjacencyGraph {
    let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);
    RandomGraphGenerator::new().generate(&mut rng, vertices, connections)
}

// Baseline queue-based BFS
fn bench_serial(c: &mut Criterion) {
    let mut group = c.benchmark_group("serial_bfs");
    group.sample_size(10);

    for (name, vertices, connections) in CONFIGS {
        let graph = create_graph(vertices, connections);
        group.bench_with_input(BenchmarkId::new("serial", name), &graph, |b, g| {
            b.iter(|| g.bfs(0));
        });
    }

    group.finish();
}

// Scoped threads spawned per level
fn bench_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_bfs");
    group.sample_size(10);

    for (name, vertices, connections) in CONFIGS {
        let graph = create_graph(vertices, connections);
        for threads in THREAD_COUNTS {
            group.bench_with_input(
                BenchmarkId::new(format!("spawn_{}", name), threads),
                &threads,
                |b, &threads| {
                    b.iter(|| graph.parallel_bfs(0, threads));
                },
            );
        }
    }

    group.finish();
}

// Reused rayon workers
fn bench_pool(c: &mut Criterion) {
    let mut group = c.benchmark_group("pool_bfs");
    group.sample_size(10);

    for (name, vertices, connections) in CONFIGS {
        let graph = create_graph(vertices, connections);
        for threads in THREAD_COUNTS {
            let pool = level_pool(threads).expect("Failed to build thread pool");
            group.bench_with_input(
                BenchmarkId::new(format!("pool_{}", name), threads),
                &threads,
                |b, _| {
                    b.iter(|| pool_bfs(&graph, 0, &pool));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_serial, bench_parallel, bench_pool);
criterion_main!(benches);
