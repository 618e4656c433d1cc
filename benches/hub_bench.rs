//! Criterion benchmarks for the hub placement engines.
//!
//! Instances come from the generator with fixed seeds, so every sample
//! measures the same work.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use drone_hub::generator::{generate, GeneratorConfig};
use drone_hub::sa::SaConfig;
use drone_hub::solver::{local_search, simulated_annealing};

fn instance(volume: f64) -> drone_hub::problem::ProblemInstance {
    generate(
        &GeneratorConfig::default()
            .with_seed(42)
            .with_volume(volume)
            .with_deviation(0.0),
    )
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_objective(c: &mut Criterion) {
    let mut group = c.benchmark_group("objective");

    for &volume in &[0.5, 1.0, 2.0] {
        let problem = instance(volume);
        let hub = problem.bounds.center();
        group.bench_with_input(
            BenchmarkId::from_parameter(problem.points.len()),
            &(problem, hub),
            |b, (p, h)| b.iter(|| black_box(p.objective(black_box(*h)))),
        );
    }
    group.finish();
}

fn bench_local_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("local_search");
    group.sample_size(10);

    for &volume in &[0.5, 1.0, 2.0] {
        let problem = instance(volume);
        group.bench_with_input(BenchmarkId::from_parameter(volume), &problem, |b, p| {
            b.iter(|| {
                let result = local_search(black_box(p), false);
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_simulated_annealing(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulated_annealing");
    group.sample_size(10);

    for &volume in &[0.5, 1.0, 2.0] {
        let problem = instance(volume);
        let config = SaConfig::default().with_seed(42).with_iterations(1000);
        group.bench_with_input(
            BenchmarkId::from_parameter(volume),
            &(problem, config),
            |b, (p, c)| {
                b.iter(|| {
                    let result = simulated_annealing(black_box(p), black_box(c), false);
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_objective,
    bench_local_search,
    bench_simulated_annealing
);
criterion_main!(benches);
