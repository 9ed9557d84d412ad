//! Frame step cost across field sizes.
//!
//! Target acquisition is a linear scan per recycler, so cost should grow
//! linearly with debris count.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use orlp_core::prelude::*;

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");
    for debris_count in [50u32, 150, 500, 2000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(debris_count),
            &debris_count,
            |b, &debris_count| {
                let config = EngineConfig {
                    parameters: SimParameters {
                        debris_count,
                        ..SimParameters::default()
                    },
                    seed: Some(1),
                    ..EngineConfig::default()
                };
                let mut engine = SimulationEngine::with_clock(config, ManualClock::new());
                engine.start();
                b.iter(|| engine.step(black_box(1.0 / 60.0)));
            },
        );
    }
    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let config = EngineConfig {
        seed: Some(1),
        ..EngineConfig::default()
    };
    let engine = SimulationEngine::with_clock(config, ManualClock::new());
    c.bench_function("snapshot_100", |b| b.iter(|| black_box(engine.snapshot())));
}

criterion_group!(benches, bench_step, bench_snapshot);
criterion_main!(benches);
