use criterion::{criterion_group, criterion_main, Criterion};
use ising_core::SimulationParameters;
use ising_mcmc::run;

fn bench_run(c: &mut Criterion) {
    let params = SimulationParameters::new(32, 10_000, 0.0, -1.0, 0.5).unwrap();

    c.bench_function("metropolis_run_32x32_10k", |b| {
        b.iter(|| {
            let _ = run(&params, 42).unwrap();
        })
    });
}

criterion_group!(benches, bench_run);
criterion_main!(benches);
