//! Criterion benchmarks for the Monte Carlo strategy pricer.
//!
//! Measures pricing throughput across sample counts and leg counts to
//! characterise how the sampling and payoff-reduction stages scale.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use optstrat_models::instruments::Instrument;
use optstrat_models::portfolio::Strategy;
use optstrat_pricing::gbm::GbmParams;
use optstrat_pricing::mc::{MonteCarloConfig, MonteCarloPricer};

fn pricer(n_samples: usize) -> MonteCarloPricer {
    let config = MonteCarloConfig::builder()
        .n_samples(n_samples)
        .seed(42)
        .build()
        .unwrap();
    MonteCarloPricer::new(config).unwrap()
}

fn iron_condor() -> Strategy<f64> {
    let mut condor = Strategy::new("Iron Condor");
    condor
        .add_position(vec![
            (1, Instrument::put(90.0).unwrap()),
            (-1, Instrument::put(95.0).unwrap()),
            (-1, Instrument::call(105.0).unwrap()),
            (1, Instrument::call(110.0).unwrap()),
        ])
        .unwrap();
    condor
}

/// Benchmark a single call option across sample counts.
fn bench_single_call(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_call");
    let market = GbmParams::new(100.0, 0.05, 0.2).unwrap();
    let call = Instrument::call(100.0).unwrap();

    for n_samples in [1_000, 10_000, 100_000] {
        let engine = pricer(n_samples);
        group.bench_with_input(
            BenchmarkId::from_parameter(n_samples),
            &engine,
            |b, engine| {
                b.iter(|| {
                    engine
                        .price(black_box(&call), black_box(&market), black_box(180.0))
                        .unwrap()
                });
            },
        );
    }
    group.finish();
}

/// Benchmark a four-leg condor across sample counts.
fn bench_iron_condor(c: &mut Criterion) {
    let mut group = c.benchmark_group("iron_condor");
    let market = GbmParams::new(100.0, 0.05, 0.2).unwrap();
    let condor = iron_condor();

    for n_samples in [10_000, 100_000, 1_000_000] {
        let engine = pricer(n_samples);
        group.bench_with_input(
            BenchmarkId::from_parameter(n_samples),
            &engine,
            |b, engine| {
                b.iter(|| {
                    engine
                        .price(black_box(&condor), black_box(&market), black_box(30.0))
                        .unwrap()
                });
            },
        );
    }
    group.finish();
}

/// Benchmark payoff aggregation alone as leg count grows.
fn bench_leg_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("leg_scaling");
    let market = GbmParams::new(100.0, 0.05, 0.2).unwrap();
    let engine = pricer(100_000);

    for n_legs in [2, 8, 32] {
        let mut strategy = Strategy::new(format!("{} legs", n_legs));
        for i in 0..n_legs {
            let strike = 80.0 + 40.0 * (i as f64) / (n_legs as f64);
            let quantity = if i % 2 == 0 { 1 } else { -1 };
            strategy
                .add_position(vec![(quantity, Instrument::call(strike).unwrap())])
                .unwrap();
        }

        group.bench_with_input(
            BenchmarkId::from_parameter(n_legs),
            &strategy,
            |b, strategy| {
                b.iter(|| {
                    engine
                        .price(black_box(strategy), black_box(&market), black_box(90.0))
                        .unwrap()
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_single_call,
    bench_iron_condor,
    bench_leg_scaling
);
criterion_main!(benches);
