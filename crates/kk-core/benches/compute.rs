use chrono::TimeDelta;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kk_core::config::canonical_genesis;
use kk_core::{HarmonicClock, Seals, spiral_level};
use num_bigint::BigInt;

fn bench_compute(c: &mut Criterion) {
    let clock = HarmonicClock::default();
    let genesis = canonical_genesis();
    let mut group = c.benchmark_group("compute");

    for (label, days) in [("genesis", 0i64), ("one_year", 365), ("ten_years", 3_650)] {
        let instant = genesis + TimeDelta::days(days);
        group.bench_function(label, |b| b.iter(|| clock.compute(black_box(instant))));
    }
    group.finish();
}

fn bench_seal(c: &mut Criterion) {
    let state = HarmonicClock::default().compute(canonical_genesis() + TimeDelta::days(400));
    c.bench_function("seal", |b| b.iter(|| Seals::from_state(black_box(&state))));
}

fn bench_spiral_level(c: &mut Criterion) {
    let elapsed = BigInt::from(143_847_088_741i64);
    c.bench_function("spiral_level", |b| b.iter(|| spiral_level(black_box(&elapsed))));
}

criterion_group!(benches, bench_compute, bench_seal, bench_spiral_level);
criterion_main!(benches);
