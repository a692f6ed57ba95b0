use criterion::{Criterion, black_box, criterion_group, criterion_main};

use linemin::{Config, minimize};

fn bounded(c: &mut Criterion) {
    let config = Config {
        lower_bound: -10.0,
        upper_bound: 10.0,
        ..Config::default()
    };
    c.bench_function("bounded", |b| {
        b.iter(|| minimize(|x: f64| (x - black_box(3.0)).powi(2), &config))
    });
}

fn unbounded(c: &mut Criterion) {
    let config = Config::default();
    c.bench_function("unbounded", |b| {
        b.iter(|| minimize(|x: f64| (x - black_box(3.0)).powi(2), &config))
    });
}

criterion_group!(benches, bounded, unbounded);
criterion_main!(benches);
