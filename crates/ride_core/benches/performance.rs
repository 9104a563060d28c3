//! Performance benchmarks for ride_core using Criterion.rs.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ride_core::pricing::PricingConfig;
use ride_core::report::{demo_fleet, render_report};
use ride_core::{Driver, RideKind, RideRegistry, SharedRide};

fn bench_fare_policies(c: &mut Criterion) {
    let config = PricingConfig::default();
    let policies = [
        ("basic", config.basic),
        ("standard", config.standard),
        ("premium", config.premium),
    ];

    let mut group = c.benchmark_group("fare_policies");
    for (name, policy) in policies {
        group.bench_with_input(BenchmarkId::from_parameter(name), &policy, |b, policy| {
            b.iter(|| {
                let mut total = 0.0;
                for tenths in 0..1_000 {
                    total += policy.fare_for(black_box(tenths as f64 / 10.0));
                }
                black_box(total)
            });
        });
    }
    group.finish();
}

fn bench_driver_summary(c: &mut Criterion) {
    let sizes = [("small", 10), ("medium", 100), ("large", 1_000)];

    let mut group = c.benchmark_group("driver_summary");
    for (name, ride_count) in sizes {
        let mut registry = RideRegistry::new();
        for i in 0..ride_count {
            let kind = RideKind::ALL[i % RideKind::ALL.len()];
            let ride: SharedRide = kind
                .create(format!("R{i:05}"), "Pickup", "Dropoff", (i % 50) as f64 * 0.7)
                .expect("valid ride");
            registry.insert(ride).expect("unique id");
        }
        let mut driver = Driver::new("D1", "Bench Driver", 4.9);
        for ride in registry.iter() {
            driver.add_ride(Arc::clone(ride));
        }

        group.bench_with_input(BenchmarkId::from_parameter(name), &driver, |b, driver| {
            b.iter(|| {
                let mut out = String::new();
                driver.describe(&mut out).expect("render");
                black_box(out)
            });
        });
    }
    group.finish();
}

fn bench_demo_report(c: &mut Criterion) {
    c.bench_function("demo_report", |b| {
        b.iter(|| {
            let fleet = demo_fleet().expect("demo fleet");
            let mut out = String::new();
            render_report(&fleet, &mut out).expect("render");
            black_box(out)
        });
    });
}

criterion_group!(benches, bench_fare_policies, bench_driver_summary, bench_demo_report);
criterion_main!(benches);
