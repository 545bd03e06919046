//! Benchmark for identifier lookup and full resolution

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use device_ppi::classification::{Resolver, CLASSIFICATION_TABLE};
use device_ppi::{FixedDisplay, FixedIdentity, PpiResolver, ScaleSignal};
use std::sync::Arc;

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolver");
    group.throughput(Throughput::Elements(1));

    let resolver = Resolver::builtin();

    group.bench_function("lookup_hit", |b| {
        b.iter(|| resolver.lookup(black_box("iPad2,4")));
    });

    group.bench_function("lookup_miss", |b| {
        b.iter(|| resolver.lookup(black_box("iPhone99,9")));
    });

    group.bench_function("table_linear_scan", |b| {
        b.iter(|| CLASSIFICATION_TABLE.find(black_box("iPad2,4")));
    });

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("facade");
    group.throughput(Throughput::Elements(1));

    let exact = PpiResolver::new(
        Arc::new(FixedIdentity::new("iPhone14,5")),
        Arc::new(FixedDisplay::phone(ScaleSignal::uniform(3.0))),
    );
    group.bench_function("resolve_exact", |b| {
        b.iter(|| black_box(exact.resolve_ppi()));
    });

    let guessed = PpiResolver::new(
        Arc::new(FixedIdentity::new("iPhone99,9")),
        Arc::new(FixedDisplay::phone(ScaleSignal::uniform(3.0))),
    );
    group.bench_function("resolve_best_guess", |b| {
        b.iter(|| black_box(guessed.resolve_ppi()));
    });

    group.finish();
}

criterion_group!(benches, bench_lookup, bench_resolve);
criterion_main!(benches);
