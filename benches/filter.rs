//! Insert and query throughput for the standard filter configuration.

use bloomvec::{hash, BloomFilter};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn secondary(item: &u64) -> u64 {
    hash::fnv1a_with_seed(&item.to_le_bytes(), 0x9e37_79b9_7f4a_7c15)
}

fn bench_add(c: &mut Criterion) {
    c.bench_function("add/u64", |b| {
        let mut filter =
            BloomFilter::optimal_with_error_rate(1_000_000, 0.01, secondary).unwrap();
        let mut next = 0u64;
        b.iter(|| {
            filter.add(black_box(&next));
            next = next.wrapping_add(1);
        });
    });
}

fn bench_contains_hit(c: &mut Criterion) {
    let mut filter = BloomFilter::optimal_with_error_rate(100_000, 0.01, secondary).unwrap();
    for i in 0..100_000u64 {
        filter.add(&i);
    }

    c.bench_function("contains/hit", |b| {
        let mut next = 0u64;
        b.iter(|| {
            let found = filter.contains(black_box(&next));
            next = (next + 1) % 100_000;
            found
        });
    });
}

fn bench_contains_miss(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut filter = BloomFilter::optimal_with_error_rate(100_000, 0.01, secondary).unwrap();
    for _ in 0..100_000 {
        filter.add(&rng.gen());
    }

    c.bench_function("contains/miss", |b| {
        let mut next = u64::MAX;
        b.iter(|| {
            let found = filter.contains(black_box(&next));
            next = next.wrapping_sub(1);
            found
        });
    });
}

criterion_group!(benches, bench_add, bench_contains_hit, bench_contains_miss);
criterion_main!(benches);
