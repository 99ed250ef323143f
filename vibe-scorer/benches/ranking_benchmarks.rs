//! Criterion benchmarks for vibe ranking.
//!
//! Measures ranking time across pool sizes (10, 100, 1000 candidates).
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package vibe-scorer
//! ```

#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use vibe_scorer::{SeededJitter, VibeMatcher};

mod bench_support;

use bench_support::{BENCHMARK_SEED, generate_candidates};

/// Pool sizes to benchmark.
const POOL_SIZES: &[usize] = &[10, 100, 1000];

/// Vibe the visitor ranks against.
const SELF_VIBE: &str = "Nightlife Coffee indie concerts";

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");
    let matcher = VibeMatcher::default();

    for &size in POOL_SIZES {
        let candidates = generate_candidates(size, BENCHMARK_SEED);

        group.throughput(Throughput::Elements(
            u64::try_from(size).unwrap_or(u64::MAX),
        ));
        group.bench_with_input(BenchmarkId::new("candidates", size), &size, |b, _| {
            let mut jitter = SeededJitter::seeded(BENCHMARK_SEED);
            b.iter(|| matcher.rank(SELF_VIBE, &candidates, &mut jitter));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rank);
criterion_main!(benches);
