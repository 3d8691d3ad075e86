//! Policy throughput over a skewed synthetic reference string.
//!
//! Optimal is expected to trail the others: every eviction scans ahead.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pagesim::{PageId, Policy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const HOT_PAGES: u32 = 8;
const COLD_PAGES: u32 = 64;

/// Seeded reference string: three in four references hit the hot set.
fn workload(len: usize) -> Vec<PageId> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len)
        .map(|_| {
            if rng.gen_bool(0.75) {
                PageId::new(rng.gen_range(0..HOT_PAGES))
            } else {
                PageId::new(rng.gen_range(HOT_PAGES..HOT_PAGES + COLD_PAGES))
            }
        })
        .collect()
}

fn bench_policies(c: &mut Criterion) {
    let reference = workload(4096);
    let mut group = c.benchmark_group("simulate");

    for frames in [4usize, 16] {
        for policy in Policy::ALL {
            group.bench_with_input(
                BenchmarkId::new(policy.name(), frames),
                &frames,
                |b, &frames| b.iter(|| policy.simulate(black_box(&reference), frames).faults()),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_policies);
criterion_main!(benches);
