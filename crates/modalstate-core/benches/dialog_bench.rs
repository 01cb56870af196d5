//! Benchmarks for descriptor equality and hashing.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use modalstate_core::{AlertState, Animation, ButtonState};

fn dialog(buttons: usize) -> AlertState<u32> {
    AlertState::builder("Benchmark")
        .buttons((0..buttons).map(|i| {
            ButtonState::new(format!("Button {i}")).send_animated(i as u32, Animation::EaseInOut)
        }))
        .message("Comparing descriptors")
        .build()
}

fn bench_equality(c: &mut Criterion) {
    let mut group = c.benchmark_group("dialog/eq");
    for n in [0usize, 2, 16] {
        let a = dialog(n);
        let b = dialog(n);
        group.bench_function(format!("{n}_buttons"), |bench| {
            bench.iter(|| black_box(&a) == black_box(&b));
        });
    }
    group.finish();
}

fn bench_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("dialog/hash");
    for n in [0usize, 2, 16] {
        let a = dialog(n);
        group.bench_function(format!("{n}_buttons"), |bench| {
            bench.iter(|| {
                let mut hasher = DefaultHasher::new();
                black_box(&a).hash(&mut hasher);
                hasher.finish()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_equality, bench_hash);
criterion_main!(benches);
