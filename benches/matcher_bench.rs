use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use lostfound::{similarity, Lexicon, MatchConfig, MatchEngine};

mod common;
use common::{create_found_items, create_lost_items};

fn engine(use_parallel: bool) -> MatchEngine {
    MatchEngine::new(
        MatchConfig::default().with_parallel(use_parallel),
        Lexicon::default(),
    )
    .expect("default config is valid")
}

/// Benchmark the text similarity cascade on its own
fn bench_similarity(c: &mut Criterion) {
    let mut group = c.benchmark_group("similarity");

    let pairs = [
        ("identical", "กระเป๋าสตางค์สีดำ", "กระเป๋าสตางค์สีดำ"),
        ("containment", "กุญแจ", "พวงกุญแจ มีสามดอก"),
        ("fuzzy_thai", "เสื้อกันหนาวสีเทา", "เสื้อ hoodie สีเทาเข้ม"),
        ("fuzzy_english", "black iphone 13 pro", "iphone with black case"),
        ("unrelated", "ขวดน้ำ", "เครื่องคิดเลข casio"),
    ];

    for (name, a, b) in pairs {
        group.bench_function(name, |bench| {
            bench.iter(|| similarity(black_box(a), black_box(b)));
        });
    }

    group.finish();
}

/// Benchmark a single lost report against growing found collections
fn bench_find_matches_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_matches_for_lost");
    let serial = engine(false);
    let parallel = engine(true);
    let lost = create_lost_items(1);

    for &size in [100, 1_000, 10_000].iter() {
        let found = create_found_items(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("serial_{size}"), |b| {
            b.iter(|| serial.find_matches_for_lost(black_box(&lost[0]), black_box(&found)));
        });
        group.bench_function(format!("parallel_{size}"), |b| {
            b.iter(|| parallel.find_matches_for_lost(black_box(&lost[0]), black_box(&found)));
        });
    }

    group.finish();
}

/// Benchmark the batch sweep used to propose everything that might match
fn bench_auto_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("auto_match");
    group.sample_size(20);

    for &size in [50, 200].iter() {
        let lost = create_lost_items(size);
        let found = create_found_items(size);
        group.throughput(Throughput::Elements((size * size) as u64));

        for (label, use_parallel) in [("serial", false), ("parallel", true)] {
            let engine = engine(use_parallel);
            group.bench_function(format!("{label}_{size}x{size}"), |b| {
                b.iter(|| engine.auto_match(black_box(&lost), black_box(&found)));
            });
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_similarity,
    bench_find_matches_scale,
    bench_auto_match
);
criterion_main!(benches);
