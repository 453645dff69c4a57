use collsort::prelude::*;
use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use rand::Rng;
use std::hint::black_box;
use std::time::Duration;

fn bench_100k_natural_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("100k Natural Sort");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(60)); // Decomposition makes comparisons expensive

    // Dataset generation: filename-style strings with embedded numbers
    let mut rng = rand::rng();
    let count = 100_000;

    let random_strings: Vec<String> = (0..count)
        .map(|_| {
            format!(
                "disk{}/segment{:06}.log",
                rng.random_range(0u32..32),
                rng.random_range(0u32..1_000_000)
            )
        })
        .collect();

    // Calculate approximate size for throughput
    let total_bytes: usize = random_strings.iter().map(|s| s.len()).sum();
    group.throughput(Throughput::Bytes(total_bytes as u64));

    group.bench_function("sort_strings (smart numeric)", |b| {
        b.iter_batched(
            || random_strings.clone(),
            |data| sort_strings(black_box(data), &SortOptions::new().smart_numeric(true)),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("sort_strings (plain)", |b| {
        b.iter_batched(
            || random_strings.clone(),
            |data| sort_strings(black_box(data), &SortOptions::new()),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || random_strings.clone(),
            |mut data| data.sort(),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_100k_natural_sort);
criterion_main!(benches);
