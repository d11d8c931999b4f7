use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use ordkit::prelude::*;
use rand::Rng;
use std::hint::black_box;

fn bench_integers(c: &mut Criterion) {
    let mut group = c.benchmark_group("Integer Sort");
    group.sample_size(10);

    // Dataset generation
    let mut rng = rand::rng();
    let count = 10_000;
    let input: Vec<i64> = (0..count).map(|_| rng.random_range(0..1_000_000)).collect();

    let in_place: [(&str, fn(&mut Vec<i64>)); 5] = [
        ("heap_sort", |v| {
            heap_sort(v);
        }),
        ("merge_sort_iterative", |v| {
            merge_sort_iterative(v);
        }),
        ("quick_sort_dnf", |v| {
            quick_sort_dnf(v);
        }),
        ("quick_sort_hoare", |v| {
            quick_sort_hoare(v);
        }),
        ("quick_sort_lomuto", |v| {
            quick_sort_lomuto(v);
        }),
    ];

    for (name, sort) in in_place {
        group.bench_function(name, |b| {
            b.iter_batched(
                || input.clone(),
                |mut data| sort(black_box(&mut data)),
                BatchSize::SmallInput,
            )
        });
    }

    group.bench_function("quick_sort (bucket)", |b| {
        b.iter(|| quick_sort(black_box(&input)))
    });

    group.bench_function("merge_sort_recursive", |b| {
        b.iter(|| merge_sort_recursive(black_box(&input)))
    });

    group.bench_function("counting_sort", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| counting_sort(black_box(&mut data)).map(|_| ()),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("radix_sort (base 10)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| radix_sort(black_box(&mut data)).map(|_| ()),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("radix_sort (base 256)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| radix_sort_with_base(black_box(&mut data), 256).map(|_| ()),
            BatchSize::SmallInput,
        )
    });

    // Std Sort (Stable)
    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort(),
            BatchSize::SmallInput,
        )
    });

    // Std Sort Unstable
    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_quadratic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Quadratic Sort");
    group.sample_size(10);

    let mut rng = rand::rng();
    let input: Vec<i32> = (0..1_000).map(|_| rng.random()).collect();

    let quadratic: [(&str, fn(&mut Vec<i32>)); 3] = [
        ("bubble_sort", |v| {
            bubble_sort(v);
        }),
        ("insertion_sort", |v| {
            insertion_sort(v);
        }),
        ("selection_sort", |v| {
            selection_sort(v);
        }),
    ];

    for (name, sort) in quadratic {
        group.bench_function(name, |b| {
            b.iter_batched(
                || input.clone(),
                |mut data| sort(black_box(&mut data)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("Selection");
    group.sample_size(10);

    let mut rng = rand::rng();
    let input: Vec<i64> = (0..10_000).map(|_| rng.random()).collect();
    let k = input.len() / 2;

    group.bench_function("quick_select (median)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| quick_select(black_box(&mut data), k),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("median_of_medians", |b| {
        b.iter(|| median_of_medians(black_box(&input)))
    });

    group.bench_function("select_min_max", |b| {
        b.iter(|| select_min_max(black_box(&input)).map(|(min, max)| (*min, *max)))
    });

    group.bench_function("select_min_max_naive", |b| {
        b.iter(|| select_min_max_naive(black_box(&input)).map(|(min, max)| (*min, *max)))
    });

    group.bench_function("slice::select_nth_unstable", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| *data.select_nth_unstable(k).1,
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("String Sort");
    group.sample_size(10);

    let mut rng = rand::rng();
    let input: Vec<String> = (0..10_000)
        .map(|_| {
            let len = rng.random_range(5..20);
            (0..len).map(|_| char::from(rng.random_range(b'!'..=b'~'))).collect()
        })
        .collect();

    group.bench_function("radix_sort_str", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| {
                radix_sort_str(black_box(&mut data));
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_integers,
    bench_quadratic,
    bench_selection,
    bench_strings
);
criterion_main!(benches);
