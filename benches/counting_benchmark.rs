// ============================================================================
// Counting Engine Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Raw Binomial - Isolates the coefficient arithmetic
// 2. Frequency Methods - Closed form vs enumeration per digit-sum query
// 3. End-to-End Counts - Full good-number counts across digit lengths
// 4. Distribution - Tabulating a complete half-sum row
//
// Cost Notes:
// - Closed form: at most k/10 + 1 binomial terms per frequency query
// - Enumeration: walks all 10^n digit sequences per query
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use good_numbers::engine::{frequency, frequency_by_enumeration};
use good_numbers::numeric::binomial;
use good_numbers::prelude::*;

// ============================================================================
// Raw Binomial Benchmarks
// Isolates just the multiplicative coefficient loop
// ============================================================================

fn benchmark_binomial(c: &mut Criterion) {
    let mut group = c.benchmark_group("binomial");

    // Central coefficients grow the loop to n/2 steps; 67 is the largest
    // row whose middle still fits in u64.
    for n in [10u64, 30, 67].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            let k = (n / 2) as i64;
            b.iter(|| black_box(binomial(black_box(n), k)));
        });
    }

    group.finish();
}

// ============================================================================
// Frequency Method Benchmarks
// Closed form against brute force on the same central query
// ============================================================================

fn benchmark_frequency_methods(c: &mut Criterion) {
    let mut group = c.benchmark_group("frequency_methods");

    for group_len in [2u32, 3, 4, 5].iter() {
        // The central sum maximizes inclusion-exclusion terms, the worst
        // case for the closed form.
        let central = 9 * *group_len as i64 / 2;

        group.bench_with_input(
            BenchmarkId::new("ClosedForm", group_len),
            &(*group_len, central),
            |b, &(group_len, central)| {
                b.iter(|| black_box(frequency(group_len, black_box(central))));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("Enumeration", group_len),
            &(*group_len, central),
            |b, &(group_len, central)| {
                b.iter(|| black_box(frequency_by_enumeration(group_len, black_box(central))));
            },
        );
    }

    group.finish();
}

// ============================================================================
// End-to-End Counting Benchmarks
// ============================================================================

fn benchmark_count_good_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_good_numbers");

    for total in [6u32, 10, 16, 20].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(total), total, |b, &total| {
            let counter = GoodNumberCounter::default();
            let length = DigitLength::new(total).unwrap();

            b.iter(|| black_box(counter.count(black_box(length))));
        });
    }

    group.finish();
}

fn benchmark_counting_methods(c: &mut Criterion) {
    let mut group = c.benchmark_group("counting_methods");

    for total in [4u32, 6, 8].iter() {
        let length = DigitLength::new(*total).unwrap();

        group.bench_with_input(
            BenchmarkId::new("ClosedForm", total),
            &length,
            |b, &length| {
                let counter = create_from_config(CounterConfig::closed_form()).unwrap();
                b.iter(|| black_box(counter.count(black_box(length))));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("Enumeration", total),
            &length,
            |b, &length| {
                let counter = create_from_config(CounterConfig::enumeration_oracle()).unwrap();
                b.iter(|| black_box(counter.count(black_box(length))));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Distribution Benchmarks
// ============================================================================

fn benchmark_sum_distribution(c: &mut Criterion) {
    c.bench_function("sum_distribution_widest", |b| {
        let counter = GoodNumberCounter::default();
        let length = DigitLength::MAX;

        b.iter(|| black_box(counter.sum_distribution(black_box(length))));
    });
}

criterion_group!(
    benches,
    benchmark_binomial,
    benchmark_frequency_methods,
    benchmark_count_good_numbers,
    benchmark_counting_methods,
    benchmark_sum_distribution,
);
criterion_main!(benches);
