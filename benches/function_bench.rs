//! Benchmark for function adapters, the optional container and traversals.
//!
//! Measures the cost of dynamic dispatch through adapter chains compared with
//! direct closure calls.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fnkit::combinators::{gt, lt, natural_order};
use fnkit::function::{Function1, Function2, Signal};
use fnkit::optional::Optional;
use fnkit::traverse::{find_first, fold, sorted};
use std::hint::black_box;

// =============================================================================
// Adapter Benchmarks
// =============================================================================

fn benchmark_apply(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("apply");

    let direct = |value: i64| value.wrapping_mul(3);
    let adapted = Function1::total(direct);

    group.bench_function("direct_closure", |bencher| {
        bencher.iter(|| black_box(direct(black_box(7))));
    });

    group.bench_function("function1", |bencher| {
        bencher.iter(|| black_box(adapted.apply(black_box(7))));
    });

    group.finish();
}

fn benchmark_and_then_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("and_then_chain");

    for depth in [1, 10, 100] {
        let mut chain = Function1::total(|value: i64| value);
        for _ in 0..depth {
            chain = chain.and_then(|value: i64| Ok(value.wrapping_add(1)));
        }
        group.bench_with_input(BenchmarkId::new("depth", depth), &chain, |bencher, chain| {
            bencher.iter(|| black_box(chain.apply(black_box(0))));
        });
    }

    group.finish();
}

fn benchmark_or_else(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("or_else");

    let partial = Function1::from_fn(|value: i64| {
        if value % 2 == 0 { Ok(value / 2) } else { Err(Signal::NotApplicable) }
    });
    let total = partial.or_else(Function1::total(|value: i64| value * 3 + 1));

    group.bench_function("defined", |bencher| {
        bencher.iter(|| black_box(total.apply(black_box(8))));
    });

    group.bench_function("fallback", |bencher| {
        bencher.iter(|| black_box(total.apply(black_box(7))));
    });

    group.finish();
}

fn benchmark_curry(criterion: &mut Criterion) {
    let add = Function2::total(|left: i64, right: i64| left + right);
    let add_ten = add.curry(10);

    criterion.bench_function("curry_apply", |bencher| {
        bencher.iter(|| black_box(add_ten.apply(black_box(5))));
    });
}

// =============================================================================
// Optional Benchmarks
// =============================================================================

fn benchmark_optional_pipeline(criterion: &mut Criterion) {
    let double = Function1::total(|value: i64| value * 2);
    let positive = gt(0_i64);

    criterion.bench_function("optional_map_filter", |bencher| {
        bencher.iter(|| {
            let result = Optional::some(black_box(21_i64))
                .map(double.clone())
                .and_then(|optional| optional.filter(positive.clone()));
            black_box(result)
        });
    });
}

// =============================================================================
// Traversal Benchmarks
// =============================================================================

fn benchmark_traversals(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("traversal");

    for size in [100_i64, 10_000] {
        let items: Vec<i64> = (0..size).collect();
        let last = lt(size - 1).negate();

        group.bench_with_input(BenchmarkId::new("find_first_last", size), &items, |bencher, items| {
            bencher.iter(|| black_box(find_first(items.iter().copied(), last.clone())));
        });

        let add = Function2::total(|total: i64, value: i64| total.wrapping_add(value));
        group.bench_with_input(BenchmarkId::new("fold_sum", size), &items, |bencher, items| {
            bencher.iter(|| black_box(fold(items.iter().copied(), 0, add.clone())));
        });

        let reversed: Vec<i64> = items.iter().rev().copied().collect();
        group.bench_with_input(BenchmarkId::new("sorted", size), &reversed, |bencher, reversed| {
            bencher.iter(|| black_box(sorted(reversed.iter().copied(), natural_order())));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_apply,
    benchmark_and_then_chain,
    benchmark_or_else,
    benchmark_curry,
    benchmark_optional_pipeline,
    benchmark_traversals
);

criterion_main!(benches);
