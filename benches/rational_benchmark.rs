// ============================================================================
// Rational Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Raw Arithmetic - checked_* methods on values
// 2. Context Arithmetic - Strict and legacy contexts including event dispatch
// 3. Rendering - First render (allocation) vs repeated render (reuse)
// 4. Parsing and Reduction
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rational::prelude::*;
use std::hint::black_box;
use std::sync::Arc;

// ============================================================================
// Raw Arithmetic Benchmarks
// ============================================================================

fn benchmark_checked_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("checked_arithmetic");

    let x = Rational::new(123_456, 789);
    let y = Rational::new(-42, 1_001);

    group.bench_function("add", |b| b.iter(|| black_box(&x).checked_add(black_box(&y))));
    group.bench_function("sub", |b| b.iter(|| black_box(&x).checked_sub(black_box(&y))));
    group.bench_function("mul", |b| b.iter(|| black_box(&x).checked_mul(black_box(&y))));
    group.bench_function("div", |b| b.iter(|| black_box(&x).checked_div(black_box(&y))));

    group.finish();
}

// ============================================================================
// Context Arithmetic Benchmarks
// Includes policy checks and event dispatch
// ============================================================================

fn benchmark_context_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("context_arithmetic");

    let x = Rational::new(1, 2);
    let y = Rational::new(1, 3);

    for (name, config) in [
        ("strict", ArithmeticConfig::strict()),
        ("legacy", ArithmeticConfig::legacy()),
    ] {
        let arith = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
        for op in Operation::ALL {
            group.bench_with_input(
                BenchmarkId::new(name, op),
                &(&x, &y),
                |b, (x, y)| b.iter(|| black_box(arith.evaluate(op, x, y))),
            );
        }
    }

    group.finish();
}

// ============================================================================
// Rendering Benchmarks
// ============================================================================

fn benchmark_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    group.bench_function("first_render", |b| {
        b.iter(|| {
            let mut x = Rational::new(black_box(-9_876_543), black_box(123_457));
            black_box(x.render().map(str::len))
        })
    });

    let mut cached = Rational::new(-9_876_543, 123_457);
    cached.render().unwrap();
    group.bench_function("cached_render", |b| {
        b.iter(|| black_box(cached.render().map(str::len)))
    });

    group.bench_function("display", |b| {
        b.iter(|| black_box(cached.to_string()))
    });

    group.finish();
}

// ============================================================================
// Parsing and Reduction Benchmarks
// ============================================================================

fn benchmark_parse_and_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_and_reduce");

    group.bench_function("parse", |b| {
        b.iter(|| black_box("-9876543/123457").parse::<Rational>())
    });

    let x = Rational::new(2_u64.pow(40) as i64 * 3, 2_u64.pow(20) as i64 * 9);
    group.bench_function("reduce", |b| b.iter(|| black_box(&x).reduced()));

    group.finish();
}

criterion_group!(
    benches,
    benchmark_checked_arithmetic,
    benchmark_context_arithmetic,
    benchmark_render,
    benchmark_parse_and_reduce,
);
criterion_main!(benches);
