//! Parser benchmarks.
//!
//! Run with: `cargo bench --package kestrelc-par`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use kestrelc_par::parse;

fn bench_parser_single_clause(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_single_clause");

    let source = "square n = n * n";
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("square", |b| b.iter(|| parse(black_box(source))));

    group.finish();
}

fn bench_parser_multi_clause(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_multi_clause");

    let source = "fact 0 = 1\nfact n = n * fact(n - 1)";
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("fact", |b| b.iter(|| parse(black_box(source))));

    group.finish();
}

fn bench_parser_datatype_and_expressions(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_datatype_and_expressions");

    let source = r#"
        datatype Shape = Circle Float or Rectangle Float Float

        area takes Shape returns Float
        `Computes a shape's area.`
        area s = s

        example t = t > 6 ? t + 5 : t
    "#;
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("shapes", |b| b.iter(|| parse(black_box(source))));

    group.finish();
}

fn bench_parser_full_module(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_full_module");

    let source = r#"
        import Hyperion except foo
        import Ocellus only map, filter
        module NoJackShit where

        square takes Integer returns Integer
        `Squares a number.`
        square n = n * n

        example t = (t > 5) ? t : 8

        numbers = [1, 2, 3, 4, 5]
    "#;
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("full_module", |b| b.iter(|| parse(black_box(source))));

    group.finish();
}

criterion_group!(
    benches,
    bench_parser_single_clause,
    bench_parser_multi_clause,
    bench_parser_datatype_and_expressions,
    bench_parser_full_module
);
criterion_main!(benches);
