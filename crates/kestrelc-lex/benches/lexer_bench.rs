//! Lexer benchmarks.
//!
//! Run with: `cargo bench --package kestrelc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use kestrelc_lex::tokenize;

fn bench_lexer_identifiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_identifiers");

    group.bench_function("short_ident", |b| b.iter(|| tokenize(black_box("square n = n"))));

    group.bench_function("many_clauses", |b| {
        let source = "fib n = n\nfib n = fib n\nfib n = fib n";
        b.iter(|| tokenize(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_literals(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_literals");

    group.bench_function("integers", |b| b.iter(|| tokenize(black_box("example = [1, 2, 3, 4, 5]"))));

    group.bench_function("floats", |b| b.iter(|| tokenize(black_box("pi = 3.14159"))));

    group.bench_function("string", |b| {
        b.iter(|| tokenize(black_box("greeting = \"hello from the lexer benchmark\"")))
    });

    group.finish();
}

fn bench_lexer_module(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_module");

    let source = r#"
        import Hyperion except foo
        import Ocellus only map, filter
        module NoJackShit where

        square takes Integer returns Integer
        `Squares a number.`
        square n = n * n

        example t = (t > 5) ? t : 8
    "#;
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("full_module", |b| b.iter(|| tokenize(black_box(source))));

    group.finish();
}

criterion_group!(benches, bench_lexer_identifiers, bench_lexer_literals, bench_lexer_module);
criterion_main!(benches);
