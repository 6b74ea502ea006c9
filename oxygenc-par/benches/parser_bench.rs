//! Parser benchmarks.
//!
//! Run with `cargo bench --package oxygenc-par`.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use oxygenc_par::Parser;

fn node_count(source: &str) -> usize {
    Parser::new(source, "bench.oxy")
        .unwrap()
        .parse()
        .unwrap()
        .block
        .children
        .len()
}

fn bench_parser_simple(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser");

    let source = "fun add(a: int, b: int) -> int\n    return a + b\n";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_function", |b| {
        b.iter(|| node_count(black_box(source)))
    });

    group.finish();
}

fn bench_parser_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_complex");

    let source = r#"
struct Point
    x: int32
    y: int32

object Vector
    x: double
    y: double
    fun length() -> double
        return (self.x * self.x + self.y * self.y) ** 0.5

fun distance(a: Point, b: Point) -> double
    dx: double = a.x - b.x
    dy: double = a.y - b.y
    return (dx * dx + dy * dy) ** 0.5

for i in 0..100
    if i % 2 == 0
        print(i)
    else if i % 3 == 0
        print("fizz")
    else
        continue

switch i
    case 1
        print(1)
    default
        print(0)
"#;
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("mixed_program", |b| {
        b.iter(|| node_count(black_box(source)))
    });

    group.finish();
}

criterion_group!(benches, bench_parser_simple, bench_parser_complex);
criterion_main!(benches);
