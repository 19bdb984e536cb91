//! Harness overhead around a trivial function under test

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fntest_harness::FunctionTest;

fn bench_overhead(c: &mut Criterion) {
    let mut quiet = FunctionTest::simple(|x: u64, y: u64| x.wrapping_mul(y))
        .with_sink(std::io::sink())
        .with_verbose(false);

    c.bench_function("test_passing_case", |b| {
        b.iter(|| quiet.test("mul", 391, black_box((17, 23))));
    });

    let mut failing = FunctionTest::simple(|x: u64, y: u64| x.wrapping_mul(y))
        .with_sink(std::io::sink())
        .with_verbose(false);

    c.bench_function("test_failing_case", |b| {
        b.iter(|| failing.test("mul", 0, black_box((17, 23))));
    });
}

criterion_group!(benches, bench_overhead);
criterion_main!(benches);
