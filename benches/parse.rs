use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use cron_expand::{Config, Pattern};

const PATTERNS: &[&str] = &[
    "* * * * *",
    "1 0 1 1 0",
    "*/15 0 1,15 * 1-5",
    "*/15,7,13-16 0 1 1 0",
    "0,5,10,15,20,25,30,35,40,45,50,55 */2 1-15 */3 1-5",
];

pub fn pattern_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern");
    for pattern in PATTERNS {
        group.bench_with_input(BenchmarkId::from_parameter(pattern), pattern, |b, p| {
            b.iter(|| Pattern::new(*p).unwrap())
        });
    }
    group.finish();
}

pub fn config_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("config");
    for pattern in PATTERNS {
        let line = format!("{pattern} /usr/bin/find");
        group.bench_with_input(BenchmarkId::from_parameter(line.clone()), &line, |b, l| {
            b.iter(|| Config::new(l).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, pattern_benchmark, config_benchmark);
criterion_main!(benches);
