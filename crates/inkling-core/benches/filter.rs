use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use inkling_core::filter::filter_prefix;

fn bench_entries() -> Vec<String> {
    (0..1000).map(|i| format!("tag{i:04}")).collect()
}

fn bench_filter(c: &mut Criterion) {
    let entries = bench_entries();
    let mut group = c.benchmark_group("filter_prefix");
    for query in ["", "t", "tag0", "tag0042", "zzz"] {
        group.bench_with_input(BenchmarkId::from_parameter(query), query, |b, q| {
            b.iter(|| filter_prefix(&entries, q));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
