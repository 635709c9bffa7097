// Gzip sizing benchmarks

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sizestat::stats::gzip_size;
use std::hint::black_box;

mod common;

fn bench_gzip_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("gzip_size");
    for len in [1_024, 64 * 1_024, 1_024 * 1_024] {
        let content = common::generate_content(len);

        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("bytes", len), &content, |b, content| {
            b.iter(|| black_box(gzip_size(black_box(content)).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_gzip_size);
criterion_main!(benches);
