// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use steprange_core::BoundedRange;

fn bench_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("size");
    for len in [16i64, 1_024, 65_536] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("i64", len), &len, |b, &len| {
            let range = BoundedRange::new(0i64, len - 1);
            b.iter(|| black_box(range.size()));
        });
        group.bench_with_input(BenchmarkId::new("stepped_i64", len), &len, |b, &len| {
            let range = BoundedRange::with_step(0i64, 2 * (len - 1), |x: &i64| x + 2);
            b.iter(|| black_box(range.size()));
        });
    }
    group.finish();
}

fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");
    for len in [16u32, 1_024, 65_536] {
        group.throughput(Throughput::Elements(u64::from(len)));
        group.bench_with_input(BenchmarkId::new("u32_sum", len), &len, |b, &len| {
            let range = BoundedRange::new(0u32, len - 1);
            b.iter(|| black_box(range.iter().map(u64::from).sum::<u64>()));
        });
    }
    group.finish();
}

fn bench_clear(c: &mut Criterion) {
    c.bench_function("clear_1024", |b| {
        b.iter(|| {
            let mut range = BoundedRange::new(0i32, 1_023);
            range.clear().unwrap();
            black_box(range)
        });
    });
}

criterion_group!(benches, bench_size, bench_iterate, bench_clear);
criterion_main!(benches);
