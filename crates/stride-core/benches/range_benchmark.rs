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
use stride_core::math::range::StepRange;

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_traversal");

    for &n in &[1_000_i64, 100_000, 1_000_000] {
        let range = StepRange::until(n).expect("valid benchmark range");
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("i64_step_one", n), &range, |b, range| {
            b.iter(|| {
                let mut acc = 0_i64;
                for v in range.iter() {
                    acc += black_box(v);
                }
                acc
            })
        });
    }

    let descending = StepRange::new(1_000_000_i64, 0, -7).expect("valid benchmark range");
    group.throughput(Throughput::Elements(descending.len() as u64));
    group.bench_function("i64_descending_step_seven", |b| {
        b.iter(|| {
            let mut acc = 0_i64;
            for v in descending.iter() {
                acc += black_box(v);
            }
            acc
        })
    });

    let halves = StepRange::new(0.0_f64, 500_000.0, 0.5).expect("valid benchmark range");
    group.throughput(Throughput::Elements(1_000_000));
    group.bench_function("f64_step_half", |b| {
        b.iter(|| {
            let mut acc = 0.0_f64;
            for v in halves.iter() {
                acc += black_box(v);
            }
            acc
        })
    });

    group.finish();
}

criterion_group!(benches, bench_traversal);
criterion_main!(benches);
