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

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dash_core::container::matrix::Matrix;
use dash_core::container::vector::Vector;
use dash_core::math::interval::Interval;
use dash_core::ops::arithmetic::{matrix_binary, matrix_negate, BinaryOp};
use dash_core::ops::logic::{vector_equals, vector_logic, vector_not, LogicOp};
use std::hint::black_box;

const SIDES: [usize; 3] = [16, 128, 512];

fn integer_matrix(side: usize, seed: i32) -> Matrix {
    let values = (0..side * side)
        .map(|i| (i as i32).wrapping_mul(31).wrapping_add(seed) % 97 + 1)
        .collect();
    Matrix::from_vec(side, side, values).expect("square matrix")
}

fn real_matrix(side: usize, seed: f32) -> Matrix {
    let values = (0..side * side).map(|i| i as f32 * 0.5 + seed).collect();
    Matrix::from_vec(side, side, values).expect("square matrix")
}

fn boolean_vector(len: usize, stride: usize) -> Vector {
    let values = (0..len).map(|i| u8::from(i % stride == 0)).collect::<Vec<u8>>();
    Vector::from_vec(values)
}

fn bench_integer_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("integer_matrix");

    for side in SIDES {
        let lhs = integer_matrix(side, 3);
        let rhs = integer_matrix(side, 11);
        let mut out = Matrix::new(lhs.kind(), side, side);

        group.throughput(Throughput::Elements((side * side) as u64));

        for op in BinaryOp::ALL {
            group.bench_with_input(BenchmarkId::new(op.name(), side), &side, |b, _| {
                b.iter(|| {
                    matrix_binary::<i32>(op, black_box(&mut out), black_box(&lhs), black_box(&rhs))
                        .expect("same shape")
                })
            });
        }

        group.bench_with_input(BenchmarkId::new("negate", side), &side, |b, _| {
            b.iter(|| {
                matrix_negate::<i32>(black_box(&mut out), black_box(&lhs)).expect("same shape")
            })
        });
    }
    group.finish();
}

fn bench_real_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("real_matrix");

    for side in SIDES {
        let lhs = real_matrix(side, 1.25);
        let rhs = real_matrix(side, 2.5);
        let mut out = Matrix::new(lhs.kind(), side, side);

        group.throughput(Throughput::Elements((side * side) as u64));

        for op in [BinaryOp::Add, BinaryOp::Multiply, BinaryOp::Power] {
            group.bench_with_input(BenchmarkId::new(op.name(), side), &side, |b, _| {
                b.iter(|| {
                    matrix_binary::<f32>(op, black_box(&mut out), black_box(&lhs), black_box(&rhs))
                        .expect("same shape")
                })
            });
        }
    }
    group.finish();
}

fn bench_boolean_vector(c: &mut Criterion) {
    let mut group = c.benchmark_group("boolean_vector");

    for len in [1_024usize, 65_536, 1_048_576] {
        let lhs = boolean_vector(len, 2);
        let rhs = boolean_vector(len, 3);
        let mut out = Vector::new(lhs.kind(), len);

        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("not", len), &len, |b, _| {
            b.iter(|| vector_not(black_box(&mut out), black_box(&lhs)).expect("boolean"))
        });
        group.bench_with_input(BenchmarkId::new("xor", len), &len, |b, _| {
            b.iter(|| {
                vector_logic(LogicOp::Xor, black_box(&mut out), black_box(&lhs), black_box(&rhs))
                    .expect("boolean")
            })
        });
        group.bench_with_input(BenchmarkId::new("equals", len), &len, |b, _| {
            b.iter(|| vector_equals(black_box(&lhs), black_box(&lhs)).expect("boolean"))
        });
    }
    group.finish();
}

fn bench_step_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("interval_step_range");

    for upper in [1_000i32, 100_000, 10_000_000] {
        let interval = Interval::new(0, upper);
        group.bench_with_input(BenchmarkId::new("step_range", upper), &upper, |b, _| {
            b.iter(|| black_box(&interval).step_range(black_box(7)).expect("valid step"))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_integer_matrix,
    bench_real_matrix,
    bench_boolean_vector,
    bench_step_range
);
criterion_main!(benches);
