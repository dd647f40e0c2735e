// Copyright 2025 the analytic-roots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks of the cubic equation solver.

#![expect(missing_docs, reason = "criterion emits undocumented functions")]

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use analytic_roots::{cubic_real_roots, cubic_roots};

fn bench_cubic(cc: &mut Criterion) {
    // Three real roots, taking the trigonometric branch.
    let (x1, x2, x3) = (1.0_f64, 2.0, 3.0);
    let c2 = -(x1 + x2 + x3);
    let c1 = x1 * x2 + x1 * x3 + x2 * x3;
    let c0 = -x1 * x2 * x3;

    cc.bench_function("cubic roots", |bb| {
        bb.iter(|| cubic_roots([black_box(c0), black_box(c1), black_box(c2), 1.0]));
    });
    cc.bench_function("cubic real roots", |bb| {
        bb.iter(|| cubic_real_roots([black_box(c0), black_box(c1), black_box(c2), 1.0]));
    });
    // x³ - 5, one real root.
    cc.bench_function("cubic roots, one real", |bb| {
        bb.iter(|| cubic_roots([black_box(-5.0), black_box(0.0), black_box(0.0), 1.0]));
    });
}

criterion_group!(benches, bench_cubic);
criterion_main!(benches);
