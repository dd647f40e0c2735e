// Copyright 2025 the analytic-roots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks of the quadratic equation solver.

#![expect(missing_docs, reason = "criterion emits undocumented functions")]

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use analytic_roots::{quadratic_real_roots, quadratic_roots};

fn bench_quadratic(cc: &mut Criterion) {
    let (x1, x2) = (1.0_f64, 2.0);
    let c1 = -(x1 + x2);
    let c0 = x1 * x2;

    cc.bench_function("quadratic roots", |bb| {
        bb.iter(|| quadratic_roots([black_box(c0), black_box(c1), 1.0]));
    });
    cc.bench_function("quadratic real roots", |bb| {
        bb.iter(|| quadratic_real_roots([black_box(c0), black_box(c1), 1.0]));
    });
}

criterion_group!(benches, bench_quadratic);
criterion_main!(benches);
