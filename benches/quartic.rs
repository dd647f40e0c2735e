// Copyright 2025 the analytic-roots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks of the quartic equation solver.

#![expect(missing_docs, reason = "criterion emits undocumented functions")]

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use analytic_roots::{quartic_real_roots_sorted, quartic_roots};

fn bench_quartic(cc: &mut Criterion) {
    let (x1, x2, x3, x4) = (1.0_f64, 2.0, 3.0, 4.0);
    let c3 = -(x1 + x2 + x3 + x4);
    let c2 = x1 * (x2 + x3) + x2 * (x3 + x4) + x4 * (x1 + x3);
    let c1 = -x1 * x2 * (x3 + x4) - x3 * x4 * (x1 + x2);
    let c0 = x1 * x2 * x3 * x4;

    cc.bench_function("quartic roots", |bb| {
        bb.iter(|| quartic_roots([black_box(c0), black_box(c1), black_box(c2), black_box(c3), 1.0]));
    });
    cc.bench_function("quartic real roots sorted", |bb| {
        bb.iter(|| {
            quartic_real_roots_sorted([black_box(c0), black_box(c1), black_box(c2), black_box(c3), 1.0])
        });
    });
}

criterion_group!(benches, bench_quartic);
criterion_main!(benches);
