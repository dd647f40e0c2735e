// Copyright 2025 the analytic-roots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Intersect the parabola `y = x²` with a circle.
//!
//! Substituting the parabola into `(x - cx)² + (y - cy)² = r²` gives the
//! quartic `x⁴ + (1 - 2 cy) x² - 2 cx x + cx² + cy² - r² = 0`, whose real
//! roots are the x coordinates of the intersections.

use std::io::{self, Write};

use analytic_roots::quartic_real_roots_sorted;

fn main() -> io::Result<()> {
    let mut out = io::stdout().lock();
    let circles = [
        (0.0_f64, 1.0, 1.0),
        (0.5, 2.0, 1.5),
        (3.0, 0.0, 0.5),
        (0.0, 0.5, 0.5),
    ];
    for (cx, cy, radius) in circles {
        let coeffs = [
            cx * cx + cy * cy - radius * radius,
            -2.0 * cx,
            1.0 - 2.0 * cy,
            0.0,
            1.0,
        ];
        let xs = quartic_real_roots_sorted(coeffs);
        writeln!(
            out,
            "circle at ({cx}, {cy}) with radius {radius}: {} intersections",
            xs.len()
        )?;
        for x in xs {
            writeln!(out, "  ({x:.6}, {:.6})", x * x)?;
        }
    }
    Ok(())
}
