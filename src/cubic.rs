// Copyright 2025 the analytic-roots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Roots of cubic equations.

use arrayvec::ArrayVec;

use crate::power::{cube, square};
use crate::quadratic::quadratic_real_roots;
use crate::real::sort_ascending;
use crate::{Complex, Real, RootPair};

/// The root structure of a cubic with real coefficients.
#[derive(Clone, Copy, Debug)]
enum CubicSolution<T> {
    /// Three real roots, possibly repeated.
    ThreeReal([T; 3]),
    /// One real root and a complex conjugate pair.
    OneReal(T, RootPair<T>),
}

impl<T: Real> CubicSolution<T> {
    fn roots(self) -> [Complex<T>; 3] {
        match self {
            Self::ThreeReal(x) => x.map(Complex::from_real),
            Self::OneReal(x1, pair) => [Complex::from_real(x1), pair.r1(), pair.r2()],
        }
    }

    fn real_roots(self) -> ArrayVec<T, 3> {
        match self {
            Self::ThreeReal(x) => ArrayVec::from(x),
            Self::OneReal(x1, _) => {
                let mut roots = ArrayVec::new();
                roots.push(x1);
                roots
            }
        }
    }
}

/// `x³ + a[2] x² + a[1] x + a[0]`.
#[derive(Clone, Copy, Debug)]
struct MonicCubic<T> {
    a: [T; 3],
}

impl<T: Real> MonicCubic<T> {
    /// `q` and `r` of the depressed cubic; `r² + q³` is the discriminant
    /// whose sign decides the root structure.
    fn depressed(&self) -> (T, T) {
        let [a0, a1, a2] = self.a;
        let _3 = T::from(3_i16);
        let q = a1 / _3 - square(a2) / T::from(9_i16);
        let r = (a1 * a2 - _3 * a0) / T::from(6_i16) - cube(a2) / T::from(27_i16);
        (q, r)
    }

    fn solve(&self) -> CubicSolution<T> {
        let (q, r) = self.depressed();
        let _2 = T::from(2_i16);
        let _3 = T::from(3_i16);
        let shift = self.a[2] / _3;
        if square(r) + cube(q) <= T::ZERO {
            // Trigonometric form. Here q <= 0.
            let theta = if q != T::ZERO {
                // Rounding near a repeated root can push the ratio just
                // outside of [-1, 1].
                let ratio = r / cube(-q).sqrt();
                let ratio = if ratio > T::ONE {
                    T::ONE
                } else if ratio < -T::ONE {
                    -T::ONE
                } else {
                    ratio
                };
                ratio.acos()
            } else {
                T::ZERO
            };
            let scale = _2 * (-q).sqrt();
            let phi = theta / _3;
            let third_turn = _2 * T::PI / _3;
            CubicSolution::ThreeReal([
                scale * phi.cos() - shift,
                scale * (phi - third_turn).cos() - shift,
                scale * (phi + third_turn).cos() - shift,
            ])
        } else {
            // Cardano, choosing the sign that avoids cancellation.
            let big_a = (r.abs() + (square(r) + cube(q)).sqrt()).cbrt();
            let t1 = if r >= T::ZERO {
                big_a - q / big_a
            } else {
                q / big_a - big_a
            };
            let y = _3.sqrt() / _2 * (big_a + q / big_a);
            CubicSolution::OneReal(t1 - shift, RootPair::Conjugate(-t1 / _2 - shift, y))
        }
    }
}

/// Find all three roots of the monic cubic `x³ + a[2] x² + a[1] x + a[0]`.
///
/// With three real roots they are returned in the order produced by the
/// trigonometric method (for distinct roots, largest first, then the middle
/// one, then the smallest). Otherwise the real root comes first, followed by
/// the conjugate pair with the positive imaginary part first.
///
/// Near a repeated root the choice between the two forms depends on the
/// exact sign of a discriminant and is subject to rounding; expect reduced
/// precision there.
///
/// # Examples
///
/// ```
/// use analytic_roots::monic_cubic_roots;
///
/// // (x - 3)(x - 2)(x - 1)
/// let roots = monic_cubic_roots([-6.0_f64, 11.0, -6.0]);
/// assert!((roots[0].re - 3.0).abs() < 1e-12);
/// assert!((roots[1].re - 2.0).abs() < 1e-12);
/// assert!((roots[2].re - 1.0).abs() < 1e-12);
/// ```
pub fn monic_cubic_roots<T: Real>(a: [T; 3]) -> [Complex<T>; 3] {
    MonicCubic { a }.solve().roots()
}

/// Find all three roots of `c[3] x³ + c[2] x² + c[1] x + c[0]`.
///
/// The leading coefficient `c[3]` must be nonzero.
pub fn cubic_roots<T: Real>(c: [T; 4]) -> [Complex<T>; 3] {
    monic_cubic_roots([c[0] / c[3], c[1] / c[3], c[2] / c[3]])
}

/// Find the real roots of the monic cubic `x³ + a[2] x² + a[1] x + a[0]`.
///
/// There are either one or three of them, in the order of
/// [`monic_cubic_roots`].
pub fn monic_cubic_real_roots<T: Real>(a: [T; 3]) -> ArrayVec<T, 3> {
    MonicCubic { a }.solve().real_roots()
}

/// Find the real roots of `c[3] x³ + c[2] x² + c[1] x + c[0]`.
///
/// If `c[3]` is exactly zero, this is [`quadratic_real_roots`] of the
/// remaining coefficients, with its result and count passed on as is.
pub fn cubic_real_roots<T: Real>(c: [T; 4]) -> ArrayVec<T, 3> {
    if c[3] == T::ZERO {
        return quadratic_real_roots([c[0], c[1], c[2]]).into_iter().collect();
    }
    monic_cubic_real_roots([c[0] / c[3], c[1] / c[3], c[2] / c[3]])
}

/// Like [`monic_cubic_real_roots`], with the roots in ascending order.
pub fn monic_cubic_real_roots_sorted<T: Real>(a: [T; 3]) -> ArrayVec<T, 3> {
    let mut roots = monic_cubic_real_roots(a);
    sort_ascending(&mut roots);
    roots
}

/// Like [`cubic_real_roots`], with the roots in ascending order.
pub fn cubic_real_roots_sorted<T: Real>(c: [T; 4]) -> ArrayVec<T, 3> {
    let mut roots = cubic_real_roots(c);
    sort_ascending(&mut roots);
    roots
}
