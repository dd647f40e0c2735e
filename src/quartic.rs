// Copyright 2025 the analytic-roots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Roots of quartic equations, by Ferrari's method.

use arrayvec::ArrayVec;

use crate::cubic::{cubic_real_roots, monic_cubic_roots};
use crate::power::{cube, ipow, square};
use crate::real::sort_ascending;
use crate::{Complex, Real, RootPair};

/// A quartic solver with a configurable resolvent clamp.
///
/// Ferrari's method takes square roots of the resolvent cubic's roots, which
/// should be non-negative wherever the factorization is valid. Rounding can
/// leave them slightly negative, which would turn real results into `NaN`.
/// The solver therefore makes two adjustments, both governed by
/// `clamp_threshold`:
///
/// - The largest resolvent root is replaced with zero when it is below the
///   threshold.
/// - When the other two are real and their *product* is below the negated
///   threshold, they straddle zero and the one of smaller magnitude is
///   replaced with zero.
///
/// The default threshold is exactly zero, which is what the free functions
/// in this module use.
///
/// # Examples
///
/// ```
/// use analytic_roots::{monic_quartic_real_roots, QuarticSolver};
///
/// // x⁴ - 1
/// let c = [-1.0_f64, 0.0, 0.0, 0.0];
/// let solver = QuarticSolver::default();
/// assert_eq!(solver.real_roots(c), monic_quartic_real_roots(c));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuarticSolver<T> {
    /// Bound for the largest resolvent root, and for the negated product of
    /// the other two, below which they are clamped.
    pub clamp_threshold: T,
}

impl<T: Real> Default for QuarticSolver<T> {
    fn default() -> Self {
        Self::new(T::ZERO)
    }
}

impl<T: Real> QuarticSolver<T> {
    /// Create a solver with the given clamp threshold.
    #[inline]
    pub const fn new(clamp_threshold: T) -> Self {
        Self { clamp_threshold }
    }

    /// Find all four roots of the monic quartic
    /// `x⁴ + c[3] x³ + c[2] x² + c[1] x + c[0]`.
    ///
    /// The roots come as two pairs, each either real or a conjugate pair.
    /// The order follows the derivation and is not sorted; the pairs can
    /// come out in a different order than the factors they were built from.
    pub fn roots(&self, c: [T; 4]) -> [Complex<T>; 4] {
        let (p1, p2) = self.factor(c);
        let [r1, r2] = p1.roots();
        let [r3, r4] = p2.roots();
        [r1, r2, r3, r4]
    }

    /// Find the real roots of the monic quartic
    /// `x⁴ + c[3] x³ + c[2] x² + c[1] x + c[0]`.
    ///
    /// There are zero, two or four of them: each real pair of
    /// [`QuarticSolver::roots`], in the same order.
    pub fn real_roots(&self, c: [T; 4]) -> ArrayVec<T, 4> {
        let (p1, p2) = self.factor(c);
        let mut roots = ArrayVec::new();
        roots.extend(p1.real_roots());
        roots.extend(p2.real_roots());
        roots
    }

    /// Like [`QuarticSolver::real_roots`], with the roots in ascending order.
    pub fn real_roots_sorted(&self, c: [T; 4]) -> ArrayVec<T, 4> {
        let mut roots = self.real_roots(c);
        sort_ascending(&mut roots);
        roots
    }

    /// Split the quartic into its two quadratic factors and solve each.
    fn factor(&self, c: [T; 4]) -> (RootPair<T>, RootPair<T>) {
        let [a0, a1, a2, a3] = c;
        let _2 = T::from(2_i16);
        let _3 = T::from(3_i16);
        let _4 = T::from(4_i16);

        // Depress with x = y - shift.
        let shift = a3 / _4;
        let b0 = a0 - a1 * shift + a2 * square(shift) - _3 * ipow::<T, 4>(shift);
        let b1 = a1 - _2 * a2 * shift + T::from(8_i16) * cube(shift);
        let b2 = a2 - T::from(6_i16) * square(shift);

        let resolvent = monic_cubic_roots([
            -square(b1) / T::from(64_i16),
            (square(b2) - _4 * b0) / T::from(16_i16),
            b2 / _2,
        ]);
        let (y1, y2, y3) = self.clamp_resolvent(resolvent);

        let sigma = if b1 > T::ZERO { T::ONE } else { -T::ONE };
        let k = _2 * sigma * (y2 * y3 + square(resolvent[1].im)).sqrt();
        let sqrt_y1 = y1.sqrt();
        (
            pair(sqrt_y1 - shift, y2 + y3 - k),
            pair(-sqrt_y1 - shift, y2 + y3 + k),
        )
    }

    /// Real parts of the resolvent roots, with rounding noise around zero
    /// removed.
    fn clamp_resolvent(&self, z: [Complex<T>; 3]) -> (T, T, T) {
        let mut y1 = z[0].re;
        if y1 < self.clamp_threshold {
            y1 = T::ZERO;
        }
        let (mut y2, mut y3) = (z[1].re, z[2].re);
        if y2 * y3 < -self.clamp_threshold {
            // They straddle zero; drop the one closer to it.
            if y2.abs() > y3.abs() {
                y3 = T::ZERO;
            } else {
                y2 = T::ZERO;
            }
        }
        (y1, y2, y3)
    }
}

/// The roots `center ± √radicand`.
fn pair<T: Real>(center: T, radicand: T) -> RootPair<T> {
    if radicand >= T::ZERO {
        let sq = radicand.sqrt();
        RootPair::Real(center + sq, center - sq)
    } else {
        RootPair::Conjugate(center, (-radicand).sqrt())
    }
}

/// Find all four roots of the monic quartic
/// `x⁴ + c[3] x³ + c[2] x² + c[1] x + c[0]`.
///
/// See [`QuarticSolver::roots`] for the ordering.
///
/// # Examples
///
/// ```
/// use analytic_roots::{monic_quartic_coefficients, monic_quartic_roots, RootPair};
///
/// let c = monic_quartic_coefficients(RootPair::Real(10.0_f64, 2.0), RootPair::Conjugate(3.0, 2.0));
/// let roots = monic_quartic_roots(c);
/// assert!((roots[0].re - 10.0).abs() < 1e-9);
/// assert!((roots[2].im - 2.0).abs() < 1e-9);
/// ```
pub fn monic_quartic_roots<T: Real>(c: [T; 4]) -> [Complex<T>; 4] {
    QuarticSolver::default().roots(c)
}

/// Find all four roots of `c[4] x⁴ + c[3] x³ + c[2] x² + c[1] x + c[0]`.
///
/// The leading coefficient `c[4]` must be nonzero.
pub fn quartic_roots<T: Real>(c: [T; 5]) -> [Complex<T>; 4] {
    monic_quartic_roots([c[0] / c[4], c[1] / c[4], c[2] / c[4], c[3] / c[4]])
}

/// Find the real roots of the monic quartic
/// `x⁴ + c[3] x³ + c[2] x² + c[1] x + c[0]`.
pub fn monic_quartic_real_roots<T: Real>(c: [T; 4]) -> ArrayVec<T, 4> {
    QuarticSolver::default().real_roots(c)
}

/// Find the real roots of `c[4] x⁴ + c[3] x³ + c[2] x² + c[1] x + c[0]`.
///
/// If `c[4]` is exactly zero, this is [`cubic_real_roots`] of the remaining
/// coefficients, with its result and count passed on as is.
pub fn quartic_real_roots<T: Real>(c: [T; 5]) -> ArrayVec<T, 4> {
    if c[4] == T::ZERO {
        return cubic_real_roots([c[0], c[1], c[2], c[3]]).into_iter().collect();
    }
    monic_quartic_real_roots([c[0] / c[4], c[1] / c[4], c[2] / c[4], c[3] / c[4]])
}

/// Like [`monic_quartic_real_roots`], with the roots in ascending order.
pub fn monic_quartic_real_roots_sorted<T: Real>(c: [T; 4]) -> ArrayVec<T, 4> {
    QuarticSolver::default().real_roots_sorted(c)
}

/// Like [`quartic_real_roots`], with the roots in ascending order.
pub fn quartic_real_roots_sorted<T: Real>(c: [T; 5]) -> ArrayVec<T, 4> {
    let mut roots = quartic_real_roots(c);
    sort_ascending(&mut roots);
    roots
}
