// Copyright 2025 the analytic-roots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Roots of quadratic equations.

use arrayvec::ArrayVec;

use crate::power::square;
use crate::real::sort_ascending;
use crate::{Complex, Real, RootPair};

/// `x² + c[1] x + c[0]`.
#[derive(Clone, Copy, Debug)]
struct MonicQuadratic<T> {
    c: [T; 2],
}

impl<T: Real> MonicQuadratic<T> {
    fn discriminant(&self) -> T {
        let [c0, c1] = self.c;
        square(c1) - T::from(4_i16) * c0
    }

    /// A real pair when the discriminant is non-negative, a conjugate pair
    /// otherwise. The real pair is ordered `+√D` first.
    fn solve(&self) -> RootPair<T> {
        let c1 = self.c[1];
        let _2 = T::from(2_i16);
        let d = self.discriminant();
        if d >= T::ZERO {
            let sq = d.sqrt();
            RootPair::Real((-c1 + sq) / _2, (-c1 - sq) / _2)
        } else {
            RootPair::Conjugate(-c1 / _2, (-d).sqrt() / _2)
        }
    }
}

/// Find both roots of the monic quadratic `x² + c[1] x + c[0]`.
///
/// Real roots come back with a zero imaginary part, larger root first. A
/// complex pair comes back with the positive imaginary part first.
pub fn monic_quadratic_roots<T: Real>(c: [T; 2]) -> [Complex<T>; 2] {
    MonicQuadratic { c }.solve().roots()
}

/// Find both roots of `c[2] x² + c[1] x + c[0]`.
///
/// The leading coefficient `c[2]` must be nonzero.
pub fn quadratic_roots<T: Real>(c: [T; 3]) -> [Complex<T>; 2] {
    monic_quadratic_roots([c[0] / c[2], c[1] / c[2]])
}

/// Find the real roots of the monic quadratic `x² + c[1] x + c[0]`.
///
/// There are either two (possibly equal) real roots or none.
pub fn monic_quadratic_real_roots<T: Real>(c: [T; 2]) -> ArrayVec<T, 2> {
    MonicQuadratic { c }.solve().real_roots()
}

/// Find the real roots of `c[2] x² + c[1] x + c[0]`.
///
/// If `c[2]` is exactly zero the equation is solved as the linear
/// `c[1] x + c[0] = 0`. Its root is reported as the *second* of two entries,
/// after a placeholder `0`: `[0, -c[0] / c[1]]`. When `c[1]` is zero as well
/// there are no roots. The cubic and quartic fallbacks pass this shape on
/// unchanged.
///
/// # Examples
///
/// ```
/// use analytic_roots::quadratic_real_roots;
///
/// assert_eq!(quadratic_real_roots([6.0, -5.0, 1.0]).as_slice(), &[3.0, 2.0]);
/// assert_eq!(quadratic_real_roots([4.0, 2.0, 0.0]).as_slice(), &[0.0, -2.0]);
/// assert!(quadratic_real_roots([4.0, 0.0, 0.0]).is_empty());
/// ```
pub fn quadratic_real_roots<T: Real>(c: [T; 3]) -> ArrayVec<T, 2> {
    if c[2] == T::ZERO {
        if c[1] == T::ZERO {
            return ArrayVec::new();
        }
        return ArrayVec::from([T::ZERO, -c[0] / c[1]]);
    }
    monic_quadratic_real_roots([c[0] / c[2], c[1] / c[2]])
}

/// Like [`monic_quadratic_real_roots`], with the roots in ascending order.
pub fn monic_quadratic_real_roots_sorted<T: Real>(c: [T; 2]) -> ArrayVec<T, 2> {
    let mut roots = monic_quadratic_real_roots(c);
    sort_ascending(&mut roots);
    roots
}

/// Like [`quadratic_real_roots`], with the roots in ascending order.
pub fn quadratic_real_roots_sorted<T: Real>(c: [T; 3]) -> ArrayVec<T, 2> {
    let mut roots = quadratic_real_roots(c);
    sort_ascending(&mut roots);
    roots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monic_quadratic_roots() {
        // (x - 2)(x - 1)
        let real = monic_quadratic_roots([2.0, -3.0]);
        assert_eq!(real, [Complex::new(2.0, 0.0), Complex::new(1.0, 0.0)]);
        // (x + 1)² + 4
        let complex = monic_quadratic_roots([5.0, 2.0]);
        assert_eq!(complex, [Complex::new(-1.0, 2.0), Complex::new(-1.0, -2.0)]);
    }

    #[test]
    fn test_double_root() {
        let real = monic_quadratic_real_roots([1.0, -2.0]);
        assert_eq!(real.as_slice(), &[1.0, 1.0]);
        let all = monic_quadratic_roots([1.0, -2.0]);
        assert!(all.iter().all(|z| z.is_real()));
    }

    #[test]
    fn test_quadratic_roots_normalizes() {
        let scaled = quadratic_roots([15.0, 6.0, 3.0]);
        assert_eq!(scaled, [Complex::new(-1.0, 2.0), Complex::new(-1.0, -2.0)]);
        let single = quadratic_roots([-2.0_f32, 0.0, 2.0]);
        assert_eq!(single, [Complex::new(1.0, 0.0), Complex::new(-1.0, 0.0)]);
    }

    #[test]
    fn test_real_roots() {
        assert_eq!(
            monic_quadratic_real_roots([-5.0_f64, 0.0]).as_slice(),
            &[5.0_f64.sqrt(), -(5.0_f64.sqrt())]
        );
        assert!(monic_quadratic_real_roots([5.0, 0.0]).is_empty());
        assert_eq!(quadratic_real_roots([12.0, -10.0, 2.0]).as_slice(), &[3.0, 2.0]);
        assert!(quadratic_real_roots([1.0, 1.0, 1.0]).is_empty());
    }

    #[test]
    fn test_linear_fallback() {
        let roots = quadratic_real_roots([5.0, 1.0, 0.0]);
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[0], 0.0);
        assert_eq!(roots[1], -5.0);
        assert!(quadratic_real_roots([5.0, 0.0, 0.0]).is_empty());
        assert!(quadratic_real_roots([0.0, 0.0, 0.0]).is_empty());
    }

    #[test]
    fn test_sorted() {
        assert_eq!(monic_quadratic_real_roots_sorted([2.0, -3.0]).as_slice(), &[1.0, 2.0]);
        assert_eq!(quadratic_real_roots_sorted([6.0, -5.0, 1.0]).as_slice(), &[2.0, 3.0]);
        assert_eq!(quadratic_real_roots_sorted([4.0, 2.0, 0.0]).as_slice(), &[-2.0, 0.0]);
        assert!(quadratic_real_roots_sorted([1.0, 0.0, 1.0]).is_empty());
    }

    #[test]
    fn test_real_and_complex_agree() {
        for c in [[2.0, -3.0], [5.0, 2.0], [1.0, -2.0], [-7.5, 0.25], [0.0, 0.0]] {
            let n_real = monic_quadratic_roots(c).iter().filter(|z| z.is_real()).count();
            assert_eq!(n_real, monic_quadratic_real_roots(c).len());
        }
    }
}
