// Copyright 2025 the analytic-roots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The two roots of a real quadratic factor.

use arrayvec::ArrayVec;

use crate::power::square;
use crate::{Complex, Real};

/// The two roots of a monic quadratic factor with real coefficients.
///
/// Such a pair is either two real numbers or a complex conjugate pair. Both
/// variants expose the same accessors, so code that only needs the
/// coordinates of each root does not need to care which one it has.
///
/// Every solver in this crate reduces to pairs like this: the quadratic
/// solver produces one, the cubic one real root plus a pair, and the quartic
/// two pairs.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[expect(
    clippy::exhaustive_enums,
    reason = "a quadratic factor has exactly these two root shapes"
)]
pub enum RootPair<T> {
    /// Two real roots, `x1` and `x2`.
    Real(T, T),
    /// The conjugate pair `x ± y·i`, given as `(x, y)`.
    Conjugate(T, T),
}

impl<T: Real> RootPair<T> {
    /// Real part of the first root.
    #[inline]
    pub fn x1(&self) -> T {
        match *self {
            Self::Real(x1, _) | Self::Conjugate(x1, _) => x1,
        }
    }

    /// Real part of the second root.
    #[inline]
    pub fn x2(&self) -> T {
        match *self {
            Self::Real(_, x2) => x2,
            Self::Conjugate(x, _) => x,
        }
    }

    /// Imaginary part of the first root.
    #[inline]
    pub fn y1(&self) -> T {
        match *self {
            Self::Real(..) => T::ZERO,
            Self::Conjugate(_, y) => y,
        }
    }

    /// Imaginary part of the second root.
    #[inline]
    pub fn y2(&self) -> T {
        match *self {
            Self::Real(..) => T::ZERO,
            Self::Conjugate(_, y) => -y,
        }
    }

    /// The first root.
    #[inline]
    pub fn r1(&self) -> Complex<T> {
        Complex::new(self.x1(), self.y1())
    }

    /// The second root.
    #[inline]
    pub fn r2(&self) -> Complex<T> {
        Complex::new(self.x2(), self.y2())
    }

    /// Both roots, first then second.
    #[inline]
    pub fn roots(&self) -> [Complex<T>; 2] {
        [self.r1(), self.r2()]
    }

    /// Are both roots real?
    #[inline]
    pub fn is_real(&self) -> bool {
        matches!(self, Self::Real(..))
    }

    /// The real roots of this pair: both for [`RootPair::Real`], none otherwise.
    pub fn real_roots(&self) -> ArrayVec<T, 2> {
        match *self {
            Self::Real(x1, x2) => ArrayVec::from([x1, x2]),
            Self::Conjugate(..) => ArrayVec::new(),
        }
    }

    /// Coefficients `[c0, c1]` of the monic quadratic `x² + c1 x + c0` with
    /// these roots.
    pub fn monic_coefficients(&self) -> [T; 2] {
        let c1 = -(self.x1() + self.x2());
        let c0 = match *self {
            Self::Real(x1, x2) => x1 * x2,
            Self::Conjugate(x, y) => square(x) + square(y),
        };
        [c0, c1]
    }
}

/// Coefficients `[A0, A1, A2, A3]` of the monic quartic
/// `x⁴ + A3 x³ + A2 x² + A1 x + A0` whose roots are the two given pairs.
///
/// This multiplies out the two quadratic factors, which is how known root
/// structures are turned into test inputs for the quartic solver.
///
/// # Examples
///
/// ```
/// use analytic_roots::{monic_quartic_coefficients, RootPair};
///
/// let c = monic_quartic_coefficients(RootPair::Real(10.0_f64, 2.0), RootPair::Conjugate(3.0, 2.0));
/// assert_eq!(c, [260.0, -276.0, 105.0, -18.0]);
/// ```
pub fn monic_quartic_coefficients<T: Real>(p1: RootPair<T>, p2: RootPair<T>) -> [T; 4] {
    let [u0, u1] = p1.monic_coefficients();
    let [v0, v1] = p2.monic_coefficients();
    // (x² + u1 x + u0)(x² + v1 x + v0)
    [u0 * v0, u1 * v0 + v1 * u0, u0 + v0 + u1 * v1, u1 + v1]
}
