// Copyright 2025 the analytic-roots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The floating point abstraction the solvers are generic over.

use core::cmp::Ordering;
use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};

use arrayvec::ArrayVec;

/// Defines the [`Real`] trait, choosing between libstd or libm implementations of float methods.
macro_rules! define_real {
    ($(
        $(#[$doc:meta])*
        fn $name:ident(self) -> Self => $lname:ident/$lfname:ident;
    )+) => {
        /// A real number type the solvers can be instantiated with.
        ///
        /// This is implemented for `f32` and `f64`. The transcendental functions
        /// come from the standard library when the `std` feature is enabled, and
        /// from [`libm`] otherwise.
        ///
        /// Small integer constants are obtained through the `From<i16>` bound.
        ///
        /// [`libm`]: https://docs.rs/libm
        pub trait Real:
            Copy
            + PartialOrd
            + Debug
            + From<i16>
            + Add<Output = Self>
            + Sub<Output = Self>
            + Mul<Output = Self>
            + Div<Output = Self>
            + Neg<Output = Self>
        {
            /// The additive identity.
            const ZERO: Self;
            /// The multiplicative identity.
            const ONE: Self;
            /// Archimedes' constant (π).
            const PI: Self;

            $($(#[$doc])* #[must_use] fn $name(self) -> Self;)+
        }

        impl Real for f32 {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const PI: Self = core::f32::consts::PI;

            $(#[inline]
            fn $name(self) -> Self {
                #[cfg(feature = "std")]
                {
                    f32::$name(self)
                }
                #[cfg(not(feature = "std"))]
                {
                    libm::$lfname(self)
                }
            })+
        }

        impl Real for f64 {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const PI: Self = core::f64::consts::PI;

            $(#[inline]
            fn $name(self) -> Self {
                #[cfg(feature = "std")]
                {
                    f64::$name(self)
                }
                #[cfg(not(feature = "std"))]
                {
                    libm::$lname(self)
                }
            })+
        }
    }
}

define_real! {
    /// Absolute value.
    fn abs(self) -> Self => fabs/fabsf;
    /// Arccosine, in radians. `NaN` outside of `[-1, 1]`.
    fn acos(self) -> Self => acos/acosf;
    /// Cube root. Defined for negative values.
    fn cbrt(self) -> Self => cbrt/cbrtf;
    /// Cosine of an angle in radians.
    fn cos(self) -> Self => cos/cosf;
    /// Square root. `NaN` for negative values.
    fn sqrt(self) -> Self => sqrt/sqrtf;
}

/// Sorts the valid roots ascending. `NaN`s compare equal to everything.
pub(crate) fn sort_ascending<T: Real, const N: usize>(roots: &mut ArrayVec<T, N>) {
    roots.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn funcs<T: Real>(x: T) -> [T; 5] {
        [x.abs(), x.acos(), x.cbrt(), x.cos(), x.sqrt()]
    }

    #[test]
    fn test_real_f64() {
        let [abs, acos, cbrt, cos, sqrt] = funcs(-0.5_f64);
        assert_eq!(abs, 0.5);
        assert!((acos - 2.0 * core::f64::consts::FRAC_PI_3).abs() < 1e-15);
        assert!((cbrt + 0.5_f64.cbrt()).abs() < 1e-15);
        assert!((cos - 0.5_f64.cos()).abs() < 1e-15);
        assert!(sqrt.is_nan());
        assert!((<f64 as From<i16>>::from(27).cbrt() - 3.0).abs() < 1e-15);
    }

    #[test]
    fn test_real_f32() {
        assert_eq!(Real::sqrt(16.0_f32), 4.0);
        assert_eq!(Real::abs(-2.5_f32), 2.5);
        assert!((Real::acos(-1.0_f32) - core::f32::consts::PI).abs() < 1e-6);
        assert_eq!(<f32 as Real>::ONE + <f32 as Real>::ZERO, 1.0);
    }

    #[test]
    fn test_sort_ascending() {
        let mut roots: ArrayVec<f64, 4> = ArrayVec::from([3.0, -1.0, 2.0, 0.5]);
        sort_ascending(&mut roots);
        assert_eq!(roots.as_slice(), &[-1.0, 0.5, 2.0, 3.0]);

        let mut partial: ArrayVec<f64, 4> = ArrayVec::new();
        partial.push(7.0);
        partial.push(-7.0);
        sort_ascending(&mut partial);
        assert_eq!(partial.as_slice(), &[-7.0, 7.0]);
    }
}
