// Copyright 2025 the analytic-roots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small integral powers by repeated multiplication.

use crate::Real;

/// Raise `x` to the `N`th power by multiplying it with itself.
///
/// This is meant for the tiny exponents that show up in the closed-form
/// solvers, where a general `powi` would be both slower and less exact.
/// `ipow::<_, 0>` is one.
///
/// # Examples
///
/// ```
/// use analytic_roots::ipow;
///
/// assert_eq!(ipow::<f64, 4>(3.0), 81.0);
/// ```
#[inline]
pub fn ipow<T: Real, const N: usize>(x: T) -> T {
    let mut acc = T::ONE;
    for _ in 0..N {
        acc = acc * x;
    }
    acc
}

/// `x²`.
#[inline]
pub fn square<T: Real>(x: T) -> T {
    ipow::<T, 2>(x)
}

/// `x³`.
#[inline]
pub fn cube<T: Real>(x: T) -> T {
    ipow::<T, 3>(x)
}
