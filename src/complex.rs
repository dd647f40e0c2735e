// Copyright 2025 the analytic-roots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal complex number.

use core::ops::{Add, Mul, Neg, Sub};

use crate::Real;

/// A complex number, stored as its real and imaginary parts.
///
/// This is deliberately small: the solvers only construct roots and read
/// their parts back. The arithmetic operators are there so that callers can
/// evaluate a polynomial at a returned root.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Complex<T> {
    /// The real part.
    pub re: T,
    /// The imaginary part.
    pub im: T,
}

impl<T: Real> Complex<T> {
    /// The complex number `0 + 0i`.
    pub const ZERO: Self = Self {
        re: T::ZERO,
        im: T::ZERO,
    };

    /// Create a new complex number from its parts.
    #[inline]
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }

    /// Create a complex number with a zero imaginary part.
    #[inline]
    pub const fn from_real(re: T) -> Self {
        Self { re, im: T::ZERO }
    }

    /// The complex conjugate.
    #[inline]
    #[must_use]
    pub fn conj(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// The squared magnitude, `re² + im²`.
    #[inline]
    pub fn norm_sqr(self) -> T {
        self.re * self.re + self.im * self.im
    }

    /// The magnitude.
    #[inline]
    pub fn norm(self) -> T {
        self.norm_sqr().sqrt()
    }

    /// Is the imaginary part exactly zero?
    #[inline]
    pub fn is_real(self) -> bool {
        self.im == T::ZERO
    }
}

impl<T: Real> From<T> for Complex<T> {
    #[inline]
    fn from(re: T) -> Self {
        Self::from_real(re)
    }
}

impl<T: Real> From<(T, T)> for Complex<T> {
    #[inline]
    fn from((re, im): (T, T)) -> Self {
        Self::new(re, im)
    }
}

impl<T: Real> Add for Complex<T> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.re + other.re, self.im + other.im)
    }
}

impl<T: Real> Add<T> for Complex<T> {
    type Output = Self;

    #[inline]
    fn add(self, other: T) -> Self {
        Self::new(self.re + other, self.im)
    }
}

impl<T: Real> Sub for Complex<T> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.re - other.re, self.im - other.im)
    }
}

impl<T: Real> Mul for Complex<T> {
    type Output = Self;

    #[inline]
    fn mul(self, other: Self) -> Self {
        Self::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re,
        )
    }
}

impl<T: Real> Mul<T> for Complex<T> {
    type Output = Self;

    #[inline]
    fn mul(self, other: T) -> Self {
        Self::new(self.re * other, self.im * other)
    }
}

impl<T: Real> Neg for Complex<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

// Conversions to and from mint
#[cfg(feature = "mint")]
impl<T> From<Complex<T>> for mint::Vector2<T> {
    #[inline(always)]
    fn from(z: Complex<T>) -> Self {
        Self { x: z.re, y: z.im }
    }
}

#[cfg(feature = "mint")]
impl<T> From<mint::Vector2<T>> for Complex<T> {
    #[inline(always)]
    fn from(v: mint::Vector2<T>) -> Self {
        Self { re: v.x, im: v.y }
    }
}
