// Copyright 2025 the analytic-roots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed-form roots of quadratic, cubic and quartic polynomials.
//!
//! Every solver here is analytic: the quadratic formula, Cardano's method for
//! cubics (in its trigonometric form when all three roots are real), and
//! Ferrari's method for quartics, which factors the quartic into two
//! quadratics using a root of a resolvent cubic. There is no iteration, no
//! allocation and no shared state; each call is a pure function of its
//! coefficients.
//!
//! Coefficients are passed as arrays with the constant term first. Each degree
//! has the same set of entry points:
//!
//! - `monic_<degree>_roots` and `<degree>_roots` return all roots, with
//!   multiplicity, as [`Complex`] values.
//! - `monic_<degree>_real_roots` and `<degree>_real_roots` return only the real
//!   roots, in an [`ArrayVec`] whose length is the number of real roots. The
//!   general variants fall back to the next lower degree when the leading
//!   coefficient is exactly zero.
//! - The `_sorted` variants sort those real roots in ascending order. The
//!   unsorted order follows the derivation, and in particular the two pairs
//!   of quartic roots are not ordered relative to each other.
//!
//! The solvers are generic over [`Real`], which is implemented for `f32` and
//! `f64`. With plain float literals as coefficients the compiler may not be
//! able to pick one, so give the literals a suffix (`1.0_f64`) or annotate
//! the result.
//!
//! Nothing returns an error. Inputs without real roots simply produce fewer
//! of them; calling a `monic_` function with what is really a zero leading
//! coefficient produces non-finite values.
//!
//! # Examples
//!
//! ```
//! use analytic_roots::{cubic_real_roots, quartic_roots};
//!
//! // 2x³ - 12x² + 22x - 12 = 2 (x - 1)(x - 2)(x - 3)
//! let roots = cubic_real_roots([-12.0_f64, 22.0, -12.0, 2.0]);
//! assert_eq!(roots.len(), 3);
//! assert!((roots[0] - 3.0).abs() < 1e-12);
//!
//! // x⁴ - 1
//! let roots = quartic_roots([-1.0_f64, 0.0, 0.0, 0.0, 1.0]);
//! assert_eq!(roots.iter().filter(|z| z.is_real()).count(), 2);
//! ```
//!
//! # Feature Flags
//!
//! The following crate [feature flags](https://doc.rust-lang.org/cargo/reference/features.html#dependency-features) are available:
//!
//! - `std` (enabled by default): Get floating point functions from the standard library
//!   (likely using your target's libc).
//! - `libm`: Use floating point implementations from [libm][].
//!   This is useful for `no_std` environments.
//!   However, note that the `libm` crate is not as efficient as the standard library.
//! - `mint`: Enable `From`/`Into` conversion between [`Complex`] and [mint][] vectors.
//! - `serde`: Implement `serde::Deserialize` and `serde::Serialize` on the value types.
//! - `schemars`: Add best-effort support for using the value types in JSON schemas using [schemars][].
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//! The crate never allocates.
//!
//! [libm]: https://docs.rs/libm
//! [mint]: https://docs.rs/mint
//! [schemars]: https://docs.rs/schemars

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("analytic-roots requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

// Only used by benchmarks.
#[cfg(test)]
use criterion as _;

mod complex;
mod cubic;
mod power;
mod quadratic;
mod quartic;
mod real;
mod root_pair;

pub use arrayvec::ArrayVec;

pub use crate::complex::Complex;
pub use crate::cubic::{
    cubic_real_roots, cubic_real_roots_sorted, cubic_roots, monic_cubic_real_roots,
    monic_cubic_real_roots_sorted, monic_cubic_roots,
};
pub use crate::power::{cube, ipow, square};
pub use crate::quadratic::{
    monic_quadratic_real_roots, monic_quadratic_real_roots_sorted, monic_quadratic_roots,
    quadratic_real_roots, quadratic_real_roots_sorted, quadratic_roots,
};
pub use crate::quartic::{
    monic_quartic_real_roots, monic_quartic_real_roots_sorted, monic_quartic_roots,
    quartic_real_roots, quartic_real_roots_sorted, quartic_roots, QuarticSolver,
};
pub use crate::real::Real;
pub use crate::root_pair::{monic_quartic_coefficients, RootPair};
