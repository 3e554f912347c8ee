//! Error function and standard normal CDF approximations.
//!
//! ## Purpose
//!
//! This module provides the rational approximation of the error function
//! used to convert Z-scores into percentiles, and the standard normal CDF
//! built on top of it.
//!
//! ## Design notes
//!
//! * **Fixed approximation**: This is the Abramowitz-Stegun formula 7.1.26
//!   with its published coefficients. Historical calculations were produced
//!   with exactly this approximation, so it is reproduced verbatim --
//!   including its ~1.5e-7 residual error -- rather than delegated to a
//!   platform or library normal CDF.
//! * **Generics**: Generic over `Float` types; coefficients are named f64
//!   constants lifted into `T`.
//!
//! ## Key concepts
//!
//! * **Odd symmetry**: `erf(-x) = -erf(x)`; the approximation is evaluated
//!   on `|x|` and the sign restored afterwards.
//! * **Normal CDF**: `Phi(z) = 0.5 * (1 + erf(z / sqrt(2)))`.
//!
//! ## Invariants
//!
//! * `erf(0) == 0` and `normal_cdf(0) == 0.5` exactly.
//! * Output of `normal_cdf` is always in `[0, 1]`.
//!
//! ## Non-goals
//!
//! * This module does not compute Z-scores (see `math::lms`).
//! * This module does not provide the inverse error function.

// External dependencies
use core::f64::consts::SQRT_2;
use num_traits::Float;

// ============================================================================
// Abramowitz-Stegun Coefficients
// ============================================================================

/// Coefficient a1 of Abramowitz-Stegun 7.1.26.
const A1: f64 = 0.254829592;

/// Coefficient a2 of Abramowitz-Stegun 7.1.26.
const A2: f64 = -0.284496736;

/// Coefficient a3 of Abramowitz-Stegun 7.1.26.
const A3: f64 = 1.421413741;

/// Coefficient a4 of Abramowitz-Stegun 7.1.26.
const A4: f64 = -1.453152027;

/// Coefficient a5 of Abramowitz-Stegun 7.1.26.
const A5: f64 = 1.061405429;

/// Rational substitution constant p of Abramowitz-Stegun 7.1.26.
const P: f64 = 0.3275911;

// ============================================================================
// Error Function
// ============================================================================

/// Rational approximation of the error function (maximum error ~1.5e-7).
pub fn erf<T: Float>(x: T) -> T {
    let negative = x < T::zero();
    let x = x.abs();

    // t = 1 / (1 + p*x)
    let t = T::one() / (T::one() + T::from(P).unwrap() * x);

    // Horner evaluation of the degree-5 polynomial in t.
    let poly = ((((T::from(A5).unwrap() * t + T::from(A4).unwrap()) * t + T::from(A3).unwrap())
        * t
        + T::from(A2).unwrap())
        * t
        + T::from(A1).unwrap())
        * t;

    let y = T::one() - poly * (-(x * x)).exp();

    if negative { -y } else { y }
}

/// Standard normal CDF: `Phi(z) = 0.5 * (1 + erf(z / sqrt(2)))`.
pub fn normal_cdf<T: Float>(z: T) -> T {
    let half = T::from(0.5).unwrap();
    let sqrt2 = T::from(SQRT_2).unwrap();
    half * (T::one() + erf(z / sqrt2))
}
