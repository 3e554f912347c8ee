//! LMS (Box-Cox power) distribution parameters and Z-score transform.
//!
//! ## Purpose
//!
//! This module defines the L/M/S parameter triple published by the CDC and
//! WHO reference tables and the Box-Cox transform that converts an observed
//! value into a Z-score against those parameters.
//!
//! ## Design notes
//!
//! * **Two branches**: the transform degenerates to a log transform when the
//!   Box-Cox power `L` is exactly zero.
//! * **Degeneracy is the caller's error**: `M == 0` or `S == 0` would divide
//!   by zero; [`LmsParams::is_degenerate`] exposes the check and callers
//!   surface it as a computation error instead of coercing a value.
//!
//! ## Key concepts
//!
//! * **L**: Box-Cox power correcting skewness.
//! * **M**: median of the reference distribution at the anchor age.
//! * **S**: generalized coefficient of variation.
//!
//! ## Invariants
//!
//! * `z_score(M) == 0` for non-degenerate parameters.
//! * Interpolation is component-wise linear.
//!
//! ## Non-goals
//!
//! * This module does not convert Z-scores to percentiles (see `math::erf`).
//! * This module does not validate measurement values.

// External dependencies
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::math::linear::lerp;

// ============================================================================
// LMS Parameters
// ============================================================================

/// Box-Cox distribution parameters at one reference anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LmsParams {
    /// Box-Cox power.
    pub l: f64,

    /// Median.
    pub m: f64,

    /// Generalized coefficient of variation.
    pub s: f64,
}

impl LmsParams {
    /// Bundle an L/M/S triple.
    pub fn new(l: f64, m: f64, s: f64) -> Self {
        Self { l, m, s }
    }

    /// Whether the Z-score transform would divide by zero.
    pub fn is_degenerate(&self) -> bool {
        self.m == 0.0 || self.s == 0.0
    }

    /// Z-score of `value` against these parameters.
    ///
    /// * `L == 0`: `z = ln(value / M) / S`
    /// * otherwise: `z = ((value / M)^L - 1) / (L * S)`
    ///
    /// The parameters must not be degenerate (see [`Self::is_degenerate`]).
    pub fn z_score(&self, value: f64) -> f64 {
        if self.l == 0.0 {
            (value / self.m).ln() / self.s
        } else {
            ((value / self.m).powf(self.l) - 1.0) / (self.l * self.s)
        }
    }

    /// Component-wise linear interpolation between two parameter sets.
    pub fn interpolate(lower: &Self, upper: &Self, factor: f64) -> Self {
        Self {
            l: lerp(lower.l, upper.l, factor),
            m: lerp(lower.m, upper.m, factor),
            s: lerp(lower.s, upper.s, factor),
        }
    }
}
