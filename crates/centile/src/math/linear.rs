//! Linear interpolation primitives.
//!
//! ## Purpose
//!
//! This module provides the two scalar helpers every interpolating lookup in
//! the crate is built from: evaluating a linear blend at a factor, and
//! recovering the factor for a query position between two anchors.
//!
//! ## Design notes
//!
//! * **Unclamped**: factors outside `[0, 1]` extrapolate; domain windows are
//!   enforced upstream by validation, not here.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * `lerp(a, b, 0) == a` and `lerp(a, b, 1) == b`.
//! * `interpolation_factor` of a degenerate span (equal anchors) is zero, so
//!   a blend over it reproduces the lower anchor.
//!
//! ## Non-goals
//!
//! * This module does not select anchor pairs (see the algorithms layer).
//! * This module does not provide higher-order interpolation.

// External dependencies
use num_traits::Float;

// ============================================================================
// Linear Interpolation
// ============================================================================

/// Linear blend between `a` and `b`: `a + (b - a) * factor`.
#[inline]
pub fn lerp<T: Float>(a: T, b: T, factor: T) -> T {
    a + (b - a) * factor
}

/// Position of `query` within the span `[lower, upper]`, as a factor.
///
/// A degenerate span (`upper == lower`) yields zero.
#[inline]
pub fn interpolation_factor<T: Float>(lower: T, upper: T, query: T) -> T {
    let span = upper - lower;
    if span == T::zero() {
        T::zero()
    } else {
        (query - lower) / span
    }
}
