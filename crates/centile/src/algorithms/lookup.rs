//! Postnatal (month-anchored) lookup and interpolation.
//!
//! ## Purpose
//!
//! This module resolves a continuous query age in months to an
//! [`InterpolatedPoint`] by selecting the two reference rows closest to the
//! query and blending their numeric fields.
//!
//! ## Design notes
//!
//! * **Two modes, deliberately**: production call sites disagree on whether
//!   percentile anchors are interpolated along with the LMS parameters or
//!   copied from the lower anchor row. Both behaviors are preserved as
//!   explicit [`LookupMode`]s; neither is silently "fixed".
//! * **Distance selection**: candidates are stably sorted by absolute
//!   distance from the query, so equidistant neighbors resolve to the lower
//!   age deterministically.
//! * **Extrapolation tolerated**: when both nearest rows sit on one side of
//!   the query (a query inside the domain window but outside the table
//!   hull), the same factor formula extrapolates; domain windows are
//!   enforced upstream.
//!
//! ## Key concepts
//!
//! * **Exact-match identity**: a query equal to an anchor age returns that
//!   row's values unchanged, with zero interpolation error.
//! * **Factor**: `(query - lower) / (upper - lower)`, applied independently
//!   to every interpolated field.
//!
//! ## Invariants
//!
//! * At least two candidate rows are required; fewer is a reference-data
//!   error, never a fabricated result.
//! * The returned point's age equals the query age (or the matched anchor's
//!   age for exact matches).
//!
//! ## Non-goals
//!
//! * This module does not validate the query against domain windows.
//! * This module does not handle gestational ages (see
//!   `algorithms::gestational`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use serde::Serialize;

// Internal dependencies
use crate::math::linear::interpolation_factor;
use crate::math::lms::LmsParams;
use crate::primitives::errors::CentileError;
use crate::primitives::types::{PediatricAge, Sex};
use crate::store::series::{PercentileAnchors, ReferenceRow, ReferenceSeries};

// ============================================================================
// Lookup Mode
// ============================================================================

/// Interpolation behavior for month-anchored lookups.
///
/// Both variants exist in production call sites; which is canonical is
/// undetermined, so the choice is the caller's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupMode {
    /// Interpolate every numeric field: L, M, S and all percentile anchors.
    #[default]
    FullInterpolation,

    /// Interpolate L, M, S only; copy percentile anchors from the lower row.
    LmsOnly,
}

// ============================================================================
// Interpolated Point
// ============================================================================

/// A reference row resolved at the exact query age.
///
/// Same shape as a [`ReferenceRow`], but with numeric fields computed by
/// interpolation. Ephemeral: created per call and owned by the computation
/// that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InterpolatedPoint {
    /// Sex the point applies to.
    pub sex: Sex,

    /// The query age the point was resolved at.
    pub age: PediatricAge,

    /// Interpolated LMS parameters (month-anchored standards only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lms: Option<LmsParams>,

    /// Percentile anchors at the query age.
    pub anchors: PercentileAnchors,
}

impl InterpolatedPoint {
    /// Take a reference row unmodified (exact-match and nearest lookups).
    pub fn from_row(row: &ReferenceRow) -> Self {
        Self {
            sex: row.sex,
            age: row.age,
            lms: row.lms,
            anchors: row.anchors,
        }
    }
}

// ============================================================================
// Month-Anchored Lookup
// ============================================================================

/// Resolve a query age in months against a series.
///
/// Filters the series to `sex` and the standard's `window`, selects the two
/// rows closest to `age_months`, and interpolates according to `mode`.
pub fn interpolate_at(
    series: &ReferenceSeries,
    sex: Sex,
    age_months: f64,
    window: (f64, f64),
    mode: LookupMode,
) -> Result<InterpolatedPoint, CentileError> {
    let (min, max) = window;

    // Candidates: requested sex, inside the standard's valid age window.
    let mut candidates: Vec<&ReferenceRow> = series
        .rows_for_sex(sex)
        .filter(|row| {
            row.age
                .months()
                .is_some_and(|m| m >= min && m <= max)
        })
        .collect();

    if candidates.len() < 2 {
        return Err(CentileError::TooFewReferenceRows {
            got: candidates.len(),
            min: 2,
        });
    }

    // Stable sort by absolute distance; ties resolve to the lower age
    // because candidates arrive in ascending age order.
    candidates.sort_by(|a, b| {
        let da = (a.age.scalar() - age_months).abs();
        let db = (b.age.scalar() - age_months).abs();
        da.partial_cmp(&db).unwrap_or(Ordering::Equal)
    });

    let first = candidates[0];
    let second = candidates[1];

    // Exact anchor hit, or two anchors at the same age: no interpolation.
    if first.age.scalar() == age_months || first.age.scalar() == second.age.scalar() {
        return Ok(InterpolatedPoint::from_row(first));
    }

    let (lower, upper) = if first.age.scalar() < age_months {
        (first, second)
    } else {
        (second, first)
    };

    let factor = interpolation_factor(lower.age.scalar(), upper.age.scalar(), age_months);

    let lms = match (&lower.lms, &upper.lms) {
        (Some(lo), Some(up)) => Some(LmsParams::interpolate(lo, up, factor)),
        _ => lower.lms,
    };

    let anchors = match mode {
        LookupMode::FullInterpolation => {
            PercentileAnchors::interpolate(&lower.anchors, &upper.anchors, factor)
        }
        LookupMode::LmsOnly => lower.anchors,
    };

    Ok(InterpolatedPoint {
        sex,
        age: PediatricAge::Months(age_months),
        lms,
        anchors,
    })
}
