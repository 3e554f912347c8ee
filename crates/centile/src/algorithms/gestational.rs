//! Gestational-age lookup for the preterm standard.
//!
//! ## Purpose
//!
//! This module resolves a gestational query age (weeks plus days) against a
//! preterm series. Unlike the month-anchored lookup, the default behavior is
//! to return the single closest tabulated row unmodified; interpolation
//! between the two closest rows is an alternate mode used by one family of
//! call sites.
//!
//! ## Design notes
//!
//! * **Exact key first**: preterm tables key rows by the composite
//!   `"weeks+days"` label; a query matching a key returns that row as-is in
//!   every mode.
//! * **Two modes, deliberately**: nearest-row and two-point interpolation
//!   both exist in production call sites; both are preserved as explicit
//!   [`PretermLookup`]s.
//! * **Day arithmetic**: distances are measured in total days
//!   (`weeks * 7 + days`).
//!
//! ## Key concepts
//!
//! * **Nearest**: a single reduction over the candidates; the winning row's
//!   own age is reported in the resolved point.
//! * **Interpolated**: the month-lookup's two-closest selection, applied on
//!   the day axis to the percentile anchors.
//!
//! ## Invariants
//!
//! * Nearest mode requires at least one candidate row; interpolated mode
//!   requires two.
//!
//! ## Non-goals
//!
//! * This module does not validate gestational bounds (weeks 24-42,
//!   days 0-6).
//! * This module does not compute percentiles from the resolved point.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::algorithms::lookup::InterpolatedPoint;
use crate::math::linear::interpolation_factor;
use crate::primitives::errors::CentileError;
use crate::primitives::types::{GestationalAge, PediatricAge, Sex};
use crate::store::series::{PercentileAnchors, ReferenceRow, ReferenceSeries};

// ============================================================================
// Preterm Lookup Mode
// ============================================================================

/// Resolution behavior for gestational-age lookups without an exact match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PretermLookup {
    /// Return the single closest row unmodified.
    #[default]
    Nearest,

    /// Interpolate percentile anchors between the two closest rows.
    Interpolated,
}

// ============================================================================
// Gestational Lookup
// ============================================================================

/// Resolve a gestational query age against a preterm series.
pub fn lookup_gestational(
    series: &ReferenceSeries,
    sex: Sex,
    age: GestationalAge,
    mode: PretermLookup,
) -> Result<InterpolatedPoint, CentileError> {
    let candidates: Vec<&ReferenceRow> = series.rows_for_sex(sex).collect();

    if candidates.is_empty() {
        return Err(CentileError::TooFewReferenceRows { got: 0, min: 1 });
    }

    let query_days = f64::from(age.total_days());

    // Exact composite-key match wins in every mode.
    if let Some(row) = candidates
        .iter()
        .find(|row| row.age.scalar() == query_days)
    {
        return Ok(InterpolatedPoint::from_row(row));
    }

    match mode {
        PretermLookup::Nearest => {
            // Single reduction to the closest row; candidates are in
            // ascending age order, so ties resolve to the lower age.
            let mut nearest = candidates[0];
            for &row in &candidates[1..] {
                if (row.age.scalar() - query_days).abs()
                    < (nearest.age.scalar() - query_days).abs()
                {
                    nearest = row;
                }
            }
            Ok(InterpolatedPoint::from_row(nearest))
        }
        PretermLookup::Interpolated => {
            if candidates.len() < 2 {
                return Err(CentileError::TooFewReferenceRows {
                    got: candidates.len(),
                    min: 2,
                });
            }

            let mut by_distance = candidates;
            by_distance.sort_by(|a, b| {
                let da = (a.age.scalar() - query_days).abs();
                let db = (b.age.scalar() - query_days).abs();
                da.partial_cmp(&db).unwrap_or(Ordering::Equal)
            });

            let (lower, upper) = if by_distance[0].age.scalar() < query_days {
                (by_distance[0], by_distance[1])
            } else {
                (by_distance[1], by_distance[0])
            };

            let factor =
                interpolation_factor(lower.age.scalar(), upper.age.scalar(), query_days);

            Ok(InterpolatedPoint {
                sex,
                age: PediatricAge::Gestational(age),
                lms: None,
                anchors: PercentileAnchors::interpolate(
                    &lower.anchors,
                    &upper.anchors,
                    factor,
                ),
            })
        }
    }
}
