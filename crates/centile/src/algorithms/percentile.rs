//! Percentile computation: LMS method and direct table interpolation.
//!
//! ## Purpose
//!
//! This module converts a measurement value plus a resolved reference point
//! into a percentile: through the LMS Z-score transform and the normal CDF
//! for CDC/WHO standards, or by interpolating directly between tabulated
//! percentile anchors for the preterm standard.
//!
//! ## Design notes
//!
//! * **Guarded division**: degenerate LMS parameters (`M == 0` or `S == 0`)
//!   surface as a computation error; no default value is fabricated.
//! * **Clamping**: values outside the tabulated anchor range clamp to
//!   percentile 0 (below the 3rd) or 100 (above the 97th), matching the
//!   published-table call sites.
//! * **Pure**: both paths are side-effect-free functions of their inputs.
//!
//! ## Key concepts
//!
//! * **LMS path**: `percentile = 100 * Phi(z)` with the Abramowitz-Stegun
//!   normal CDF.
//! * **Table path**: find the anchor pair bracketing the value and
//!   interpolate percentile as a linear function of value.
//!
//! ## Invariants
//!
//! * Returned percentiles are in `[0, 100]`.
//! * A value equal to the median anchor yields percentile 50 on the table
//!   path and a zero Z-score on the LMS path.
//!
//! ## Non-goals
//!
//! * This module does not resolve reference points (see the lookup
//!   modules).
//! * This module does not validate measurement values.

// Internal dependencies
use crate::math::erf::normal_cdf;
use crate::math::lms::LmsParams;
use crate::primitives::errors::CentileError;
use crate::store::series::PercentileAnchors;

// ============================================================================
// LMS Method
// ============================================================================

/// Z-score and percentile of `value` under interpolated LMS parameters.
pub fn percentile_from_lms(
    value: f64,
    lms: &LmsParams,
) -> Result<(f64, f64), CentileError> {
    if lms.is_degenerate() {
        return Err(CentileError::DegenerateDistribution { m: lms.m, s: lms.s });
    }

    let z = lms.z_score(value);
    let percentile = 100.0 * normal_cdf(z);

    Ok((z, percentile))
}

// ============================================================================
// Direct Table Interpolation
// ============================================================================

/// Percentile of `value` by interpolating between tabulated anchors.
///
/// Values below the 3rd anchor clamp to 0, values above the 97th clamp to
/// 100. A degenerate bracket (equal anchor values) resolves to the lower
/// anchor's percentile. The trailing 50 is the observed fallback for the
/// unreachable no-bracket case.
pub fn percentile_from_anchors(value: f64, anchors: &PercentileAnchors) -> f64 {
    let pairs = anchors.pairs();

    // pairs() always yields at least the seven mandatory anchors.
    let (_, lowest) = pairs[0];
    let (_, highest) = pairs[pairs.len() - 1];

    if value < lowest {
        return 0.0;
    }
    if value > highest {
        return 100.0;
    }

    for window in pairs.windows(2) {
        let (lower_pct, lower_val) = window[0];
        let (upper_pct, upper_val) = window[1];

        if value >= lower_val && value <= upper_val {
            if upper_val == lower_val {
                return lower_pct;
            }
            return lower_pct
                + (value - lower_val) / (upper_val - lower_val) * (upper_pct - lower_pct);
        }
    }

    50.0
}
