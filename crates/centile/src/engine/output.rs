//! Output types for assessments.
//!
//! ## Purpose
//!
//! This module defines [`PercentileResult`], the assessment output handed
//! back to callers: the observed value, the percentile band at the query
//! age, the calculated percentile, and the Z-score where the standard's
//! method produces one.
//!
//! ## Design notes
//!
//! * **Wire-shaped**: serialization matches the external JSON contract
//!   (`calculatedPercentile`, `zScore`, `P3`..`P97`), since downstream
//!   collaborators persist and render this structure as-is.
//! * **Ephemeral**: results are created fresh per call and immediately
//!   handed to the caller; the engine keeps nothing.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Key concepts
//!
//! * **Percentile band**: the P3..P97 anchor values resolved at the query
//!   age; chart consumers plot these as curves.
//! * **Optional Z-score**: present only for LMS-based standards; the direct
//!   table method has no distributional model to draw one from.
//!
//! ## Invariants
//!
//! * `calculated_percentile` is in `[0, 100]`.
//! * `z_score` is `Some` exactly when the standard uses the LMS method.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not persist results (a collaborator's concern).

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use serde::Serialize;

// Internal dependencies
use crate::store::series::PercentileAnchors;

// ============================================================================
// Result Structure
// ============================================================================

/// Outcome of assessing one measurement against a growth standard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PercentileResult {
    /// The observed measurement value.
    pub value: f64,

    /// Percentile band values at the query age.
    pub percentiles: PercentileAnchors,

    /// Percentile of the observed value, in `[0, 100]`.
    pub calculated_percentile: f64,

    /// Z-score of the observed value (LMS-based standards only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_score: Option<f64>,
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for PercentileResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Assessment:")?;
        writeln!(f, "  Value:      {}", self.value)?;
        writeln!(f, "  Percentile: {:.1}", self.calculated_percentile)?;
        if let Some(z) = self.z_score {
            writeln!(f, "  Z-score:    {z:.3}")?;
        }
        writeln!(f)?;

        writeln!(f, "Reference band:")?;
        write!(f, "{:>6} {:>6} {:>6}", "P3", "P5", "P10")?;
        if self.percentiles.p25.is_some() {
            write!(f, " {:>6}", "P25")?;
        }
        write!(f, " {:>6}", "P50")?;
        if self.percentiles.p75.is_some() {
            write!(f, " {:>6}", "P75")?;
        }
        writeln!(f, " {:>6} {:>6} {:>6}", "P90", "P95", "P97")?;

        write!(
            f,
            "{:>6.2} {:>6.2} {:>6.2}",
            self.percentiles.p3, self.percentiles.p5, self.percentiles.p10
        )?;
        if let Some(p25) = self.percentiles.p25 {
            write!(f, " {p25:>6.2}")?;
        }
        write!(f, " {:>6.2}", self.percentiles.p50)?;
        if let Some(p75) = self.percentiles.p75 {
            write!(f, " {p75:>6.2}")?;
        }
        writeln!(
            f,
            " {:>6.2} {:>6.2} {:>6.2}",
            self.percentiles.p90, self.percentiles.p95, self.percentiles.p97
        )?;

        Ok(())
    }
}
