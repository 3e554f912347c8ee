//! Reference rows, percentile anchors, and validated series containers.
//!
//! ## Purpose
//!
//! This module defines the shape of one reference table row, the set of
//! tabulated percentile anchors it carries, and the [`ReferenceSeries`]
//! container that enforces the ordering and uniqueness invariants lookups
//! rely on.
//!
//! ## Design notes
//!
//! * **Construction is validation**: a series can only be built through
//!   [`ReferenceSeries::new`], which sorts rows and rejects invariant
//!   violations, so every series reachable by a lookup is well-formed.
//! * **Sparse anchors**: the preterm tables publish no 25th/75th percentile
//!   columns, so those anchors are optional.
//! * **Stability**: sorting is stable, matching the deterministic ordering
//!   the lookup's tie-breaking depends on.
//!
//! ## Key concepts
//!
//! * **Series**: all rows for one (standard, measurement) pair, both sexes
//!   together, ordered by sex and then ascending age.
//! * **Age scale homogeneity**: every row in a series is anchored on the
//!   scale its standard uses (months, or gestational weeks+days).
//!
//! ## Invariants
//!
//! * Rows are sorted by (sex, age) ascending.
//! * Age anchors are finite and unique within one sex.
//! * Row age scale matches `standard.is_preterm()`.
//!
//! ## Non-goals
//!
//! * This module does not interpolate between rows (see the algorithms
//!   layer).
//! * This module does not parse published table documents (see
//!   `store::records`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use serde::Serialize;

// Internal dependencies
use crate::math::lms::LmsParams;
use crate::math::linear::lerp;
use crate::primitives::errors::CentileError;
use crate::primitives::types::{GrowthStandard, MeasurementType, PediatricAge, Sex};

// ============================================================================
// Percentile Anchors
// ============================================================================

/// Tabulated percentile anchors at one reference age.
///
/// CDC and WHO tables publish the full P3..P97 set; INTERGROWTH-21st tables
/// omit the 25th and 75th percentiles, so those two anchors are optional.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PercentileAnchors {
    /// 3rd percentile value.
    #[serde(rename = "P3")]
    pub p3: f64,

    /// 5th percentile value.
    #[serde(rename = "P5")]
    pub p5: f64,

    /// 10th percentile value.
    #[serde(rename = "P10")]
    pub p10: f64,

    /// 25th percentile value (absent from preterm tables).
    #[serde(rename = "P25", skip_serializing_if = "Option::is_none")]
    pub p25: Option<f64>,

    /// 50th percentile value.
    #[serde(rename = "P50")]
    pub p50: f64,

    /// 75th percentile value (absent from preterm tables).
    #[serde(rename = "P75", skip_serializing_if = "Option::is_none")]
    pub p75: Option<f64>,

    /// 90th percentile value.
    #[serde(rename = "P90")]
    pub p90: f64,

    /// 95th percentile value.
    #[serde(rename = "P95")]
    pub p95: f64,

    /// 97th percentile value.
    #[serde(rename = "P97")]
    pub p97: f64,
}

impl PercentileAnchors {
    /// Ascending `(percentile, value)` pairs, skipping absent anchors.
    pub fn pairs(&self) -> Vec<(f64, f64)> {
        let mut out = Vec::with_capacity(9);
        out.push((3.0, self.p3));
        out.push((5.0, self.p5));
        out.push((10.0, self.p10));
        if let Some(p25) = self.p25 {
            out.push((25.0, p25));
        }
        out.push((50.0, self.p50));
        if let Some(p75) = self.p75 {
            out.push((75.0, p75));
        }
        out.push((90.0, self.p90));
        out.push((95.0, self.p95));
        out.push((97.0, self.p97));
        out
    }

    /// Component-wise linear interpolation between two anchor sets.
    ///
    /// Optional anchors survive only when present on both sides.
    pub fn interpolate(lower: &Self, upper: &Self, factor: f64) -> Self {
        let opt = |a: Option<f64>, b: Option<f64>| match (a, b) {
            (Some(a), Some(b)) => Some(lerp(a, b, factor)),
            _ => None,
        };

        Self {
            p3: lerp(lower.p3, upper.p3, factor),
            p5: lerp(lower.p5, upper.p5, factor),
            p10: lerp(lower.p10, upper.p10, factor),
            p25: opt(lower.p25, upper.p25),
            p50: lerp(lower.p50, upper.p50, factor),
            p75: opt(lower.p75, upper.p75),
            p90: lerp(lower.p90, upper.p90, factor),
            p95: lerp(lower.p95, upper.p95, factor),
            p97: lerp(lower.p97, upper.p97, factor),
        }
    }
}

// ============================================================================
// Reference Row
// ============================================================================

/// One reference table row: distribution parameters at a single age anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceRow {
    /// Sex this row applies to.
    pub sex: Sex,

    /// Age anchor, on the scale of the row's standard.
    pub age: PediatricAge,

    /// LMS parameters (CDC/WHO tables only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lms: Option<LmsParams>,

    /// Tabulated percentile anchors.
    pub anchors: PercentileAnchors,
}

// ============================================================================
// Reference Series
// ============================================================================

/// All reference rows for one (standard, measurement) pair.
///
/// Construction sorts rows by (sex, age) and enforces the series invariants;
/// a built series is immutable.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceSeries {
    standard: GrowthStandard,
    measurement: MeasurementType,
    rows: Vec<ReferenceRow>,
}

impl ReferenceSeries {
    /// Build a series, sorting rows and checking invariants.
    pub fn new(
        standard: GrowthStandard,
        measurement: MeasurementType,
        mut rows: Vec<ReferenceRow>,
    ) -> Result<Self, CentileError> {
        if rows.is_empty() {
            return Err(CentileError::TooFewReferenceRows { got: 0, min: 1 });
        }

        // Check 1: age scale matches the standard, anchors are finite.
        for row in &rows {
            let scale_ok = match row.age {
                PediatricAge::Months(m) => {
                    if !m.is_finite() {
                        return Err(CentileError::InvalidReferenceRow(format!(
                            "non-finite age anchor {m} for sex {}",
                            row.sex
                        )));
                    }
                    !standard.is_preterm()
                }
                PediatricAge::Gestational(_) => standard.is_preterm(),
            };
            if !scale_ok {
                return Err(CentileError::InvalidReferenceRow(format!(
                    "age anchor '{}' is on the wrong scale for standard '{standard}'",
                    row.age
                )));
            }
        }

        // Check 2: stable sort by (sex, age ascending).
        rows.sort_by(|a, b| {
            a.sex.cmp(&b.sex).then(
                a.age
                    .scalar()
                    .partial_cmp(&b.age.scalar())
                    .unwrap_or(Ordering::Equal),
            )
        });

        // Check 3: age anchors unique within one sex.
        for pair in rows.windows(2) {
            if pair[0].sex == pair[1].sex && pair[0].age.scalar() == pair[1].age.scalar() {
                return Err(CentileError::InvalidReferenceRow(format!(
                    "duplicate age anchor '{}' for sex {}",
                    pair[1].age, pair[1].sex
                )));
            }
        }

        Ok(Self {
            standard,
            measurement,
            rows,
        })
    }

    /// The standard this series belongs to.
    pub fn standard(&self) -> GrowthStandard {
        self.standard
    }

    /// The measurement kind this series covers.
    pub fn measurement(&self) -> MeasurementType {
        self.measurement
    }

    /// All rows, sorted by (sex, age).
    pub fn rows(&self) -> &[ReferenceRow] {
        &self.rows
    }

    /// Rows for one sex, in ascending age order.
    pub fn rows_for_sex(&self, sex: Sex) -> impl Iterator<Item = &ReferenceRow> {
        self.rows.iter().filter(move |row| row.sex == sex)
    }
}
