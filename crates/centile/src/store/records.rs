//! Serde record formats for published reference tables.
//!
//! ## Purpose
//!
//! This module maps the two column schemes found in published growth tables
//! onto [`ReferenceRow`]s, so the store can be populated from any tabular or
//! JSON source without caring about its origin:
//!
//! * LMS scheme (CDC/WHO): `Sex, Agemos, L, M, S, P3..P97`
//! * Preterm scheme (INTERGROWTH-21st): `sex, age, 3rd..97th` with a
//!   composite `"weeks+days"` age key and no 25th/75th columns
//!
//! ## Design notes
//!
//! * **Aliases over preprocessing**: serde field aliases absorb the
//!   capitalization differences between table exports, so documents are
//!   parsed as published.
//! * **Conversion is fallible**: sex codes and age labels are validated
//!   while converting a record into a row, not deferred to lookup time.
//!
//! ## Invariants
//!
//! * A converted row's age scale matches its scheme (months for LMS records,
//!   gestational for preterm records).
//!
//! ## Non-goals
//!
//! * This module does not enforce series-level invariants (see
//!   `store::series`).
//! * This module does not fetch documents from disk or network.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use serde::Deserialize;

// Internal dependencies
use crate::math::lms::LmsParams;
use crate::primitives::errors::CentileError;
use crate::primitives::types::{GestationalAge, PediatricAge, Sex};
use crate::store::series::{PercentileAnchors, ReferenceRow};

// ============================================================================
// LMS Scheme (CDC / WHO)
// ============================================================================

/// One row of an LMS-scheme table (`Sex, Agemos, L, M, S, P3..P97`).
#[derive(Debug, Clone, Deserialize)]
pub struct LmsRecord {
    /// Numeric sex code (1=male, 2=female).
    #[serde(alias = "Sex")]
    pub sex: u8,

    /// Age anchor in months.
    #[serde(alias = "Agemos", alias = "age")]
    pub agemos: f64,

    /// Box-Cox power.
    #[serde(alias = "L")]
    pub l: f64,

    /// Median.
    #[serde(alias = "M")]
    pub m: f64,

    /// Coefficient of variation.
    #[serde(alias = "S")]
    pub s: f64,

    /// 3rd percentile value.
    #[serde(alias = "P3")]
    pub p3: f64,

    /// 5th percentile value.
    #[serde(alias = "P5")]
    pub p5: f64,

    /// 10th percentile value.
    #[serde(alias = "P10")]
    pub p10: f64,

    /// 25th percentile value.
    #[serde(alias = "P25")]
    pub p25: f64,

    /// 50th percentile value.
    #[serde(alias = "P50")]
    pub p50: f64,

    /// 75th percentile value.
    #[serde(alias = "P75")]
    pub p75: f64,

    /// 90th percentile value.
    #[serde(alias = "P90")]
    pub p90: f64,

    /// 95th percentile value.
    #[serde(alias = "P95")]
    pub p95: f64,

    /// 97th percentile value.
    #[serde(alias = "P97")]
    pub p97: f64,
}

impl LmsRecord {
    /// Convert into a validated reference row.
    pub fn into_row(self) -> Result<ReferenceRow, CentileError> {
        Ok(ReferenceRow {
            sex: Sex::from_code(self.sex)?,
            age: PediatricAge::Months(self.agemos),
            lms: Some(LmsParams::new(self.l, self.m, self.s)),
            anchors: PercentileAnchors {
                p3: self.p3,
                p5: self.p5,
                p10: self.p10,
                p25: Some(self.p25),
                p50: self.p50,
                p75: Some(self.p75),
                p90: self.p90,
                p95: self.p95,
                p97: self.p97,
            },
        })
    }
}

// ============================================================================
// Preterm Scheme (INTERGROWTH-21st)
// ============================================================================

/// One row of a preterm-scheme table (`sex, age, 3rd..97th`).
#[derive(Debug, Clone, Deserialize)]
pub struct PretermRecord {
    /// Numeric sex code (1=male, 2=female).
    #[serde(alias = "Sex")]
    pub sex: u8,

    /// Composite gestational age key, e.g. `"33+4"`.
    #[serde(alias = "Age")]
    pub age: String,

    /// 3rd percentile value.
    #[serde(rename = "3rd")]
    pub p3: f64,

    /// 5th percentile value.
    #[serde(rename = "5th")]
    pub p5: f64,

    /// 10th percentile value.
    #[serde(rename = "10th")]
    pub p10: f64,

    /// 50th percentile value.
    #[serde(rename = "50th")]
    pub p50: f64,

    /// 90th percentile value.
    #[serde(rename = "90th")]
    pub p90: f64,

    /// 95th percentile value.
    #[serde(rename = "95th")]
    pub p95: f64,

    /// 97th percentile value.
    #[serde(rename = "97th")]
    pub p97: f64,
}

impl PretermRecord {
    /// Convert into a validated reference row.
    pub fn into_row(self) -> Result<ReferenceRow, CentileError> {
        Ok(ReferenceRow {
            sex: Sex::from_code(self.sex)?,
            age: PediatricAge::Gestational(GestationalAge::from_label(&self.age)?),
            lms: None,
            anchors: PercentileAnchors {
                p3: self.p3,
                p5: self.p5,
                p10: self.p10,
                p25: None,
                p50: self.p50,
                p75: None,
                p90: self.p90,
                p95: self.p95,
                p97: self.p97,
            },
        })
    }
}

// ============================================================================
// JSON Parsing
// ============================================================================

/// Parse a JSON array of LMS-scheme records into reference rows.
#[cfg(feature = "std")]
pub fn lms_rows_from_json(json: &str) -> Result<Vec<ReferenceRow>, CentileError> {
    let records: Vec<LmsRecord> =
        serde_json::from_str(json).map_err(|e| CentileError::MalformedTable(e.to_string()))?;
    records.into_iter().map(LmsRecord::into_row).collect()
}

/// Parse a JSON array of preterm-scheme records into reference rows.
#[cfg(feature = "std")]
pub fn preterm_rows_from_json(json: &str) -> Result<Vec<ReferenceRow>, CentileError> {
    let records: Vec<PretermRecord> =
        serde_json::from_str(json).map_err(|e| CentileError::MalformedTable(e.to_string()))?;
    records.into_iter().map(PretermRecord::into_row).collect()
}
