//! Age rounding policies and date-based age derivation.
//!
//! ## Purpose
//!
//! This module provides the query-age preprocessing knobs: the optional
//! rounding of a postnatal age to the nearest half month, and the derivation
//! of an age in months from a birth date and a measurement date.
//!
//! ## Design notes
//!
//! * **Policy, not guess**: the observed call sites disagree on whether ages
//!   are rounded before lookup, so rounding is an explicit policy with a
//!   full-precision default rather than a hard-coded behavior.
//! * **Ordering check**: date-based derivation rejects a measurement date
//!   that precedes the birth date instead of producing a negative age.
//!
//! ## Key concepts
//!
//! * **Half-month rounding**: `round(age * 2) / 2`, the granularity of the
//!   infant chart variant that rounds.
//! * **Month length**: 30.4375 days (365.25 / 12), the constant conventional
//!   for growth-chart age derivation.
//!
//! ## Invariants
//!
//! * Rounding is idempotent: applying a policy twice equals applying it once.
//! * Derived ages are non-negative.
//!
//! ## Non-goals
//!
//! * This module does not validate ages against a standard's domain window.

// External dependencies
#[cfg(feature = "std")]
use chrono::NaiveDate;

// Internal dependencies
#[cfg(feature = "std")]
use crate::primitives::errors::CentileError;

// ============================================================================
// Rounding Policy
// ============================================================================

/// Rounding applied to a postnatal query age before reference lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgeRounding {
    /// Use the query age at full precision.
    #[default]
    Exact,

    /// Round to the nearest 0.5 month before lookup.
    HalfMonth,
}

impl AgeRounding {
    /// Apply this policy to an age in months.
    pub fn apply(&self, age_months: f64) -> f64 {
        match self {
            Self::Exact => age_months,
            Self::HalfMonth => (age_months * 2.0).round() / 2.0,
        }
    }
}

// ============================================================================
// Date-Based Derivation
// ============================================================================

/// Mean calendar month length in days (365.25 / 12).
#[cfg(feature = "std")]
pub const DAYS_PER_MONTH: f64 = 30.4375;

/// Derive a postnatal age in months from birth and measurement dates.
///
/// Fails with a validation error if the measurement date precedes the birth
/// date.
#[cfg(feature = "std")]
pub fn age_months_between(
    birth: NaiveDate,
    measured: NaiveDate,
) -> Result<f64, CentileError> {
    let days = (measured - birth).num_days();
    if days < 0 {
        return Err(CentileError::MeasurementBeforeBirth { days });
    }
    Ok(days as f64 / DAYS_PER_MONTH)
}
