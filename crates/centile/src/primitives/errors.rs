//! Error types for growth assessment operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while validating
//! a request, resolving reference data, or computing a percentile, along
//! with the three-way kind partition callers use to render domain-specific
//! messages.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., the offending age
//!   and the standard's supported window).
//! * **Partitioned**: [`CentileError::kind`] classifies every variant as a
//!   validation, reference-data, or computation failure.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic
//!   messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Validation**: out-of-domain ages, implausible values, unsupported
//!    measurement kinds, malformed requests. Raised before any computation.
//! 2. **Reference data**: missing series, too few candidate rows, malformed
//!    table records. Fatal for the call; no result is fabricated.
//! 3. **Computation**: degenerate distribution parameters that would divide
//!    by zero. Propagated, never clamped to a default.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Errors are pure values; nothing is retried against static data.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::types::{GrowthStandard, MeasurementType};

// ============================================================================
// Error Kind
// ============================================================================

/// Coarse classification of a [`CentileError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request itself is invalid; nothing was computed.
    Validation,

    /// The loaded reference data cannot answer the request.
    ReferenceData,

    /// The reference data produced an impossible computation.
    Computation,
}

// ============================================================================
// Error Type
// ============================================================================

/// Error type for growth assessment operations.
#[derive(Debug, Clone, PartialEq)]
pub enum CentileError {
    /// A required request field is absent.
    MissingField {
        /// Wire name of the missing field.
        field: &'static str,
    },

    /// A numeric sex code other than 1 (male) or 2 (female).
    InvalidSexCode {
        /// The offending code.
        code: u8,
    },

    /// The standard publishes no reference table for this measurement kind.
    UnsupportedMeasurement {
        /// Requested standard.
        standard: GrowthStandard,
        /// Requested measurement kind.
        measurement: MeasurementType,
    },

    /// Postnatal age outside the standard's supported window.
    AgeOutOfRange {
        /// Requested standard.
        standard: GrowthStandard,
        /// Query age in months.
        age_months: f64,
        /// Inclusive lower bound of the window.
        min: f64,
        /// Inclusive upper bound of the window.
        max: f64,
    },

    /// Gestational week component outside the preterm standard's window.
    GestationalWeeksOutOfRange {
        /// Query weeks.
        weeks: u32,
        /// Inclusive lower bound.
        min: u32,
        /// Inclusive upper bound.
        max: u32,
    },

    /// Gestational day component outside `[0, 6]`.
    GestationalDaysOutOfRange {
        /// Query days.
        days: u32,
    },

    /// Query age is on the wrong scale for the standard (months given to the
    /// preterm standard, or gestational age given to a month-anchored one).
    AgeScaleMismatch {
        /// Requested standard.
        standard: GrowthStandard,
    },

    /// Measurement value is NaN or infinite.
    NonFiniteValue {
        /// The offending value.
        value: f64,
    },

    /// Measurement value is zero or negative.
    NonPositiveValue {
        /// The offending value.
        value: f64,
    },

    /// Measurement value exceeds the configured plausibility cap.
    ValueAboveLimit {
        /// Measurement kind the cap applies to.
        measurement: MeasurementType,
        /// The offending value.
        value: f64,
        /// The configured cap.
        limit: f64,
    },

    /// Measurement date precedes the birth date.
    MeasurementBeforeBirth {
        /// Signed day difference (negative).
        days: i64,
    },

    /// A configured bound (e.g. a value cap) is non-positive or non-finite.
    InvalidBound {
        /// Name of the bound.
        parameter: &'static str,
        /// The offending value.
        value: f64,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// No reference series is loaded for this (standard, measurement) pair.
    MissingSeries {
        /// Requested standard.
        standard: GrowthStandard,
        /// Requested measurement kind.
        measurement: MeasurementType,
    },

    /// The series holds fewer candidate rows than the lookup requires.
    TooFewReferenceRows {
        /// Rows available after filtering.
        got: usize,
        /// Minimum required rows.
        min: usize,
    },

    /// An LMS standard's series carries no LMS parameters.
    MissingLms {
        /// Requested standard.
        standard: GrowthStandard,
        /// Requested measurement kind.
        measurement: MeasurementType,
    },

    /// A reference row violates series invariants (duplicate or non-finite
    /// age anchor, wrong age scale for its standard).
    InvalidReferenceRow(String),

    /// A gestational table key is not of the form `"{weeks}+{days}"`.
    InvalidAgeLabel(String),

    /// A reference table document could not be parsed.
    MalformedTable(String),

    /// Reference distribution parameters would divide by zero (`M == 0` or
    /// `S == 0`).
    DegenerateDistribution {
        /// Median parameter of the offending row.
        m: f64,
        /// Coefficient-of-variation parameter of the offending row.
        s: f64,
    },
}

impl CentileError {
    /// Classify this error for domain-specific rendering.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingField { .. }
            | Self::InvalidSexCode { .. }
            | Self::UnsupportedMeasurement { .. }
            | Self::AgeOutOfRange { .. }
            | Self::GestationalWeeksOutOfRange { .. }
            | Self::GestationalDaysOutOfRange { .. }
            | Self::AgeScaleMismatch { .. }
            | Self::NonFiniteValue { .. }
            | Self::NonPositiveValue { .. }
            | Self::ValueAboveLimit { .. }
            | Self::MeasurementBeforeBirth { .. }
            | Self::InvalidBound { .. }
            | Self::DuplicateParameter { .. } => ErrorKind::Validation,

            Self::MissingSeries { .. }
            | Self::TooFewReferenceRows { .. }
            | Self::MissingLms { .. }
            | Self::InvalidReferenceRow(_)
            | Self::InvalidAgeLabel(_)
            | Self::MalformedTable(_) => ErrorKind::ReferenceData,

            Self::DegenerateDistribution { .. } => ErrorKind::Computation,
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for CentileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::MissingField { field } => write!(f, "Missing required field: {field}"),
            Self::InvalidSexCode { code } => {
                write!(f, "Invalid sex code: {code} (must be 1=male or 2=female)")
            }
            Self::UnsupportedMeasurement {
                standard,
                measurement,
            } => {
                write!(
                    f,
                    "Standard '{standard}' has no reference table for '{measurement}'"
                )
            }
            Self::AgeOutOfRange {
                standard,
                age_months,
                min,
                max,
            } => {
                write!(
                    f,
                    "Age {age_months} months is outside the supported range of '{standard}' ({min}-{max} months)"
                )
            }
            Self::GestationalWeeksOutOfRange { weeks, min, max } => {
                write!(
                    f,
                    "Gestational age {weeks} weeks is outside the supported range ({min}-{max} weeks)"
                )
            }
            Self::GestationalDaysOutOfRange { days } => {
                write!(f, "Gestational day component {days} (must be 0-6)")
            }
            Self::AgeScaleMismatch { standard } => {
                if standard.is_preterm() {
                    write!(f, "Standard '{standard}' requires a gestational age")
                } else {
                    write!(f, "Standard '{standard}' requires an age in months")
                }
            }
            Self::NonFiniteValue { value } => write!(f, "Measurement value is not finite: {value}"),
            Self::NonPositiveValue { value } => {
                write!(f, "Measurement value must be positive, got {value}")
            }
            Self::ValueAboveLimit {
                measurement,
                value,
                limit,
            } => {
                write!(
                    f,
                    "Implausible {measurement} value: {value} (limit {limit})"
                )
            }
            Self::MeasurementBeforeBirth { days } => {
                write!(
                    f,
                    "Measurement date precedes birth date by {} days",
                    -days
                )
            }
            Self::InvalidBound { parameter, value } => {
                write!(
                    f,
                    "Invalid bound '{parameter}': {value} (must be positive and finite)"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::MissingSeries {
                standard,
                measurement,
            } => {
                write!(
                    f,
                    "No reference series loaded for standard '{standard}', measurement '{measurement}'"
                )
            }
            Self::TooFewReferenceRows { got, min } => {
                write!(
                    f,
                    "Too few reference rows after filtering: got {got}, need at least {min}"
                )
            }
            Self::MissingLms {
                standard,
                measurement,
            } => {
                write!(
                    f,
                    "Series for standard '{standard}', measurement '{measurement}' carries no LMS parameters"
                )
            }
            Self::InvalidReferenceRow(msg) => write!(f, "Invalid reference row: {msg}"),
            Self::InvalidAgeLabel(label) => {
                write!(
                    f,
                    "Invalid gestational age label '{label}' (expected \"weeks+days\")"
                )
            }
            Self::MalformedTable(msg) => write!(f, "Malformed reference table: {msg}"),
            Self::DegenerateDistribution { m, s } => {
                write!(
                    f,
                    "Degenerate reference distribution: M={m}, S={s} (division by zero)"
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for CentileError {}
