//! Input validation for growth assessments.
//!
//! ## Purpose
//!
//! This module provides the validation functions that gate every lookup and
//! percentile computation: measurement-kind support, domain age windows,
//! value plausibility caps, and builder configuration checks.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Per-standard caps**: the weight/height plausibility caps come from
//!   the CDC validators in the observed system; they are carried as
//!   per-standard defaults that a caller can override, not as universal
//!   constants.
//!
//! ## Key concepts
//!
//! * **Domain windows**: inclusive age bounds per standard (months) and the
//!   gestational window of the preterm standard (weeks 24-42, days 0-6).
//! * **Value caps**: `value > 0` always; weight <= 300 kg and height <= 250
//!   cm where a cap is configured.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective domain constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not look up or interpolate reference data.
//! * This module does not provide automatic correction of invalid inputs.

// Internal dependencies
use crate::primitives::errors::CentileError;
use crate::primitives::types::{
    GestationalAge, GrowthStandard, Measurement, MeasurementType, PediatricAge,
};

// ============================================================================
// Value Caps
// ============================================================================

/// Plausibility caps applied to measurement values, per standard.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValueCaps {
    /// Maximum plausible weight in kilograms, if capped.
    pub max_weight_kg: Option<f64>,

    /// Maximum plausible height/length in centimeters, if capped.
    pub max_height_cm: Option<f64>,
}

impl ValueCaps {
    /// Default caps observed per standard: the CDC validators cap weight at
    /// 300 kg and height at 250 cm; the other validators carry no cap.
    pub fn for_standard(standard: GrowthStandard) -> Self {
        match standard {
            GrowthStandard::CdcChild | GrowthStandard::CdcInfant => Self {
                max_weight_kg: Some(300.0),
                max_height_cm: Some(250.0),
            },
            GrowthStandard::Who | GrowthStandard::Intergrowth => Self::default(),
        }
    }

    /// The cap applying to a measurement kind, if any.
    pub fn limit_for(&self, measurement: MeasurementType) -> Option<f64> {
        match measurement {
            MeasurementType::Weight => self.max_weight_kg,
            MeasurementType::Height => self.max_height_cm,
            MeasurementType::HeadCircumference | MeasurementType::Bmi => None,
        }
    }
}

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for assessment requests and engine configuration.
///
/// Provides static methods returning `Result<(), CentileError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Request Validation
    // ========================================================================

    /// Validate a full assessment request against a standard's domain.
    pub fn validate_request(
        standard: GrowthStandard,
        measurement: MeasurementType,
        input: &Measurement,
        caps: &ValueCaps,
    ) -> Result<(), CentileError> {
        Self::validate_measurement_support(standard, measurement)?;
        Self::validate_value(measurement, input.value, caps)?;
        Self::validate_age(standard, &input.age)?;
        Ok(())
    }

    /// Check that the standard publishes a table for the measurement kind.
    pub fn validate_measurement_support(
        standard: GrowthStandard,
        measurement: MeasurementType,
    ) -> Result<(), CentileError> {
        if !standard.supports(measurement) {
            return Err(CentileError::UnsupportedMeasurement {
                standard,
                measurement,
            });
        }
        Ok(())
    }

    /// Check value finiteness, positivity, and the configured cap.
    pub fn validate_value(
        measurement: MeasurementType,
        value: f64,
        caps: &ValueCaps,
    ) -> Result<(), CentileError> {
        if !value.is_finite() {
            return Err(CentileError::NonFiniteValue { value });
        }
        if value <= 0.0 {
            return Err(CentileError::NonPositiveValue { value });
        }
        if let Some(limit) = caps.limit_for(measurement) {
            if value > limit {
                return Err(CentileError::ValueAboveLimit {
                    measurement,
                    value,
                    limit,
                });
            }
        }
        Ok(())
    }

    /// Check that the age is on the standard's scale and inside its domain.
    pub fn validate_age(
        standard: GrowthStandard,
        age: &PediatricAge,
    ) -> Result<(), CentileError> {
        match (age, standard.is_preterm()) {
            (PediatricAge::Months(months), false) => {
                Self::validate_age_months(standard, *months)
            }
            (PediatricAge::Gestational(ga), true) => Self::validate_gestational(standard, *ga),
            _ => Err(CentileError::AgeScaleMismatch { standard }),
        }
    }

    /// Check a postnatal age against the standard's month window.
    pub fn validate_age_months(
        standard: GrowthStandard,
        age_months: f64,
    ) -> Result<(), CentileError> {
        let Some((min, max)) = standard.age_window() else {
            return Err(CentileError::AgeScaleMismatch { standard });
        };
        if !age_months.is_finite() || age_months < min || age_months > max {
            return Err(CentileError::AgeOutOfRange {
                standard,
                age_months,
                min,
                max,
            });
        }
        Ok(())
    }

    /// Check a gestational age against the preterm standard's window.
    pub fn validate_gestational(
        standard: GrowthStandard,
        age: GestationalAge,
    ) -> Result<(), CentileError> {
        let Some((min, max)) = standard.gestational_window() else {
            return Err(CentileError::AgeScaleMismatch { standard });
        };
        if age.days > 6 {
            return Err(CentileError::GestationalDaysOutOfRange { days: age.days });
        }
        if age.weeks < min || age.weeks > max {
            return Err(CentileError::GestationalWeeksOutOfRange {
                weeks: age.weeks,
                min,
                max,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Configuration Validation
    // ========================================================================

    /// Check that a configured bound is positive and finite.
    pub fn validate_bound(
        parameter: &'static str,
        value: f64,
    ) -> Result<(), CentileError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(CentileError::InvalidBound { parameter, value });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), CentileError> {
        if let Some(parameter) = duplicate_param {
            return Err(CentileError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
