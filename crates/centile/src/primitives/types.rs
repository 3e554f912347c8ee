//! Domain types for growth assessment.
//!
//! ## Purpose
//!
//! This module defines the vocabulary shared by every layer of the crate:
//! biological sex, the supported growth reference standards, anthropometric
//! measurement kinds, postnatal and gestational ages, and the measurement
//! input accepted by the engine.
//!
//! ## Design notes
//!
//! * **Closed enums**: Standards and measurement kinds are tagged enums, so
//!   dispatch is exhaustive and adding a standard is a compile-visible change.
//! * **Wire compatibility**: Serde renames match the external JSON contract
//!   (`cdc_child`, `headCircumference`, `male`/`female`, ...).
//! * **Domain metadata lives with the standard**: age windows and supported
//!   measurement kinds are methods on [`GrowthStandard`], not free tables.
//!
//! ## Key concepts
//!
//! * **Postnatal vs. gestational age**: CDC and WHO series are anchored on a
//!   continuous age in months; INTERGROWTH-21st series are anchored on a
//!   composite gestational age of whole weeks plus 0-6 days.
//! * **Sex encoding**: published reference tables encode male as 1 and
//!   female as 2; [`Sex::from_code`] preserves that convention.
//!
//! ## Invariants
//!
//! * [`GestationalAge::days`] is always in `[0, 6]` for values built through
//!   [`GestationalAge::new`] or [`GestationalAge::from_total_days`].
//! * Domain windows returned by [`GrowthStandard`] are inclusive bounds.
//!
//! ## Non-goals
//!
//! * This module does not validate measurements against domain windows
//!   (see the engine's `Validator`).
//! * This module does not hold reference table data.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::primitives::errors::CentileError;

// ============================================================================
// Sex
// ============================================================================

/// Biological sex, as encoded by published growth reference tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Encoded as `1` in reference tables.
    Male,

    /// Encoded as `2` in reference tables.
    Female,
}

impl Sex {
    /// Decode the numeric sex code used by published tables (1=male, 2=female).
    pub fn from_code(code: u8) -> Result<Self, CentileError> {
        match code {
            1 => Ok(Self::Male),
            2 => Ok(Self::Female),
            _ => Err(CentileError::InvalidSexCode { code }),
        }
    }

    /// The numeric code used by published tables.
    pub fn code(&self) -> u8 {
        match self {
            Self::Male => 1,
            Self::Female => 2,
        }
    }

    /// Lowercase name matching the wire contract.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl Display for Sex {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

// ============================================================================
// Growth Standards
// ============================================================================

/// A published growth reference standard.
///
/// Each standard defines its own measurement kinds, age domain, and
/// percentile computation method (LMS or direct table interpolation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthStandard {
    /// CDC 2000 charts for children, 24-240 months.
    CdcChild,

    /// CDC 2000 infant charts, 0-36 months.
    CdcInfant,

    /// WHO child growth standards, 0-24 months.
    Who,

    /// INTERGROWTH-21st preterm standards, 24-42 gestational weeks.
    Intergrowth,
}

impl GrowthStandard {
    /// Whether this standard is anchored on gestational rather than postnatal age.
    pub fn is_preterm(&self) -> bool {
        matches!(self, Self::Intergrowth)
    }

    /// Whether percentiles are computed via the LMS method.
    ///
    /// INTERGROWTH-21st tables publish percentile anchors only, so percentiles
    /// are interpolated directly from the tabulated values instead.
    pub fn uses_lms(&self) -> bool {
        !self.is_preterm()
    }

    /// Inclusive postnatal age window in months, for month-anchored standards.
    pub fn age_window(&self) -> Option<(f64, f64)> {
        match self {
            Self::CdcChild => Some((24.0, 240.0)),
            Self::CdcInfant => Some((0.0, 36.0)),
            Self::Who => Some((0.0, 24.0)),
            Self::Intergrowth => None,
        }
    }

    /// Inclusive gestational week window, for the preterm standard.
    pub fn gestational_window(&self) -> Option<(u32, u32)> {
        match self {
            Self::Intergrowth => Some((24, 42)),
            _ => None,
        }
    }

    /// Measurement kinds this standard publishes reference tables for.
    pub fn supported_measurements(&self) -> &'static [MeasurementType] {
        use MeasurementType::*;
        match self {
            Self::CdcChild => &[Weight, Height, Bmi],
            Self::CdcInfant => &[Weight, Height, HeadCircumference],
            Self::Who => &[Weight, Height, HeadCircumference, Bmi],
            Self::Intergrowth => &[Weight, Height, HeadCircumference],
        }
    }

    /// Whether a measurement kind is covered by this standard.
    pub fn supports(&self, measurement: MeasurementType) -> bool {
        self.supported_measurements().contains(&measurement)
    }

    /// Snake-case name matching the wire contract.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CdcChild => "cdc_child",
            Self::CdcInfant => "cdc_infant",
            Self::Who => "who",
            Self::Intergrowth => "intergrowth",
        }
    }
}

impl Display for GrowthStandard {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

// ============================================================================
// Measurement Kinds
// ============================================================================

/// An anthropometric measurement kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MeasurementType {
    /// Body weight in kilograms.
    Weight,

    /// Standing height or recumbent length in centimeters.
    Height,

    /// Head (occipitofrontal) circumference in centimeters.
    HeadCircumference,

    /// Body mass index in kg/m^2.
    Bmi,
}

impl MeasurementType {
    /// CamelCase name matching the wire contract.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Height => "height",
            Self::HeadCircumference => "headCircumference",
            Self::Bmi => "bmi",
        }
    }
}

impl Display for MeasurementType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

// ============================================================================
// Ages
// ============================================================================

/// Gestational age as whole weeks plus 0-6 days, e.g. `33+4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GestationalAge {
    /// Completed gestational weeks.
    pub weeks: u32,

    /// Additional days, 0-6.
    pub days: u32,
}

impl GestationalAge {
    /// Build a gestational age, rejecting a day component outside `[0, 6]`.
    pub fn new(weeks: u32, days: u32) -> Result<Self, CentileError> {
        if days > 6 {
            return Err(CentileError::GestationalDaysOutOfRange { days });
        }
        Ok(Self { weeks, days })
    }

    /// Rebuild from a total day count (`weeks * 7 + days`).
    pub fn from_total_days(total: u32) -> Self {
        Self {
            weeks: total / 7,
            days: total % 7,
        }
    }

    /// Total days since conception-dating zero: `weeks * 7 + days`.
    pub fn total_days(&self) -> u32 {
        self.weeks * 7 + self.days
    }

    /// The composite `"{weeks}+{days}"` key used by preterm reference tables.
    pub fn label(&self) -> String {
        format!("{}+{}", self.weeks, self.days)
    }

    /// Parse a `"{weeks}+{days}"` table key.
    pub fn from_label(label: &str) -> Result<Self, CentileError> {
        let invalid = || CentileError::InvalidAgeLabel(String::from(label));

        let (weeks, days) = label.split_once('+').ok_or_else(invalid)?;
        let weeks: u32 = weeks.trim().parse().map_err(|_| invalid())?;
        let days: u32 = days.trim().parse().map_err(|_| invalid())?;

        if days > 6 {
            return Err(CentileError::GestationalDaysOutOfRange { days });
        }

        Ok(Self { weeks, days })
    }
}

impl Display for GestationalAge {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}+{}", self.weeks, self.days)
    }
}

/// A query or anchor age on either of the two supported scales.
///
/// CDC and WHO series are anchored on a continuous postnatal age in months;
/// INTERGROWTH-21st series are anchored on gestational weeks plus days. A
/// reference series holds anchors of exactly one scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PediatricAge {
    /// Postnatal age in months (fractional values allowed).
    Months(f64),

    /// Gestational age for preterm standards.
    Gestational(GestationalAge),
}

impl PediatricAge {
    /// Scalar position on the series' own age axis: months, or total days.
    ///
    /// Only meaningful for ordering ages of the same scale.
    pub fn scalar(&self) -> f64 {
        match self {
            Self::Months(m) => *m,
            Self::Gestational(ga) => f64::from(ga.total_days()),
        }
    }

    /// Postnatal months, if this age is on the month scale.
    pub fn months(&self) -> Option<f64> {
        match self {
            Self::Months(m) => Some(*m),
            Self::Gestational(_) => None,
        }
    }

    /// Gestational age, if this age is on the gestational scale.
    pub fn gestational(&self) -> Option<GestationalAge> {
        match self {
            Self::Months(_) => None,
            Self::Gestational(ga) => Some(*ga),
        }
    }
}

impl Display for PediatricAge {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Months(m) => write!(f, "{m} months"),
            Self::Gestational(ga) => write!(f, "{ga} weeks"),
        }
    }
}

// ============================================================================
// Measurement Input
// ============================================================================

/// A single anthropometric observation to assess against a standard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Observed value (kg, cm, or kg/m^2 depending on the measurement kind).
    pub value: f64,

    /// Age at observation, on the scale of the target standard.
    pub age: PediatricAge,

    /// Sex of the child.
    pub sex: Sex,
}

impl Measurement {
    /// Convenience constructor for a month-anchored observation.
    pub fn postnatal(value: f64, age_months: f64, sex: Sex) -> Self {
        Self {
            value,
            age: PediatricAge::Months(age_months),
            sex,
        }
    }

    /// Convenience constructor for a gestational-age observation.
    pub fn preterm(value: f64, age: GestationalAge, sex: Sex) -> Self {
        Self {
            value,
            age: PediatricAge::Gestational(age),
            sex,
        }
    }
}
