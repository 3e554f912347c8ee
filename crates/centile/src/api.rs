//! High-level API for growth assessment.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements
//! a fluent builder for configuring engine behavior, the engine handle that
//! runs assessments against a reference store, and the wire-format request
//! that mirrors the external JSON contract.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all
//!   parameters; `Centile::new().build(&store)` is a working engine.
//! * **Validated**: Configuration is validated once, when `.build()` is
//!   called; setting the same parameter twice is reported there.
//! * **Borrowing**: the engine borrows the store it reads, so one immutable
//!   store can back any number of engines and threads.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: create a [`CentileBuilder`] via
//!   `Centile::new()`, chain configuration methods, then `.build(&store)`.
//! * **Wire requests**: [`RawRequest`] deserializes the flattened JSON
//!   input (`ageMonths` / `gestationalWeeks` / `gestationalDays`) and
//!   resolves it into a typed request, surfacing missing fields as
//!   validation errors.

// External dependencies
use serde::Deserialize;

// Internal dependencies
use crate::engine::executor::{AssessmentConfig, Executor};
use crate::engine::validator::{Validator, ValueCaps};
use crate::store::registry::ReferenceStore;

// Publicly re-exported types
pub use crate::algorithms::gestational::PretermLookup;
pub use crate::algorithms::lookup::{InterpolatedPoint, LookupMode};
pub use crate::engine::output::PercentileResult;
pub use crate::math::lms::LmsParams;
pub use crate::primitives::age::AgeRounding;
pub use crate::primitives::errors::{CentileError, ErrorKind};
pub use crate::primitives::types::{
    GestationalAge, GrowthStandard, Measurement, MeasurementType, PediatricAge, Sex,
};
pub use crate::store::series::{PercentileAnchors, ReferenceRow, ReferenceSeries};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a growth assessment engine.
#[derive(Debug, Clone, Default)]
pub struct CentileBuilder {
    /// Interpolation behavior for month-anchored lookups.
    pub lookup_mode: Option<LookupMode>,

    /// Resolution behavior for gestational-age lookups.
    pub preterm_lookup: Option<PretermLookup>,

    /// Rounding applied to postnatal query ages before lookup.
    pub age_rounding: Option<AgeRounding>,

    /// Override for the maximum plausible weight in kilograms.
    pub max_weight_kg: Option<f64>,

    /// Override for the maximum plausible height in centimeters.
    pub max_height_cm: Option<f64>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl CentileBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the interpolation behavior for month-anchored lookups.
    pub fn lookup_mode(mut self, mode: LookupMode) -> Self {
        if self.lookup_mode.is_some() {
            self.duplicate_param = Some("lookup_mode");
        }
        self.lookup_mode = Some(mode);
        self
    }

    /// Set the resolution behavior for gestational-age lookups.
    pub fn preterm_lookup(mut self, mode: PretermLookup) -> Self {
        if self.preterm_lookup.is_some() {
            self.duplicate_param = Some("preterm_lookup");
        }
        self.preterm_lookup = Some(mode);
        self
    }

    /// Set the rounding policy for postnatal query ages.
    pub fn age_rounding(mut self, rounding: AgeRounding) -> Self {
        if self.age_rounding.is_some() {
            self.duplicate_param = Some("age_rounding");
        }
        self.age_rounding = Some(rounding);
        self
    }

    /// Override the maximum plausible weight for every standard.
    pub fn max_weight_kg(mut self, limit: f64) -> Self {
        if self.max_weight_kg.is_some() {
            self.duplicate_param = Some("max_weight_kg");
        }
        self.max_weight_kg = Some(limit);
        self
    }

    /// Override the maximum plausible height for every standard.
    pub fn max_height_cm(mut self, limit: f64) -> Self {
        if self.max_height_cm.is_some() {
            self.duplicate_param = Some("max_height_cm");
        }
        self.max_height_cm = Some(limit);
        self
    }

    /// Build an engine over a reference store.
    pub fn build(self, store: &ReferenceStore) -> Result<CentileEngine<'_>, CentileError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate overridden caps
        if let Some(limit) = self.max_weight_kg {
            Validator::validate_bound("max_weight_kg", limit)?;
        }
        if let Some(limit) = self.max_height_cm {
            Validator::validate_bound("max_height_cm", limit)?;
        }

        let caps_override = match (self.max_weight_kg, self.max_height_cm) {
            (None, None) => None,
            (max_weight_kg, max_height_cm) => Some(ValueCaps {
                max_weight_kg,
                max_height_cm,
            }),
        };

        Ok(CentileEngine {
            store,
            config: AssessmentConfig {
                lookup_mode: self.lookup_mode.unwrap_or_default(),
                preterm_lookup: self.preterm_lookup.unwrap_or_default(),
                age_rounding: self.age_rounding.unwrap_or_default(),
                caps_override,
            },
        })
    }
}

// ============================================================================
// Engine
// ============================================================================

/// A configured growth assessment engine over an immutable reference store.
///
/// Stateless per call: safe to share across threads and invoke concurrently.
#[derive(Debug, Clone, Copy)]
pub struct CentileEngine<'a> {
    store: &'a ReferenceStore,
    config: AssessmentConfig,
}

impl<'a> CentileEngine<'a> {
    /// Assess one measurement against a standard.
    pub fn assess(
        &self,
        standard: GrowthStandard,
        measurement: MeasurementType,
        input: &Measurement,
    ) -> Result<PercentileResult, CentileError> {
        Executor::run(self.store, &self.config, standard, measurement, input)
    }

    /// Resolve the percentile band at a query age, without a value.
    ///
    /// Chart consumers call this per plotted age to build reference curves.
    pub fn reference_at(
        &self,
        standard: GrowthStandard,
        measurement: MeasurementType,
        sex: Sex,
        age: &PediatricAge,
    ) -> Result<InterpolatedPoint, CentileError> {
        Validator::validate_measurement_support(standard, measurement)?;
        Validator::validate_age(standard, age)?;
        Executor::resolve_point(self.store, &self.config, standard, measurement, sex, age)
    }

    /// The resolved configuration this engine runs with.
    pub fn config(&self) -> &AssessmentConfig {
        &self.config
    }
}

// ============================================================================
// Wire Request
// ============================================================================

/// The flattened JSON request accepted at the external boundary.
///
/// Exactly one age representation must be present: `ageMonths` for CDC/WHO
/// standards, or `gestationalWeeks` (+ optional `gestationalDays`) for the
/// preterm standard. [`RawRequest::resolve`] enforces this.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRequest {
    /// Target growth standard.
    pub standard: GrowthStandard,

    /// Measurement kind.
    pub measurement_type: MeasurementType,

    /// Sex of the child.
    pub sex: Sex,

    /// Observed value.
    pub value: f64,

    /// Postnatal age in months (CDC/WHO standards).
    #[serde(default)]
    pub age_months: Option<f64>,

    /// Completed gestational weeks (preterm standard).
    #[serde(default)]
    pub gestational_weeks: Option<u32>,

    /// Additional gestational days, 0-6 (preterm standard; defaults to 0).
    #[serde(default)]
    pub gestational_days: Option<u32>,
}

impl RawRequest {
    /// Resolve into a typed (standard, measurement kind, measurement) triple.
    pub fn resolve(
        self,
    ) -> Result<(GrowthStandard, MeasurementType, Measurement), CentileError> {
        let age = if self.standard.is_preterm() {
            let weeks = self
                .gestational_weeks
                .ok_or(CentileError::MissingField {
                    field: "gestationalWeeks",
                })?;
            let days = self.gestational_days.unwrap_or(0);
            PediatricAge::Gestational(GestationalAge::new(weeks, days)?)
        } else {
            let months = self.age_months.ok_or(CentileError::MissingField {
                field: "ageMonths",
            })?;
            PediatricAge::Months(months)
        };

        Ok((
            self.standard,
            self.measurement_type,
            Measurement {
                value: self.value,
                age,
                sex: self.sex,
            },
        ))
    }
}
