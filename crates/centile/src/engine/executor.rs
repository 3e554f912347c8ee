//! Dispatch and orchestration for assessments.
//!
//! ## Purpose
//!
//! This module provides the execution core shared by every public entry
//! point: it validates a request, resolves the reference point through the
//! lookup matching the standard's age scale, selects the percentile method,
//! and assembles the [`PercentileResult`].
//!
//! ## Design notes
//!
//! * **Stateless per call**: the executor reads the immutable store and
//!   allocates only ephemeral structures, so calls are safe to issue
//!   concurrently from any number of threads without coordination.
//! * **Standard dispatch**: the standard/measurement pair is a tagged
//!   dispatch here, replacing the per-chart copies it consolidates.
//! * **Configuration over guessing**: the lookup mode, preterm mode, age
//!   rounding, and value caps are carried in [`AssessmentConfig`]; the
//!   defaults mirror the most common observed call sites.
//!
//! ## Key concepts
//!
//! * **Method selection**: LMS standards require interpolated L/M/S (a
//!   series without them is a reference-data error); the preterm standard
//!   reads percentile anchors directly and yields no Z-score.
//!
//! ## Invariants
//!
//! * Validation runs before any store access; no result is produced for an
//!   out-of-domain request.
//! * Identical inputs produce bit-identical outputs.
//!
//! ## Non-goals
//!
//! * This module does not parse wire requests (see the API layer).
//! * This module does not load reference data.

// Internal dependencies
use crate::algorithms::gestational::{lookup_gestational, PretermLookup};
use crate::algorithms::lookup::{interpolate_at, InterpolatedPoint, LookupMode};
use crate::algorithms::percentile::{percentile_from_anchors, percentile_from_lms};
use crate::engine::output::PercentileResult;
use crate::engine::validator::{Validator, ValueCaps};
use crate::primitives::age::AgeRounding;
use crate::primitives::errors::CentileError;
use crate::primitives::types::{GrowthStandard, Measurement, MeasurementType, PediatricAge, Sex};
use crate::store::registry::ReferenceStore;

// ============================================================================
// Configuration
// ============================================================================

/// Resolved configuration for assessment execution.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssessmentConfig {
    /// Interpolation behavior for month-anchored lookups.
    pub lookup_mode: LookupMode,

    /// Resolution behavior for gestational-age lookups.
    pub preterm_lookup: PretermLookup,

    /// Rounding applied to postnatal query ages before lookup.
    pub age_rounding: AgeRounding,

    /// Value caps overriding the per-standard defaults, if set.
    pub caps_override: Option<ValueCaps>,
}

impl AssessmentConfig {
    /// The caps in effect for a standard under this configuration.
    pub fn caps_for(&self, standard: GrowthStandard) -> ValueCaps {
        self.caps_override
            .unwrap_or_else(|| ValueCaps::for_standard(standard))
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Stateless execution core for growth assessments.
pub struct Executor;

impl Executor {
    /// Assess one measurement against a standard.
    pub fn run(
        store: &ReferenceStore,
        config: &AssessmentConfig,
        standard: GrowthStandard,
        measurement: MeasurementType,
        input: &Measurement,
    ) -> Result<PercentileResult, CentileError> {
        let caps = config.caps_for(standard);
        Validator::validate_request(standard, measurement, input, &caps)?;

        let point = Self::resolve_point(store, config, standard, measurement, input.sex, &input.age)?;

        let (z_score, calculated_percentile) = if standard.uses_lms() {
            let lms = point.lms.as_ref().ok_or(CentileError::MissingLms {
                standard,
                measurement,
            })?;
            let (z, pct) = percentile_from_lms(input.value, lms)?;
            (Some(z), pct)
        } else {
            (None, percentile_from_anchors(input.value, &point.anchors))
        };

        Ok(PercentileResult {
            value: input.value,
            percentiles: point.anchors,
            calculated_percentile,
            z_score,
        })
    }

    /// Resolve the reference point at a query age, without assessing a value.
    ///
    /// The age must already satisfy the standard's domain (the public entry
    /// points validate it first).
    pub fn resolve_point(
        store: &ReferenceStore,
        config: &AssessmentConfig,
        standard: GrowthStandard,
        measurement: MeasurementType,
        sex: Sex,
        age: &PediatricAge,
    ) -> Result<InterpolatedPoint, CentileError> {
        let series = store.series(standard, measurement)?;

        match age {
            PediatricAge::Months(months) => {
                let Some(window) = standard.age_window() else {
                    return Err(CentileError::AgeScaleMismatch { standard });
                };
                let query = config.age_rounding.apply(*months);
                interpolate_at(series, sex, query, window, config.lookup_mode)
            }
            PediatricAge::Gestational(ga) => {
                if !standard.is_preterm() {
                    return Err(CentileError::AgeScaleMismatch { standard });
                }
                lookup_gestational(series, sex, *ga, config.preterm_lookup)
            }
        }
    }
}
