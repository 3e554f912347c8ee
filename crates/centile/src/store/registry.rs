//! Keyed registry of reference series and the process-wide store.
//!
//! ## Purpose
//!
//! This module provides [`ReferenceStore`], the indexed collection of
//! [`ReferenceSeries`] keyed by (standard, measurement), and the load-once
//! process-wide instance that mirrors how deployments hold their reference
//! tables for the process lifetime.
//!
//! ## Design notes
//!
//! * **Two phases**: a store is mutable while being populated and read-only
//!   once handed to an engine or installed globally; the type system
//!   enforces this through `&self` lookups.
//! * **First install wins**: repeat global installs are ignored (with a
//!   warning), matching the load-once/no-teardown lifecycle.
//! * **No fabrication**: a missing (standard, measurement) pair is an error
//!   at lookup time, never an empty stand-in series.
//!
//! ## Key concepts
//!
//! * **Series key**: the (standard, measurement) pair; sex is a filter
//!   within a series, not part of the key.
//!
//! ## Invariants
//!
//! * Every stored series passed [`ReferenceSeries::new`] validation.
//! * The global store, once installed, never changes.
//!
//! ## Non-goals
//!
//! * This module does not interpolate or compute percentiles.
//! * This module does not watch for or reload changed table files.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::BTreeMap;
#[cfg(feature = "std")]
use std::sync::OnceLock;

// Internal dependencies
use crate::primitives::errors::CentileError;
use crate::primitives::types::{GrowthStandard, MeasurementType};
#[cfg(feature = "std")]
use crate::store::records::{lms_rows_from_json, preterm_rows_from_json};
use crate::store::series::ReferenceSeries;

// ============================================================================
// Reference Store
// ============================================================================

/// Indexed, read-only collection of reference series.
#[derive(Debug, Clone, Default)]
pub struct ReferenceStore {
    series: BTreeMap<(GrowthStandard, MeasurementType), ReferenceSeries>,
}

impl ReferenceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a series, keyed by its own standard and measurement kind.
    ///
    /// Replaces any series already present under the same key.
    pub fn insert(&mut self, series: ReferenceSeries) {
        self.series
            .insert((series.standard(), series.measurement()), series);
    }

    /// Parse an LMS-scheme JSON table and insert it as a series.
    #[cfg(feature = "std")]
    pub fn insert_lms_json(
        &mut self,
        standard: GrowthStandard,
        measurement: MeasurementType,
        json: &str,
    ) -> Result<(), CentileError> {
        let rows = lms_rows_from_json(json)?;
        log::debug!(
            "loaded {} LMS rows for {standard}/{measurement}",
            rows.len()
        );
        self.insert(ReferenceSeries::new(standard, measurement, rows)?);
        Ok(())
    }

    /// Parse a preterm-scheme JSON table and insert it as a series.
    #[cfg(feature = "std")]
    pub fn insert_preterm_json(
        &mut self,
        standard: GrowthStandard,
        measurement: MeasurementType,
        json: &str,
    ) -> Result<(), CentileError> {
        let rows = preterm_rows_from_json(json)?;
        log::debug!(
            "loaded {} preterm rows for {standard}/{measurement}",
            rows.len()
        );
        self.insert(ReferenceSeries::new(standard, measurement, rows)?);
        Ok(())
    }

    /// Look up the series for a (standard, measurement) pair.
    pub fn series(
        &self,
        standard: GrowthStandard,
        measurement: MeasurementType,
    ) -> Result<&ReferenceSeries, CentileError> {
        self.series
            .get(&(standard, measurement))
            .ok_or(CentileError::MissingSeries {
                standard,
                measurement,
            })
    }

    /// Number of loaded series.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Whether the store holds no series.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

// ============================================================================
// Process-Wide Store
// ============================================================================

#[cfg(feature = "std")]
static GLOBAL_STORE: OnceLock<ReferenceStore> = OnceLock::new();

#[cfg(feature = "std")]
impl ReferenceStore {
    /// Install this store as the process-wide instance.
    ///
    /// The first install wins; later calls are ignored with a warning and
    /// the already-installed store is returned.
    pub fn install(self) -> &'static ReferenceStore {
        let mut installed = false;
        let store = GLOBAL_STORE.get_or_init(|| {
            installed = true;
            self
        });
        if installed {
            log::info!("reference store installed ({} series)", store.len());
        } else {
            log::warn!("reference store already installed; ignoring reinstall");
        }
        store
    }

    /// The process-wide store, if one has been installed.
    pub fn global() -> Option<&'static ReferenceStore> {
        GLOBAL_STORE.get()
    }
}
