//! Layer 4: Algorithms
//!
//! This layer implements the core logic of the engine: resolving a query
//! age to an interpolated reference point (on the month scale and on the
//! gestational scale) and converting a measurement value plus a reference
//! point into a percentile. It is orchestrated by the engine layer.

// Postnatal (month-anchored) lookup and interpolation.
pub mod lookup;

// Gestational-age lookup for the preterm standard.
pub mod gestational;

// Percentile computation: LMS method and direct table interpolation.
pub mod percentile;
