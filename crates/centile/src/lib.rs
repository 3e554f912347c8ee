//! # Centile — Pediatric Growth Reference Engine for Rust
//!
//! A pure, stateless engine that converts a child's anthropometric
//! measurement (weight, height/length, head circumference, BMI) plus age and
//! sex into a percentile and Z-score against a published pediatric growth
//! reference standard.
//!
//! ## Supported standards
//!
//! | Standard | Measurements | Age domain | Method |
//! |---|---|---|---|
//! | CDC (child) | weight, height, BMI | 24-240 months | LMS |
//! | CDC (infant) | weight, height, head circumference | 0-36 months | LMS |
//! | WHO | weight, height, head circumference, BMI | 0-24 months | LMS |
//! | INTERGROWTH-21st | weight, length, head circumference | 24-42 gestational weeks | percentile table |
//!
//! CDC and WHO standards publish LMS (Box-Cox) parameters per age anchor;
//! the engine interpolates them to the exact query age, computes a Z-score,
//! and converts it to a percentile through the Abramowitz-Stegun normal-CDF
//! approximation. INTERGROWTH-21st publishes percentile anchors only, so the
//! percentile is interpolated directly between tabulated values.
//!
//! ## Quick Start
//!
//! ```rust
//! use centile::prelude::*;
//!
//! // Reference tables are loaded once at startup; two WHO weight-for-age
//! // anchors for boys are enough for a working example.
//! let rows = vec![
//!     ReferenceRow {
//!         sex: Male,
//!         age: PediatricAge::Months(11.0),
//!         lms: Some(LmsParams::new(-0.0756, 9.4089, 0.11316)),
//!         anchors: PercentileAnchors {
//!             p3: 7.72, p5: 7.93, p10: 8.23, p25: Some(8.77),
//!             p50: 9.41, p75: Some(10.11), p90: 10.82, p95: 11.28, p97: 11.59,
//!         },
//!     },
//!     ReferenceRow {
//!         sex: Male,
//!         age: PediatricAge::Months(12.0),
//!         lms: Some(LmsParams::new(-0.0884, 9.6479, 0.11392)),
//!         anchors: PercentileAnchors {
//!             p3: 7.90, p5: 8.12, p10: 8.43, p25: Some(8.98),
//!             p50: 9.65, p75: Some(10.37), p90: 11.10, p95: 11.57, p97: 11.89,
//!         },
//!     },
//! ];
//!
//! let mut store = ReferenceStore::new();
//! store.insert(ReferenceSeries::new(Who, Weight, rows)?);
//!
//! // Build the engine
//! let engine = Centile::new().build(&store)?;
//!
//! // Assess a 9.6 kg boy at 12 months
//! let result = engine.assess(Who, Weight, &Measurement::postnatal(9.6, 12.0, Male))?;
//!
//! println!("{}", result);
//! # Result::<(), CentileError>::Ok(())
//! ```
//!
//! ### Configured engines
//!
//! The behaviors that differ between historical call sites are explicit
//! configuration, not hard-coded choices:
//!
//! ```rust
//! use centile::prelude::*;
//!
//! # let store = ReferenceStore::new();
//! let engine = Centile::new()
//!     .lookup_mode(LmsOnly)          // copy anchors from the lower row
//!     .preterm_lookup(Interpolated)  // interpolate preterm anchors
//!     .age_rounding(HalfMonth)       // round query ages to 0.5 months
//!     .max_weight_kg(300.0)          // plausibility caps
//!     .max_height_cm(250.0)
//!     .build(&store)?;
//! # let _ = engine;
//! # Result::<(), CentileError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `assess` returns a `Result<PercentileResult, CentileError>`. Errors are
//! pure values partitioned into three kinds — validation, reference data,
//! and computation — so callers can render domain-specific messages:
//!
//! ```rust
//! use centile::prelude::*;
//!
//! # let store = ReferenceStore::new();
//! let engine = Centile::new().build(&store)?;
//! let toddler = Measurement::postnatal(11.5, 23.0, Female);
//!
//! match engine.assess(CdcChild, Weight, &toddler) {
//!     Ok(result) => println!("percentile {:.1}", result.calculated_percentile),
//!     Err(e) if e.kind() == ErrorKind::Validation => {
//!         // e.g. age 23 months is below the CDC child window (24-240)
//!         eprintln!("invalid request: {e}");
//!     }
//!     Err(e) => eprintln!("assessment failed: {e}"),
//! }
//! # Result::<(), CentileError>::Ok(())
//! ```
//!
//! ## no_std support
//!
//! The crate supports `no_std` environments (reference tables built in
//! code or deserialized through `serde` with `alloc`). Disable default
//! features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! centile = { version = "0.1", default-features = false }
//! ```
//!
//! JSON table loading, the process-wide store, and date-based age
//! derivation require `std`.
//!
//! ## References
//!
//! - Cole, T. J. (1990). "The LMS method for constructing normalized
//!   growth standards"
//! - Abramowitz, M. & Stegun, I. A. (1964). "Handbook of Mathematical
//!   Functions", formula 7.1.26
//! - Villar, J. et al. (2014). "International standards for newborn weight,
//!   length, and head circumference by gestational age and sex"

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - domain types, errors, and age utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Store - immutable reference table data.
mod store;

// Layer 4: Algorithms - lookup, interpolation, and percentile computation.
mod algorithms;

// Layer 5: Engine - validation, orchestration, and output.
mod engine;

// High-level fluent API for growth assessment.
mod api;

// Standard centile prelude.
pub mod prelude {
    pub use crate::api::{
        AgeRounding::{Exact, HalfMonth},
        CentileBuilder as Centile, CentileEngine, CentileError, ErrorKind, GestationalAge,
        GrowthStandard::{CdcChild, CdcInfant, Intergrowth, Who},
        InterpolatedPoint, LmsParams,
        LookupMode::{FullInterpolation, LmsOnly},
        Measurement,
        MeasurementType::{Bmi, HeadCircumference, Height, Weight},
        PediatricAge, PercentileAnchors, PercentileResult,
        PretermLookup::{Interpolated, Nearest},
        RawRequest, ReferenceRow, ReferenceSeries,
        Sex::{Female, Male},
    };
    pub use crate::primitives::types::{GrowthStandard, MeasurementType, Sex};
    pub use crate::store::registry::ReferenceStore;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod store {
        pub use crate::store::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
