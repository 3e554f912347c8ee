//! Layer 3: Store
//!
//! # Purpose
//!
//! This layer holds the Reference Data Store: the immutable tables of
//! per-age distribution parameters and percentile anchors that every lookup
//! reads. It covers the row/series containers and their invariants, the
//! serde record formats for the two published column schemes, and the keyed
//! registry with its process-wide load-once global.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Algorithms
//!   ↓
//! Layer 3: Store ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Reference rows, percentile anchors, and validated series containers.
pub mod series;

/// Serde record formats for published reference tables.
pub mod records;

/// Keyed registry of reference series and the process-wide store.
pub mod registry;
