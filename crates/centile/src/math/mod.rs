//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout the
//! engine:
//! - The Abramowitz-Stegun error function and standard normal CDF
//! - The LMS (Box-Cox) distribution transform
//! - Linear interpolation primitives
//!
//! These are reusable mathematical building blocks with no standard-specific
//! logic.
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
//! Layer 3: Store
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Error function and normal CDF approximations.
pub mod erf;

/// LMS (Box-Cox power) distribution parameters and Z-score transform.
pub mod lms;

/// Linear interpolation primitives.
pub mod linear;
