//! Basic numerical concepts used throughout the crate

#![allow(missing_docs)]

// Floating-point precision is configured here
#[cfg(feature = "f32")]
pub type Float = f32;
#[cfg(feature = "f32")]
pub use std::f32 as floats;
#[cfg(not(feature = "f32"))]
pub type Float = f64;
#[cfg(not(feature = "f32"))]
pub use std::f64 as floats;

/// Relative tolerance that is appropriate for comparing derived kinematic
/// quantities at the configured precision
pub const DEFAULT_MAX_RELATIVE: Float = 1e3 * floats::EPSILON;
