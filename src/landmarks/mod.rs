//! Landmarks Module
//!
//! Optional face-geometry input and the stress metrics derived from it.
//! When no landmark frame accompanies a sample, the evaluator simply
//! does not run and its metrics are absent.
//!
//! ## Structure
//! - `types`: Wire-shaped geometry types and DeceptionMetrics
//! - `tension`: Asymmetry, muscle tension, movement, and unnaturalness

pub mod tension;
pub mod types;

// Re-export main types for convenience
pub use types::{DeceptionMetrics, FaceLandmarks};
