//! Micro-Expression Module
//!
//! Sub-threshold emotional flickers. Every non-neutral channel with a
//! present intensity is logged, grouped into time-based sequences, and
//! mined for the short patterns that matter when scoring an answer.
//!
//! ## Structure
//! - `types`: Core types (MicroExpression, IntensityTier, DurationClass)
//! - `rules`: Detection floor, duration caps, sequence windows
//! - `detector`: Logging and sequence analysis

pub mod detector;
pub mod rules;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export main types for convenience
pub use detector::MicroExpressionLog;
pub use types::{DurationClass, IntensityTier, MicroExpression};
