//! Scorer Module
//!
//! The truth-probability pipeline. Starting from the no-evidence scores,
//! each rule source (transitions, fear, micro-expressions, landmark
//! metrics, baseline drift) subtracts its penalty in a fixed order; the
//! result carries the full breakdown and an observation log explaining
//! every deduction.
//!
//! ## Structure
//! - `types`: AnalysisResult, ScoreBreakdown, DominantEmotion
//! - `rules`: Penalty weights and signal thresholds
//! - `engine`: Orchestration and observation assembly

pub mod engine;
pub mod rules;
pub mod types;


// Re-export main types for convenience
pub use engine::{dominant_emotions, score_answer};
pub use types::{AnalysisResult, DominantEmotion, ScoreBreakdown};
