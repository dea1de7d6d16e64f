//! Transition Module
//!
//! Frame-to-frame emotion change tracking. Each incoming frame is
//! compared against the previous one; per-channel changes are graded by
//! timing, and only changes inside the optimal reaction window survive
//! into the rolling history the scorer reads.
//!
//! ## Structure
//! - `types`: Core types (TransitionRecord, TimingVerdict, ChangeDirection)
//! - `rules`: Timing windows and change thresholds
//! - `tracker`: Comparison and grading logic

pub mod rules;
pub mod tracker;
pub mod types;


// Re-export main types for convenience
pub use tracker::TransitionTracker;
pub use types::{ChangeDirection, TimingVerdict, TransitionRecord};
