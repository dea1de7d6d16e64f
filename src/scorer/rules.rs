//! Scoring Rules & Penalty Weights
//!
//! Every weight in the truth-probability pipeline, in pipeline order.
//! No scoring logic - constants only.

// ============================================================================
// STARTING SCORES
// ============================================================================

/// Probability with no evidence either way.
pub const INITIAL_PROBABILITY: f64 = 0.5;

/// Stability starts unshaken.
pub const INITIAL_STABILITY: f64 = 1.0;

// ============================================================================
// DECEPTION SIGNALS (shared with the indicator list)
// ============================================================================

/// Fear above this level counts as a deception signal.
pub const FEAR_SIGNAL_THRESHOLD: f64 = 0.15;

/// Muscle tension above this level is worth flagging.
pub const TENSION_SIGNAL_THRESHOLD: f64 = 0.3;

/// A fresh micro-expression must be at least this intense to flag.
pub const FRESH_MICRO_INTENSITY: f64 = 0.02;

// ============================================================================
// TRANSITION PENALTY
// ============================================================================

/// Valid transitions below this magnitude are reported but not penalized.
pub const TRANSITION_MAGNITUDE_MIN: f64 = 0.1;

pub const TRANSITION_PROBABILITY_WEIGHT: f64 = 0.3;
pub const TRANSITION_STABILITY_WEIGHT: f64 = 0.4;

// ============================================================================
// FEAR PENALTY
// ============================================================================

pub const FEAR_PROBABILITY_WEIGHT: f64 = 0.5;
pub const FEAR_STABILITY_WEIGHT: f64 = 0.5;

// ============================================================================
// MICRO-EXPRESSION PENALTIES
// ============================================================================

/// Per-member step for a multi-expression sequence.
pub const MICRO_GROUP_PROBABILITY_STEP: f64 = 0.05;
pub const MICRO_GROUP_STABILITY_STEP: f64 = 0.1;

/// A lone micro-expression must be at least this intense to penalize.
pub const SINGLE_MICRO_INTENSITY_MIN: f64 = 0.03;
pub const SINGLE_MICRO_PROBABILITY_PENALTY: f64 = 0.03;
pub const SINGLE_MICRO_STABILITY_PENALTY: f64 = 0.05;

// ============================================================================
// LANDMARK PENALTIES (probability only)
// ============================================================================

pub const ASYMMETRY_THRESHOLD: f64 = 0.2;
pub const ASYMMETRY_WEIGHT: f64 = 0.3;

pub const TENSION_THRESHOLD: f64 = 0.6;
pub const TENSION_WEIGHT: f64 = 0.2;

pub const RAPID_MOVEMENT_THRESHOLD: f64 = 0.3;
pub const RAPID_MOVEMENT_WEIGHT: f64 = 0.25;

pub const UNNATURAL_THRESHOLD: f64 = 0.3;
pub const UNNATURAL_WEIGHT: f64 = 0.35;

// ============================================================================
// BASELINE PENALTY
// ============================================================================

/// Only fearful/angry drift at least this large is penalized.
pub const BASELINE_DEVIATION_MIN: f64 = 0.1;

pub const BASELINE_PROBABILITY_WEIGHT: f64 = 0.4;
pub const BASELINE_STABILITY_WEIGHT: f64 = 0.5;

// ============================================================================
// DOMINANT EMOTIONS
// ============================================================================

/// Channels at or above this intensity count as dominant.
pub const DOMINANT_INTENSITY_MIN: f64 = 0.05;
