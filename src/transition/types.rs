//! Transition Types
//!
//! Core types for frame-to-frame emotion changes.
//! Data structures only - no tracking logic.

use serde::{Deserialize, Serialize};

use crate::emotion::{percent, Emotion};

use super::rules;

// ============================================================================
// TIMING VERDICT
// ============================================================================

/// Whether a change's timing makes it usable evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimingVerdict {
    /// Inside the optimal reaction window.
    Valid,
    /// Faster than a facial muscle can move, treated as sensor noise.
    TooFast,
    /// Real but outside the window the rules trust.
    OutsideWindow,
}

impl TimingVerdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimingVerdict::Valid => "valid",
            TimingVerdict::TooFast => "too_fast",
            TimingVerdict::OutsideWindow => "outside_window",
        }
    }
}

impl std::fmt::Display for TimingVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// CHANGE DIRECTION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDirection {
    Rise,
    Fall,
}

impl ChangeDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeDirection::Rise => "rise",
            ChangeDirection::Fall => "fall",
        }
    }
}

// ============================================================================
// TRANSITION RECORD
// ============================================================================

/// One per-channel intensity change between two observed frames.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub emotion: Emotion,
    pub from_intensity: f64,
    pub to_intensity: f64,
    /// When the change was observed (unix millis).
    pub timestamp_ms: i64,
    /// Time since the previous frame.
    pub elapsed_ms: i64,
    /// Absolute intensity delta.
    pub magnitude: f64,
    pub verdict: TimingVerdict,
    /// Tier and timing annotation, human readable.
    pub significance: String,
}

impl TransitionRecord {
    pub fn is_valid(&self) -> bool {
        self.verdict == TimingVerdict::Valid
    }

    pub fn direction(&self) -> ChangeDirection {
        if self.to_intensity >= self.from_intensity {
            ChangeDirection::Rise
        } else {
            ChangeDirection::Fall
        }
    }

    /// Observation-log line for this change.
    pub fn describe(&self) -> String {
        let tier = if self.magnitude >= rules::DRAMATIC_CHANGE {
            "Abrupt change"
        } else if self.magnitude >= rules::SIGNIFICANT_CHANGE {
            "Significant change"
        } else if self.magnitude >= rules::NOTABLE_CHANGE {
            "Notable change"
        } else {
            "Slight change"
        };
        format!(
            "{} in \"{}\": {} → {} ({})",
            tier,
            self.emotion,
            percent(self.from_intensity),
            percent(self.to_intensity),
            self.direction().as_str()
        )
    }
}
