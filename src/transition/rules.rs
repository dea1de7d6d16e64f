//! Transition Timing & Change Rules
//!
//! Thresholds for when an intensity change counts as a transition and
//! when its timing makes it trustworthy evidence.
//! No tracking logic - constants only.

// ============================================================================
// TIMING WINDOWS (milliseconds)
// ============================================================================

/// Changes arriving faster than this are treated as sensor noise.
pub const TOO_FAST_MS: i64 = 50;

/// Lower edge of the trustworthy timing window.
pub const OPTIMAL_MIN_MS: i64 = 100;

/// Upper edge of the trustworthy timing window.
pub const OPTIMAL_MAX_MS: i64 = 200;

/// Two valid transitions closer than this form a consecutive run.
pub const CONSECUTIVE_RUN_MS: i64 = 1000;

// ============================================================================
// CHANGE THRESHOLDS (absolute intensity delta)
// ============================================================================

/// Below this delta a channel is considered unchanged.
pub const MINIMAL_CHANGE: f64 = 0.01;

/// Delta that reads as a notable change.
pub const NOTABLE_CHANGE: f64 = 0.05;

/// Delta that reads as a significant change.
pub const SIGNIFICANT_CHANGE: f64 = 0.1;

/// Delta that reads as an abrupt change.
pub const DRAMATIC_CHANGE: f64 = 0.2;

// ============================================================================
// HISTORY
// ============================================================================

/// Valid transitions kept per session.
pub const TRANSITION_HISTORY_CAP: usize = 20;
