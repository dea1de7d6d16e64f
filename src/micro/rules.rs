//! Micro-Expression Rules
//!
//! Detection floor, duration caps, and the time windows that group
//! flickers into sequences. No detection logic - constants only.

// ============================================================================
// DETECTION
// ============================================================================

/// Intensities below this are too faint to log.
pub const DETECTION_FLOOR: f64 = 0.005;

/// Longest duration attributed to a single micro-expression.
pub const MAX_DURATION_MS: i64 = 500;

/// Micro-expressions kept per session.
pub const MICRO_HISTORY_CAP: usize = 20;

// ============================================================================
// SEQUENCE WINDOWS (milliseconds)
// ============================================================================

/// A new flicker joins the sequence of any expression this recent; the
/// same window marks an expression as still fresh for the indicator list.
pub const RECENT_WINDOW_MS: i64 = 1000;

/// Sequence analysis looks back this far.
pub const INSIGHT_WINDOW_MS: i64 = 3000;

/// Adjacent expressions closer than this count as a rapid transition.
pub const RAPID_PAIR_MS: i64 = 500;

/// An emotion recurring this often inside the insight window suggests
/// suppression.
pub const REPEAT_COUNT: usize = 3;

// ============================================================================
// INTENSITY TIERS
// ============================================================================

pub const VERY_STRONG_INTENSITY: f64 = 0.5;
pub const STRONG_INTENSITY: f64 = 0.3;
pub const MODERATE_INTENSITY: f64 = 0.1;
pub const WEAK_INTENSITY: f64 = 0.05;

// ============================================================================
// DURATION CLASSES (milliseconds)
// ============================================================================

/// Below this a flicker reads as momentary.
pub const MOMENTARY_MS: i64 = 100;

/// Below this a flicker reads as short-lived; anything longer persists.
pub const SHORT_LIVED_MS: i64 = 250;
