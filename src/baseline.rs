//! Baseline comparison.
//!
//! A snapshot of the interviewee's resting emotions taken before a
//! question. During the answer the live vector is compared against it;
//! tiered deviations feed the scorer and the observation log. No
//! baseline is a normal state, comparison simply does not run.

use serde::{Deserialize, Serialize};

use crate::emotion::{Emotion, EmotionVector};

// ============================================================================
// DEVIATION THRESHOLDS (absolute intensity delta)
// ============================================================================

/// Deviations below this are not worth reporting.
pub const MINIMAL_DEVIATION: f64 = 0.02;

/// Deviation that reads as notable.
pub const NOTABLE_DEVIATION: f64 = 0.05;

/// Deviation that reads as significant.
pub const SIGNIFICANT_DEVIATION: f64 = 0.1;

// ============================================================================
// TYPES
// ============================================================================

/// Resting emotions captured once per question cycle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BaselineSnapshot {
    pub emotions: EmotionVector,
    /// When the snapshot was taken (unix millis).
    pub captured_at_ms: i64,
}

impl BaselineSnapshot {
    pub fn capture(emotions: EmotionVector, captured_at_ms: i64) -> Self {
        Self {
            emotions,
            captured_at_ms,
        }
    }
}

/// One channel's drift away from the baseline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineDeviation {
    pub emotion: Emotion,
    pub before: f64,
    pub after: f64,
    /// Signed drift, after minus before.
    pub difference: f64,
    /// Tier, direction, and emotion reading, human readable.
    pub significance: String,
}

/// Full before/during comparison for one answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineComparison {
    pub before: EmotionVector,
    pub during: EmotionVector,
    pub changes: Vec<BaselineDeviation>,
}

// ============================================================================
// COMPARISON
// ============================================================================

/// Compares a live vector against the snapshot, keeping every channel
/// that drifted past the minimal threshold.
pub fn compare(snapshot: &BaselineSnapshot, during: &EmotionVector) -> BaselineComparison {
    let before = snapshot.emotions;
    let mut changes = Vec::new();

    for emotion in Emotion::ALL {
        let baseline_value = before.get(emotion);
        let live_value = during.get(emotion);
        let difference = live_value - baseline_value;
        if difference.abs() < MINIMAL_DEVIATION {
            continue;
        }
        changes.push(BaselineDeviation {
            emotion,
            before: baseline_value,
            after: live_value,
            difference,
            significance: deviation_significance(emotion, difference),
        });
    }

    if !changes.is_empty() {
        log::debug!("baseline drifted on {} channels", changes.len());
    }

    BaselineComparison {
        before,
        during: *during,
        changes,
    }
}

fn deviation_significance(emotion: Emotion, difference: f64) -> String {
    let tier = if difference.abs() >= SIGNIFICANT_DEVIATION {
        "significant"
    } else if difference.abs() >= NOTABLE_DEVIATION {
        "notable"
    } else {
        "slight"
    };
    let direction = if difference >= 0.0 { "rise" } else { "fall" };
    let mut text = format!("{} {} in {}", tier, direction, emotion);
    if let Some(reading) = deviation_reading(emotion) {
        text.push_str(" - ");
        text.push_str(reading);
    }
    text
}

fn deviation_reading(emotion: Emotion) -> Option<&'static str> {
    match emotion {
        Emotion::Fearful => Some("possible reaction to the question"),
        Emotion::Neutral => Some("possible emotional activation"),
        Emotion::Angry => Some("possible defensive reaction"),
        Emotion::Surprised => Some("possible unprepared reaction"),
        _ => None,
    }
}
