//! Emotion Transition Tracker
//!
//! Compares each incoming frame against the previous one, grades the
//! timing of every per-channel change, and keeps a rolling window of the
//! changes worth scoring.

use crate::emotion::{Emotion, EmotionVector};
use crate::ring::RingBuffer;

use super::rules;
use super::types::{ChangeDirection, TimingVerdict, TransitionRecord};

/// Rolling per-session transition state.
#[derive(Debug, Clone)]
pub struct TransitionTracker {
    previous: Option<EmotionVector>,
    previous_at_ms: i64,
    history: RingBuffer<TransitionRecord>,
}

impl TransitionTracker {
    pub fn new() -> Self {
        Self {
            previous: None,
            previous_at_ms: 0,
            history: RingBuffer::new(rules::TRANSITION_HISTORY_CAP),
        }
    }

    /// Valid transitions recorded so far, oldest first.
    pub fn history(&self) -> Vec<TransitionRecord> {
        self.history.to_vec()
    }

    /// Feeds one normalized frame and returns the valid transitions it
    /// produced.
    ///
    /// The first frame only seeds the comparison state. Invalid changes
    /// are graded for the debug log but never retained.
    pub fn observe(&mut self, vector: &EmotionVector, now_ms: i64) -> Vec<TransitionRecord> {
        let Some(previous) = self.previous else {
            self.previous = Some(*vector);
            self.previous_at_ms = now_ms;
            return Vec::new();
        };

        let elapsed_ms = now_ms - self.previous_at_ms;
        let mut valid = Vec::new();

        for emotion in Emotion::ALL {
            let from = previous.get(emotion);
            let to = vector.get(emotion);
            let magnitude = (to - from).abs();
            if magnitude < rules::MINIMAL_CHANGE {
                continue;
            }

            let direction = if to >= from {
                ChangeDirection::Rise
            } else {
                ChangeDirection::Fall
            };
            let verdict = grade_timing(elapsed_ms);
            let significance = match verdict {
                TimingVerdict::Valid => {
                    // The run check must see the previous valid transition,
                    // including one recorded earlier in this same frame.
                    let consecutive = self.history.back().map_or(false, |last| {
                        now_ms - last.timestamp_ms < rules::CONSECUTIVE_RUN_MS
                    });
                    valid_significance(magnitude, direction, elapsed_ms, consecutive)
                }
                TimingVerdict::TooFast => format!("too fast, ignored ({}ms)", elapsed_ms),
                TimingVerdict::OutsideWindow => {
                    format!("outside optimal window ({}ms)", elapsed_ms)
                }
            };

            let record = TransitionRecord {
                emotion,
                from_intensity: from,
                to_intensity: to,
                timestamp_ms: now_ms,
                elapsed_ms,
                magnitude,
                verdict,
                significance,
            };

            if record.is_valid() {
                self.history.push(record.clone());
                valid.push(record);
            } else {
                log::debug!(
                    "transition discarded: {} {}",
                    record.emotion,
                    record.significance
                );
            }
        }

        self.previous = Some(*vector);
        self.previous_at_ms = now_ms;
        valid
    }
}

impl Default for TransitionTracker {
    fn default() -> Self {
        Self::new()
    }
}

fn grade_timing(elapsed_ms: i64) -> TimingVerdict {
    if elapsed_ms < rules::TOO_FAST_MS {
        TimingVerdict::TooFast
    } else if (rules::OPTIMAL_MIN_MS..=rules::OPTIMAL_MAX_MS).contains(&elapsed_ms) {
        TimingVerdict::Valid
    } else {
        TimingVerdict::OutsideWindow
    }
}

fn valid_significance(
    magnitude: f64,
    direction: ChangeDirection,
    elapsed_ms: i64,
    consecutive: bool,
) -> String {
    let tier = if magnitude >= rules::SIGNIFICANT_CHANGE {
        "significant"
    } else if magnitude >= rules::NOTABLE_CHANGE {
        "clear"
    } else {
        "slight"
    };
    let mut text = format!("{} {} ({}ms)", tier, direction.as_str(), elapsed_ms);
    if consecutive {
        text.push_str(" - part of a consecutive run");
    }
    text
}
