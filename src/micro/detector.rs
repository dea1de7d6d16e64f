//! Micro-Expression Detector
//!
//! Logs faint emotional flickers, stamps each with a duration estimate
//! and a sequence id, and mines the recent window for patterns worth
//! flagging.

use crate::emotion::{Emotion, EmotionVector, EMOTION_COUNT};
use crate::ring::RingBuffer;

use super::rules;
use super::types::{DurationClass, IntensityTier, MicroExpression};

/// Rolling per-session micro-expression log.
#[derive(Debug, Clone)]
pub struct MicroExpressionLog {
    history: RingBuffer<MicroExpression>,
    last_sequence_id: u64,
}

impl MicroExpressionLog {
    pub fn new() -> Self {
        Self {
            history: RingBuffer::new(rules::MICRO_HISTORY_CAP),
            last_sequence_id: 0,
        }
    }

    /// Logged expressions, oldest first.
    pub fn history(&self) -> Vec<MicroExpression> {
        self.history.to_vec()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Sweeps one normalized frame, logging every non-neutral channel
    /// with a present intensity.
    pub fn record_frame(&mut self, vector: &EmotionVector, now_ms: i64) -> Vec<MicroExpression> {
        let mut detected = Vec::new();
        for (emotion, intensity) in vector.iter() {
            if emotion == Emotion::Neutral || intensity <= 0.0 {
                continue;
            }
            if let Some(hit) = self.record(emotion, intensity, now_ms) {
                detected.push(hit);
            }
        }
        detected
    }

    /// Logs a single flicker. Returns `None` below the detection floor.
    pub fn record(
        &mut self,
        emotion: Emotion,
        intensity: f64,
        now_ms: i64,
    ) -> Option<MicroExpression> {
        if intensity < rules::DETECTION_FLOOR {
            return None;
        }

        // Duration spans back to the oldest buffered flicker, capped so a
        // long-lived buffer cannot inflate it.
        let duration_ms = self
            .history
            .front()
            .map_or(0, |oldest| (now_ms - oldest.started_at_ms).min(rules::MAX_DURATION_MS));

        // Join the sequence of the oldest still-recent flicker, else open
        // a fresh one.
        let inherited = self
            .history
            .iter()
            .find(|expr| now_ms - expr.started_at_ms < rules::RECENT_WINDOW_MS)
            .map(|expr| expr.sequence_id);
        let sequence_id = match inherited {
            Some(id) => id,
            None => {
                self.last_sequence_id += 1;
                self.last_sequence_id
            }
        };

        let expression = MicroExpression {
            emotion,
            intensity,
            significance: significance_text(emotion, intensity, duration_ms),
            duration_ms,
            started_at_ms: now_ms,
            sequence_id,
        };
        self.history.push(expression.clone());
        Some(expression)
    }

    /// Expressions still inside the freshness window, oldest first.
    pub fn fresh(&self, now_ms: i64) -> Vec<MicroExpression> {
        self.history
            .iter()
            .filter(|expr| now_ms - expr.started_at_ms < rules::RECENT_WINDOW_MS)
            .cloned()
            .collect()
    }

    /// Mines the recent window for sequence patterns.
    ///
    /// Needs at least two recent expressions. Flags rapid adjacent pairs
    /// (and among those, the pair shapes that suggest a masked reaction)
    /// and any emotion recurring often enough to look suppressed.
    pub fn sequence_insights(&self, now_ms: i64) -> Vec<String> {
        let recent: Vec<&MicroExpression> = self
            .history
            .iter()
            .filter(|expr| now_ms - expr.started_at_ms < rules::INSIGHT_WINDOW_MS)
            .collect();

        let mut insights = Vec::new();
        if recent.len() < 2 {
            return insights;
        }

        for pair in recent.windows(2) {
            let (previous, current) = (pair[0], pair[1]);
            let gap_ms = current.started_at_ms - previous.started_at_ms;
            if gap_ms < rules::RAPID_PAIR_MS {
                insights.push(format!(
                    "Rapid transition: {} → {} ({}ms)",
                    previous.emotion, current.emotion, gap_ms
                ));
                // Only a rapid pair can suggest a masked reaction; a slow
                // drift between the same emotions is ordinary.
                if is_deceptive_pair(previous.emotion, current.emotion) {
                    insights.push("Possible deception-suggestive emotion sequence".to_string());
                }
            }
        }

        let mut counts = [0usize; EMOTION_COUNT];
        for expr in &recent {
            counts[expr.emotion.index()] += 1;
        }
        for emotion in Emotion::ALL {
            let count = counts[emotion.index()];
            if count >= rules::REPEAT_COUNT {
                insights.push(format!(
                    "Recurring {} emotion ({} times) - possible suppression attempt",
                    emotion, count
                ));
            }
        }

        insights
    }
}

impl Default for MicroExpressionLog {
    fn default() -> Self {
        Self::new()
    }
}

fn is_deceptive_pair(from: Emotion, to: Emotion) -> bool {
    matches!(
        (from, to),
        (Emotion::Happy, Emotion::Fearful)
            | (Emotion::Happy, Emotion::Surprised)
            | (Emotion::Neutral, Emotion::Fearful)
    )
}

fn significance_text(emotion: Emotion, intensity: f64, duration_ms: i64) -> String {
    let mut text = IntensityTier::from_intensity(intensity).as_str().to_string();
    text.push_str(", ");
    text.push_str(DurationClass::from_duration(duration_ms).as_str());
    if let Some(reading) = emotion_reading(emotion) {
        text.push_str(" - ");
        text.push_str(reading);
    }
    text
}

fn emotion_reading(emotion: Emotion) -> Option<&'static str> {
    match emotion {
        Emotion::Fearful => Some("possible anxiety signal"),
        Emotion::Angry => Some("possible reluctance signal"),
        Emotion::Disgusted => Some("possible discomfort signal"),
        Emotion::Surprised => Some("possible unprepared reaction"),
        Emotion::Sad => Some("possible emotional conflict"),
        Emotion::Neutral | Emotion::Happy => None,
    }
}
