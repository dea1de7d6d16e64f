//! Deception indicator aggregation.
//!
//! Folds the current frame, the micro-expression window, and the facial
//! metrics into an ordered list of human-readable indicator lines. Rule
//! order is fixed so identical inputs always explain themselves the same
//! way.

use crate::emotion::{percent, Emotion, EmotionVector};
use crate::landmarks::DeceptionMetrics;
use crate::micro::MicroExpressionLog;
use crate::scorer::rules;

/// Emotion pairings that contradict each other on a genuine face.
/// Both orderings are listed so each side gets its own line.
const CONFLICT_PAIRS: [(Emotion, Emotion); 4] = [
    (Emotion::Happy, Emotion::Fearful),
    (Emotion::Happy, Emotion::Angry),
    (Emotion::Fearful, Emotion::Happy),
    (Emotion::Angry, Emotion::Happy),
];

/// Both members of a conflicting pair must clear this intensity.
const CONFLICT_PRESENCE_MIN: f64 = 0.05;

/// Collects indicator lines in fixed rule order: fear level, conflicting
/// pairs, sequence insights, fresh micro-expressions, muscle tension.
pub fn collect(
    vector: &EmotionVector,
    micro: &MicroExpressionLog,
    metrics: Option<&DeceptionMetrics>,
    now_ms: i64,
) -> Vec<String> {
    let mut indicators = Vec::new();

    let fear = vector.get(Emotion::Fearful);
    if fear > rules::FEAR_SIGNAL_THRESHOLD {
        indicators.push(format!(
            "Fear detected ({}) - possible sign of deception",
            percent(fear)
        ));
        if fear > vector.get(Emotion::Neutral) {
            indicators.push("Fear exceeds neutral - strong deception indicator".to_string());
        }
    }

    for (first, second) in CONFLICT_PAIRS {
        let first_value = vector.get(first);
        let second_value = vector.get(second);
        if first_value > CONFLICT_PRESENCE_MIN && second_value > CONFLICT_PRESENCE_MIN {
            indicators.push(format!(
                "Conflicting emotions: {} ({}) and {} ({})",
                first,
                percent(first_value),
                second,
                percent(second_value)
            ));
        }
    }

    indicators.extend(micro.sequence_insights(now_ms));

    for expression in micro.fresh(now_ms) {
        if expression.intensity >= rules::FRESH_MICRO_INTENSITY {
            indicators.push(format!(
                "Fresh micro-expression: {} ({}) - {}",
                expression.emotion,
                percent(expression.intensity),
                expression.significance
            ));
        }
    }

    if let Some(metrics) = metrics {
        if metrics.muscle_tension > rules::TENSION_SIGNAL_THRESHOLD {
            indicators.push(format!(
                "Elevated facial muscle tension detected ({})",
                percent(metrics.muscle_tension)
            ));
        }
    }

    indicators
}
