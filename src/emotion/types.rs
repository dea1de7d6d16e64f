//! Emotion Types
//!
//! Core types for the seven-emotion intensity model.
//! Data structures only - no scoring logic.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// EMOTION LABELS
// ============================================================================

/// Number of tracked emotion channels.
pub const EMOTION_COUNT: usize = 7;

/// The closed set of labels produced by the external expression detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Neutral,
    Happy,
    Sad,
    Angry,
    Fearful,
    Disgusted,
    Surprised,
}

impl Emotion {
    /// All labels in canonical order.
    pub const ALL: [Emotion; EMOTION_COUNT] = [
        Emotion::Neutral,
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Fearful,
        Emotion::Disgusted,
        Emotion::Surprised,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Neutral => "neutral",
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Fearful => "fearful",
            Emotion::Disgusted => "disgusted",
            Emotion::Surprised => "surprised",
        }
    }

    /// Position in the canonical order, used to index `EmotionVector`.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Counted toward the positive side of the emotional balance.
    pub fn is_positive(&self) -> bool {
        matches!(self, Emotion::Happy)
    }

    /// Counted toward the negative side of the emotional balance.
    pub fn is_negative(&self) -> bool {
        matches!(
            self,
            Emotion::Sad | Emotion::Angry | Emotion::Fearful | Emotion::Disgusted
        )
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// EMOTIONAL BALANCE
// ============================================================================

/// Coarse positive/negative read of a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionalBalance {
    Positive,
    Negative,
    Balanced,
}

impl EmotionalBalance {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionalBalance::Positive => "positive",
            EmotionalBalance::Negative => "negative",
            EmotionalBalance::Balanced => "balanced",
        }
    }
}

impl std::fmt::Display for EmotionalBalance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// EMOTION VECTOR
// ============================================================================

/// Raw per-frame sample as decoded from the detector's JSON output.
pub type RawEmotionSample = HashMap<String, f64>;

/// Intensities for all seven emotions, indexed by `Emotion`.
///
/// Values are finite and non-negative once built through `from_raw`.
/// `normalized` is the only rescaling step and returns a new vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EmotionVector {
    values: [f64; EMOTION_COUNT],
}

impl EmotionVector {
    /// Builds a vector from canonical-order values.
    pub fn from_values(values: [f64; EMOTION_COUNT]) -> Self {
        Self { values }
    }

    pub fn get(&self, emotion: Emotion) -> f64 {
        self.values[emotion.index()]
    }

    pub fn set(&mut self, emotion: Emotion, intensity: f64) {
        self.values[emotion.index()] = intensity;
    }

    pub fn as_array(&self) -> &[f64; EMOTION_COUNT] {
        &self.values
    }

    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Pairs of label and intensity in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, f64)> + '_ {
        Emotion::ALL.iter().map(move |&emotion| (emotion, self.get(emotion)))
    }

    /// Dominant side of the positive/negative split, when either side
    /// outweighs the other by more than 2x.
    pub fn balance(&self) -> EmotionalBalance {
        let positive: f64 = self
            .iter()
            .filter(|(emotion, _)| emotion.is_positive())
            .map(|(_, value)| value)
            .sum();
        let negative: f64 = self
            .iter()
            .filter(|(emotion, _)| emotion.is_negative())
            .map(|(_, value)| value)
            .sum();

        if positive > negative * 2.0 {
            EmotionalBalance::Positive
        } else if negative > positive * 2.0 {
            EmotionalBalance::Negative
        } else {
            EmotionalBalance::Balanced
        }
    }
}
