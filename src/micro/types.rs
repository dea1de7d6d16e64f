//! Micro-Expression Types
//!
//! Core types for sub-threshold emotional flickers.
//! Data structures only - no detection logic.

use serde::{Deserialize, Serialize};

use crate::emotion::Emotion;

use super::rules;

// ============================================================================
// INTENSITY TIER
// ============================================================================

/// Strength bands used in significance text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityTier {
    VeryStrong,
    Strong,
    Moderate,
    Weak,
    VeryWeak,
}

impl IntensityTier {
    pub fn from_intensity(intensity: f64) -> Self {
        if intensity >= rules::VERY_STRONG_INTENSITY {
            IntensityTier::VeryStrong
        } else if intensity >= rules::STRONG_INTENSITY {
            IntensityTier::Strong
        } else if intensity >= rules::MODERATE_INTENSITY {
            IntensityTier::Moderate
        } else if intensity >= rules::WEAK_INTENSITY {
            IntensityTier::Weak
        } else {
            IntensityTier::VeryWeak
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IntensityTier::VeryStrong => "very strong",
            IntensityTier::Strong => "strong",
            IntensityTier::Moderate => "moderate",
            IntensityTier::Weak => "weak",
            IntensityTier::VeryWeak => "very weak",
        }
    }
}

// ============================================================================
// DURATION CLASS
// ============================================================================

/// How long a flicker held on the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationClass {
    Momentary,
    ShortLived,
    Persistent,
}

impl DurationClass {
    pub fn from_duration(duration_ms: i64) -> Self {
        if duration_ms < rules::MOMENTARY_MS {
            DurationClass::Momentary
        } else if duration_ms < rules::SHORT_LIVED_MS {
            DurationClass::ShortLived
        } else {
            DurationClass::Persistent
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DurationClass::Momentary => "momentary",
            DurationClass::ShortLived => "short-lived",
            DurationClass::Persistent => "persistent",
        }
    }
}

// ============================================================================
// MICRO EXPRESSION
// ============================================================================

/// One logged sub-threshold flicker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MicroExpression {
    pub emotion: Emotion,
    pub intensity: f64,
    /// Tier, duration class, and emotion reading, human readable.
    pub significance: String,
    /// Capped at `MAX_DURATION_MS`.
    pub duration_ms: i64,
    /// When the flicker was first seen (unix millis).
    pub started_at_ms: i64,
    /// Flickers close in time share a sequence id.
    pub sequence_id: u64,
}
