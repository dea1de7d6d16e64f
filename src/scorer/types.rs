//! Scoring Types
//!
//! The per-answer result and its supporting pieces.
//! Data structures only - no scoring logic.

use serde::{Deserialize, Serialize};

use crate::baseline::BaselineComparison;
use crate::emotion::Emotion;
use crate::landmarks::DeceptionMetrics;
use crate::micro::MicroExpression;
use crate::transition::TransitionRecord;

use super::rules;

// ============================================================================
// DOMINANT EMOTION
// ============================================================================

/// One channel strong enough to read off the face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DominantEmotion {
    pub emotion: Emotion,
    pub intensity: f64,
}

// ============================================================================
// SCORE BREAKDOWN
// ============================================================================

/// Probability penalty attributed to each rule source.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub transition_penalty: f64,
    pub fear_penalty: f64,
    pub micro_penalty: f64,
    pub landmark_penalty: f64,
    pub baseline_penalty: f64,
}

impl ScoreBreakdown {
    /// Total probability removed before clamping.
    pub fn total(&self) -> f64 {
        self.transition_penalty
            + self.fear_penalty
            + self.micro_penalty
            + self.landmark_penalty
            + self.baseline_penalty
    }
}

impl Default for ScoreBreakdown {
    fn default() -> Self {
        Self {
            transition_penalty: 0.0,
            fear_penalty: 0.0,
            micro_penalty: 0.0,
            landmark_penalty: 0.0,
            baseline_penalty: 0.0,
        }
    }
}

// ============================================================================
// ANALYSIS RESULT
// ============================================================================

/// Everything the engine concluded about one answer.
///
/// Built fresh per call and never mutated afterward; rolling state stays
/// inside the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub question: String,
    pub answer: String,
    /// Higher means fewer deception heuristics fired. Clamped to [0,1].
    pub truth_probability: f64,
    /// How settled the face was. Clamped to [0,1].
    pub emotional_stability: f64,
    /// Strongest channels first.
    pub dominant_emotions: Vec<DominantEmotion>,
    /// Flickers logged while scoring this answer.
    pub micro_expressions: Vec<MicroExpression>,
    pub deception_indicators: Vec<String>,
    /// Valid transitions produced by this answer's frame.
    pub transitions: Vec<TransitionRecord>,
    pub baseline_comparison: Option<BaselineComparison>,
    /// Present only when landmark geometry accompanied the sample.
    pub facial_metrics: Option<DeceptionMetrics>,
    pub penalties: ScoreBreakdown,
    /// Rule-ordered trace of everything that influenced the score.
    pub observations: Vec<String>,
    /// When the answer was scored (unix millis).
    pub analyzed_at_ms: i64,
}

impl AnalysisResult {
    /// The fixed fallback for samples that failed validation.
    pub fn neutral(question: &str, answer: &str, analyzed_at_ms: i64) -> Self {
        Self {
            question: question.to_string(),
            answer: answer.to_string(),
            truth_probability: rules::INITIAL_PROBABILITY,
            emotional_stability: rules::INITIAL_STABILITY,
            dominant_emotions: Vec::new(),
            micro_expressions: Vec::new(),
            deception_indicators: Vec::new(),
            transitions: Vec::new(),
            baseline_comparison: None,
            facial_metrics: None,
            penalties: ScoreBreakdown::default(),
            observations: vec!["Emotion analysis not available yet.".to_string()],
            analyzed_at_ms,
        }
    }
}
