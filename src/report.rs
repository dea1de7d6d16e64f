//! Result presenter.
//!
//! Folds a raw `AnalysisResult` into the flat, display-ready shape an
//! interview UI consumes. Pure formatting; nothing here feeds back into
//! scoring.

use serde::{Deserialize, Serialize};

use crate::emotion::{percent, Emotion};
use crate::scorer::AnalysisResult;

/// Baseline drifts smaller than this stay out of the report.
const NOTABLE_DRIFT_MIN: f64 = 0.05;

// ============================================================================
// TRUTH BAND
// ============================================================================

/// Verdict band over the truth probability.
///
/// Bands map the probability directly: a low score reads as "likely
/// false", never the other way around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TruthBand {
    VeryLikelyTrue,
    LikelyTrue,
    Uncertain,
    LikelyFalse,
    VeryLikelyFalse,
}

impl TruthBand {
    pub fn from_probability(probability: f64) -> Self {
        if probability >= 0.8 {
            TruthBand::VeryLikelyTrue
        } else if probability >= 0.6 {
            TruthBand::LikelyTrue
        } else if probability >= 0.4 {
            TruthBand::Uncertain
        } else if probability >= 0.2 {
            TruthBand::LikelyFalse
        } else {
            TruthBand::VeryLikelyFalse
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TruthBand::VeryLikelyTrue => "very likely true",
            TruthBand::LikelyTrue => "likely true",
            TruthBand::Uncertain => "uncertain",
            TruthBand::LikelyFalse => "likely false",
            TruthBand::VeryLikelyFalse => "very likely false",
        }
    }
}

impl std::fmt::Display for TruthBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// REPORT SHAPE
// ============================================================================

/// Headline verdict for one answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TruthScore {
    /// Truth probability as a whole percentage.
    pub percentage: u8,
    pub evaluation: TruthBand,
    /// Emotional stability as a whole percentage.
    pub confidence: u8,
}

/// Coarse emotional read for one answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionSummary {
    pub primary: String,
    pub secondary: Option<String>,
    pub stability: u8,
}

/// Whether a resting baseline was available, and what moved against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineEcho {
    pub before_question: String,
    pub during_question: String,
    pub significant_changes: Vec<String>,
}

/// Everything that argued against the answer being truthful.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeceptionMarkers {
    pub found: bool,
    pub indicators: Vec<String>,
    pub micro_expressions: Vec<String>,
    pub transitions: Vec<String>,
}

/// Display-ready digest of one scored answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedReport {
    pub question: String,
    pub answer: String,
    pub truth_score: TruthScore,
    pub emotional_state: EmotionSummary,
    pub baseline: BaselineEcho,
    pub markers: DeceptionMarkers,
}

// ============================================================================
// FORMATTING
// ============================================================================

/// Renders one scored answer for display.
pub fn format_report(result: &AnalysisResult) -> FormattedReport {
    let truth_score = TruthScore {
        percentage: (result.truth_probability * 100.0).round() as u8,
        evaluation: TruthBand::from_probability(result.truth_probability),
        confidence: (result.emotional_stability * 100.0).round() as u8,
    };

    let emotional_state = EmotionSummary {
        primary: result
            .dominant_emotions
            .first()
            .map(|entry| entry.emotion.to_string())
            .unwrap_or_else(|| Emotion::Neutral.to_string()),
        secondary: result
            .dominant_emotions
            .get(1)
            .map(|entry| entry.emotion.to_string()),
        stability: (result.emotional_stability * 100.0).round() as u8,
    };

    let baseline = match &result.baseline_comparison {
        Some(comparison) => BaselineEcho {
            before_question: "captured".to_string(),
            during_question: "analyzed".to_string(),
            significant_changes: comparison
                .changes
                .iter()
                .filter(|change| change.difference.abs() >= NOTABLE_DRIFT_MIN)
                .map(|change| {
                    format!("{} ({:.1}%)", change.significance, change.difference * 100.0)
                })
                .collect(),
        },
        None => BaselineEcho {
            before_question: "none".to_string(),
            during_question: "none".to_string(),
            significant_changes: Vec::new(),
        },
    };

    let markers = DeceptionMarkers {
        found: !result.deception_indicators.is_empty(),
        indicators: result.deception_indicators.clone(),
        micro_expressions: result
            .micro_expressions
            .iter()
            .map(|hit| {
                format!(
                    "{}: {} ({})",
                    hit.emotion,
                    percent(hit.intensity),
                    hit.significance
                )
            })
            .collect(),
        transitions: result
            .transitions
            .iter()
            .map(|transition| {
                format!(
                    "{}: {} → {}",
                    transition.emotion,
                    percent(transition.from_intensity),
                    percent(transition.to_intensity)
                )
            })
            .collect(),
    };

    FormattedReport {
        question: result.question.clone(),
        answer: result.answer.clone(),
        truth_score,
        emotional_state,
        baseline,
        markers,
    }
}
