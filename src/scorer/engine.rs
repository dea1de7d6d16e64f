//! Truth-Probability Scorer
//!
//! Runs the answer-time sample through the same frame path the live feed
//! uses, then applies the penalty rules in a fixed order and assembles
//! the observation log. Scores are clamped once, at the end.

use crate::baseline;
use crate::emotion::{percent, Emotion, EmotionVector, EmotionalBalance, RawEmotionSample};
use crate::indicators;
use crate::landmarks::{tension, FaceLandmarks};
use crate::micro::MicroExpression;
use crate::session::AnalysisSession;

use super::rules;
use super::types::{AnalysisResult, DominantEmotion, ScoreBreakdown};

/// Scores one spoken answer against its accompanying sample.
///
/// A sample that fails validation yields the fixed neutral result; the
/// caller is never handed an error.
pub fn score_answer(
    session: &mut AnalysisSession,
    question: &str,
    answer: &str,
    sample: &RawEmotionSample,
    landmarks: Option<&FaceLandmarks>,
    now_ms: i64,
) -> AnalysisResult {
    let vector = match EmotionVector::from_raw(sample) {
        Ok(vector) => vector.normalized(),
        Err(error) => {
            session.stats.frames_rejected += 1;
            log::warn!("sample rejected, returning neutral result: {}", error);
            return AnalysisResult::neutral(question, answer, now_ms);
        }
    };

    // Frame path first, exactly as a live frame would be handled.
    let (transitions, micro_hits) = session.observe_vector(&vector, now_ms);

    let metrics = landmarks.map(tension::evaluate);
    let baseline_comparison = session
        .baseline
        .as_ref()
        .map(|snapshot| baseline::compare(snapshot, &vector));

    let mut probability = rules::INITIAL_PROBABILITY;
    let mut stability = rules::INITIAL_STABILITY;
    let mut penalties = ScoreBreakdown::default();
    let mut observations = Vec::new();

    // 1. Valid transitions.
    if !transitions.is_empty() {
        observations.push("Emotion transitions:".to_string());
        for transition in &transitions {
            observations.push(transition.describe());
            if transition.magnitude >= rules::TRANSITION_MAGNITUDE_MIN {
                let penalty = transition.magnitude * rules::TRANSITION_PROBABILITY_WEIGHT;
                probability -= penalty;
                stability -= transition.magnitude * rules::TRANSITION_STABILITY_WEIGHT;
                penalties.transition_penalty += penalty;
            }
        }
    }

    // 2. Raw fear level.
    let fear = vector.get(Emotion::Fearful);
    if fear > rules::FEAR_SIGNAL_THRESHOLD {
        let penalty = fear * rules::FEAR_PROBABILITY_WEIGHT;
        probability -= penalty;
        stability -= fear * rules::FEAR_STABILITY_WEIGHT;
        penalties.fear_penalty += penalty;
    }

    // Dominant channels and the frame's coarse balance.
    let dominant = dominant_emotions(&vector);
    for entry in &dominant {
        observations.push(format!("{}: {}", entry.emotion, percent(entry.intensity)));
    }
    match vector.balance() {
        EmotionalBalance::Balanced => {}
        side => observations.push(format!("Emotional balance: {}", side)),
    }

    // 3. This answer's micro-expressions, grouped by sequence.
    if !micro_hits.is_empty() {
        observations.push("Detected micro-expressions:".to_string());
        for group in sequence_groups(&micro_hits) {
            if group.len() > 1 {
                let penalty = rules::MICRO_GROUP_PROBABILITY_STEP * group.len() as f64;
                probability -= penalty;
                stability -= rules::MICRO_GROUP_STABILITY_STEP * group.len() as f64;
                penalties.micro_penalty += penalty;
            } else if group[0].intensity >= rules::SINGLE_MICRO_INTENSITY_MIN {
                probability -= rules::SINGLE_MICRO_PROBABILITY_PENALTY;
                stability -= rules::SINGLE_MICRO_STABILITY_PENALTY;
                penalties.micro_penalty += rules::SINGLE_MICRO_PROBABILITY_PENALTY;
            }
        }
        for hit in &micro_hits {
            observations.push(format!(
                "{}: {} ({})",
                hit.emotion,
                percent(hit.intensity),
                hit.significance
            ));
        }
    }

    // 4. Landmark geometry, probability only.
    if let Some(metrics) = &metrics {
        if metrics.asymmetry > rules::ASYMMETRY_THRESHOLD {
            let penalty = metrics.asymmetry * rules::ASYMMETRY_WEIGHT;
            probability -= penalty;
            penalties.landmark_penalty += penalty;
            observations.push(format!(
                "Facial asymmetry detected: {}",
                percent(metrics.asymmetry)
            ));
        }
        if metrics.muscle_tension > rules::TENSION_THRESHOLD {
            let penalty = metrics.muscle_tension * rules::TENSION_WEIGHT;
            probability -= penalty;
            penalties.landmark_penalty += penalty;
            observations.push(format!(
                "Elevated facial muscle tension: {}",
                percent(metrics.muscle_tension)
            ));
        }
        if metrics.rapid_movements > rules::RAPID_MOVEMENT_THRESHOLD {
            let penalty = metrics.rapid_movements * rules::RAPID_MOVEMENT_WEIGHT;
            probability -= penalty;
            penalties.landmark_penalty += penalty;
            observations.push(format!(
                "Rapid facial movements detected: {}",
                percent(metrics.rapid_movements)
            ));
        }
        if metrics.unnatural_expressions > rules::UNNATURAL_THRESHOLD {
            let penalty = metrics.unnatural_expressions * rules::UNNATURAL_WEIGHT;
            probability -= penalty;
            penalties.landmark_penalty += penalty;
            observations.push(format!(
                "Unnatural facial expressions detected: {}",
                percent(metrics.unnatural_expressions)
            ));
        }
    }

    // Indicator list over the frame, the micro window, and the metrics.
    let deception_indicators =
        indicators::collect(&vector, &session.micro, metrics.as_ref(), now_ms);
    if !deception_indicators.is_empty() {
        observations.push("Detected deception indicators:".to_string());
        observations.extend(deception_indicators.iter().cloned());
    }

    // 5. Baseline drift on the threat channels.
    if let Some(comparison) = &baseline_comparison {
        if !comparison.changes.is_empty() {
            observations.push("Comparison with baseline emotions:".to_string());
            for change in &comparison.changes {
                observations.push(change.significance.clone());
                if matches!(change.emotion, Emotion::Fearful | Emotion::Angry)
                    && change.difference.abs() >= rules::BASELINE_DEVIATION_MIN
                {
                    let magnitude = change.difference.abs();
                    let penalty = magnitude * rules::BASELINE_PROBABILITY_WEIGHT;
                    probability -= penalty;
                    stability -= magnitude * rules::BASELINE_STABILITY_WEIGHT;
                    penalties.baseline_penalty += penalty;
                }
            }
        }
    }

    let truth_probability = probability.clamp(0.0, 1.0);
    let emotional_stability = stability.clamp(0.0, 1.0);

    log::debug!(
        "answer scored: probability {:.3}, stability {:.3}, penalties {:.3}",
        truth_probability,
        emotional_stability,
        penalties.total()
    );

    AnalysisResult {
        question: question.to_string(),
        answer: answer.to_string(),
        truth_probability,
        emotional_stability,
        dominant_emotions: dominant,
        micro_expressions: micro_hits,
        deception_indicators,
        transitions,
        baseline_comparison,
        facial_metrics: metrics,
        penalties,
        observations,
        analyzed_at_ms: now_ms,
    }
}

/// Channels at or above the dominance threshold, strongest first.
///
/// At equal intensity neutral ranks last; other ties keep canonical
/// order.
pub fn dominant_emotions(vector: &EmotionVector) -> Vec<DominantEmotion> {
    let mut dominant: Vec<DominantEmotion> = vector
        .iter()
        .filter(|(_, intensity)| *intensity >= rules::DOMINANT_INTENSITY_MIN)
        .map(|(emotion, intensity)| DominantEmotion { emotion, intensity })
        .collect();
    dominant.sort_by(|a, b| {
        b.intensity
            .partial_cmp(&a.intensity)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| (a.emotion == Emotion::Neutral).cmp(&(b.emotion == Emotion::Neutral)))
    });
    dominant
}

/// Groups this call's hits by sequence id, first-seen order.
fn sequence_groups(hits: &[MicroExpression]) -> Vec<Vec<&MicroExpression>> {
    let mut groups: Vec<(u64, Vec<&MicroExpression>)> = Vec::new();
    for hit in hits {
        match groups.iter_mut().find(|(id, _)| *id == hit.sequence_id) {
            Some((_, members)) => members.push(hit),
            None => groups.push((hit.sequence_id, vec![hit])),
        }
    }
    groups.into_iter().map(|(_, members)| members).collect()
}
