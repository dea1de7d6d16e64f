//! Analysis session state.
//!
//! One session per interviewee. The session owns every piece of rolling
//! state: the transition tracker, the micro-expression log, the optional
//! baseline snapshot, counters, and a bounded result history. All
//! methods take explicit timestamps so replays and tests are
//! deterministic; wall-clock entry points live on the engine facade.

use serde::{Deserialize, Serialize};

use crate::baseline::BaselineSnapshot;
use crate::constants::RESULT_HISTORY_CAP;
use crate::emotion::{EmotionVector, RawEmotionSample};
use crate::error::SampleError;
use crate::landmarks::FaceLandmarks;
use crate::micro::{MicroExpression, MicroExpressionLog};
use crate::ring::RingBuffer;
use crate::scorer::{self, AnalysisResult};
use crate::transition::{TransitionRecord, TransitionTracker};

// ============================================================================
// SESSION STATS
// ============================================================================

/// Running counters for one session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SessionStats {
    pub frames_observed: u64,
    pub frames_rejected: u64,
    pub answers_scored: u64,
    pub valid_transitions_recorded: u64,
    pub micro_expressions_recorded: u64,
}

impl Default for SessionStats {
    fn default() -> Self {
        Self {
            frames_observed: 0,
            frames_rejected: 0,
            answers_scored: 0,
            valid_transitions_recorded: 0,
            micro_expressions_recorded: 0,
        }
    }
}

// ============================================================================
// ANALYSIS SESSION
// ============================================================================

/// All rolling state for one interviewee.
#[derive(Debug)]
pub struct AnalysisSession {
    pub(crate) tracker: TransitionTracker,
    pub(crate) micro: MicroExpressionLog,
    pub(crate) baseline: Option<BaselineSnapshot>,
    pub(crate) stats: SessionStats,
    recent_results: RingBuffer<AnalysisResult>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self {
            tracker: TransitionTracker::new(),
            micro: MicroExpressionLog::new(),
            baseline: None,
            stats: SessionStats::default(),
            recent_results: RingBuffer::new(RESULT_HISTORY_CAP),
        }
    }

    /// Captures the resting baseline from a raw pre-question sample.
    ///
    /// Unlike scoring, a malformed sample here is an error: silently
    /// keeping a stale baseline would corrupt every later comparison.
    pub fn set_baseline(
        &mut self,
        sample: &RawEmotionSample,
        now_ms: i64,
    ) -> Result<(), SampleError> {
        let vector = EmotionVector::from_raw(sample)?.normalized();
        self.baseline = Some(BaselineSnapshot::capture(vector, now_ms));
        log::info!("baseline captured");
        Ok(())
    }

    pub fn clear_baseline(&mut self) {
        if self.baseline.take().is_some() {
            log::info!("baseline cleared");
        }
    }

    pub fn baseline(&self) -> Option<&BaselineSnapshot> {
        self.baseline.as_ref()
    }

    /// Feeds one live frame between answers.
    ///
    /// Returns the valid transitions the frame produced, for live
    /// display. Malformed samples are logged and yield none.
    pub fn observe_frame(
        &mut self,
        sample: &RawEmotionSample,
        now_ms: i64,
    ) -> Vec<TransitionRecord> {
        match EmotionVector::from_raw(sample) {
            Ok(vector) => self.observe_vector(&vector.normalized(), now_ms).0,
            Err(error) => {
                self.stats.frames_rejected += 1;
                log::warn!("frame rejected: {}", error);
                Vec::new()
            }
        }
    }

    /// Shared frame path: transition tracking plus the micro sweep.
    pub(crate) fn observe_vector(
        &mut self,
        vector: &EmotionVector,
        now_ms: i64,
    ) -> (Vec<TransitionRecord>, Vec<MicroExpression>) {
        let transitions = self.tracker.observe(vector, now_ms);
        let micro_hits = self.micro.record_frame(vector, now_ms);
        self.stats.frames_observed += 1;
        self.stats.valid_transitions_recorded += transitions.len() as u64;
        self.stats.micro_expressions_recorded += micro_hits.len() as u64;
        (transitions, micro_hits)
    }

    /// Scores one spoken answer against its accompanying sample.
    pub fn score_answer(
        &mut self,
        question: &str,
        answer: &str,
        sample: &RawEmotionSample,
        landmarks: Option<&FaceLandmarks>,
        now_ms: i64,
    ) -> AnalysisResult {
        let result = scorer::engine::score_answer(self, question, answer, sample, landmarks, now_ms);
        self.stats.answers_scored += 1;
        self.recent_results.push(result.clone());
        result
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Recent results, oldest first.
    pub fn recent_results(&self) -> Vec<AnalysisResult> {
        self.recent_results.to_vec()
    }

    /// Valid transitions recorded across the session, oldest first.
    pub fn transition_history(&self) -> Vec<TransitionRecord> {
        self.tracker.history()
    }

    /// Micro-expressions recorded across the session, oldest first.
    pub fn micro_history(&self) -> Vec<MicroExpression> {
        self.micro.history()
    }
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emotion::Emotion;

    fn raw(neutral: f64, happy: f64, fearful: f64) -> RawEmotionSample {
        let mut sample: RawEmotionSample = Emotion::ALL
            .iter()
            .map(|emotion| (emotion.as_str().to_string(), 0.0))
            .collect();
        sample.insert("neutral".to_string(), neutral);
        sample.insert("happy".to_string(), happy);
        sample.insert("fearful".to_string(), fearful);
        sample
    }

    #[test]
    fn test_observe_frame_returns_live_transitions() {
        let mut session = AnalysisSession::new();
        assert!(session.observe_frame(&raw(0.8, 0.2, 0.0), 1_000).is_empty());
        let produced = session.observe_frame(&raw(0.8, 0.08, 0.12), 1_150);
        assert_eq!(produced.len(), 2, "happy fell and fearful rose");

        let stats = session.stats();
        assert_eq!(stats.frames_observed, 2);
        assert_eq!(stats.valid_transitions_recorded, 2);
    }

    #[test]
    fn test_malformed_frames_are_counted_and_ignored() {
        let mut session = AnalysisSession::new();
        let mut bad = raw(0.8, 0.2, 0.0);
        bad.remove("sad");
        assert!(session.observe_frame(&bad, 1_000).is_empty());

        let stats = session.stats();
        assert_eq!(stats.frames_observed, 0);
        assert_eq!(stats.frames_rejected, 1);
    }

    #[test]
    fn test_baseline_round_trip() {
        let mut session = AnalysisSession::new();
        assert!(session.baseline().is_none());
        session.set_baseline(&raw(0.7, 0.3, 0.0), 1_000).unwrap();
        let snapshot = session.baseline().unwrap();
        assert!((snapshot.emotions.get(Emotion::Neutral) - 0.7).abs() < 1e-9);
        assert_eq!(snapshot.captured_at_ms, 1_000);

        session.clear_baseline();
        assert!(session.baseline().is_none());
    }

    #[test]
    fn test_malformed_baseline_is_an_error_and_keeps_none() {
        let mut session = AnalysisSession::new();
        let mut bad = raw(0.7, 0.3, 0.0);
        bad.insert("angry".to_string(), f64::NAN);
        assert!(session.set_baseline(&bad, 1_000).is_err());
        assert!(session.baseline().is_none());
    }

    #[test]
    fn test_scoring_records_results_and_counters() {
        let mut session = AnalysisSession::new();
        session.observe_frame(&raw(0.8, 0.2, 0.0), 1_000);
        let result = session.score_answer("Q1", "A1", &raw(0.8, 0.2, 0.0), None, 1_150);
        assert_eq!(result.question, "Q1");

        let stats = session.stats();
        assert_eq!(stats.answers_scored, 1);
        assert_eq!(stats.frames_observed, 2, "scoring runs the frame path too");

        let history = session.recent_results();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].answer, "A1");
    }

    #[test]
    fn test_result_history_is_bounded() {
        let mut session = AnalysisSession::new();
        for index in 0..40 {
            session.score_answer("Q", "A", &raw(0.8, 0.2, 0.0), None, 1_000 + index * 500);
        }
        assert_eq!(session.recent_results().len(), RESULT_HISTORY_CAP);
    }
}
