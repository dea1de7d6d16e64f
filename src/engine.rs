//! Engine facade.
//!
//! Owns every live session behind one handle that interview tools can
//! share across threads. Sessions are addressed by the opaque id
//! returned from `create_session`; each sits behind its own lock so
//! concurrent interviews never serialize on one another.

use std::collections::HashMap;

use chrono::Utc;
use parking_lot::{Mutex, RwLock};
use uuid::Uuid;

use crate::constants::{ENGINE_NAME, ENGINE_VERSION};
use crate::emotion::RawEmotionSample;
use crate::error::{EngineError, EngineResult};
use crate::landmarks::FaceLandmarks;
use crate::scorer::AnalysisResult;
use crate::session::{AnalysisSession, SessionStats};
use crate::transition::TransitionRecord;

/// Shared handle over all live analysis sessions.
pub struct VeracityEngine {
    sessions: RwLock<HashMap<String, Mutex<AnalysisSession>>>,
}

impl VeracityEngine {
    pub fn new() -> Self {
        log::info!("{} v{} initialized", ENGINE_NAME, ENGINE_VERSION);
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Opens a fresh session and returns its id.
    pub fn create_session(&self) -> String {
        let session_id = Uuid::new_v4().to_string();
        self.sessions
            .write()
            .insert(session_id.clone(), Mutex::new(AnalysisSession::new()));
        log::info!("session created: {}", session_id);
        session_id
    }

    /// Drops a session and all of its state.
    pub fn remove_session(&self, session_id: &str) -> EngineResult<()> {
        self.sessions
            .write()
            .remove(session_id)
            .ok_or_else(|| EngineError::UnknownSession(session_id.to_string()))?;
        log::info!("session removed: {}", session_id);
        Ok(())
    }

    pub fn session_count(&self) -> usize {
        self.sessions.read().len()
    }

    /// Captures the interviewee's resting baseline now.
    pub fn set_baseline(&self, session_id: &str, sample: &RawEmotionSample) -> EngineResult<()> {
        self.set_baseline_at(session_id, sample, wall_clock_ms())
    }

    pub fn set_baseline_at(
        &self,
        session_id: &str,
        sample: &RawEmotionSample,
        now_ms: i64,
    ) -> EngineResult<()> {
        self.with_session(session_id, |session| session.set_baseline(sample, now_ms))?
            .map_err(EngineError::from)
    }

    pub fn clear_baseline(&self, session_id: &str) -> EngineResult<()> {
        self.with_session(session_id, |session| session.clear_baseline())
    }

    /// Feeds one live camera frame now.
    pub fn observe_frame(
        &self,
        session_id: &str,
        sample: &RawEmotionSample,
    ) -> EngineResult<Vec<TransitionRecord>> {
        self.observe_frame_at(session_id, sample, wall_clock_ms())
    }

    pub fn observe_frame_at(
        &self,
        session_id: &str,
        sample: &RawEmotionSample,
        now_ms: i64,
    ) -> EngineResult<Vec<TransitionRecord>> {
        self.with_session(session_id, |session| session.observe_frame(sample, now_ms))
    }

    /// Scores one spoken answer now.
    pub fn score_answer(
        &self,
        session_id: &str,
        question: &str,
        answer: &str,
        sample: &RawEmotionSample,
        landmarks: Option<&FaceLandmarks>,
    ) -> EngineResult<AnalysisResult> {
        self.score_answer_at(
            session_id,
            question,
            answer,
            sample,
            landmarks,
            wall_clock_ms(),
        )
    }

    pub fn score_answer_at(
        &self,
        session_id: &str,
        question: &str,
        answer: &str,
        sample: &RawEmotionSample,
        landmarks: Option<&FaceLandmarks>,
        now_ms: i64,
    ) -> EngineResult<AnalysisResult> {
        self.with_session(session_id, |session| {
            session.score_answer(question, answer, sample, landmarks, now_ms)
        })
    }

    pub fn session_stats(&self, session_id: &str) -> EngineResult<SessionStats> {
        self.with_session(session_id, |session| session.stats())
    }

    /// Recent results for a session, oldest first.
    pub fn recent_results(&self, session_id: &str) -> EngineResult<Vec<AnalysisResult>> {
        self.with_session(session_id, |session| session.recent_results())
    }

    fn with_session<T>(
        &self,
        session_id: &str,
        operation: impl FnOnce(&mut AnalysisSession) -> T,
    ) -> EngineResult<T> {
        let sessions = self.sessions.read();
        let session = sessions
            .get(session_id)
            .ok_or_else(|| EngineError::UnknownSession(session_id.to_string()))?;
        let mut guard = session.lock();
        Ok(operation(&mut guard))
    }
}

impl Default for VeracityEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn wall_clock_ms() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emotion::Emotion;

    fn raw(levels: &[(Emotion, f64)]) -> RawEmotionSample {
        let mut sample: RawEmotionSample = Emotion::ALL
            .iter()
            .map(|emotion| (emotion.as_str().to_string(), 0.0))
            .collect();
        for (emotion, value) in levels {
            sample.insert(emotion.as_str().to_string(), *value);
        }
        sample
    }

    #[test]
    fn test_unknown_session_is_rejected() {
        let engine = VeracityEngine::new();
        let error = engine.session_stats("missing").unwrap_err();
        assert!(matches!(error, EngineError::UnknownSession(id) if id == "missing"));
    }

    #[test]
    fn test_create_and_remove_sessions() {
        let engine = VeracityEngine::new();
        let session_id = engine.create_session();
        assert_eq!(engine.session_count(), 1);

        engine.remove_session(&session_id).unwrap();
        assert_eq!(engine.session_count(), 0);
        assert!(engine.remove_session(&session_id).is_err());
    }

    #[test]
    fn test_sessions_do_not_share_state() {
        let engine = VeracityEngine::new();
        let first = engine.create_session();
        let second = engine.create_session();

        engine
            .observe_frame_at(&first, &raw(&[(Emotion::Neutral, 1.0)]), 1_000)
            .unwrap();
        let produced = engine
            .observe_frame_at(
                &first,
                &raw(&[(Emotion::Neutral, 0.7), (Emotion::Angry, 0.3)]),
                1_150,
            )
            .unwrap();
        assert_eq!(produced.len(), 2);

        assert_eq!(engine.session_stats(&first).unwrap().frames_observed, 2);
        assert_eq!(engine.session_stats(&second).unwrap().frames_observed, 0);
    }

    #[test]
    fn test_baseline_validation_surfaces_through_the_facade() {
        let engine = VeracityEngine::new();
        let session_id = engine.create_session();

        let mut bad = raw(&[(Emotion::Neutral, 1.0)]);
        bad.insert("neutral".to_string(), f64::NAN);
        let error = engine.set_baseline_at(&session_id, &bad, 500).unwrap_err();
        assert!(matches!(error, EngineError::InvalidSample(_)));
    }

    #[test]
    fn test_scoring_through_the_facade_records_results() {
        let engine = VeracityEngine::new();
        let session_id = engine.create_session();

        let result = engine
            .score_answer_at(
                &session_id,
                "Did you take it?",
                "No.",
                &raw(&[(Emotion::Neutral, 0.9), (Emotion::Happy, 0.1)]),
                None,
                1_000,
            )
            .unwrap();
        assert_eq!(result.question, "Did you take it?");

        let recent = engine.recent_results(&session_id).unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(engine.session_stats(&session_id).unwrap().answers_scored, 1);
    }
}
