//! Deterministic truth-likelihood scoring over per-frame emotion samples.
//!
//! An external face tracker supplies per-frame emotion intensities (and
//! optionally raw landmark geometry); this crate keeps the rolling
//! per-interviewee state and scores each spoken answer with a fixed,
//! auditable rule set. No models, no randomness: the same session
//! history and sample always produce the same result.
//!
//! ```ignore
//! use veracity_core::VeracityEngine;
//!
//! let engine = VeracityEngine::new();
//! let session = engine.create_session();
//! engine.set_baseline(&session, &resting_sample)?;
//! let result = engine.score_answer(&session, "Where were you?", "At home.", &sample, None)?;
//! println!("{}% likely true", result.truth_probability * 100.0);
//! ```

pub mod baseline;
pub mod constants;
pub mod emotion;
pub mod engine;
pub mod error;
pub mod indicators;
pub mod landmarks;
pub mod micro;
pub mod report;
mod ring;
pub mod scorer;
pub mod session;
pub mod transition;

// Re-export main types for convenience
pub use baseline::{BaselineComparison, BaselineDeviation, BaselineSnapshot};
pub use emotion::{Emotion, EmotionVector, EmotionalBalance, RawEmotionSample};
pub use engine::VeracityEngine;
pub use error::{EngineError, EngineResult, SampleError};
pub use landmarks::{DeceptionMetrics, FaceLandmarks};
pub use micro::MicroExpression;
pub use report::{format_report, FormattedReport, TruthBand};
pub use scorer::{AnalysisResult, DominantEmotion, ScoreBreakdown};
pub use session::{AnalysisSession, SessionStats};
pub use transition::{TimingVerdict, TransitionRecord};
