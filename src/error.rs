//! Error handling
//!
//! Scoring never fails outward: a malformed sample degrades to the
//! neutral default result at the call site. These types cover the places
//! where an error is still worth naming, sample validation and the
//! session registry.

use thiserror::Error;

use crate::emotion::Emotion;

pub type EngineResult<T> = Result<T, EngineError>;

/// Why a raw emotion sample was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SampleError {
    /// The payload was not a JSON object of label to intensity.
    #[error("malformed sample payload: {0}")]
    MalformedPayload(String),

    /// The detector output carried no entry for this emotion label.
    #[error("missing intensity for '{0}'")]
    MissingIntensity(Emotion),

    /// NaN or infinite intensity.
    #[error("non-finite intensity for '{emotion}': {value}")]
    NonFinite { emotion: Emotion, value: f64 },

    /// Intensities are magnitudes; a negative value is detector garbage.
    #[error("negative intensity for '{emotion}': {value}")]
    Negative { emotion: Emotion, value: f64 },
}

/// Errors surfaced by the session registry.
#[derive(Debug, Error)]
pub enum EngineError {
    // Session errors
    #[error("unknown session: {0}")]
    UnknownSession(String),

    // Input errors
    #[error(transparent)]
    InvalidSample(#[from] SampleError),
}
