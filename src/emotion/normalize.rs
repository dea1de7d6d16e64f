//! Sample validation and normalization.
//!
//! The external detector emits a map of label to intensity. Validation
//! rejects missing, non-finite, and negative entries; normalization
//! rescales a valid vector so the intensities sum to 1, leaving the
//! all-zero vector untouched.

use crate::error::SampleError;

use super::types::{Emotion, EmotionVector, RawEmotionSample, EMOTION_COUNT};

impl EmotionVector {
    /// Validates and decodes a raw detector sample.
    ///
    /// Every label must be present with a finite, non-negative intensity.
    /// Unknown extra keys are ignored.
    pub fn from_raw(raw: &RawEmotionSample) -> Result<Self, SampleError> {
        let mut values = [0.0; EMOTION_COUNT];
        for emotion in Emotion::ALL {
            let value = *raw
                .get(emotion.as_str())
                .ok_or(SampleError::MissingIntensity(emotion))?;
            if !value.is_finite() {
                return Err(SampleError::NonFinite { emotion, value });
            }
            if value < 0.0 {
                return Err(SampleError::Negative { emotion, value });
            }
            values[emotion.index()] = value;
        }
        Ok(Self::from_values(values))
    }

    /// Decodes a detector payload straight from its JSON form, then
    /// validates it like [`EmotionVector::from_raw`].
    pub fn from_json(payload: &str) -> Result<Self, SampleError> {
        let raw: RawEmotionSample = serde_json::from_str(payload)
            .map_err(|error| SampleError::MalformedPayload(error.to_string()))?;
        Self::from_raw(&raw)
    }

    /// Returns a copy rescaled to sum to 1.
    ///
    /// The all-zero vector has no meaningful scale and is returned as-is.
    pub fn normalized(&self) -> Self {
        let sum = self.sum();
        if sum == 0.0 {
            return *self;
        }
        let mut values = *self.as_array();
        for value in &mut values {
            *value /= sum;
        }
        Self::from_values(values)
    }
}
