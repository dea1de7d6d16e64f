//! Emotion Module
//!
//! The seven-emotion intensity model everything downstream consumes.
//!
//! ## Structure
//! - `types`: Core types (Emotion, EmotionVector, EmotionalBalance)
//! - `normalize`: Raw-sample validation and sum rescaling

pub mod normalize;
pub mod types;

// Re-export main types for convenience
pub use types::{Emotion, EmotionVector, EmotionalBalance, RawEmotionSample, EMOTION_COUNT};

/// Formats an intensity in [0,1] as a one-decimal percentage.
pub(crate) fn percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}
