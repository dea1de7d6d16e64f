//! Landmark Types
//!
//! Face geometry handed over by the external tracker, camelCase on the
//! wire. Data structures only - no evaluation logic.

use serde::{Deserialize, Serialize};

// ============================================================================
// GEOMETRY PRIMITIVES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LandmarkPoint {
    pub x: f64,
    pub y: f64,
}

// ============================================================================
// FACE REGIONS
// ============================================================================

/// One eye's geometry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EyeRegion {
    pub upper_lid: Vec<f64>,
    pub lower_lid: Vec<f64>,
    pub corner: Vec<LandmarkPoint>,
    pub pupil_dilation: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Eyes {
    pub left: EyeRegion,
    pub right: EyeRegion,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BrowMovement {
    pub raising: f64,
    pub furrowing: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Eyebrows {
    pub left: Vec<f64>,
    pub right: Vec<f64>,
    pub movement: BrowMovement,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mouth {
    pub upper_lip: Vec<f64>,
    pub lower_lip: Vec<f64>,
    pub corners: Vec<LandmarkPoint>,
    pub tension: f64,
    pub opening: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Nose {
    pub bridge: Vec<f64>,
    pub tip: LandmarkPoint,
    pub wings: Vec<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Jawline {
    pub contour: Vec<f64>,
    pub tension: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FaceShape {
    pub symmetry: f64,
    pub proportions: Vec<f64>,
}

/// Full landmark frame for one face.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceLandmarks {
    pub eyes: Eyes,
    pub eyebrows: Eyebrows,
    pub mouth: Mouth,
    pub nose: Nose,
    pub jawline: Jawline,
    pub face_shape: FaceShape,
}

// ============================================================================
// DECEPTION METRICS
// ============================================================================

/// Geometry-derived stress metrics, all in [0,1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DeceptionMetrics {
    pub asymmetry: f64,
    pub muscle_tension: f64,
    pub rapid_movements: f64,
    pub unnatural_expressions: f64,
}
