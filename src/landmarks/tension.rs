//! Facial-Tension Evaluator
//!
//! Reduces a landmark frame to the four stress metrics the scorer
//! penalizes. Pure geometry arithmetic; absent regions contribute zero.

use super::types::{DeceptionMetrics, EyeRegion, FaceLandmarks, LandmarkPoint};

// Combination gates for unnatural-expression scoring.
const RAISED_TENSE_GATE: f64 = 0.7;
const RAISED_TENSE_SCORE: f64 = 0.3;
const DILATION_GAP_GATE: f64 = 0.2;
const DILATION_GAP_SCORE: f64 = 0.4;

/// Derives stress metrics from one landmark frame.
pub fn evaluate(landmarks: &FaceLandmarks) -> DeceptionMetrics {
    DeceptionMetrics {
        asymmetry: asymmetry(landmarks),
        muscle_tension: muscle_tension(landmarks),
        rapid_movements: rapid_movements(landmarks),
        unnatural_expressions: unnatural_expressions(landmarks),
    }
}

/// Left/right disparity across eyes, brows, and mouth, averaged and
/// capped at 1.
fn asymmetry(landmarks: &FaceLandmarks) -> f64 {
    let eyes = &landmarks.eyes;
    let eye_comparison = ((lid_gap(&eyes.left) - lid_gap(&eyes.right)).abs()
        + (corner_y(&eyes.left.corner, 0) - corner_y(&eyes.right.corner, 0)).abs()
        + (eyes.left.pupil_dilation - eyes.right.pupil_dilation).abs())
        / 3.0;

    let brows = &landmarks.eyebrows;
    let brow_comparison = ((max_or_zero(&brows.left) - max_or_zero(&brows.right)).abs()
        + (brows.movement.raising - brows.movement.furrowing).abs())
        / 2.0;

    let mouth = &landmarks.mouth;
    let mouth_comparison = ((corner_y(&mouth.corners, 0) - corner_y(&mouth.corners, 1)).abs()
        + (max_or_zero(&mouth.upper_lip) - max_or_zero(&mouth.lower_lip)).abs())
        / 2.0;

    ((eye_comparison + brow_comparison + mouth_comparison) / 3.0).min(1.0)
}

/// Mean of the three muscle groups that stay tense under stress.
fn muscle_tension(landmarks: &FaceLandmarks) -> f64 {
    (landmarks.eyebrows.movement.furrowing + landmarks.mouth.tension + landmarks.jawline.tension)
        / 3.0
}

/// Fastest-moving feature wins.
fn rapid_movements(landmarks: &FaceLandmarks) -> f64 {
    landmarks
        .eyebrows
        .movement
        .raising
        .max(landmarks.mouth.opening)
        .max(landmarks.eyes.left.pupil_dilation)
        .max(landmarks.eyes.right.pupil_dilation)
}

/// Combinations that rarely occur in genuine expressions.
fn unnatural_expressions(landmarks: &FaceLandmarks) -> f64 {
    let mut score = 0.0;
    if landmarks.eyebrows.movement.raising > RAISED_TENSE_GATE
        && landmarks.mouth.tension > RAISED_TENSE_GATE
    {
        score += RAISED_TENSE_SCORE;
    }
    let dilation_gap =
        (landmarks.eyes.left.pupil_dilation - landmarks.eyes.right.pupil_dilation).abs();
    if dilation_gap > DILATION_GAP_GATE {
        score += DILATION_GAP_SCORE;
    }
    score.min(1.0)
}

fn lid_gap(eye: &EyeRegion) -> f64 {
    (first_or_zero(&eye.upper_lid) - first_or_zero(&eye.lower_lid)).abs()
}

fn corner_y(corners: &[LandmarkPoint], index: usize) -> f64 {
    corners.get(index).map_or(0.0, |point| point.y)
}

fn first_or_zero(values: &[f64]) -> f64 {
    values.first().copied().unwrap_or(0.0)
}

fn max_or_zero(values: &[f64]) -> f64 {
    values.iter().copied().fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_frame_contributes_nothing() {
        let metrics = evaluate(&FaceLandmarks::default());
        assert_eq!(metrics.asymmetry, 0.0);
        assert_eq!(metrics.muscle_tension, 0.0);
        assert_eq!(metrics.rapid_movements, 0.0);
        assert_eq!(metrics.unnatural_expressions, 0.0);
    }

    #[test]
    fn test_uneven_pupils_show_up_everywhere_they_should() {
        let mut landmarks = FaceLandmarks::default();
        landmarks.eyes.left.pupil_dilation = 0.8;
        landmarks.eyes.right.pupil_dilation = 0.2;
        let metrics = evaluate(&landmarks);

        // Eye comparison carries the 0.6 gap, averaged twice.
        assert!((metrics.asymmetry - 0.6 / 3.0 / 3.0).abs() < 1e-12);
        assert_eq!(metrics.rapid_movements, 0.8);
        assert_eq!(metrics.unnatural_expressions, DILATION_GAP_SCORE);
    }

    #[test]
    fn test_muscle_tension_is_the_mean_of_three_groups() {
        let mut landmarks = FaceLandmarks::default();
        landmarks.eyebrows.movement.furrowing = 0.6;
        landmarks.mouth.tension = 0.9;
        landmarks.jawline.tension = 0.3;
        let metrics = evaluate(&landmarks);
        assert!((metrics.muscle_tension - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_raised_brows_with_tense_mouth_read_as_unnatural() {
        let mut landmarks = FaceLandmarks::default();
        landmarks.eyebrows.movement.raising = 0.8;
        landmarks.mouth.tension = 0.8;
        let metrics = evaluate(&landmarks);
        assert!((metrics.unnatural_expressions - RAISED_TENSE_SCORE).abs() < 1e-12);

        landmarks.eyes.left.pupil_dilation = 0.5;
        let metrics = evaluate(&landmarks);
        assert!(
            (metrics.unnatural_expressions - (RAISED_TENSE_SCORE + DILATION_GAP_SCORE)).abs()
                < 1e-12
        );
    }

    #[test]
    fn test_asymmetry_caps_at_one() {
        let mut landmarks = FaceLandmarks::default();
        landmarks.eyes.left.upper_lid = vec![9.0];
        landmarks.eyebrows.left = vec![9.0];
        landmarks.mouth.upper_lip = vec![9.0];
        let metrics = evaluate(&landmarks);
        assert_eq!(metrics.asymmetry, 1.0);
    }

    #[test]
    fn test_mirrored_lid_gaps_cancel_out() {
        // Equal eye openings measured with opposite lid orientations are
        // still symmetric.
        let mut landmarks = FaceLandmarks::default();
        landmarks.eyes.left.upper_lid = vec![0.2];
        landmarks.eyes.left.lower_lid = vec![0.5];
        landmarks.eyes.right.upper_lid = vec![0.5];
        landmarks.eyes.right.lower_lid = vec![0.2];
        let metrics = evaluate(&landmarks);
        assert_eq!(metrics.asymmetry, 0.0);
    }

    #[test]
    fn test_lid_and_corner_geometry_feed_asymmetry() {
        let mut landmarks = FaceLandmarks::default();
        landmarks.eyes.left.upper_lid = vec![0.5];
        landmarks.eyes.left.lower_lid = vec![0.2];
        landmarks.eyes.right.upper_lid = vec![0.4];
        landmarks.eyes.right.lower_lid = vec![0.3];
        landmarks.eyes.left.corner = vec![LandmarkPoint { x: 0.0, y: 0.42 }];
        landmarks.eyes.right.corner = vec![LandmarkPoint { x: 0.0, y: 0.40 }];
        let metrics = evaluate(&landmarks);

        // Lid gaps 0.3 vs 0.1 plus a 0.02 corner skew, averaged.
        let expected = ((0.2_f64 + 0.02) / 3.0) / 3.0;
        assert!((metrics.asymmetry - expected).abs() < 1e-12);
    }
}
