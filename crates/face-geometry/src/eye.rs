//! Per-eye openness ratio

use crate::landmark::{landmark_at, Landmark};
use crate::GeometryError;
use serde::{Deserialize, Serialize};

/// Landmark indices for one eye: the horizontal corner pair plus two
/// upper/lower eyelid pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EyeLandmarks {
    /// Outer corner of the eye
    pub lateral: usize,

    /// First upper-eyelid point, paired with `lower_1`
    pub upper_1: usize,

    /// Second upper-eyelid point, paired with `lower_2`
    pub upper_2: usize,

    /// Inner corner of the eye
    pub medial: usize,

    /// First lower-eyelid point
    pub lower_1: usize,

    /// Second lower-eyelid point
    pub lower_2: usize,
}

/// Compute the openness ratio for one eye.
///
/// `(|upper_1 - lower_1| + |upper_2 - lower_2|) / (2 * |lateral - medial|)`
/// over 2D distances on normalized coordinates. An open eye sits around
/// 0.25-0.35; a closed eye approaches 0. A zero-length horizontal span
/// (degenerate geometry) yields 0.0 rather than a division fault.
pub fn eye_openness(landmarks: &[Landmark], eye: &EyeLandmarks) -> Result<f32, GeometryError> {
    let lateral = landmark_at(landmarks, eye.lateral)?;
    let medial = landmark_at(landmarks, eye.medial)?;
    let upper_1 = landmark_at(landmarks, eye.upper_1)?;
    let upper_2 = landmark_at(landmarks, eye.upper_2)?;
    let lower_1 = landmark_at(landmarks, eye.lower_1)?;
    let lower_2 = landmark_at(landmarks, eye.lower_2)?;

    let horizontal = lateral.distance_2d(&medial);
    if horizontal == 0.0 {
        return Ok(0.0);
    }

    let vertical = upper_1.distance_2d(&lower_1) + upper_2.distance_2d(&lower_2);
    Ok(vertical / (2.0 * horizontal))
}
