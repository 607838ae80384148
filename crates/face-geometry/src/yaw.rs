//! Head-yaw estimation from landmark asymmetry

use crate::landmark::{landmark_at, Landmark};
use crate::GeometryError;
use serde::{Deserialize, Serialize};

/// Landmark indices for yaw estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YawLandmarks {
    /// Nose tip
    pub nose_tip: usize,

    /// Left cheek contour point
    pub left_contour: usize,

    /// Right cheek contour point
    pub right_contour: usize,
}

/// Signed head-yaw ratio in `[-1, 1]`.
///
/// `(|nose.x - right| - |nose.x - left|) / (|nose.x - right| + |nose.x - left|)`
/// where `left`/`right` are the cheek contour x-coordinates. 0 is frontal;
/// the sign tracks which way the face is turned. Only x-coordinates are
/// used; the mesh depth channel is too noisy to improve the estimate.
/// Returns 0.0 when both distances are zero.
pub fn yaw_ratio(landmarks: &[Landmark], points: &YawLandmarks) -> Result<f32, GeometryError> {
    let nose = landmark_at(landmarks, points.nose_tip)?;
    let left = landmark_at(landmarks, points.left_contour)?;
    let right = landmark_at(landmarks, points.right_contour)?;

    let left_dist = (nose.x - left.x).abs();
    let right_dist = (nose.x - right.x).abs();
    let sum = left_dist + right_dist;

    if sum == 0.0 {
        return Ok(0.0);
    }
    Ok((right_dist - left_dist) / sum)
}
