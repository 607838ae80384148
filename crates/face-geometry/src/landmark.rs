//! Normalized landmark points

use crate::GeometryError;
use serde::{Deserialize, Serialize};

/// A single normalized facial landmark.
///
/// Coordinates are in `[0, 1]` image space. The depth estimate `z` is
/// carried through from the landmark model but ignored by the geometry
/// math, which works on 2D distances only.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    /// Create a landmark from 2D coordinates (z = 0)
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// 2D Euclidean distance to another landmark (z ignored)
    pub fn distance_2d(&self, other: &Landmark) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Fetch a landmark by positional index, failing on a short set
pub(crate) fn landmark_at(landmarks: &[Landmark], index: usize) -> Result<Landmark, GeometryError> {
    landmarks
        .get(index)
        .copied()
        .ok_or(GeometryError::LandmarkOutOfRange {
            index,
            len: landmarks.len(),
        })
}
