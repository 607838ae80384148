//! Facial Geometry Measurements
//!
//! Pure per-frame geometry over normalized face-mesh landmarks:
//! - Per-eye openness ratio (vertical lid spread over horizontal span)
//! - Head-yaw ratio from nose/cheek asymmetry
//! - Yaw-adaptive fusion of the two per-eye ratios into one signal

mod eye;
mod fusion;
mod landmark;
pub mod mesh;
mod yaw;

pub use eye::{eye_openness, EyeLandmarks};
pub use fusion::{EyeSide, FusedRatio, FusionPolicy};
pub use landmark::Landmark;
pub use yaw::{yaw_ratio, YawLandmarks};

use thiserror::Error;

/// Geometry error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("Landmark index {index} out of range (set has {len} points)")]
    LandmarkOutOfRange { index: usize, len: usize },

    #[error("Invalid fusion policy: {0}")]
    InvalidPolicy(String),
}
