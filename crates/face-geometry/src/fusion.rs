//! Yaw-adaptive fusion of the two per-eye openness ratios
//!
//! When the head turns, the eye farther from the camera foreshortens and
//! its openness ratio collapses even while the eye is open. Fusion shifts
//! weight onto the near eye as yaw grows so the fused ratio stays a
//! faithful openness signal across head poses.

use crate::GeometryError;
use serde::{Deserialize, Serialize};

/// Which eye(s) contributed to a fused ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EyeSide {
    Left,
    Right,
    Both,
}

/// Yaw thresholds governing how the two eye ratios are combined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionPolicy {
    /// Below this absolute yaw both eyes are averaged equally.
    pub both_eyes_max_yaw: f32,

    /// At or above this absolute yaw only the near eye is used.
    pub near_eye_only_yaw: f32,

    /// Frames at or above this absolute yaw are excluded from baseline
    /// calibration.
    pub calibration_max_yaw: f32,
}

impl Default for FusionPolicy {
    fn default() -> Self {
        Self {
            both_eyes_max_yaw: 0.20,
            near_eye_only_yaw: 0.35,
            calibration_max_yaw: 0.15,
        }
    }
}

impl FusionPolicy {
    /// Validate threshold ordering.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !(self.calibration_max_yaw > 0.0) {
            return Err(GeometryError::InvalidPolicy(format!(
                "calibration_max_yaw must be positive, got {}",
                self.calibration_max_yaw
            )));
        }
        if self.calibration_max_yaw > self.both_eyes_max_yaw {
            return Err(GeometryError::InvalidPolicy(format!(
                "calibration_max_yaw ({}) must not exceed both_eyes_max_yaw ({})",
                self.calibration_max_yaw, self.both_eyes_max_yaw
            )));
        }
        if self.both_eyes_max_yaw >= self.near_eye_only_yaw {
            return Err(GeometryError::InvalidPolicy(format!(
                "both_eyes_max_yaw ({}) must be below near_eye_only_yaw ({})",
                self.both_eyes_max_yaw, self.near_eye_only_yaw
            )));
        }
        Ok(())
    }

    /// Fuse the per-eye openness ratios under the observed head yaw.
    ///
    /// Three regimes by absolute yaw: equal average while near-frontal, a
    /// linear crossfade toward the near eye through the mid band, and the
    /// near eye alone once the far eye is too foreshortened to trust.
    /// Positive yaw puts the left eye nearer the camera.
    pub fn fuse(&self, left_ratio: f32, right_ratio: f32, yaw: f32) -> FusedRatio {
        let abs_yaw = yaw.abs();
        let calibration_eligible = abs_yaw < self.calibration_max_yaw;

        let (near, far, side) = if yaw > 0.0 {
            (left_ratio, right_ratio, EyeSide::Left)
        } else {
            (right_ratio, left_ratio, EyeSide::Right)
        };

        if abs_yaw < self.both_eyes_max_yaw {
            return FusedRatio {
                value: (left_ratio + right_ratio) / 2.0,
                calibration_eligible,
                dominant: EyeSide::Both,
            };
        }

        if abs_yaw < self.near_eye_only_yaw {
            let span = self.near_eye_only_yaw - self.both_eyes_max_yaw;
            let near_weight = 0.5 + 0.5 * (abs_yaw - self.both_eyes_max_yaw) / span;
            return FusedRatio {
                value: near * near_weight + far * (1.0 - near_weight),
                calibration_eligible,
                dominant: side,
            };
        }

        FusedRatio {
            value: near,
            calibration_eligible,
            dominant: side,
        }
    }
}

/// A fused eye-openness sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FusedRatio {
    /// Combined openness ratio.
    pub value: f32,

    /// Whether this frame may feed baseline calibration.
    pub calibration_eligible: bool,

    /// Which eye(s) dominated the combination.
    pub dominant: EyeSide,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontal_averages_both_eyes() {
        let policy = FusionPolicy::default();
        let fused = policy.fuse(0.30, 0.20, 0.05);
        assert!((fused.value - 0.25).abs() < 1e-6);
        assert_eq!(fused.dominant, EyeSide::Both);
        assert!(fused.calibration_eligible);
    }

    #[test]
    fn test_blend_band_weights_near_eye() {
        let policy = FusionPolicy::default();
        // Midpoint of the blend band: near weight 0.75
        let fused = policy.fuse(0.40, 0.20, 0.275);
        assert!((fused.value - 0.35).abs() < 1e-6);
        assert_eq!(fused.dominant, EyeSide::Left);
        assert!(!fused.calibration_eligible);
    }

    #[test]
    fn test_blend_onset_matches_average() {
        let policy = FusionPolicy::default();
        // At the lower edge of the band the near weight is exactly 0.5,
        // so the crossfade is continuous with the averaging regime.
        let fused = policy.fuse(0.40, 0.20, 0.20);
        assert!((fused.value - 0.30).abs() < 1e-6);
        assert_eq!(fused.dominant, EyeSide::Left);
    }

    #[test]
    fn test_extreme_yaw_uses_near_eye_only() {
        let policy = FusionPolicy::default();
        let fused = policy.fuse(0.40, 0.20, 0.35);
        assert_eq!(fused.value, 0.40);
        assert_eq!(fused.dominant, EyeSide::Left);

        let fused = policy.fuse(0.40, 0.20, -0.60);
        assert_eq!(fused.value, 0.20);
        assert_eq!(fused.dominant, EyeSide::Right);
    }

    #[test]
    fn test_negative_yaw_selects_right_eye() {
        let policy = FusionPolicy::default();
        let fused = policy.fuse(0.40, 0.20, -0.275);
        // Near weight 0.75 on the right eye
        assert!((fused.value - 0.25).abs() < 1e-6);
        assert_eq!(fused.dominant, EyeSide::Right);
    }

    #[test]
    fn test_calibration_eligibility_boundary() {
        let policy = FusionPolicy::default();
        assert!(policy.fuse(0.3, 0.3, 0.149).calibration_eligible);
        assert!(!policy.fuse(0.3, 0.3, 0.15).calibration_eligible);
        assert!(!policy.fuse(0.3, 0.3, -0.15).calibration_eligible);
    }

    #[test]
    fn test_validate_rejects_bad_ordering() {
        let policy = FusionPolicy {
            both_eyes_max_yaw: 0.40,
            near_eye_only_yaw: 0.35,
            calibration_max_yaw: 0.15,
        };
        assert!(policy.validate().is_err());

        let policy = FusionPolicy {
            calibration_max_yaw: 0.25,
            ..FusionPolicy::default()
        };
        assert!(policy.validate().is_err());

        let policy = FusionPolicy {
            calibration_max_yaw: 0.0,
            ..FusionPolicy::default()
        };
        assert!(policy.validate().is_err());

        assert!(FusionPolicy::default().validate().is_ok());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn fused_value_stays_between_eye_ratios(
                left in 0.0f32..1.0,
                right in 0.0f32..1.0,
                yaw in -1.0f32..1.0,
            ) {
                let fused = FusionPolicy::default().fuse(left, right, yaw);
                let lo = left.min(right);
                let hi = left.max(right);
                prop_assert!(fused.value >= lo - 1e-6);
                prop_assert!(fused.value <= hi + 1e-6);
            }

            #[test]
            fn near_eye_weight_grows_with_yaw(
                step in 0usize..100,
            ) {
                // Sweep the blend band with a wide-open near eye and a
                // closed far eye: the fused value must be non-decreasing.
                let policy = FusionPolicy::default();
                let band = policy.near_eye_only_yaw - policy.both_eyes_max_yaw;
                let yaw_a = policy.both_eyes_max_yaw + band * (step as f32 / 100.0);
                let yaw_b = policy.both_eyes_max_yaw + band * ((step + 1) as f32 / 100.0);
                let a = policy.fuse(0.4, 0.1, yaw_a).value;
                let b = policy.fuse(0.4, 0.1, yaw_b).value;
                prop_assert!(b >= a - 1e-6);
            }
        }
    }
}
