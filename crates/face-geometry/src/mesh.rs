//! Face-mesh landmark indices
//!
//! Fixed positional indices into the 478-point face-mesh output of the
//! landmark model. These identify which points carry the eye corners,
//! eyelids, nose tip, and cheek contours; they are configuration
//! constants, not runtime state.

use crate::eye::EyeLandmarks;
use crate::yaw::YawLandmarks;

/// Number of points in one face-mesh landmark set.
pub const MESH_LANDMARK_COUNT: usize = 478;

/// Left-eye measurement points.
pub const LEFT_EYE: EyeLandmarks = EyeLandmarks {
    lateral: 362,
    upper_1: 385,
    upper_2: 387,
    medial: 263,
    lower_1: 373,
    lower_2: 380,
};

/// Right-eye measurement points.
pub const RIGHT_EYE: EyeLandmarks = EyeLandmarks {
    lateral: 33,
    upper_1: 160,
    upper_2: 158,
    medial: 133,
    lower_1: 153,
    lower_2: 144,
};

/// Head-yaw estimation points: nose tip plus the two cheek contours.
pub const YAW_POINTS: YawLandmarks = YawLandmarks {
    nose_tip: 1,
    left_contour: 234,
    right_contour: 454,
};
