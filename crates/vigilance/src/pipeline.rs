//! Per-frame classification pipeline

use crate::{VigilanceConfig, VigilanceError};
use eye_state::{DrowsinessListener, DrowsinessState, EyeStateTracker, Thresholds};
use face_geometry::{eye_openness, mesh, yaw_ratio, Landmark};
use signal_smoother::RollingAverage;
use tracing::debug;

/// Per-frame drowsiness classification pipeline.
///
/// One instance per camera stream. Every processed frame goes through
/// `process_frame`; state-transition events reach the listener handed to
/// `new`. Timestamps are caller-supplied milliseconds and must be
/// non-decreasing; the pipeline never samples a clock of its own.
pub struct DrowsinessPipeline {
    config: VigilanceConfig,
    smoother: RollingAverage,
    tracker: EyeStateTracker,
    /// Consecutive frames without a face
    no_face_frames: u32,
}

impl DrowsinessPipeline {
    /// Create a pipeline delivering transition events to `listener`
    pub fn new(
        config: VigilanceConfig,
        listener: DrowsinessListener,
    ) -> Result<Self, VigilanceError> {
        config.validate()?;
        let smoother = RollingAverage::new(config.smoothing_window)?;
        let tracker = EyeStateTracker::new(config.tracker.clone(), listener)?;
        Ok(Self {
            config,
            smoother,
            tracker,
            no_face_frames: 0,
        })
    }

    /// Process one frame's landmark set, or its absence.
    ///
    /// `None` counts toward the no-face grace run; once the run reaches
    /// the configured bound the smoother is cleared and the classifier is
    /// told the face is lost, so single-frame tracking glitches never leak
    /// out. A present landmark set always clears the run, even when its
    /// geometry turns out malformed; malformed geometry is returned as an
    /// error with the smoother and classifier untouched.
    pub fn process_frame(
        &mut self,
        landmarks: Option<&[Landmark]>,
        timestamp_ms: u64,
    ) -> Result<(), VigilanceError> {
        let landmarks = match landmarks {
            Some(landmarks) => landmarks,
            None => {
                self.no_face_frames = self.no_face_frames.saturating_add(1);
                if self.no_face_frames >= self.config.no_face_grace_frames {
                    self.smoother.reset();
                    self.tracker.notify_face_lost();
                }
                return Ok(());
            }
        };
        self.no_face_frames = 0;

        let yaw = yaw_ratio(landmarks, &mesh::YAW_POINTS)?;
        let left = eye_openness(landmarks, &mesh::LEFT_EYE)?;
        let right = eye_openness(landmarks, &mesh::RIGHT_EYE)?;

        let fused = self.config.fusion.fuse(left, right, yaw);
        let smoothed = self.smoother.add(fused.value);
        self.tracker
            .update(smoothed, timestamp_ms, fused.calibration_eligible);

        debug!(
            left,
            right,
            fused = fused.value,
            smoothed,
            yaw,
            dominant = ?fused.dominant,
            state = self.tracker.current_state().label(),
            "Frame classified"
        );
        Ok(())
    }

    /// Clear all stage state and return to calibration
    pub fn reset(&mut self) {
        self.smoother.reset();
        self.tracker.reset();
        self.no_face_frames = 0;
    }

    /// True while the classifier is still calibrating
    pub fn is_calibrating(&self) -> bool {
        self.tracker.is_calibrating()
    }

    /// Calibration progress from 0.0 to 1.0 (1.0 once done)
    pub fn calibration_progress(&self) -> f32 {
        self.tracker.calibration_progress()
    }

    /// Current personal open-eye baseline
    pub fn baseline(&self) -> f32 {
        self.tracker.baseline()
    }

    /// Last state handed to the listener
    pub fn current_state(&self) -> DrowsinessState {
        self.tracker.current_state()
    }

    /// Current close/reopen threshold pair
    pub fn thresholds(&self) -> Thresholds {
        self.tracker.thresholds()
    }
}
