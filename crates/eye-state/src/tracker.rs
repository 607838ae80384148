//! Blink-vs-drowsiness state machine

use crate::event::{DrowsinessEvent, DrowsinessState};
use crate::{TrackerConfig, TrackerError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Callback receiving state-transition events
pub type DrowsinessListener = Box<dyn FnMut(DrowsinessEvent) + Send>;

/// Close/reopen threshold pair derived from the current baseline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Eyes count as closed below this ratio
    pub close: f32,
    /// Eyes count as re-opened above this ratio
    pub open: f32,
}

/// Classifier phase; each phase carries only the data it needs
#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    /// Collecting the personal open-eye baseline
    Calibrating { sum: f32, count: u32 },
    /// Normal driving
    Awake,
    /// Ratio dropped below the close threshold; blink or drowsiness pending
    ClosurePending { since_ms: u64 },
    /// Sustained closure confirmed
    Drowsy { since_ms: u64 },
}

/// State machine that distinguishes blinks from drowsiness.
///
/// Thresholds are fractions of a personally calibrated open-eye baseline
/// collected during the first eligible frames, so the classifier adapts to
/// the driver's eye shape, camera angle, and lighting. The reopen threshold
/// sits above the close threshold; ratios between the two never flip the
/// state. A closure only becomes a drowsy verdict once it has persisted for
/// the configured duration on the caller's timestamps.
pub struct EyeStateTracker {
    config: TrackerConfig,
    phase: Phase,
    last_reported: DrowsinessState,
    baseline: f32,
    thresholds: Thresholds,
    listener: DrowsinessListener,
}

impl EyeStateTracker {
    /// Create a tracker delivering transition events to `listener`
    pub fn new(config: TrackerConfig, listener: DrowsinessListener) -> Result<Self, TrackerError> {
        config.validate()?;
        let baseline = config.default_baseline;
        let thresholds = Thresholds {
            close: baseline * config.close_ratio,
            open: baseline * config.open_ratio,
        };
        Ok(Self {
            config,
            phase: Phase::Calibrating { sum: 0.0, count: 0 },
            last_reported: DrowsinessState::Awake,
            baseline,
            thresholds,
            listener,
        })
    }

    /// Feed one smoothed openness ratio with its frame timestamp.
    ///
    /// Call once per processed frame. `timestamp_ms` is caller-supplied and
    /// must be non-decreasing across calls. `calibration_eligible` marks
    /// frames frontal enough for baseline accumulation; angle-distorted
    /// ratios would skew the baseline.
    pub fn update(&mut self, ratio: f32, timestamp_ms: u64, calibration_eligible: bool) {
        // Face reacquired: force AWAKE and tell the listener before the new
        // sample is classified. A calibration still in progress keeps its
        // accumulated samples.
        if self.last_reported == DrowsinessState::FaceNotDetected {
            if !matches!(self.phase, Phase::Calibrating { .. }) {
                self.phase = Phase::Awake;
            }
            self.last_reported = DrowsinessState::Awake;
            self.emit(DrowsinessState::Awake, Some(ratio));
        }

        match self.phase {
            Phase::Calibrating { sum, count } => {
                if !calibration_eligible {
                    return;
                }
                let sum = sum + ratio;
                let count = count + 1;
                if count >= self.config.calibration_frames {
                    self.finish_calibration(sum, count, ratio);
                } else {
                    self.phase = Phase::Calibrating { sum, count };
                }
            }

            Phase::Awake => {
                // Eyes clearly open: drift the baseline toward the observed
                // ratio so thresholds follow gradual lighting changes.
                if ratio > self.thresholds.open {
                    self.baseline += (ratio - self.baseline) * self.config.baseline_adapt_rate;
                    self.recalculate_thresholds();
                }

                if ratio < self.thresholds.close {
                    self.phase = Phase::ClosurePending {
                        since_ms: timestamp_ms,
                    };
                    debug!(ratio, close = self.thresholds.close, "Eyes closing");
                }
            }

            Phase::ClosurePending { since_ms } => {
                if ratio > self.thresholds.open {
                    debug!(
                        duration_ms = timestamp_ms.saturating_sub(since_ms),
                        "Blink"
                    );
                    self.phase = Phase::Awake;
                } else if timestamp_ms.saturating_sub(since_ms) >= self.config.drowsy_after_ms {
                    self.phase = Phase::Drowsy { since_ms };
                    self.report(DrowsinessState::Drowsy, Some(ratio));
                    warn!(
                        closed_ms = timestamp_ms.saturating_sub(since_ms),
                        "Drowsiness detected"
                    );
                }
            }

            Phase::Drowsy { .. } => {
                if ratio > self.thresholds.open {
                    self.phase = Phase::Awake;
                    self.report(DrowsinessState::Awake, Some(ratio));
                    debug!(ratio, "Awake again");
                }
            }
        }
    }

    /// Tell the tracker the face has been lost (after the caller's grace
    /// period). Any in-progress closure is discarded; a calibration still
    /// in progress keeps its samples.
    pub fn notify_face_lost(&mut self) {
        if !matches!(self.phase, Phase::Calibrating { .. }) {
            self.phase = Phase::Awake;
        }
        self.report(DrowsinessState::FaceNotDetected, None);
    }

    /// Return to the initial calibrating state
    pub fn reset(&mut self) {
        self.phase = Phase::Calibrating { sum: 0.0, count: 0 };
        self.last_reported = DrowsinessState::Awake;
        self.baseline = self.config.default_baseline;
        self.recalculate_thresholds();
    }

    /// True while the initial calibration phase is running
    pub fn is_calibrating(&self) -> bool {
        matches!(self.phase, Phase::Calibrating { .. })
    }

    /// Calibration progress from 0.0 to 1.0 (1.0 once done)
    pub fn calibration_progress(&self) -> f32 {
        match self.phase {
            Phase::Calibrating { count, .. } => {
                count as f32 / self.config.calibration_frames as f32
            }
            _ => 1.0,
        }
    }

    /// Current personal open-eye baseline
    pub fn baseline(&self) -> f32 {
        self.baseline
    }

    /// Last state handed to the listener
    pub fn current_state(&self) -> DrowsinessState {
        self.last_reported
    }

    /// Current close/reopen threshold pair
    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    fn finish_calibration(&mut self, sum: f32, count: u32, ratio: f32) {
        let mut baseline = sum / count as f32;
        if baseline < self.config.min_plausible_baseline
            || baseline > self.config.max_plausible_baseline
        {
            warn!(baseline, "Calibration value out of range, using default");
            baseline = self.config.default_baseline;
        }
        self.baseline = baseline;
        self.recalculate_thresholds();
        self.phase = Phase::Awake;

        info!(
            baseline = self.baseline,
            close = self.thresholds.close,
            open = self.thresholds.open,
            "Calibration done"
        );

        // Direct emit: the reported state starts out as Awake, so the
        // change guard would swallow this.
        self.last_reported = DrowsinessState::Awake;
        self.emit(DrowsinessState::Awake, Some(ratio));
    }

    fn recalculate_thresholds(&mut self) {
        self.thresholds = Thresholds {
            close: self.baseline * self.config.close_ratio,
            open: self.baseline * self.config.open_ratio,
        };
    }

    /// Emit only when the state actually changes
    fn report(&mut self, state: DrowsinessState, ratio: Option<f32>) {
        if state != self.last_reported {
            self.last_reported = state;
            self.emit(state, ratio);
        }
    }

    fn emit(&mut self, state: DrowsinessState, ratio: Option<f32>) {
        (self.listener)(DrowsinessEvent { state, ratio });
    }
}
