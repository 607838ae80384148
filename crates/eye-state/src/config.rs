//! Eye-state tracker configuration

use crate::TrackerError;
use serde::{Deserialize, Serialize};

/// Eye-state tracker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Calibration samples to collect before classification starts
    /// (~2 s at 30 fps)
    pub calibration_frames: u32,

    /// Fallback baseline when calibration lands outside the plausible band
    pub default_baseline: f32,

    /// Lower edge of the plausible calibrated-baseline band
    pub min_plausible_baseline: f32,

    /// Upper edge of the plausible calibrated-baseline band
    pub max_plausible_baseline: f32,

    /// Eyes count as closed below baseline * close_ratio
    pub close_ratio: f32,

    /// Eyes count as re-opened above baseline * open_ratio
    pub open_ratio: f32,

    /// Eyes must stay closed at least this long for a drowsy verdict
    /// (milliseconds)
    pub drowsy_after_ms: u64,

    /// Per-frame baseline drift rate toward clearly-open ratios
    pub baseline_adapt_rate: f32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            calibration_frames: 60,
            default_baseline: 0.26,
            min_plausible_baseline: 0.10,
            max_plausible_baseline: 0.50,
            close_ratio: 0.55,
            open_ratio: 0.62,
            drowsy_after_ms: 1500,
            baseline_adapt_rate: 0.005,
        }
    }
}

impl TrackerConfig {
    /// Create strict config (faster drowsy verdict)
    pub fn strict() -> Self {
        Self {
            drowsy_after_ms: 1000,
            ..Default::default()
        }
    }

    /// Create lenient config (slower drowsy verdict)
    pub fn lenient() -> Self {
        Self {
            drowsy_after_ms: 2500,
            ..Default::default()
        }
    }

    /// Validate threshold ordering, timing, and rates
    pub fn validate(&self) -> Result<(), TrackerError> {
        if self.calibration_frames == 0 {
            return Err(TrackerError::Config(
                "calibration_frames must be positive".into(),
            ));
        }
        if self.drowsy_after_ms == 0 {
            return Err(TrackerError::Config(
                "drowsy_after_ms must be positive".into(),
            ));
        }
        if !(self.close_ratio >= 0.0 && self.close_ratio < self.open_ratio) {
            return Err(TrackerError::Config(format!(
                "close_ratio ({}) must be non-negative and below open_ratio ({})",
                self.close_ratio, self.open_ratio
            )));
        }
        if !(self.baseline_adapt_rate > 0.0 && self.baseline_adapt_rate < 1.0) {
            return Err(TrackerError::Config(format!(
                "baseline_adapt_rate ({}) must lie in (0, 1)",
                self.baseline_adapt_rate
            )));
        }
        if !(self.default_baseline > 0.0) {
            return Err(TrackerError::Config(format!(
                "default_baseline ({}) must be positive",
                self.default_baseline
            )));
        }
        if !(self.min_plausible_baseline < self.max_plausible_baseline) {
            return Err(TrackerError::Config(format!(
                "plausible baseline band [{}, {}] is empty",
                self.min_plausible_baseline, self.max_plausible_baseline
            )));
        }
        Ok(())
    }
}
