//! Calibrated Eye-State Classification
//!
//! Turns a stream of smoothed eye-openness ratios into discrete alertness
//! transitions:
//! - Personal open-eye baseline calibration over the first frontal frames
//! - Close/reopen thresholds derived as fractions of the baseline
//! - Sustained-closure timing that separates blinks from drowsiness
//! - Slow baseline drift to follow gradual lighting changes

pub mod config;
pub mod event;
pub mod tracker;

pub use config::TrackerConfig;
pub use event::{DrowsinessEvent, DrowsinessState};
pub use tracker::{DrowsinessListener, EyeStateTracker, Thresholds};

use thiserror::Error;

/// Eye-state tracker error types
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Configuration error: {0}")]
    Config(String),
}
