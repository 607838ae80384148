//! Rolling-Average Signal Smoother
//!
//! Fixed-capacity running-mean filter for noisy per-frame scalar signals.

mod average;

pub use average::{RollingAverage, DEFAULT_WINDOW};

use thiserror::Error;

/// Errors constructing a smoother
#[derive(Debug, Clone, Error)]
pub enum SmootherError {
    /// Window must hold at least one sample
    #[error("Smoothing window must hold at least one sample, got capacity {0}")]
    WindowTooSmall(usize),
}
