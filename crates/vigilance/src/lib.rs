//! Driver Vigilance Pipeline
//!
//! Ties the per-frame stages together:
//! - Landmark geometry (per-eye openness, head yaw)
//! - Yaw-adaptive fusion and rolling-average smoothing
//! - Calibrated blink-vs-drowsiness classification
//! - Face-loss grace handling and async frame delivery

pub mod config;
pub mod monitor;
pub mod pipeline;

pub use config::VigilanceConfig;
pub use monitor::{FrameMonitor, MonitorFrame};
pub use pipeline::DrowsinessPipeline;

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Vigilance pipeline error types
#[derive(Error, Debug)]
pub enum VigilanceError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Geometry error: {0}")]
    Geometry(#[from] face_geometry::GeometryError),

    #[error("Smoothing error: {0}")]
    Smoother(#[from] signal_smoother::SmootherError),

    #[error("Tracker error: {0}")]
    Tracker(#[from] eye_state::TrackerError),
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}
