//! Async frame delivery

use crate::pipeline::DrowsinessPipeline;
use face_geometry::Landmark;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// One camera frame's worth of pipeline input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorFrame {
    /// Landmark set, absent when no face was found
    pub landmarks: Option<Vec<Landmark>>,

    /// Caller-supplied capture timestamp (milliseconds)
    pub timestamp_ms: u64,
}

/// Worker that serializes all pipeline mutation onto one loop.
///
/// Detector callbacks hand frames to the channel sender; the worker owns
/// the pipeline, so updates and face-loss notifications land in channel
/// order with no interleaving.
pub struct FrameMonitor {
    /// Channel receiver for incoming frames
    receiver: mpsc::Receiver<MonitorFrame>,
    /// The pipeline this worker drives
    pipeline: DrowsinessPipeline,
}

impl FrameMonitor {
    /// Create a monitor draining `receiver` into `pipeline`
    pub fn new(receiver: mpsc::Receiver<MonitorFrame>, pipeline: DrowsinessPipeline) -> Self {
        Self { receiver, pipeline }
    }

    /// Create a channel pair for the monitor
    pub fn channel(
        capacity: usize,
        pipeline: DrowsinessPipeline,
    ) -> (mpsc::Sender<MonitorFrame>, Self) {
        let (tx, rx) = mpsc::channel(capacity);
        (tx, Self::new(rx, pipeline))
    }

    /// Run the monitor loop until the channel closes.
    ///
    /// Frames with malformed geometry are logged and dropped; the stream
    /// keeps going.
    pub async fn run(&mut self) {
        info!("Starting vigilance monitor");

        while let Some(frame) = self.receiver.recv().await {
            let result = self
                .pipeline
                .process_frame(frame.landmarks.as_deref(), frame.timestamp_ms);
            if let Err(e) = result {
                warn!("Skipping frame: {}", e);
            }
        }

        info!("Vigilance monitor stopped");
    }
}
