//! Alertness states and transition events

use serde::{Deserialize, Serialize};

/// Externally visible driver alertness state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrowsinessState {
    /// Driver alert, eyes open
    Awake,

    /// Eyes closed beyond the sustained-closure window
    Drowsy,

    /// No face visible (camera blocked, driver out of frame)
    FaceNotDetected,
}

impl DrowsinessState {
    /// Human-readable label for logs and UI
    pub fn label(&self) -> &'static str {
        match self {
            Self::Awake => "Awake",
            Self::Drowsy => "Drowsy",
            Self::FaceNotDetected => "Face Not Detected",
        }
    }
}

/// State-transition event delivered to the listener
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrowsinessEvent {
    /// State being entered
    pub state: DrowsinessState,

    /// Smoothed openness ratio that produced the transition; absent when
    /// no face was visible
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratio: Option<f32>,
}
