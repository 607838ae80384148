//! Alarm latching from alertness transitions

use eye_state::DrowsinessState;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Actuator command derived from a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlarmCommand {
    Start,
    Stop,
}

/// Idempotent alarm latch.
///
/// Each drowsy episode yields exactly one `Start`; leaving it yields
/// exactly one `Stop`. Redundant transitions in the same direction
/// produce no command, so the actuator is never restarted mid-alarm.
pub struct AlarmLatch {
    alerting: bool,
}

impl AlarmLatch {
    /// Create a quiet latch
    pub fn new() -> Self {
        Self { alerting: false }
    }

    /// Derive the actuator command for a state transition, if any
    pub fn on_state(&mut self, state: DrowsinessState) -> Option<AlarmCommand> {
        match state {
            DrowsinessState::Drowsy => {
                if self.alerting {
                    return None;
                }
                self.alerting = true;
                warn!("Drowsiness alert started");
                Some(AlarmCommand::Start)
            }
            _ => {
                if !self.alerting {
                    return None;
                }
                self.alerting = false;
                debug!(state = state.label(), "Drowsiness alert stopped");
                Some(AlarmCommand::Stop)
            }
        }
    }

    /// True while a drowsy episode is active
    pub fn is_alerting(&self) -> bool {
        self.alerting
    }

    /// Force the latch back to quiet without emitting a command
    pub fn reset(&mut self) {
        self.alerting = false;
    }
}

impl Default for AlarmLatch {
    fn default() -> Self {
        Self::new()
    }
}
