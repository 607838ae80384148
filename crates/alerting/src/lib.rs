//! Drowsiness Alarm Control
//!
//! Turns alertness transitions into idempotent alarm start/stop commands
//! and dispatches them asynchronously to an actuator sink.

mod dispatch;
mod latch;

pub use dispatch::{AlarmDispatcher, AlarmSink};
pub use latch::{AlarmCommand, AlarmLatch};
