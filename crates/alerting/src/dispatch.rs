//! Async alarm-command dispatch

use crate::AlarmCommand;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Actuator boundary for the alarm hardware.
///
/// Implementations own their failure handling; a sink that cannot sound
/// the alarm should log and carry on rather than unwind into the
/// dispatch loop.
pub trait AlarmSink {
    /// Begin sounding the alarm
    fn start_alarm(&mut self);

    /// Silence the alarm
    fn stop_alarm(&mut self);
}

/// Forwards alarm commands from a channel to an actuator sink.
///
/// Runs on its own task so actuator latency never stalls frame
/// classification.
pub struct AlarmDispatcher {
    /// Channel receiver for incoming commands
    receiver: mpsc::Receiver<AlarmCommand>,
}

impl AlarmDispatcher {
    /// Create a dispatcher draining `receiver`
    pub fn new(receiver: mpsc::Receiver<AlarmCommand>) -> Self {
        Self { receiver }
    }

    /// Create a channel pair for the dispatcher
    pub fn channel(capacity: usize) -> (mpsc::Sender<AlarmCommand>, Self) {
        let (tx, rx) = mpsc::channel(capacity);
        (tx, Self::new(rx))
    }

    /// Run the dispatch loop until the channel closes
    pub async fn run<S: AlarmSink>(&mut self, sink: &mut S) {
        info!("Starting alarm dispatcher");

        while let Some(command) = self.receiver.recv().await {
            debug!(?command, "Dispatching alarm command");
            match command {
                AlarmCommand::Start => sink.start_alarm(),
                AlarmCommand::Stop => sink.stop_alarm(),
            }
        }

        info!("Alarm dispatcher stopped");
    }
}
