use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

use super::snake_session::SessionCommand;

/// Fires `SessionCommand::Tick` into the session channel at a fixed
/// period. Owns at most one timer task: starting while running replaces
/// the previous timer, and stopping is idempotent.
pub struct TickScheduler {
    handle: Option<JoinHandle<()>>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self { handle: None }
    }

    pub fn start(&mut self, period: Duration, tx: mpsc::UnboundedSender<SessionCommand>) {
        self.stop();

        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.send(SessionCommand::Tick).is_err() {
                    break;
                }
            }
        });
        self.handle = Some(handle);
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TickScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
