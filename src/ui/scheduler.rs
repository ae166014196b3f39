//! Cancellable one-shot timers for the session.
//!
//! Each scheduled timer is a spawned task that sleeps and then posts a
//! `UIEvent::Timer` into the UI channel. Handles are kept so that every
//! outstanding timer can be aborted when the session is torn down.
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::session::{Directive, TimerFired};
use crate::ui::UIEvent;

pub struct Scheduler {
    event_tx: mpsc::UnboundedSender<UIEvent>,
    pending: Vec<JoinHandle<()>>,
}

impl Scheduler {
    pub fn new(event_tx: mpsc::UnboundedSender<UIEvent>) -> Self {
        Self {
            event_tx,
            pending: Vec::new(),
        }
    }

    /// Runs the directives a session returned, tagging each timer with `epoch`.
    pub fn apply(&mut self, epoch: u64, directives: Vec<Directive>) {
        for directive in directives {
            match directive {
                Directive::Schedule { after, timer } => {
                    self.schedule(after, TimerFired { epoch, timer })
                }
            }
        }
    }

    pub fn schedule(&mut self, after: Duration, fired: TimerFired) {
        self.pending.retain(|handle| !handle.is_finished());

        let event_tx = self.event_tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(after).await;
            if event_tx.send(UIEvent::Timer(fired)).is_err() {
                debug!("UI channel closed, dropping timer {:?}", fired.timer);
            }
        });
        self.pending.push(handle);
    }

    /// Number of timers that have not fired yet.
    #[cfg(test)]
    pub fn pending(&self) -> usize {
        self.pending
            .iter()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    /// Aborts every outstanding timer.
    pub fn cancel_all(&mut self) {
        let count = self.pending.len();
        for handle in self.pending.drain(..) {
            handle.abort();
        }
        if count > 0 {
            debug!("Cancelled {} pending timer(s)", count);
        }
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
