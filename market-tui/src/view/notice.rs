//! Transient notice timer
//!
//! Each notice schedules its own expiry. Showing a new notice aborts the
//! pending expiry, and expiries carry a generation so one that was already
//! queued can be told apart from the current one.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use super::ViewEvent;

/// How long a notice stays on screen
pub const NOTICE_DURATION: Duration = Duration::from_millis(2400);

#[derive(Debug)]
pub struct NoticeTimer {
    duration: Duration,
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

impl NoticeTimer {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            generation: 0,
            pending: None,
        }
    }

    /// Cancel the pending expiry and schedule a fresh one
    pub fn restart(&mut self, events: &UnboundedSender<ViewEvent>) -> u64 {
        self.cancel();
        self.generation += 1;

        let generation = self.generation;
        let duration = self.duration;
        let events = events.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let _ = events.send(ViewEvent::NoticeExpired { generation });
        }));

        generation
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Whether an expiry belongs to the notice currently shown
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }
}

impl Default for NoticeTimer {
    fn default() -> Self {
        Self::new(NOTICE_DURATION)
    }
}

impl Drop for NoticeTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
