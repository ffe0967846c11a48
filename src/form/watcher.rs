//! Input watcher
//!
//! Trailing-edge debounce driven by explicit instants instead of timers, so
//! the event loop decides when to look and tests can step time by hand.
//! Every `observe` re-arms the deadline; `poll` hands out the latest value
//! once the field has been quiet for the whole window.

use std::time::Duration;

use tokio::time::Instant;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug)]
struct Pending {
    value: String,
    deadline: Instant,
}

#[derive(Debug)]
pub struct InputWatcher {
    delay: Duration,
    pending: Option<Pending>,
}

impl Default for InputWatcher {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl InputWatcher {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Record a new field value; earlier unfired values are superseded
    pub fn observe(&mut self, value: impl Into<String>, now: Instant) {
        self.pending = Some(Pending {
            value: value.into(),
            deadline: now + self.delay,
        });
    }

    /// Drop whatever is waiting (mode switch, reset, explicit submit)
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// The settled value, at most once per quiet period
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some(p) if now >= p.deadline => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// How long the event loop may sleep before the watcher needs a look
    pub fn time_until_due(&self, now: Instant, cap: Duration) -> Duration {
        match self.next_deadline() {
            Some(deadline) => deadline.saturating_duration_since(now).min(cap),
            None => cap,
        }
    }
}
