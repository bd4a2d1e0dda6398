use std::time::{Duration, Instant};

/// Fixed-window, leading-edge-armed debouncer.
///
/// The first request arms a deadline `window` after it; requests while a deadline is pending
/// are absorbed. The window is not extended by later requests.
#[derive(Clone, Debug)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Arm the timer unless one is pending. Returns whether this call armed it.
    pub fn request(&mut self, now: Instant) -> bool {
        if self.deadline.is_some() {
            return false;
        }
        self.deadline = Some(now + self.window);
        true
    }

    /// Fire if the pending deadline has passed, disarming the timer.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/debounce.rs"]
mod tests;
