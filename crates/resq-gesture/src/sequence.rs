//! TapSequence: the in-progress tap count and its deadline.

use tokio::time::Instant;

/// Ephemeral tap sequence state. `count == 0` means idle.
#[derive(Debug, Clone, Default)]
pub struct TapSequence {
    pub count: u32,
    /// When the sequence expires absent another tap.
    pub deadline: Option<Instant>,
    /// Bumped on every arm, reset, and cancel so stale timeouts can be told apart.
    pub epoch: u64,
    /// Taps are ignored while suspended.
    pub suspended: bool,
}

impl TapSequence {
    pub fn is_idle(&self) -> bool {
        self.count == 0
    }

    /// A gap equal to the timeout already counts as expired.
    pub fn is_expired(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|d| now >= d)
    }

    /// Count still in force at `now`.
    pub fn live_count(&self, now: Instant) -> u32 {
        if self.is_expired(now) {
            0
        } else {
            self.count
        }
    }

    /// Return to idle and invalidate any pending timeout.
    pub fn reset(&mut self) {
        self.count = 0;
        self.deadline = None;
        self.epoch = self.epoch.wrapping_add(1);
    }
}
