//! Periodic snapshot refresh.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use resq_core::traits::IAlertStore;
use tokio::sync::Notify;
use tokio::time::MissedTickBehavior;

use crate::engine::TriageEngine;

/// Cooperative cancellation token for the polling loop.
///
/// Clones share state. Cancelling wakes a loop that is waiting for its next tick.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    inner: Arc<TokenState>,
}

#[derive(Debug, Default)]
struct TokenState {
    cancelled: AtomicBool,
    notify: Notify,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::Acquire)
    }

    pub fn cancel(&self) {
        self.inner.cancelled.store(true, Ordering::Release);
        self.inner.notify.notify_waiters();
    }

    /// Resolves once `cancel()` has been called.
    pub async fn cancelled(&self) {
        loop {
            let notified = self.inner.notify.notified();
            if self.is_cancelled() {
                return;
            }
            notified.await;
        }
    }
}

impl<S: IAlertStore> TriageEngine<S> {
    /// Refresh immediately, then every `interval`, until `cancel` fires.
    ///
    /// A failed refresh is logged and the previous snapshot stays in place;
    /// polling continues. Returns the number of refresh attempts.
    pub async fn run_polling(&self, interval: Duration, cancel: &CancellationToken) -> usize {
        let mut ticker = tokio::time::interval(interval.max(Duration::from_millis(1)));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut attempts = 0;

        tracing::info!(?interval, "dashboard polling started");
        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = ticker.tick() => {
                    attempts += 1;
                    if let Err(e) = self.refresh().await {
                        tracing::warn!(attempt = attempts, error = %e, "poll refresh failed");
                    }
                }
            }
        }
        tracing::info!(attempts, "dashboard polling stopped");
        attempts
    }
}
