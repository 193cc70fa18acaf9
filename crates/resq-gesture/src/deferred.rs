//! Schedulable, cancellable deferred actions.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Callback run when a deferred action fires.
pub type DeferredCallback = Box<dyn FnOnce() + Send + 'static>;

/// A single pending action that can be (re)armed or disarmed.
///
/// Arming replaces any action already pending.
pub trait DeferredAction: Send {
    fn arm(&mut self, delay: Duration, callback: DeferredCallback);
    fn disarm(&mut self);
    fn is_armed(&self) -> bool;
}

/// Deferred action backed by a spawned tokio sleep, aborted on disarm.
#[derive(Debug, Default)]
pub struct TokioDeferredAction {
    handle: Option<JoinHandle<()>>,
}

impl TokioDeferredAction {
    pub fn new() -> Self {
        Self { handle: None }
    }
}

impl DeferredAction for TokioDeferredAction {
    fn arm(&mut self, delay: Duration, callback: DeferredCallback) {
        self.disarm();
        match tokio::runtime::Handle::try_current() {
            Ok(rt) => {
                self.handle = Some(rt.spawn(async move {
                    tokio::time::sleep(delay).await;
                    callback();
                }));
            }
            Err(_) => {
                // Deadlines are still enforced lazily on the next tap.
                tracing::warn!("no tokio runtime; timeout not scheduled");
            }
        }
    }

    fn disarm(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    fn is_armed(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for TokioDeferredAction {
    fn drop(&mut self) {
        self.disarm();
    }
}

/// Deferred action fired explicitly by the host, for event loops that are
/// not tokio (and for tests). The delay is recorded but not waited on.
#[derive(Clone, Default)]
pub struct ManualDeferredAction {
    pending: Arc<Mutex<Option<(Duration, DeferredCallback)>>>,
}

impl ManualDeferredAction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the pending callback, if any. Returns whether one ran.
    pub fn fire(&self) -> bool {
        let pending = self
            .pending
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .take();
        match pending {
            Some((_, callback)) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Delay of the pending action.
    pub fn pending_delay(&self) -> Option<Duration> {
        self.pending
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .as_ref()
            .map(|(d, _)| *d)
    }

    /// Take the pending callback without running it.
    pub fn take(&self) -> Option<DeferredCallback> {
        self.pending
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .take()
            .map(|(_, cb)| cb)
    }
}

impl DeferredAction for ManualDeferredAction {
    fn arm(&mut self, delay: Duration, callback: DeferredCallback) {
        *self.pending.lock().unwrap_or_else(|p| p.into_inner()) = Some((delay, callback));
    }

    fn disarm(&mut self) {
        self.pending.lock().unwrap_or_else(|p| p.into_inner()).take();
    }

    fn is_armed(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .is_some()
    }
}

impl std::fmt::Debug for ManualDeferredAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualDeferredAction")
            .field("pending_delay", &self.pending_delay())
            .finish()
    }
}
