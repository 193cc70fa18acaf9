//! TapGestureController: counts taps toward a confirmed alert trigger.

use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;

use resq_core::config::GestureConfig;
use resq_core::errors::{ResqError, ResqResult};
use resq_core::traits::{FeedbackSink, NoopFeedback};
use tokio::time::Instant;

use crate::deferred::{DeferredAction, TokioDeferredAction};
use crate::sequence::TapSequence;

/// Outcome of a tap, or the controller's current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    /// No sequence in progress (or taps are suspended).
    Idle,
    /// `count` taps registered, fewer than required.
    Accumulating(u32),
    /// The required tap count was reached by this tap. Emitted once per sequence.
    Confirmed,
}

/// Multi-tap confirmation state machine.
///
/// IDLE --tap--> ACCUMULATING(1) --tap--> ... --N-th tap--> CONFIRMED, then IDLE.
/// A gap of at least the timeout between taps, or `cancel()`, returns to IDLE
/// without confirming.
pub struct TapGestureController<D: DeferredAction = TokioDeferredAction> {
    sequence: Arc<Mutex<TapSequence>>,
    timer: D,
    required_taps: u32,
    timeout: Duration,
    feedback: Arc<dyn FeedbackSink>,
}

impl TapGestureController<TokioDeferredAction> {
    /// Create a controller whose timeouts run on the ambient tokio runtime.
    pub fn new(config: &GestureConfig) -> Self {
        Self::with_timer(config, TokioDeferredAction::new())
    }
}

impl<D: DeferredAction> TapGestureController<D> {
    /// Create a controller driven by a custom deferred action.
    pub fn with_timer(config: &GestureConfig, timer: D) -> Self {
        Self {
            sequence: Arc::new(Mutex::new(TapSequence::default())),
            timer,
            required_taps: config.required_taps.max(2),
            timeout: config.tap_timeout(),
            feedback: Arc::new(NoopFeedback),
        }
    }

    /// Attach a haptic feedback sink.
    pub fn with_feedback(mut self, feedback: Arc<dyn FeedbackSink>) -> Self {
        self.feedback = feedback;
        self
    }

    pub fn required_taps(&self) -> u32 {
        self.required_taps
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Register one tap at the current instant.
    ///
    /// Never blocks and never fails.
    pub fn register_tap(&mut self) -> GestureState {
        let _span = resq_observability::gesture_span!(self.required_taps).entered();
        let now = Instant::now();
        let mut seq = lock(&self.sequence);

        if seq.suspended {
            tracing::trace!("tap ignored while suspended");
            return GestureState::Idle;
        }
        if seq.is_expired(now) {
            tracing::debug!(count = seq.count, "tap sequence expired before this tap");
            seq.reset();
        }

        seq.count += 1;
        let count = seq.count;

        if count >= self.required_taps {
            seq.reset();
            drop(seq);
            self.timer.disarm();
            tracing::info!(taps = count, "tap sequence confirmed");
            self.feedback.alert_confirmed();
            return GestureState::Confirmed;
        }

        seq.deadline = Some(now + self.timeout);
        seq.epoch = seq.epoch.wrapping_add(1);
        let epoch = seq.epoch;
        drop(seq);

        let weak = Arc::downgrade(&self.sequence);
        self.timer.arm(
            self.timeout,
            Box::new(move || match expire(&weak, epoch) {
                Ok(true) => tracing::debug!("tap sequence timed out"),
                Ok(false) => tracing::trace!("superseded timeout ignored"),
                Err(e) => tracing::trace!("timeout after teardown ignored: {e}"),
            }),
        );

        tracing::debug!(count, required = self.required_taps, "tap registered");
        self.feedback.tap_registered(count);
        GestureState::Accumulating(count)
    }

    /// Current state, without registering a tap.
    pub fn state(&self) -> GestureState {
        let seq = lock(&self.sequence);
        if seq.suspended {
            return GestureState::Idle;
        }
        match seq.live_count(Instant::now()) {
            0 => GestureState::Idle,
            n => GestureState::Accumulating(n),
        }
    }

    /// Taps still needed to confirm.
    pub fn remaining_taps(&self) -> u32 {
        let seq = lock(&self.sequence);
        self.required_taps - seq.live_count(Instant::now()).min(self.required_taps)
    }

    /// Reset to idle and disarm any pending timeout.
    pub fn cancel(&mut self) {
        lock(&self.sequence).reset();
        self.timer.disarm();
        tracing::debug!("tap sequence cancelled");
    }

    /// Ignore taps until `resume()`, e.g. while an alert is being sent.
    /// Any sequence in progress is discarded.
    pub fn suspend(&mut self) {
        {
            let mut seq = lock(&self.sequence);
            seq.reset();
            seq.suspended = true;
        }
        self.timer.disarm();
    }

    pub fn resume(&mut self) {
        lock(&self.sequence).suspended = false;
    }

    pub fn is_suspended(&self) -> bool {
        lock(&self.sequence).suspended
    }
}

impl<D: DeferredAction> Drop for TapGestureController<D> {
    fn drop(&mut self) {
        self.timer.disarm();
    }
}

impl<D: DeferredAction> std::fmt::Debug for TapGestureController<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TapGestureController")
            .field("required_taps", &self.required_taps)
            .field("timeout", &self.timeout)
            .field("sequence", &*lock(&self.sequence))
            .finish()
    }
}

fn lock(sequence: &Mutex<TapSequence>) -> MutexGuard<'_, TapSequence> {
    sequence.lock().unwrap_or_else(|p| p.into_inner())
}

/// Timeout body. Resets the sequence if `epoch` is still current.
///
/// Returns `Ok(false)` when a newer tap or a cancel superseded this timeout
/// and `GestureTornDown` when the controller no longer exists.
fn expire(sequence: &Weak<Mutex<TapSequence>>, epoch: u64) -> ResqResult<bool> {
    let sequence = sequence.upgrade().ok_or(ResqError::GestureTornDown)?;
    let mut seq = lock(&sequence);
    if seq.epoch != epoch {
        return Ok(false);
    }
    seq.reset();
    Ok(true)
}
