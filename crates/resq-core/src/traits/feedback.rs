//! Haptic and vibration side effects.

/// Sink for user-facing feedback. Implementations must not block.
pub trait FeedbackSink: Send + Sync {
    /// A tap was counted toward the sequence (light haptic).
    fn tap_registered(&self, _count: u32) {}

    /// The tap sequence completed (success haptic).
    fn alert_confirmed(&self) {}

    /// The store accepted the alert (vibration pattern).
    fn alert_sent(&self, _incident_id: &str) {}
}

/// Feedback sink that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFeedback;

impl FeedbackSink for NoopFeedback {}
