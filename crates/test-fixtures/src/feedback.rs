use std::sync::Mutex;

use resq_core::traits::FeedbackSink;

/// Feedback sink that remembers every event it receives.
#[derive(Debug, Default)]
pub struct RecordingFeedback {
    taps: Mutex<Vec<u32>>,
    confirmations: Mutex<usize>,
    sent: Mutex<Vec<String>>,
}

impl RecordingFeedback {
    /// Counts passed to `tap_registered`, in order.
    pub fn taps(&self) -> Vec<u32> {
        self.taps.lock().unwrap().clone()
    }

    pub fn confirmations(&self) -> usize {
        *self.confirmations.lock().unwrap()
    }

    /// Incident ids passed to `alert_sent`, in order.
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

impl FeedbackSink for RecordingFeedback {
    fn tap_registered(&self, count: u32) {
        self.taps.lock().unwrap().push(count);
    }

    fn alert_confirmed(&self) {
        *self.confirmations.lock().unwrap() += 1;
    }

    fn alert_sent(&self, incident_id: &str) {
        self.sent.lock().unwrap().push(incident_id.to_string());
    }
}
