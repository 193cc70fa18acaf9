//! AlertFlow: location lookup followed by alert creation.

use std::sync::Arc;

use tracing::Instrument;

use resq_core::errors::ResqResult;
use resq_core::models::AlertReceipt;
use resq_core::traits::{FeedbackSink, IAlertStore, ILocationProvider, NoopFeedback};
use resq_gesture::{DeferredAction, GestureState, TapGestureController};
use resq_observability::submit_span;

use crate::intent::AlertIntent;

/// Result of feeding one tap through [`AlertFlow::on_tap`].
#[derive(Debug, Clone, PartialEq)]
pub enum TapOutcome {
    /// The gesture has not confirmed yet.
    Counting(GestureState),
    /// The gesture confirmed and the store accepted the alert.
    Sent(AlertReceipt),
}

pub struct AlertFlow<S: IAlertStore, L: ILocationProvider> {
    store: Arc<S>,
    location: Arc<L>,
    feedback: Arc<dyn FeedbackSink>,
}

impl<S: IAlertStore, L: ILocationProvider> AlertFlow<S, L> {
    pub fn new(store: Arc<S>, location: Arc<L>) -> Self {
        Self {
            store,
            location,
            feedback: Arc::new(NoopFeedback),
        }
    }

    pub fn with_feedback(mut self, feedback: Arc<dyn FeedbackSink>) -> Self {
        self.feedback = feedback;
        self
    }

    /// Locate the device and create the alert.
    ///
    /// A denied or unavailable location aborts before the store is called.
    pub async fn submit(&self, intent: &AlertIntent) -> ResqResult<AlertReceipt> {
        intent.validate()?;
        async {
            let point = self
                .location
                .current_location()
                .await
                .inspect_err(|e| tracing::warn!(error = %e, "location lookup failed"))?;

            let receipt = self
                .store
                .create(intent.to_new_alert(point))
                .await
                .inspect_err(|e| tracing::warn!(error = %e, "alert create failed"))?;

            tracing::info!(incident_id = %receipt.incident_id, "alert sent");
            self.feedback.alert_sent(&receipt.incident_id);
            Ok(receipt)
        }
        .instrument(submit_span!(intent.emergency_type, intent.safe_to_call))
        .await
    }

    /// Register a tap on `gesture` and submit once it confirms.
    ///
    /// Taps are ignored while the submission is in flight.
    pub async fn on_tap<D: DeferredAction>(
        &self,
        gesture: &mut TapGestureController<D>,
        intent: &AlertIntent,
    ) -> ResqResult<TapOutcome> {
        match gesture.register_tap() {
            GestureState::Confirmed => {
                gesture.suspend();
                let result = self.submit(intent).await;
                gesture.resume();
                result.map(TapOutcome::Sent)
            }
            state => Ok(TapOutcome::Counting(state)),
        }
    }
}
