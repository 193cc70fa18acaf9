//! Status lifecycle: pending -> received -> in_progress -> resolved.
//!
//! Updates are permissive. Any of the four statuses may be written from any
//! other, including the same one. Transitions are classified only so that
//! unusual moves show up in the logs.

use resq_core::errors::ResqResult;
use resq_core::models::AlertStatus;

/// Parse a wire status. Anything outside the four names is `InvalidStatus`.
pub fn parse_status(raw: &str) -> ResqResult<AlertStatus> {
    raw.parse()
}

/// Forward successor, `None` once resolved.
pub fn next_status(status: AlertStatus) -> Option<AlertStatus> {
    match status {
        AlertStatus::Pending => Some(AlertStatus::Received),
        AlertStatus::Received => Some(AlertStatus::InProgress),
        AlertStatus::InProgress => Some(AlertStatus::Resolved),
        AlertStatus::Resolved => None,
    }
}

pub fn is_forward(from: AlertStatus, to: AlertStatus) -> bool {
    to.stage() > from.stage()
}

/// Statuses an authority can pick for an alert currently in `current`.
///
/// `pending` is never offered; the current status is left out.
pub fn status_options(current: AlertStatus) -> Vec<AlertStatus> {
    [
        AlertStatus::Received,
        AlertStatus::InProgress,
        AlertStatus::Resolved,
    ]
    .into_iter()
    .filter(|s| *s != current)
    .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Exactly one step along the lifecycle.
    Forward,
    /// Forward by more than one step.
    Skip,
    Same,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTransition {
    pub from: AlertStatus,
    pub to: AlertStatus,
}

impl StatusTransition {
    pub fn new(from: AlertStatus, to: AlertStatus) -> Self {
        Self { from, to }
    }

    pub fn kind(&self) -> TransitionKind {
        if self.from == self.to {
            TransitionKind::Same
        } else if next_status(self.from) == Some(self.to) {
            TransitionKind::Forward
        } else if is_forward(self.from, self.to) {
            TransitionKind::Skip
        } else {
            TransitionKind::Backward
        }
    }
}
