//! Span definitions per operation: gesture, refresh, status update, media
//! append, alert submit, evidence attach.

/// Create a gesture span.
#[macro_export]
macro_rules! gesture_span {
    ($required_taps:expr) => {
        tracing::debug_span!("resq.gesture", required_taps = $required_taps)
    };
}

/// Create a triage refresh span.
#[macro_export]
macro_rules! refresh_span {
    () => {
        tracing::info_span!("resq.triage.refresh")
    };
}

/// Create a status update span.
#[macro_export]
macro_rules! status_update_span {
    ($incident_id:expr, $status:expr) => {
        tracing::info_span!("resq.triage.status_update", incident_id = %$incident_id, status = %$status)
    };
}

/// Create a media append span.
#[macro_export]
macro_rules! media_append_span {
    ($incident_id:expr, $count:expr) => {
        tracing::info_span!("resq.triage.media_append", incident_id = %$incident_id, count = $count)
    };
}

/// Create an alert submit span.
#[macro_export]
macro_rules! submit_span {
    ($emergency_type:expr, $safe_to_call:expr) => {
        tracing::info_span!("resq.alert.submit", emergency_type = %$emergency_type, safe_to_call = $safe_to_call)
    };
}

/// Create an evidence attach span.
#[macro_export]
macro_rules! evidence_span {
    ($incident_id:expr) => {
        tracing::info_span!("resq.alert.evidence", incident_id = %$incident_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const GESTURE: &str = "resq.gesture";
    pub const REFRESH: &str = "resq.triage.refresh";
    pub const STATUS_UPDATE: &str = "resq.triage.status_update";
    pub const MEDIA_APPEND: &str = "resq.triage.media_append";
    pub const SUBMIT: &str = "resq.alert.submit";
    pub const EVIDENCE: &str = "resq.alert.evidence";
}
