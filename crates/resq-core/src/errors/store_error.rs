/// Alert Store failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("alert store unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("incident {incident_id} not found")]
    NotFound { incident_id: String },

    #[error("alert store rejected the write: {reason}")]
    Rejected { reason: String },
}
