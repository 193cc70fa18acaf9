use super::{ConfigError, LocationError, StoreError};

/// Top-level error for every fallible ResQ operation.
#[derive(Debug, thiserror::Error)]
pub enum ResqError {
    #[error(transparent)]
    Location(#[from] LocationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid alert status: {value}")]
    InvalidStatus { value: String },

    #[error("invalid emergency type: {value}")]
    InvalidEmergencyType { value: String },

    #[error("invalid alert filter: {value}")]
    InvalidFilter { value: String },

    #[error("invalid alert intent: {reason}")]
    InvalidIntent { reason: String },

    #[error("evidence upload failed: {reason}")]
    EvidenceUpload { reason: String },

    /// The gesture controller was torn down while a timeout was pending.
    #[error("gesture controller torn down")]
    GestureTornDown,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ResqError {
    /// Shorthand for `StoreError::Unavailable`.
    pub fn store_unavailable(reason: impl Into<String>) -> Self {
        StoreError::Unavailable {
            reason: reason.into(),
        }
        .into()
    }

    /// Whether the caller may retry the operation manually.
    ///
    /// No automatic retry is performed anywhere in the workspace.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Store(StoreError::Unavailable { .. })
                | Self::Location(LocationError::Unavailable { .. })
                | Self::EvidenceUpload { .. }
        )
    }
}

pub type ResqResult<T> = Result<T, ResqError>;
