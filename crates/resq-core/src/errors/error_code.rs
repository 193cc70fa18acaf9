//! Stable error codes for the application boundary.

use super::{ConfigError, LocationError, ResqError, StoreError};

/// Maps an error to a structured code string the mobile and dashboard
/// front-ends match on.
pub trait ResqErrorCode {
    /// Returns the code string (e.g., "STORE_UNAVAILABLE").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const PERMISSION_DENIED: &str = "PERMISSION_DENIED";
pub const LOCATION_UNAVAILABLE: &str = "LOCATION_UNAVAILABLE";
pub const STORE_UNAVAILABLE: &str = "STORE_UNAVAILABLE";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const STORE_REJECTED: &str = "STORE_REJECTED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INVALID_STATUS: &str = "INVALID_STATUS";
pub const INVALID_EMERGENCY_TYPE: &str = "INVALID_EMERGENCY_TYPE";
pub const INVALID_FILTER: &str = "INVALID_FILTER";
pub const INVALID_INTENT: &str = "INVALID_INTENT";
pub const EVIDENCE_UPLOAD_FAILED: &str = "EVIDENCE_UPLOAD_FAILED";
pub const GESTURE_TORN_DOWN: &str = "GESTURE_TORN_DOWN";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";

impl ResqErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => STORE_UNAVAILABLE,
            Self::NotFound { .. } => NOT_FOUND,
            Self::Rejected { .. } => STORE_REJECTED,
        }
    }
}

impl ResqErrorCode for LocationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::PermissionDenied => PERMISSION_DENIED,
            Self::Unavailable { .. } => LOCATION_UNAVAILABLE,
        }
    }
}

impl ResqErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        CONFIG_ERROR
    }
}

impl ResqErrorCode for ResqError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Location(e) => e.error_code(),
            Self::Store(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::InvalidStatus { .. } => INVALID_STATUS,
            Self::InvalidEmergencyType { .. } => INVALID_EMERGENCY_TYPE,
            Self::InvalidFilter { .. } => INVALID_FILTER,
            Self::InvalidIntent { .. } => INVALID_INTENT,
            Self::EvidenceUpload { .. } => EVIDENCE_UPLOAD_FAILED,
            Self::GestureTornDown => GESTURE_TORN_DOWN,
            Self::Serialization(_) => SERIALIZATION_ERROR,
        }
    }
}
