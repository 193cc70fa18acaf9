//! Shared fakes, builders, and JSON fixtures for ResQ tests.
//!
//! Fakes record every call so tests can assert that an operation made no
//! store call at all, and support per-operation failure injection.

pub mod builders;
pub mod fakes;
pub mod feedback;

pub use builders::{alert, at, AlertBuilder};
pub use fakes::{FakeAlertStore, FakeLocation, FakeUploader, StoreCall, StoreOp, Upload};
pub use feedback::RecordingFeedback;

use std::path::PathBuf;

use serde::de::DeserializeOwned;

/// Root directory of the bundled JSON fixtures.
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Alerts as the hosted backend returns them from `list`.
pub fn dashboard_alerts() -> Vec<resq_core::EmergencyAlert> {
    load_fixture("alerts/dashboard.json")
}
