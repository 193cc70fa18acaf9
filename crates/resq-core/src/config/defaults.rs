// Single source of truth for all default values.

// --- Gesture ---
pub const DEFAULT_REQUIRED_TAPS: u32 = 3;
pub const DEFAULT_TAP_TIMEOUT_MS: u64 = 2_000;

// --- Dashboard ---
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;
pub const DEFAULT_FILTER: &str = "all";

// --- Store ---
pub const DEFAULT_ALERTS_TABLE: &str = "emergency_alerts";
pub const DEFAULT_CONTACTS_TABLE: &str = "authority_contacts";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_EVIDENCE_BUCKET: &str = "evidence";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
