//! Fixed values shared across crates.

/// Number of characters of an incident id shown on the dashboard.
pub const SHORT_INCIDENT_ID_LEN: usize = 8;

/// Prefix of incident ids issued by the in-process store.
pub const INCIDENT_ID_PREFIX: &str = "INC";

/// Extension used for evidence files whose name carries none.
pub const DEFAULT_EVIDENCE_EXTENSION: &str = "jpg";

/// Decimal places for the compact coordinate display.
pub const COORDINATE_SHORT_PRECISION: usize = 4;

/// Decimal places for the detailed coordinate display.
pub const COORDINATE_PRECISE_PRECISION: usize = 6;

/// Environment variable consulted for the tracing filter.
pub const LOG_ENV_VAR: &str = "RESQ_LOG";
