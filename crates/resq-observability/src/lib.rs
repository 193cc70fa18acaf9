//! # resq-observability
//!
//! Tracing subscriber installation and the span vocabulary shared by the
//! gesture, triage, and alerting crates.

pub mod tracing_setup;

pub use tracing_setup::{build_filter, init_tracing, init_tracing_with_filter};
