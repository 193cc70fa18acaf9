//! # resq-triage
//!
//! Classifies, orders, and filters emergency alerts for the authority
//! dashboard, and gates status and media updates on their way to the
//! Alert Store.
//!
//! Everything except [`TriageEngine`] is a pure function of the alert list.

pub mod engine;
pub mod filter;
pub mod lifecycle;
pub mod media;
pub mod ordering;
pub mod polling;
pub mod presentation;
pub mod priority;
pub mod stats;
pub mod view;

pub use engine::TriageEngine;
pub use filter::AlertFilter;
pub use lifecycle::{StatusTransition, TransitionKind};
pub use polling::CancellationToken;
pub use priority::derive_priority;
pub use stats::DashboardStats;
pub use view::TriagedAlert;
