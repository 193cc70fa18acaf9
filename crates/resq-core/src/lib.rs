//! # resq-core
//!
//! Foundation crate for the ResQ emergency alert system.
//! Defines the alert model, traits for external collaborators, errors,
//! config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ResqConfig;
pub use errors::{ResqError, ResqResult};
pub use models::{
    AlertReceipt, AlertStatus, AuthorityContact, EmergencyAlert, EmergencyType, GeoPoint,
    NewAlert, PriorityLevel,
};
