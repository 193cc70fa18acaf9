//! # resq-store
//!
//! Implementations of [`IAlertStore`](resq_core::traits::IAlertStore).
//!
//! - [`InMemoryAlertStore`]: process-local, for demos and tests of callers.
//! - `RestAlertStore` (feature `remote`): the hosted PostgREST backend, plus
//!   `RestEvidenceUploader` for its object storage.

pub mod incident_id;
pub mod memory;
#[cfg(feature = "remote")]
pub mod rest;

pub use memory::InMemoryAlertStore;
#[cfg(feature = "remote")]
pub use rest::{RestAlertStore, RestEvidenceUploader};
