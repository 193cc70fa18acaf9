//! Hosted backend over PostgREST and its object storage API.

mod alerts;
mod client;
mod storage;

pub use alerts::RestAlertStore;
pub use storage::RestEvidenceUploader;
