//! Error handling for ResQ.
//! One error enum per collaborator, `thiserror` only, aggregated into [`ResqError`].

pub mod config_error;
pub mod error_code;
pub mod location_error;
pub mod resq_error;
pub mod store_error;

pub use config_error::ConfigError;
pub use error_code::ResqErrorCode;
pub use location_error::LocationError;
pub use resq_error::{ResqError, ResqResult};
pub use store_error::StoreError;
