//! Configuration system for ResQ.
//! TOML-based; resolution order: environment > config file > defaults.

pub mod dashboard_config;
pub mod defaults;
pub mod gesture_config;
pub mod observability_config;
pub mod resq_config;
pub mod store_config;

pub use dashboard_config::DashboardConfig;
pub use gesture_config::GestureConfig;
pub use observability_config::ObservabilityConfig;
pub use resq_config::ResqConfig;
pub use store_config::StoreConfig;
