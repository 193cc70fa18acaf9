pub mod alert;
pub mod alert_status;
pub mod contact;
pub mod emergency_type;
pub mod evidence;
pub mod geo;
pub mod new_alert;
pub mod priority;

pub use alert::EmergencyAlert;
pub use alert_status::AlertStatus;
pub use contact::AuthorityContact;
pub use emergency_type::EmergencyType;
pub use evidence::EvidenceFile;
pub use geo::GeoPoint;
pub use new_alert::{AlertReceipt, NewAlert};
pub use priority::PriorityLevel;
