pub mod alert_store;
pub mod evidence;
pub mod feedback;
pub mod location;

pub use alert_store::IAlertStore;
pub use evidence::IEvidenceUploader;
pub use feedback::{FeedbackSink, NoopFeedback};
pub use location::ILocationProvider;
