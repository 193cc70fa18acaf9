//! # resq-alerting
//!
//! The victim side: turn a confirmed tap gesture into a stored alert, then
//! attach photo or video evidence to it.

pub mod evidence;
pub mod flow;
pub mod intent;

pub use evidence::EvidenceAttacher;
pub use flow::{AlertFlow, TapOutcome};
pub use intent::AlertIntent;
