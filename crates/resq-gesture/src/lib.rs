//! # resq-gesture
//!
//! Turns a stream of taps into a single confirmed trigger once the required
//! number of taps arrive with no gap reaching the timeout. Every tap slides
//! the deadline forward; a timeout or `cancel()` returns to idle without
//! firing.

pub mod controller;
pub mod deferred;
pub mod sequence;

pub use controller::{GestureState, TapGestureController};
pub use deferred::{DeferredAction, ManualDeferredAction, TokioDeferredAction};
pub use sequence::TapSequence;
