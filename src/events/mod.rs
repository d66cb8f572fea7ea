//! Events emitted for presentation layers.

mod event;
mod log;

pub use event::{GameEvent, JailReason, ReleaseReason};
pub use log::EventLog;
