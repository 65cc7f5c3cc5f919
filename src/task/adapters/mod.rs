//! Adapter implementations for the task board ports.

pub mod memory;
#[cfg(feature = "postgres")]
pub mod postgres;

mod log_notifier;

pub use log_notifier::TracingNotifier;
