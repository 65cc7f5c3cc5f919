//! Port contracts for the task board core.
//!
//! Ports define infrastructure-agnostic interfaces used by the task
//! services.

pub mod notifier;
pub mod remote;

pub use notifier::{OutcomeNotifier, StoreOperation, StoreOutcome};
pub use remote::{RemoteStoreError, RemoteStoreResult, RemoteTaskStore};
