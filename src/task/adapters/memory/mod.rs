//! In-memory adapters for tests and local development.

mod notifier;
mod remote;

pub use notifier::RecordingNotifier;
pub use remote::{InMemoryRemoteTaskStore, RemoteCallCounts};
