//! Shared test helpers for in-memory board integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::task::{
    adapters::memory::{InMemoryRemoteTaskStore, RecordingNotifier},
    domain::{Task, TaskStatus},
    services::{CreateTaskRequest, TaskStore},
};
use tracing_subscriber::EnvFilter;

/// Store type used by the in-memory integration tests.
pub type TestStore = TaskStore<InMemoryRemoteTaskStore, RecordingNotifier>;

/// Store wiring with handles on the remote table and the outcome log.
pub struct Board {
    pub remote: Arc<InMemoryRemoteTaskStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub store: Arc<TestStore>,
}

/// Provides a fresh store over an empty remote table.
///
/// Set `RUST_LOG=taskboard=debug` to see the store's log output.
#[fixture]
pub fn board() -> Board {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();

    let remote = Arc::new(InMemoryRemoteTaskStore::with_clock(Arc::new(DefaultClock)));
    let notifier = Arc::new(RecordingNotifier::new());
    let store = Arc::new(TaskStore::new(Arc::clone(&remote), Arc::clone(&notifier)));
    Board {
        remote,
        notifier,
        store,
    }
}

/// Creates one task per `(title, status)` pair, in order.
///
/// # Errors
///
/// Returns an error if any create fails.
pub async fn seed(store: &TestStore, tasks: &[(&str, TaskStatus)]) -> eyre::Result<Vec<Task>> {
    let mut created = Vec::with_capacity(tasks.len());
    for (title, status) in tasks {
        let task = store
            .create(CreateTaskRequest::new(*title).with_status(*status))
            .await?;
        created.push(task);
    }
    Ok(created)
}

/// Returns the titles of `tasks` in order.
#[must_use]
pub fn titles(tasks: &[Task]) -> Vec<String> {
    tasks
        .iter()
        .map(|task| task.title().as_str().to_owned())
        .collect()
}
