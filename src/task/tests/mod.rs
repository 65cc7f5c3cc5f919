//! Unit tests for the task board core.


use std::sync::Arc;

use crate::task::{
    adapters::memory::{InMemoryRemoteTaskStore, RecordingNotifier},
    domain::{PersistedTaskData, Task, TaskDescription, TaskId, TaskLimits, TaskStatus, TaskTitle},
    services::TaskStore,
};
use chrono::{Duration, Utc};
use rstest::fixture;

/// Store type used across the unit tests.
pub(super) type TestStore = TaskStore<InMemoryRemoteTaskStore, RecordingNotifier>;

/// In-memory store wiring with handles on both collaborators.
pub(super) struct Harness {
    pub(super) remote: Arc<InMemoryRemoteTaskStore>,
    pub(super) notifier: Arc<RecordingNotifier>,
    pub(super) store: Arc<TestStore>,
}

#[fixture]
pub(super) fn harness() -> Harness {
    let remote = Arc::new(InMemoryRemoteTaskStore::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let store = Arc::new(TaskStore::new(Arc::clone(&remote), Arc::clone(&notifier)));
    Harness {
        remote,
        notifier,
        store,
    }
}

/// Builds a persisted task created `age_minutes` ago.
pub(super) fn sample_task(title: &str, status: TaskStatus, age_minutes: i64) -> Task {
    let created_at = Utc::now() - Duration::minutes(age_minutes);
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        title: TaskTitle::new(title, &TaskLimits::default()).expect("valid title"),
        description: TaskDescription::new("", &TaskLimits::default()).expect("valid description"),
        status,
        created_at,
        updated_at: created_at,
    })
}
