//! Shared world state for board workflow BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use taskboard::task::{
    adapters::memory::{InMemoryRemoteTaskStore, RecordingNotifier},
    domain::Task,
    services::{BoardReconciler, DetailExit, DetailResolver, TaskStore, TaskStoreResult},
};

/// Store type used by the BDD world.
pub type TestStore = TaskStore<InMemoryRemoteTaskStore, RecordingNotifier>;

/// Scenario world for board workflow behaviour tests.
pub struct BoardWorld {
    pub remote: Arc<InMemoryRemoteTaskStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub store: Arc<TestStore>,
    pub board: BoardReconciler<InMemoryRemoteTaskStore, RecordingNotifier>,
    pub detail: DetailResolver<InMemoryRemoteTaskStore, RecordingNotifier>,
    pub current_task: Option<Task>,
    pub last_create: Option<TaskStoreResult<Task>>,
    pub last_exit: Option<DetailExit>,
}

impl BoardWorld {
    /// Creates a world over an empty remote table.
    #[must_use]
    pub fn new() -> Self {
        let remote = Arc::new(InMemoryRemoteTaskStore::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let store = Arc::new(TaskStore::new(Arc::clone(&remote), Arc::clone(&notifier)));
        Self {
            board: BoardReconciler::new(Arc::clone(&store)),
            detail: DetailResolver::new(Arc::clone(&store)),
            remote,
            notifier,
            store,
            current_task: None,
            last_create: None,
            last_exit: None,
        }
    }

    /// Returns the task the scenario is working with.
    ///
    /// # Errors
    ///
    /// Returns an error if no task has been created yet.
    pub fn task(&self) -> Result<&Task, eyre::Report> {
        self.current_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing current task in scenario world"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
